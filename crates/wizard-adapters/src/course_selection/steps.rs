//! Steps del wizard de elección de curso.
//!
//! Grafo: do_you_know_which_course -> (yes) provider_selection -> course_name_selection
//! -> study_mode_selection -> (full_time) site_selection -> review.
//! Con "no" se pasa a go_to_find, que abandona el wizard hacia Find.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use wizard_core::params::merge_maps;
use wizard_core::{path_args, PathArgs, StepKey, StepResult, StepTarget, Validator, Wizard, WizardStep};

/// Destino externo usado por `GoToFindStep`.
pub const FIND_URL: &str = "https://find-teacher-training-courses.service.gov.uk";

/// Destino tras revisar la elección.
pub const APPLICATION_CHOICES_PATH: &str = "/candidate/application/choices";

pub const FULL_TIME: &str = "full_time";
pub const PART_TIME: &str = "part_time";

static PROVIDER_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{3}$").expect("valid provider code pattern"));
static COURSE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{4}$").expect("valid course code pattern"));

/// Argumentos por defecto del wizard más los del step (los del step ganan).
fn with_defaults(wizard: &Wizard, step: PathArgs) -> PathArgs {
    merge_maps(&wizard.default_path_arguments().unwrap_or_default(), &step)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoYouKnowWhichCourseStep {
    pub answer: Option<String>,
}

impl WizardStep for DoYouKnowWhichCourseStep {
    fn permitted_params() -> &'static [&'static str] {
        &["answer"]
    }

    fn validator(&self) -> Validator {
        Validator::new().presence("answer").inclusion("answer", ["yes", "no"])
    }

    /// Primer step: nunca hay previo (el llamador pasa un fallback).
    fn previous_step(&self, _wizard: &Wizard) -> StepResult<Option<StepKey>> {
        Ok(None)
    }

    fn next_step(&self, _wizard: &Wizard) -> StepResult<Option<StepTarget>> {
        Ok(match self.answer.as_deref() {
            Some("yes") => Some(StepTarget::step("provider_selection")),
            Some("no") => Some(StepTarget::step("go_to_find")),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoToFindStep;

impl WizardStep for GoToFindStep {
    fn previous_step(&self, _wizard: &Wizard) -> StepResult<Option<StepKey>> {
        Ok(Some(StepKey::from("do_you_know_which_course")))
    }

    fn next_step(&self, _wizard: &Wizard) -> StepResult<Option<StepTarget>> {
        Ok(Some(StepTarget::Exit))
    }

    fn exit_path(&self, _wizard: &Wizard) -> StepResult<String> {
        Ok(FIND_URL.to_string())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSelectionStep {
    pub provider_code: Option<String>,
}

impl WizardStep for ProviderSelectionStep {
    fn permitted_params() -> &'static [&'static str] {
        &["provider_code"]
    }

    fn validator(&self) -> Validator {
        Validator::new().presence("provider_code").format("provider_code", PROVIDER_CODE.clone())
    }

    fn previous_step(&self, _wizard: &Wizard) -> StepResult<Option<StepKey>> {
        Ok(Some(StepKey::from("do_you_know_which_course")))
    }

    fn next_step(&self, _wizard: &Wizard) -> StepResult<Option<StepTarget>> {
        Ok(Some(StepTarget::step("course_name_selection")))
    }

    /// El proveedor recién elegido todavía no está en el scope.
    fn next_path_arguments(&self, wizard: &Wizard) -> Option<PathArgs> {
        Some(with_defaults(wizard, path_args! { "provider_code" => self.provider_code.clone() }))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseNameSelectionStep {
    pub course_code: Option<String>,
}

impl WizardStep for CourseNameSelectionStep {
    fn permitted_params() -> &'static [&'static str] {
        &["course_code"]
    }

    fn validator(&self) -> Validator {
        Validator::new().presence("course_code").format("course_code", COURSE_CODE.clone())
    }

    fn previous_step(&self, _wizard: &Wizard) -> StepResult<Option<StepKey>> {
        Ok(Some(StepKey::from("provider_selection")))
    }

    fn next_step(&self, _wizard: &Wizard) -> StepResult<Option<StepTarget>> {
        Ok(Some(StepTarget::step("study_mode_selection")))
    }

    fn next_path_arguments(&self, wizard: &Wizard) -> Option<PathArgs> {
        Some(with_defaults(wizard, path_args! { "course_code" => self.course_code.clone() }))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyModeSelectionStep {
    pub study_mode: Option<String>,
}

impl WizardStep for StudyModeSelectionStep {
    fn permitted_params() -> &'static [&'static str] {
        &["study_mode"]
    }

    fn validator(&self) -> Validator {
        Validator::new().presence("study_mode").inclusion("study_mode", [FULL_TIME, PART_TIME])
    }

    fn previous_step(&self, _wizard: &Wizard) -> StepResult<Option<StepKey>> {
        Ok(Some(StepKey::from("course_name_selection")))
    }

    /// Sólo los cursos a tiempo completo eligen sede.
    fn next_step(&self, _wizard: &Wizard) -> StepResult<Option<StepTarget>> {
        Ok(match self.study_mode.as_deref() {
            Some(FULL_TIME) => Some(StepTarget::step("site_selection")),
            Some(PART_TIME) => Some(StepTarget::step("review")),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSelectionStep {
    pub site_code: Option<String>,
}

impl WizardStep for SiteSelectionStep {
    fn permitted_params() -> &'static [&'static str] {
        &["site_code"]
    }

    fn validator(&self) -> Validator {
        Validator::new().presence("site_code").length("site_code", Some(1), Some(3))
    }

    fn previous_step(&self, _wizard: &Wizard) -> StepResult<Option<StepKey>> {
        Ok(Some(StepKey::from("study_mode_selection")))
    }

    fn next_step(&self, _wizard: &Wizard) -> StepResult<Option<StepTarget>> {
        Ok(Some(StepTarget::step("review")))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewStep;

impl WizardStep for ReviewStep {
    /// Vuelve a la sede o al modo de estudio según lo enviado antes.
    fn previous_step(&self, wizard: &Wizard) -> StepResult<Option<StepKey>> {
        let part_time = wizard.step_params()
                              .for_step("study_mode_selection")
                              .and_then(|fields| fields.get("study_mode"))
                              .and_then(|v| v.as_str())
                              == Some(PART_TIME);
        Ok(Some(StepKey::from(if part_time { "study_mode_selection" } else { "site_selection" })))
    }

    fn next_step(&self, _wizard: &Wizard) -> StepResult<Option<StepTarget>> {
        Ok(Some(StepTarget::Exit))
    }

    fn exit_path(&self, _wizard: &Wizard) -> StepResult<String> {
        Ok(APPLICATION_CHOICES_PATH.to_string())
    }
}
