//! Wizard de elección de curso para candidatos.
//!
//! Todas las rutas se llaman `candidate_course_selection_<step>` y llevan
//! `recruitment_cycle_year`; a partir de la elección de proveedor también
//! `provider_code`, y desde la elección de curso `course_code`.

mod scope;
pub mod steps;

use std::sync::Arc;

use wizard_core::path::compose_route_name;
use wizard_core::{step_groups, RouteTable, StepParams, Wizard, WizardDefinition, WizardError, WizardLogger};

use crate::repository::ApplicationRepository;
use crate::store::ApplicationStore;
pub use scope::{CourseScope, ROUTE_PREFIX};
use steps::*;

pub const WIZARD_NAME: &str = "course_selection";
pub const ROUTE_NAMESPACE: &str = "course_selection";

const CYCLE: &str = "/candidate/{recruitment_cycle_year}/course-choices";

/// Plantillas por clave de step.
const STEP_PATHS: &[(&str, &str)] = &[("do_you_know_which_course", "/do-you-know-which-course"),
                                      ("go_to_find", "/go-to-find"),
                                      ("provider_selection", "/provider"),
                                      ("course_name_selection", "/provider/{provider_code}/courses"),
                                      ("study_mode_selection", "/provider/{provider_code}/courses/{course_code}/study-mode"),
                                      ("site_selection", "/provider/{provider_code}/courses/{course_code}/site"),
                                      ("review", "/provider/{provider_code}/courses/{course_code}/review")];

/// Tabla de rutas del wizard, incluidas las variantes `edit_`.
pub fn routes() -> RouteTable {
    let mut table = RouteTable::new();
    for (key, path) in STEP_PATHS {
        let template = format!("{CYCLE}{path}");
        table.insert(compose_route_name([Some(ROUTE_PREFIX), Some(ROUTE_NAMESPACE), Some(*key)]),
                     template.clone());
        table.insert(compose_route_name([Some(wizard_core::constants::EDIT_ROUTE_PREFIX),
                                         Some(ROUTE_NAMESPACE),
                                         Some(*key)]),
                     format!("{template}/edit"));
    }
    table
}

/// Definición compartida del wizard y sus colaboradores.
pub struct CourseSelection {
    definition: Arc<WizardDefinition>,
    routes: Arc<RouteTable>,
    repository: Arc<dyn ApplicationRepository>,
}

impl CourseSelection {
    pub fn new(repository: Arc<dyn ApplicationRepository>, logger: WizardLogger) -> Result<Self, WizardError> {
        let store_repository = repository.clone();
        let definition = WizardDefinition::builder(WIZARD_NAME)
            .steps(step_groups![
                {
                    "do_you_know_which_course" => DoYouKnowWhichCourseStep,
                    "go_to_find" => GoToFindStep,
                },
                {
                    "provider_selection" => ProviderSelectionStep,
                    "course_name_selection" => CourseNameSelectionStep,
                    "study_mode_selection" => StudyModeSelectionStep,
                    "site_selection" => SiteSelectionStep,
                    "review" => ReviewStep,
                },
            ])
            .route_namespace(ROUTE_NAMESPACE)
            .store(move |wizard| Box::new(ApplicationStore::new(wizard, store_repository.clone())))
            .logger(logger)
            .build()?;
        Ok(Self { definition: Arc::new(definition),
                  routes: Arc::new(routes()),
                  repository })
    }

    pub fn definition(&self) -> &Arc<WizardDefinition> {
        &self.definition
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn repository(&self) -> &Arc<dyn ApplicationRepository> {
        &self.repository
    }

    /// Orquestador para una petición.
    pub fn request(&self, scope: CourseScope, current_step: Option<&str>, params: StepParams) -> Wizard {
        let wizard = Wizard::new(self.definition.clone(), self.routes.clone()).with_scope(scope)
                                                                              .with_step_params(params);
        match current_step {
            Some(step) => wizard.with_current_step(step),
            None => wizard,
        }
    }
}

impl std::fmt::Debug for CourseSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourseSelection")
         .field("definition", &self.definition)
         .field("routes", &self.routes)
         .finish()
    }
}
