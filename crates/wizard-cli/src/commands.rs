//! Ejecución de subcomandos sobre el wizard de elección de curso.

use std::fs;

use serde_json::{json, Value};
use wizard_adapters::{CourseScope, CourseSelection};
use wizard_core::{Step, StepParams, Wizard};

use crate::cli::{Cmd, RequestArgs};
use crate::errors::CliError;

/// Resultado impreso por la CLI y su código de salida.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub output: Value,
    pub code: u8,
}

impl Outcome {
    fn ok(output: Value) -> Self {
        Self { output, code: 0 }
    }
}

pub fn run(cmd: Cmd, course: &CourseSelection) -> Result<Outcome, CliError> {
    match cmd {
        Cmd::Steps => Ok(Outcome::ok(steps(course))),
        Cmd::Show(args) => {
            let wizard = request(course, &args)?;
            let Some(instance) = wizard.current_step()? else {
                return Ok(Outcome::ok(json!({ "step": null })));
            };
            Ok(Outcome::ok(json!({
                "step": instance.key(),
                "name": instance.name(),
                "permitted_params": instance.step().permitted_params(),
                "attributes": instance.step().attributes(),
            })))
        }
        Cmd::Validate(args) => {
            let wizard = request(course, &args)?;
            let valid = wizard.valid_step()?;
            let errors = match wizard.current_step()? {
                Some(instance) => json!(*instance.errors()),
                None => json!({}),
            };
            Ok(Outcome { output: json!({ "valid": valid, "errors": errors }),
                         code: if valid { 0 } else { 4 } })
        }
        Cmd::Next(args) => {
            let wizard = request(course, &args)?;
            Ok(Outcome::ok(json!({ "path": wizard.next_step_path(None)? })))
        }
        Cmd::Previous { request: args, fallback } => {
            let wizard = request(course, &args)?;
            Ok(Outcome::ok(json!({ "path": wizard.previous_step_path(None, fallback.as_deref())? })))
        }
        Cmd::Save(args) => {
            let wizard = request(course, &args)?;
            Ok(Outcome::ok(json!({ "saved": wizard.save()? })))
        }
    }
}

fn steps(course: &CourseSelection) -> Value {
    let registry = course.definition().steps();
    let steps: Vec<Value> = registry.definitions()
                                    .map(|d| json!({ "key": d.key(), "route_name": d.route_name() }))
                                    .collect();
    json!({ "wizard": course.definition().name(), "fingerprint": registry.fingerprint(), "steps": steps })
}

fn request(course: &CourseSelection, args: &RequestArgs) -> Result<Wizard, CliError> {
    let params = match &args.params {
        Some(raw) => parse_params(raw)?,
        None => StepParams::new(),
    };
    let mut scope = match args.year {
        Some(year) => CourseScope::new(year),
        None => CourseScope::current(),
    };
    if let Some(code) = &args.provider {
        scope = scope.provider(code.clone());
    }
    if let Some(code) = &args.course {
        scope = scope.course(code.clone());
    }
    Ok(course.request(scope.log(!args.quiet), args.step.as_deref(), params))
}

/// JSON en línea o `@archivo`.
pub fn parse_params(raw: &str) -> Result<StepParams, CliError> {
    let text = match raw.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::ParamsFile { path: path.to_string(),
                                                                                          source })?,
        None => raw.to_string(),
    };
    let value: Value = serde_json::from_str(&text)?;
    Ok(StepParams::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use clap::Parser;
    use wizard_adapters::InMemoryApplicationRepository;
    use wizard_core::{RecordingLogSink, WizardLogger};

    use super::*;
    use crate::cli::Cli;

    fn course() -> CourseSelection {
        CourseSelection::new(Arc::new(InMemoryApplicationRepository::new()),
                             WizardLogger::new(Arc::new(RecordingLogSink::new()))).unwrap()
    }

    fn exec(args: &[&str]) -> Result<Outcome, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("wizard-cli").chain(args.iter().copied())).unwrap();
        run(cli.cmd, &course())
    }

    #[test]
    fn steps_lists_registry_in_order() {
        let out = exec(&["steps"]).unwrap();
        assert_eq!(out.output["steps"][0]["key"], "do_you_know_which_course");
        assert_eq!(out.output["steps"].as_array().unwrap().len(), 7);
        assert_eq!(out.output["fingerprint"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn next_prints_path() {
        let out = exec(&["next",
                         "--step",
                         "do_you_know_which_course",
                         "--year",
                         "2025",
                         "--params",
                         r#"{"do_you_know_which_course":{"answer":"yes"}}"#]).unwrap();
        assert_eq!(out.output, json!({ "path": "/candidate/2025/course-choices/provider" }));
    }

    #[test]
    fn validate_reports_errors_with_exit_code() {
        let out = exec(&["validate", "--step", "provider_selection"]).unwrap();
        assert_eq!(out.code, 4);
        assert_eq!(out.output["errors"]["provider_code"], json!(["can't be blank"]));
    }

    #[test]
    fn previous_uses_fallback() {
        let out = exec(&["previous", "--step", "do_you_know_which_course", "--fallback", "/home"]).unwrap();
        assert_eq!(out.output["path"], "/home");
    }

    #[test]
    fn unknown_step_is_rejected() {
        let err = exec(&["show", "--step", "nope"]).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn params_must_be_an_object() {
        assert!(matches!(parse_params("[1]"), Err(CliError::Wizard(_))));
        assert!(matches!(parse_params("{"), Err(CliError::ParamsJson(_))));
        assert!(matches!(parse_params("@/definitely/missing.json"), Err(CliError::ParamsFile { .. })));
    }
}
