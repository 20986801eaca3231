//! Store y log: las dos compuertas opcionales del orquestador.


use std::sync::Arc;

use serde_json::{json, Value};
use test_support::*;
use wizard_core::{StaticScope, StepParams, Wizard, WizardLogger};

#[test]
fn save_returns_store_result() {
    let fixture = course_selection(None, StepParams::new());
    assert_eq!(fixture.wizard.save().unwrap(), json!("save_from_store_service"));
}

#[test]
fn store_receives_the_wizard() {
    let fixture = course_selection(None, StepParams::new());
    let store = fixture.wizard.store().expect("store configured");
    assert!(std::ptr::eq(store.wizard(), &fixture.wizard));
}

#[test]
fn save_without_store_is_false() {
    let fixture = another_wizard(true);
    assert!(fixture.wizard.store().is_none());
    assert_eq!(fixture.wizard.save().unwrap(), Value::Bool(false));
}

#[test]
fn entering_a_step_logs_when_allowed() {
    let fixture = course_selection(Some("test_go_to_find"), StepParams::new());
    fixture.wizard.current_step().unwrap();
    let lines = fixture.sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[Wizard] "));
    assert!(lines[0].contains("entered step test_go_to_find"));
    assert!(lines[0].contains(&fixture.wizard.id().to_string()));
}

#[test]
fn log_condition_false_silences_current_step() {
    let fixture = another_wizard(false);
    fixture.wizard.current_step().unwrap();
    assert!(fixture.sink.is_empty());
}

#[test]
fn next_step_path_logs_at_least_once() {
    let fixture = another_wizard(true);
    assert_eq!(fixture.wizard.next_step_path(None).unwrap(), "/second-path");
    assert!(!fixture.sink.is_empty());
}

#[test]
fn log_condition_false_silences_navigation() {
    let fixture = another_wizard(false);
    assert_eq!(fixture.wizard.next_step_path(None).unwrap(), "/second-path");
    assert!(fixture.sink.is_empty());
}

#[test]
fn logger_predicate_is_an_independent_gate() {
    let sink = Arc::new(wizard_core::RecordingLogSink::new());
    let definition = wizard_core::WizardDefinition::builder("muted")
        .steps(wizard_core::step_groups![{
            "test_another_wizard_first" => TestAnotherWizardFirstStep,
            "test_another_wizard_second" => TestAnotherWizardSecondStep,
        }])
        .route_namespace("test_wizard")
        .logger(WizardLogger::new(sink.clone()).with_condition(|| false))
        .build()
        .unwrap();
    let routes = Arc::new(RecordingResolver::new().route("test_wizard_test_another_wizard_second", "/second-path"));
    let wizard = Wizard::new(Arc::new(definition), routes).with_scope(StaticScope::new().log(true))
                                                          .with_current_step("test_another_wizard_first");
    assert_eq!(wizard.next_step_path(None).unwrap(), "/second-path");
    assert!(sink.is_empty());
}
