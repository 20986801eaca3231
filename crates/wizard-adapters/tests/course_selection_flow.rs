//! Tests de integración del wizard de elección de curso.

use std::sync::Arc;

use wizard_adapters::course_selection::steps::{APPLICATION_CHOICES_PATH, FIND_URL};
use wizard_adapters::{ApplicationRepository, CourseScope, CourseSelection, InMemoryApplicationRepository};
use wizard_core::{RecordingLogSink, RouteResolver, StepParams, WizardLogger};

fn setup() -> (CourseSelection, Arc<InMemoryApplicationRepository>, Arc<RecordingLogSink>) {
    let repository = Arc::new(InMemoryApplicationRepository::new());
    let sink = Arc::new(RecordingLogSink::new());
    let wizard = CourseSelection::new(repository.clone(), WizardLogger::new(sink.clone())).expect("definition");
    (wizard, repository, sink)
}

fn scope() -> CourseScope {
    CourseScope::new(2025)
}

#[test]
fn yes_goes_to_provider_selection() {
    let (course, _, _) = setup();
    let params = StepParams::new().with("do_you_know_which_course", "answer", "yes");
    let wizard = course.request(scope(), Some("do_you_know_which_course"), params);
    assert!(wizard.valid_step().unwrap());
    assert_eq!(wizard.next_step_path(None).unwrap(), "/candidate/2025/course-choices/provider");
}

#[test]
fn no_leaves_through_find() {
    let (course, _, _) = setup();
    let params = StepParams::new().with("do_you_know_which_course", "answer", "no");
    let first = course.request(scope(), Some("do_you_know_which_course"), params);
    assert_eq!(first.next_step_path(None).unwrap(), "/candidate/2025/course-choices/go-to-find");
    let find = course.request(scope(), Some("go_to_find"), StepParams::new());
    assert_eq!(find.next_step_path(None).unwrap(), FIND_URL);
}

#[test]
fn first_step_uses_fallback_for_previous() {
    let (course, _, _) = setup();
    let wizard = course.request(scope(), Some("do_you_know_which_course"), StepParams::new());
    assert_eq!(wizard.previous_step_path(None, Some("/candidate/application")).unwrap(), "/candidate/application");
}

#[test]
fn invalid_answer_is_reported() {
    let (course, _, _) = setup();
    let params = StepParams::new().with("do_you_know_which_course", "answer", "maybe");
    let wizard = course.request(scope(), Some("do_you_know_which_course"), params);
    assert!(wizard.invalid_step().unwrap());
    let instance = wizard.current_step().unwrap().unwrap();
    assert_eq!(instance.errors().full_messages(), vec!["Answer is not included in the list".to_string()]);
}

#[test]
fn provider_code_flows_into_next_route() {
    let (course, _, _) = setup();
    let params = StepParams::new().with("provider_selection", "provider_code", "1TZ");
    let wizard = course.request(scope(), Some("provider_selection"), params);
    assert!(wizard.valid_step().unwrap());
    assert_eq!(wizard.next_step_path(None).unwrap(), "/candidate/2025/course-choices/provider/1TZ/courses");
}

#[test]
fn provider_code_format_is_checked() {
    let (course, _, _) = setup();
    let params = StepParams::new().with("provider_selection", "provider_code", "toolong");
    let wizard = course.request(scope(), Some("provider_selection"), params);
    assert!(!wizard.valid_step().unwrap());
    assert_eq!(wizard.current_step().unwrap().unwrap().errors().get("provider_code"), ["is invalid".to_string()]);
}

#[test]
fn study_mode_branches() {
    let (course, _, _) = setup();
    let scoped = scope().provider("1TZ").course("2T3F");
    let full = course.request(scoped.clone(),
                              Some("study_mode_selection"),
                              StepParams::new().with("study_mode_selection", "study_mode", "full_time"));
    assert_eq!(full.next_step_path(None).unwrap(), "/candidate/2025/course-choices/provider/1TZ/courses/2T3F/site");

    let part = course.request(scoped, Some("study_mode_selection"), StepParams::new().with("study_mode_selection", "study_mode", "part_time"));
    assert_eq!(part.next_step_path(None).unwrap(), "/candidate/2025/course-choices/provider/1TZ/courses/2T3F/review");
}

#[test]
fn review_goes_back_to_the_right_step() {
    let (course, _, _) = setup();
    let scoped = scope().provider("1TZ").course("2T3F");
    let params = StepParams::new().with("study_mode_selection", "study_mode", "part_time");
    let wizard = course.request(scoped.clone(), Some("review"), params);
    assert_eq!(wizard.previous_step_path(None, None).unwrap(),
               "/candidate/2025/course-choices/provider/1TZ/courses/2T3F/study-mode");

    let wizard = course.request(scoped, Some("review"), StepParams::new());
    assert_eq!(wizard.previous_step_path(None, None).unwrap(),
               "/candidate/2025/course-choices/provider/1TZ/courses/2T3F/site");
}

#[test]
fn review_exits_to_application_choices() {
    let (course, _, _) = setup();
    let wizard = course.request(scope(), Some("review"), StepParams::new());
    assert_eq!(wizard.next_step_path(None).unwrap(), APPLICATION_CHOICES_PATH);
}

#[test]
fn edit_routes_are_registered() {
    let (course, _, _) = setup();
    let args = wizard_core::path_args! { "recruitment_cycle_year" => 2025, "provider_code" => "1TZ" };
    assert_eq!(course.routes().resolve("edit_course_selection_course_name_selection", &args).unwrap(),
               "/candidate/2025/course-choices/provider/1TZ/courses/edit");
}

#[test]
fn save_persists_the_accumulated_choice() {
    let (course, repository, _) = setup();
    let params = StepParams::new().with("provider_selection", "provider_code", "1TZ")
                                  .with("course_name_selection", "course_code", "2T3F")
                                  .with("study_mode_selection", "study_mode", "full_time")
                                  .with("site_selection", "site_code", "A")
                                  .with("review", "ignored", true);
    let wizard = course.request(scope(), Some("review"), params);
    let saved = wizard.save().unwrap();
    let id = saved["id"].as_str().unwrap().parse().unwrap();
    let choice = repository.get(id).expect("saved choice");
    assert_eq!(choice.provider_code, "1TZ");
    assert_eq!(choice.course_code, "2T3F");
    assert_eq!(choice.study_mode.as_deref(), Some("full_time"));
    assert_eq!(choice.site_code.as_deref(), Some("A"));
    assert_eq!(choice.recruitment_cycle_year, Some(2025));
}

#[test]
fn save_uses_scope_identifiers() {
    let (course, repository, _) = setup();
    let wizard = course.request(scope().provider("1TZ").course("2T3F"), Some("review"), StepParams::new());
    assert!(wizard.save().unwrap().get("id").is_some());
    assert_eq!(repository.list().len(), 1);
}

#[test]
fn save_without_course_fails() {
    let (course, repository, _) = setup();
    let params = StepParams::new().with("provider_selection", "provider_code", "1TZ");
    let wizard = course.request(scope(), Some("review"), params);
    let err = wizard.save().unwrap_err();
    assert_eq!(err.to_string(), "store failed: course_code is required to save");
    assert!(repository.is_empty());
}

#[test]
fn scope_log_flag_gates_output() {
    let (course, _, sink) = setup();
    let quiet = course.request(scope().log(false), Some("review"), StepParams::new());
    quiet.current_step().unwrap();
    assert!(sink.is_empty());

    let loud = course.request(scope(), Some("review"), StepParams::new());
    loud.current_step().unwrap();
    assert_eq!(sink.lines().len(), 1);
    assert!(sink.lines()[0].starts_with("[Wizard] "));
}
