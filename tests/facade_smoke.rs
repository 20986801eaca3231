use std::sync::Arc;

use wizflow::adapters::{ApplicationRepository, CourseScope, CourseSelection, InMemoryApplicationRepository};
use wizflow::engine::{RecordingLogSink, StepParams, WizardLogger};

#[test]
fn full_journey_through_the_facade() {
    let repository = Arc::new(InMemoryApplicationRepository::new());
    let course = CourseSelection::new(repository.clone(), WizardLogger::new(Arc::new(RecordingLogSink::new()))).unwrap();
    let scope = CourseScope::new(2025).provider("1TZ").course("2T3F");
    let params = StepParams::new().with("study_mode_selection", "study_mode", "part_time");

    let study_mode = course.request(scope.clone(), Some("study_mode_selection"), params.clone());
    assert!(study_mode.valid_step().unwrap());
    assert_eq!(study_mode.next_step_path(None).unwrap(),
               "/candidate/2025/course-choices/provider/1TZ/courses/2T3F/review");

    let review = course.request(scope, Some("review"), params);
    review.save().unwrap();
    assert_eq!(repository.list()[0].study_mode.as_deref(), Some("part_time"));
}
