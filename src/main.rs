//! Recorrido guionado del wizard de elección de curso.
//!
//! Simula una petición por step, como haría un controlador web, e imprime
//! el path al que se redirigiría en cada caso.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use wizflow::adapters::{ApplicationRepository, CourseScope, CourseSelection, InMemoryApplicationRepository};
use wizflow::engine::StepParams;
use wizflow::{AppConfig, AppError};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wizard=info,warn"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    if let Err(e) = run() {
        eprintln!("[wizflow-demo] {e}");
        std::process::exit(5);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let repository = Arc::new(InMemoryApplicationRepository::new());
    let course = CourseSelection::new(repository.clone(), config.wizard.logger())?;
    let scope = match config.recruitment_cycle_year {
        Some(year) => CourseScope::new(year),
        None => CourseScope::current(),
    };

    let answers = StepParams::new().with("do_you_know_which_course", "answer", "yes")
                                   .with("provider_selection", "provider_code", "1TZ")
                                   .with("course_name_selection", "course_code", "2T3F")
                                   .with("study_mode_selection", "study_mode", "full_time")
                                   .with("site_selection", "site_code", "A");

    // Cada step se atiende en su propia petición, con el scope que la URL
    // acumula hasta ese punto.
    let chosen = scope.clone().provider("1TZ").course("2T3F");
    let journey = [("do_you_know_which_course", scope.clone()),
                   ("provider_selection", scope.clone()),
                   ("course_name_selection", scope.clone().provider("1TZ")),
                   ("study_mode_selection", chosen.clone()),
                   ("site_selection", chosen.clone()),
                   ("review", chosen)];

    for (step, request_scope) in journey {
        let wizard = course.request(request_scope, Some(step), answers.clone());
        if !wizard.valid_step()? {
            let errors = wizard.current_step()?
                               .map(|instance| instance.errors().full_messages())
                               .unwrap_or_default();
            println!("{step}: invalid {errors:?}");
            return Ok(());
        }
        if step == "review" {
            let saved = wizard.save()?;
            println!("{step}: saved {saved}");
        }
        println!("{step} -> {}", wizard.next_step_path(None)?);
    }

    let back = course.request(scope, Some("do_you_know_which_course"), StepParams::new());
    println!("back from first step -> {}", back.previous_step_path(None, Some("/candidate/application"))?);
    println!("saved choices: {}", repository.list().len());
    Ok(())
}
