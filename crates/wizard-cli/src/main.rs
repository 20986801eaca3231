mod cli;
mod commands;
mod errors;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wizard_adapters::{CourseSelection, InMemoryApplicationRepository};
use wizard_core::WizardConfig;

fn main() -> ExitCode {
    // Cargar .env si existe (WIZARD_LOG_*, RUST_LOG)
    wizard_core::config::init_dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wizard=info,warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();

    let cli = cli::Cli::parse();
    let config = WizardConfig::from_env();
    let course = match CourseSelection::new(Arc::new(InMemoryApplicationRepository::new()), config.logger()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[wizard-cli] definition error: {e}");
            return ExitCode::from(5);
        }
    };

    match commands::run(cli.cmd, &course) {
        Ok(outcome) => {
            match serde_json::to_string_pretty(&outcome.output) {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("[wizard-cli] cannot render output: {e}");
                    return ExitCode::from(5);
                }
            }
            ExitCode::from(outcome.code)
        }
        Err(e) => {
            eprintln!("[wizard-cli] {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
