use thiserror::Error;
use wizard_core::WizardError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read params file {path}: {source}")]
    ParamsFile { path: String, source: std::io::Error },
    #[error("params are not valid JSON: {0}")] ParamsJson(#[from] serde_json::Error),
    #[error(transparent)] Wizard(#[from] WizardError),
}

impl CliError {
    /// 4 = rechazo (step inexistente o sin destino), 5 = error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Wizard(WizardError::MissingStep { .. })
            | CliError::Wizard(WizardError::UnknownStep(_))
            | CliError::Wizard(WizardError::NoCurrentStep) => 4,
            _ => 5,
        }
    }
}
