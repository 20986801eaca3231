use thiserror::Error;
use wizard_core::WizardError;

/// Errores de la aplicación de demostración.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error del wizard: {0}")]
    Wizard(#[from] WizardError),
}
