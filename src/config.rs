//! Configuración de la aplicación de demostración.
//! Carga variables de entorno (.env) una sola vez y compone la configuración
//! del wizard con el año de ciclo a usar.
use std::env;

use once_cell::sync::Lazy;
use wizard_core::WizardConfig;

use crate::errors::AppError;

static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
});

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub wizard: WizardConfig,
    /// `WIZFLOW_CYCLE_YEAR`; sin valor se usa el año en curso.
    pub recruitment_cycle_year: Option<i32>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let recruitment_cycle_year = match lookup("WIZFLOW_CYCLE_YEAR") {
            Some(raw) => Some(raw.trim()
                                 .parse::<i32>()
                                 .map_err(|e| AppError::Config(format!("WIZFLOW_CYCLE_YEAR={raw}: {e}")))?),
            None => None,
        };
        Ok(Self { wizard: WizardConfig::from_lookup(&lookup),
                  recruitment_cycle_year })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_is_optional() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.recruitment_cycle_year, None);
        assert!(config.wizard.log_enabled);
    }

    #[test]
    fn invalid_year_is_a_config_error() {
        let err = AppConfig::from_lookup(|k| (k == "WIZFLOW_CYCLE_YEAR").then(|| "next".to_string())).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
