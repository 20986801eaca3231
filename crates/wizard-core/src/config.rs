//! Carga de configuración del wizard desde variables de entorno.
//! Usa las variables `WIZARD_LOG_ENABLED` y `WIZARD_LOG_TARGET`.

use std::env;
use std::sync::Arc;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::constants::DEFAULT_LOG_TARGET;
use crate::logging::{StdLogSink, WizardLogger};

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    pub log_enabled: bool,
    pub log_target: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self { log_enabled: true,
               log_target: DEFAULT_LOG_TARGET.to_string() }
    }
}

impl WizardConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Variante pura: `lookup` resuelve el valor de cada variable.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let log_enabled = lookup("WIZARD_LOG_ENABLED").map(|v| parse_flag(&v)).unwrap_or(defaults.log_enabled);
        let log_target = lookup("WIZARD_LOG_TARGET").filter(|v| !v.trim().is_empty())
                                                    .unwrap_or(defaults.log_target);
        Self { log_enabled, log_target }
    }

    /// Logger estándar cuyo predicado `if` es `log_enabled`.
    pub fn logger(&self) -> WizardLogger {
        let enabled = self.log_enabled;
        WizardLogger::new(Arc::new(StdLogSink::new(self.log_target.clone()))).with_condition(move || enabled)
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no")
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
