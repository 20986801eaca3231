//! Hooks que un tipo de wizard puede sobrescribir por petición.

use std::fmt::Debug;

use crate::path::PathArgs;

pub trait WizardScope: Debug {
    /// Argumentos compartidos por todas las rutas del wizard (p. ej. ids de
    /// proveedor o año de ciclo) salvo que el step declare los suyos.
    fn default_path_arguments(&self) -> Option<PathArgs> {
        None
    }

    /// Prefijo antepuesto al nombre de cada ruta.
    fn default_path_prefix(&self) -> Option<String> {
        None
    }

    /// Compuerta de log a nivel orquestador.
    fn log_condition(&self) -> bool {
        true
    }
}

/// Scope sin argumentos, sin prefijo y con log activo.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultScope;

impl WizardScope for DefaultScope {}

/// Scope configurable con valores fijos.
#[derive(Debug, Clone)]
pub struct StaticScope {
    arguments: Option<PathArgs>,
    prefix: Option<String>,
    log: bool,
}

impl Default for StaticScope {
    fn default() -> Self {
        Self { arguments: None,
               prefix: None,
               log: true }
    }
}

impl StaticScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arguments(mut self, arguments: PathArgs) -> Self {
        self.arguments = Some(arguments);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn log(mut self, enabled: bool) -> Self {
        self.log = enabled;
        self
    }
}

impl WizardScope for StaticScope {
    fn default_path_arguments(&self) -> Option<PathArgs> {
        self.arguments.clone()
    }

    fn default_path_prefix(&self) -> Option<String> {
        self.prefix.clone()
    }

    fn log_condition(&self) -> bool {
        self.log
    }
}
