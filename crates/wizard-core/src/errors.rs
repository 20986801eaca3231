//! Errores del motor de wizards.
//!
//! `WizardError` es el único tipo de error que devuelven las operaciones del
//! orquestador. Los fallos de validación NO son errores: se representan como
//! un mapa de errores no vacío y `valid_step() == Ok(false)`.

use std::fmt;

use thiserror::Error;

use crate::step::StepKey;

/// Sentido de navegación al resolver un step destino.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => f.write_str("Next"),
            Direction::Previous => f.write_str("Previous"),
        }
    }
}

#[derive(Debug, Error)]
pub enum WizardError {
    /// La regla de negocio respondió "sin destino" (o un destino que no existe
    /// en el registro).
    #[error("{direction} step for {step} missing.")]
    MissingStep { direction: Direction, step: String },
    /// El step no sobrescribe la regla pedida (error de programación).
    #[error("{step} does not implement {rule}")]
    NotImplemented { step: String, rule: &'static str },
    #[error("unknown step '{0}'")] UnknownStep(StepKey),
    #[error("wizard has no current step")] NoCurrentStep,
    #[error("invalid step params: {0}")] InvalidParams(String),
    #[error(transparent)] Bind(#[from] BindError),
    #[error(transparent)] Registry(#[from] RegistryError),
    #[error(transparent)] Route(#[from] RouteError),
    #[error(transparent)] Store(#[from] StoreError),
}

impl WizardError {
    pub fn not_implemented(step: impl Into<String>, rule: &'static str) -> Self {
        WizardError::NotImplemented { step: step.into(), rule }
    }

    pub fn is_missing_step(&self) -> bool {
        matches!(self, WizardError::MissingStep { .. })
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, WizardError::NotImplemented { .. })
    }
}

/// Un campo permitido no pudo decodificarse al atributo tipado del step.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot bind params for {step}: {message}")]
pub struct BindError {
    pub step: String,
    pub message: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate step key '{0}'")] DuplicateKey(StepKey),
    #[error("step key must not be empty")] EmptyKey,
    #[error("step key '{0}' is reserved")] ReservedKey(StepKey),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route named '{0}'")] UnknownRoute(String),
    #[error("route '{route}' requires argument '{argument}'")]
    MissingArgument { route: String, argument: String },
}

/// Fallo opaco reportado por una implementación de `Store`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("store failed: {0}")]
pub struct StoreError(pub String);
