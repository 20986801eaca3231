//! Identificadores de step y destinos de navegación.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::EXIT_SENTINEL;

/// Clave opaca y comparable, única dentro del registro de un wizard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepKey(String);

impl StepKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for StepKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StepKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&StepKey> for StepKey {
    fn from(value: &StepKey) -> Self {
        value.clone()
    }
}

impl Borrow<str> for StepKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StepKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StepKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StepKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for StepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Respuesta de `next_step`: otro step del grafo o salida del wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepTarget {
    Step(StepKey),
    Exit,
}

impl StepTarget {
    /// La clave reservada `"exit"` produce `Exit`: ningún step registrado
    /// puede llamarse así.
    pub fn step(key: impl Into<StepKey>) -> Self {
        let key = key.into();
        if key == EXIT_SENTINEL {
            StepTarget::Exit
        } else {
            StepTarget::Step(key)
        }
    }

    /// Interpreta `"exit"` como el centinela de salida y cualquier otro texto
    /// como clave de step.
    pub fn parse(value: &str) -> Self {
        StepTarget::step(value)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, StepTarget::Exit)
    }

    pub fn key(&self) -> Option<&StepKey> {
        match self {
            StepTarget::Step(key) => Some(key),
            StepTarget::Exit => None,
        }
    }
}

impl From<&str> for StepTarget {
    fn from(value: &str) -> Self {
        StepTarget::parse(value)
    }
}

impl From<StepKey> for StepTarget {
    fn from(value: StepKey) -> Self {
        StepTarget::step(value)
    }
}

impl fmt::Display for StepTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepTarget::Step(key) => key.fmt(f),
            StepTarget::Exit => f.write_str(EXIT_SENTINEL),
        }
    }
}
