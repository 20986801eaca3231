use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::WizardError;

/// Bolsa de parámetros de una petición: `{ step_key: { field: value } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepParams(Map<String, Value>);

impl StepParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construye la bolsa desde un JSON ya parseado. El valor raíz debe ser un
    /// objeto; las entradas por step que no sean objeto se ignoran al leer.
    pub fn from_value(value: Value) -> Result<Self, WizardError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(WizardError::InvalidParams(format!("expected an object keyed by step, got {other}"))),
        }
    }

    /// Añade (o reemplaza) un campo para un step.
    pub fn with(mut self, step: impl Into<String>, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(step, field, value);
        self
    }

    pub fn insert(&mut self, step: impl Into<String>, field: impl Into<String>, value: impl Into<Value>) {
        let entry = self.0.entry(step.into()).or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(fields) = entry {
            fields.insert(field.into(), value.into());
        }
    }

    /// Campos enviados para `step`, si existen y forman un objeto.
    pub fn for_step(&self, step: &str) -> Option<&Map<String, Value>> {
        self.0.get(step).and_then(Value::as_object)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}
