use std::any::Any;
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{Step, StepKey, StepResult, StepTarget};
use crate::engine::Wizard;
use crate::errors::{BindError, WizardError};
use crate::params::{merge_json, permit};
use crate::path::PathArgs;
use crate::validation::Validator;

/// Interfaz de alto nivel para definir Steps con atributos tipados.
///
/// Los atributos son los campos serializables del struct; `permitted_params`
/// decide cuáles pueden llegar desde la petición. Las reglas de navegación
/// sin sobrescribir devuelven `WizardError::NotImplemented`.
pub trait WizardStep: Serialize + DeserializeOwned + Default + Debug + 'static {
    fn formatted_name() -> String {
        formatted_type_name::<Self>()
    }

    fn permitted_params() -> &'static [&'static str] {
        &[]
    }

    fn validator(&self) -> Validator {
        Validator::new()
    }

    fn previous_step(&self, _wizard: &Wizard) -> StepResult<Option<StepKey>> {
        Err(WizardError::not_implemented(Self::formatted_name(), "previous_step"))
    }

    fn next_step(&self, _wizard: &Wizard) -> StepResult<Option<StepTarget>> {
        Err(WizardError::not_implemented(Self::formatted_name(), "next_step"))
    }

    /// `None` delega en los argumentos por defecto del wizard.
    fn next_path_arguments(&self, _wizard: &Wizard) -> Option<PathArgs> {
        None
    }

    fn previous_path_arguments(&self, _wizard: &Wizard) -> Option<PathArgs> {
        None
    }

    fn exit_path(&self, _wizard: &Wizard) -> StepResult<String> {
        Err(WizardError::not_implemented(Self::formatted_name(), "exit_path"))
    }
}

/// Nombre corto del tipo sin genéricos y sin la primera aparición de `Step`.
pub fn formatted_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    let short = base.rsplit("::").next().unwrap_or(base);
    short.replacen("Step", "", 1)
}

// -------------------------------------------------------------
// Adaptador: cualquier `WizardStep` implementa `Step` neutro.
// -------------------------------------------------------------
impl<T> Step for T where T: WizardStep
{
    fn formatted_name(&self) -> String {
        <T as WizardStep>::formatted_name()
    }

    fn permitted_params(&self) -> &'static [&'static str] {
        <T as WizardStep>::permitted_params()
    }

    fn bind(&mut self, fields: &Map<String, Value>) -> Result<(), BindError> {
        let permitted = permit(fields, <T as WizardStep>::permitted_params());
        if permitted.is_empty() {
            return Ok(());
        }
        let bind_error = |e: serde_json::Error| BindError { step: <T as WizardStep>::formatted_name(),
                                                            message: e.to_string() };
        let current = serde_json::to_value(&*self).map_err(bind_error)?;
        let merged = merge_json(&current, &Value::Object(permitted));
        *self = serde_json::from_value(merged).map_err(bind_error)?;
        Ok(())
    }

    fn attributes(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    fn validator(&self) -> Validator {
        <T as WizardStep>::validator(self)
    }

    fn previous_step(&self, wizard: &Wizard) -> StepResult<Option<StepKey>> {
        <T as WizardStep>::previous_step(self, wizard)
    }

    fn next_step(&self, wizard: &Wizard) -> StepResult<Option<StepTarget>> {
        <T as WizardStep>::next_step(self, wizard)
    }

    fn next_path_arguments(&self, wizard: &Wizard) -> Option<PathArgs> {
        <T as WizardStep>::next_path_arguments(self, wizard)
    }

    fn previous_path_arguments(&self, wizard: &Wizard) -> Option<PathArgs> {
        <T as WizardStep>::previous_path_arguments(self, wizard)
    }

    fn exit_path(&self, wizard: &Wizard) -> StepResult<String> {
        <T as WizardStep>::exit_path(self, wizard)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
