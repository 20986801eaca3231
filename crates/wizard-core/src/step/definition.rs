use std::any::Any;
use std::fmt::Debug;

use serde_json::{Map, Value};

use super::{StepKey, StepTarget};
use crate::engine::Wizard;
use crate::errors::{BindError, WizardError};
use crate::path::PathArgs;
use crate::validation::Validator;

pub type StepResult<T> = Result<T, WizardError>;

/// Contrato que cumple todo step registrado en un wizard.
///
/// Los hooks de decisión reciben el `Wizard` dueño de la petición como
/// referencia prestada (nunca como propiedad): desde ahí el step alcanza el
/// scope, el store y los argumentos por defecto.
pub trait Step: Debug {
    /// Nombre legible del step (`TestGoToFindStep` -> `TestGoToFind`).
    fn formatted_name(&self) -> String;

    /// Campos que pueden asignarse en masa desde los parámetros de entrada.
    fn permitted_params(&self) -> &'static [&'static str];

    /// Asigna los campos permitidos de `fields` a los atributos del step.
    fn bind(&mut self, fields: &Map<String, Value>) -> Result<(), BindError>;

    /// Atributos actuales como objeto JSON (entrada de la validación).
    fn attributes(&self) -> Value;

    fn validator(&self) -> Validator;

    /// Regla de negocio para el step previo. `Ok(None)` = no hay previo.
    fn previous_step(&self, wizard: &Wizard) -> StepResult<Option<StepKey>>;

    /// Regla de negocio para el step siguiente, salida o callejón sin salida.
    fn next_step(&self, wizard: &Wizard) -> StepResult<Option<StepTarget>>;

    fn next_path_arguments(&self, wizard: &Wizard) -> Option<PathArgs>;

    fn previous_path_arguments(&self, wizard: &Wizard) -> Option<PathArgs>;

    /// Destino usado cuando `next_step` responde `StepTarget::Exit`.
    fn exit_path(&self, wizard: &Wizard) -> StepResult<String>;

    fn as_any(&self) -> &dyn Any;
}
