use std::cell::{Ref, RefCell};
use std::fmt;

use super::{Step, StepKey};
use crate::validation::ValidationErrors;

/// Step instanciado para una petición: clave, objeto vinculado y el mapa de
/// errores de la última validación.
///
/// Se crea en el primer acceso al step actual y vive lo mismo que el
/// `Wizard` que lo creó.
pub struct StepInstance {
    key: StepKey,
    step: Box<dyn Step>,
    errors: RefCell<ValidationErrors>,
}

impl StepInstance {
    pub(crate) fn new(key: StepKey, step: Box<dyn Step>) -> Self {
        Self { key,
               step,
               errors: RefCell::new(ValidationErrors::new()) }
    }

    pub fn key(&self) -> &StepKey {
        &self.key
    }

    pub fn step(&self) -> &dyn Step {
        self.step.as_ref()
    }

    /// Nombre formateado del step (usado en mensajes de error y logs).
    pub fn name(&self) -> String {
        self.step.formatted_name()
    }

    /// Acceso tipado al step concreto.
    pub fn downcast_ref<T: Step + 'static>(&self) -> Option<&T> {
        self.step.as_any().downcast_ref::<T>()
    }

    /// Ejecuta las reglas del step y reemplaza el mapa de errores.
    pub fn run_validation(&self) -> bool {
        let errors = self.step.validator().validate(&self.step.attributes());
        let valid = errors.is_empty();
        *self.errors.borrow_mut() = errors;
        valid
    }

    /// Errores de la última validación (vacío si nunca se validó).
    pub fn errors(&self) -> Ref<'_, ValidationErrors> {
        self.errors.borrow()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.borrow().is_empty()
    }
}

impl fmt::Debug for StepInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepInstance")
         .field("key", &self.key)
         .field("step", &self.step)
         .field("errors", &*self.errors.borrow())
         .finish()
    }
}
