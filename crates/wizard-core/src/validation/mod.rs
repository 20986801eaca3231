//! Colaborador de validación por atributos.
//!
//! Un step compone un `Validator` (lista de reglas por campo) que evalúa sus
//! atributos serializados y produce un `ValidationErrors`. Validar es puro
//! respecto a los atributos: dos ejecuciones sobre los mismos datos producen
//! el mismo mapa.

mod errors;
mod rules;

pub use errors::ValidationErrors;
pub use rules::{is_blank, Rule, Validator};
