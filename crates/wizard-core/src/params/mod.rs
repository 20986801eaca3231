//! Parámetros estructurados de entrada y su asignación a steps.
//!
//! La entrada de una petición llega ya parseada como
//! `{ step_key: { field: value } }`. Este módulo define:
//! - `StepParams`: la bolsa completa, indexada por clave de step.
//! - `permit`: el filtro de la lista blanca (protección contra over-posting).
//! - `merge_json`: merge shallow usado para superponer campos sobre los
//!   atributos actuales de un step.

pub mod bind;
pub mod merge;
mod step_params;

pub use bind::permit;
pub use merge::{merge_json, merge_maps};
pub use step_params::StepParams;
