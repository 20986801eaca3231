//! Registro de steps: mapeo ordenado clave -> fábrica.
//!
//! Se construye una sola vez por tipo de wizard a partir de uno o más grupos
//! declarados y no se muta después; puede compartirse entre peticiones.

mod fingerprint;
mod types;

pub use types::{factory, StepDefinition, StepFactory, StepGroup, StepRegistry};
