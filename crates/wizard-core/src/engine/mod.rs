//! Orquestador de wizards.
//!
//! - `WizardDefinition`: lo que se declara una vez por tipo de wizard
//!   (registro, store, namespace de rutas, logger). Inmutable y compartible.
//! - `WizardScope`: hooks por petición (argumentos y prefijo de ruta por
//!   defecto, condición de log).
//! - `Wizard`: el objeto por petición que navega, valida y persiste.

pub mod core;
pub mod definition;
pub mod scope;

pub use self::core::Wizard;
pub use definition::{WizardDefinition, WizardDefinitionBuilder};
pub use scope::{DefaultScope, StaticScope, WizardScope};
