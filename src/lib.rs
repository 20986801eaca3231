//! wizflow
//!
//! Fachada del workspace:
//! - Re-exporta el motor (`wizard_core`) y el wizard de elección de curso
//!   (`wizard_adapters`).
//! - Expone `errors` y `config` para la aplicación de demostración.

pub mod config;
pub mod errors;

pub use wizard_adapters as adapters;
pub use wizard_core as engine;

pub use config::AppConfig;
pub use errors::AppError;
