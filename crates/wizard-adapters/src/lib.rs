//! wizard-adapters: wizards concretos sobre wizard-core.
//!
//! Este crate provee:
//! - `course_selection`: el wizard de elección de curso de un candidato
//!   (steps, scope con año de ciclo y prefijo `candidate`, tabla de rutas).
//! - `repository`: repositorio en memoria de elecciones guardadas.
//! - `store`: el `Store` que persiste las respuestas acumuladas del wizard.

pub mod course_selection;
pub mod repository;
pub mod store;

pub use course_selection::{CourseScope, CourseSelection};
pub use repository::{ApplicationChoice, ApplicationRepository, InMemoryApplicationRepository};
pub use store::ApplicationStore;
