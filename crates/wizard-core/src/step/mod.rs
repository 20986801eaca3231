//! Definiciones relacionadas a Steps.
//!
//! Un Step es una página de un wizard: guarda los datos enviados por el
//! usuario para esa página y decide, con su propia regla de negocio, cuál es
//! el step anterior y el siguiente. Este módulo define:
//! - `Step`: contrato neutral (object-safe) usado por el orquestador.
//! - `WizardStep`: interfaz tipada para autores de steps; un adaptador la
//!   convierte en `Step`.
//! - `StepInstance`: step ya instanciado y vinculado dentro de una petición.
//! - `StepKey` / `StepTarget`: identificadores y destinos de navegación.

pub mod definition;
mod instance;
mod key;
pub mod macros;
pub mod typed;

pub use definition::{Step, StepResult};
pub use instance::StepInstance;
pub use key::{StepKey, StepTarget};
pub use typed::{formatted_type_name, WizardStep};
