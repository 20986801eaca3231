//! wizard-core: motor de secuenciación de steps para wizards multi-página.
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod params;
pub mod path;
pub mod registry;
pub mod routing;
pub mod step;
pub mod store;
pub mod validation;

// Usado por `path_args!`.
pub use serde_json;

pub use config::WizardConfig;
pub use engine::{DefaultScope, StaticScope, Wizard, WizardDefinition, WizardDefinitionBuilder, WizardScope};
pub use errors::{BindError, Direction, RegistryError, RouteError, StoreError, WizardError};
pub use logging::{LogSink, RecordingLogSink, StdLogSink, WizardLogger};
pub use params::StepParams;
pub use path::PathArgs;
pub use registry::{StepDefinition, StepGroup, StepRegistry};
pub use routing::{RouteResolver, RouteTable};
pub use step::{Step, StepInstance, StepKey, StepResult, StepTarget, WizardStep};
pub use store::Store;
pub use validation::{ValidationErrors, Validator};
