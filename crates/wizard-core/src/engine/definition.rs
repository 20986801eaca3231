//! Builder para `WizardDefinition`.
//!
//! La definición se construye una sola vez por tipo de wizard y se comparte
//! (`Arc`) entre todas las peticiones. Construir valida el registro: una
//! clave duplicada entre grupos es un error, no "gana el último".
//!
//! ```ignore
//! let definition = WizardDefinition::builder("course_selection")
//!     .steps(step_groups![{ "first" => FirstStep, "second" => SecondStep }])
//!     .route_namespace("course_selection")
//!     .store(|wizard| Box::new(MyStore::new(wizard)))
//!     .build()?;
//! ```

use std::fmt;
use std::sync::Arc;

use crate::engine::Wizard;
use crate::errors::WizardError;
use crate::logging::WizardLogger;
use crate::registry::{StepGroup, StepRegistry};
use crate::store::{Store, StoreFactory};

/// Definición inmutable de un tipo de wizard.
pub struct WizardDefinition {
    name: String,
    registry: StepRegistry,
    store: Option<StoreFactory>,
    route_namespace: Option<String>,
    logger: WizardLogger,
}

impl WizardDefinition {
    pub fn builder(name: impl Into<String>) -> WizardDefinitionBuilder {
        WizardDefinitionBuilder { name: name.into(),
                                  groups: Vec::new(),
                                  store: None,
                                  route_namespace: None,
                                  logger: WizardLogger::standard() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &StepRegistry {
        &self.registry
    }

    pub fn route_namespace(&self) -> Option<&str> {
        self.route_namespace.as_deref()
    }

    pub fn logger(&self) -> &WizardLogger {
        &self.logger
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    pub(crate) fn store_factory(&self) -> Option<&StoreFactory> {
        self.store.as_ref()
    }
}

impl fmt::Debug for WizardDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardDefinition")
         .field("name", &self.name)
         .field("steps", &self.registry.all())
         .field("store", &self.store.is_some())
         .field("route_namespace", &self.route_namespace)
         .finish()
    }
}

/// Acumula grupos de steps y hooks antes de construir la definición.
pub struct WizardDefinitionBuilder {
    name: String,
    groups: Vec<StepGroup>,
    store: Option<StoreFactory>,
    route_namespace: Option<String>,
    logger: WizardLogger,
}

impl WizardDefinitionBuilder {
    /// Añade grupos en orden de declaración.
    pub fn steps(mut self, groups: impl IntoIterator<Item = StepGroup>) -> Self {
        self.groups.extend(groups);
        self
    }

    pub fn group(mut self, group: StepGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn store<F>(mut self, factory: F) -> Self
        where F: for<'w> Fn(&'w Wizard) -> Box<dyn Store + 'w> + Send + Sync + 'static
    {
        self.store = Some(Arc::new(factory));
        self
    }

    pub fn route_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.route_namespace = Some(namespace.into());
        self
    }

    pub fn logger(mut self, logger: WizardLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn build(self) -> Result<WizardDefinition, WizardError> {
        let registry = StepRegistry::build(self.groups)?;
        Ok(WizardDefinition { name: self.name,
                              registry,
                              store: self.store,
                              route_namespace: self.route_namespace,
                              logger: self.logger })
    }
}

impl fmt::Debug for WizardDefinitionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardDefinitionBuilder")
         .field("name", &self.name)
         .field("groups", &self.groups)
         .finish()
    }
}
