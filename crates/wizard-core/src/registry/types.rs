use indexmap::IndexMap;

use super::fingerprint::fingerprint;
use crate::constants::EXIT_SENTINEL;
use crate::errors::RegistryError;
use crate::step::{Step, StepKey, WizardStep};

/// Fábrica de instancias frescas de un step.
pub type StepFactory = fn() -> Box<dyn Step>;

/// Fábrica genérica para cualquier `WizardStep` (parte de `Default`).
pub fn factory<T: WizardStep>() -> Box<dyn Step> {
    Box::new(T::default())
}

/// Entrada del registro: clave, nombre de ruta y fábrica.
#[derive(Debug, Clone)]
pub struct StepDefinition {
    key: StepKey,
    route_name: String,
    factory: StepFactory,
}

impl StepDefinition {
    /// El nombre de ruta por defecto es la propia clave.
    pub fn new(key: impl Into<StepKey>, factory: StepFactory) -> Self {
        let key = key.into();
        Self { route_name: key.to_string(),
               key,
               factory }
    }

    pub fn of<T: WizardStep>(key: impl Into<StepKey>) -> Self {
        Self::new(key, factory::<T>)
    }

    pub fn with_route_name(mut self, route_name: impl Into<String>) -> Self {
        self.route_name = route_name.into();
        self
    }

    pub fn key(&self) -> &StepKey {
        &self.key
    }

    pub fn route_name(&self) -> &str {
        &self.route_name
    }

    pub fn instantiate(&self) -> Box<dyn Step> {
        (self.factory)()
    }
}

/// Grupo ordenado de definiciones tal como se declara en el wizard.
#[derive(Debug, Clone, Default)]
pub struct StepGroup {
    definitions: Vec<StepDefinition>,
}

impl StepGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step<T: WizardStep>(self, key: impl Into<StepKey>) -> Self {
        self.with(StepDefinition::of::<T>(key))
    }

    pub fn with(mut self, definition: StepDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Registro aplanado. Invariante: cada clave apunta a exactamente una
/// fábrica y el orden de iteración es el de declaración.
#[derive(Debug, Clone)]
pub struct StepRegistry {
    steps: IndexMap<StepKey, StepDefinition>,
    fingerprint: String,
}

impl StepRegistry {
    /// Concatena los grupos en orden. Una clave repetida (dentro de un grupo
    /// o entre grupos) es un error de construcción.
    pub fn build(groups: impl IntoIterator<Item = StepGroup>) -> Result<Self, RegistryError> {
        let mut steps: IndexMap<StepKey, StepDefinition> = IndexMap::new();
        for group in groups {
            for definition in group.definitions {
                let key = definition.key().clone();
                if key.is_empty() {
                    return Err(RegistryError::EmptyKey);
                }
                if key == EXIT_SENTINEL {
                    return Err(RegistryError::ReservedKey(key));
                }
                if steps.contains_key(&key) {
                    return Err(RegistryError::DuplicateKey(key));
                }
                steps.insert(key, definition);
            }
        }
        let fingerprint = fingerprint(steps.values());
        log::debug!(target: crate::constants::DEFAULT_LOG_TARGET, "step registry built with {} steps ({fingerprint})", steps.len());
        Ok(Self { steps, fingerprint })
    }

    /// Nunca falla: la ausencia es un resultado normal.
    pub fn lookup(&self, key: &str) -> Option<&StepDefinition> {
        self.steps.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.steps.contains_key(key)
    }

    /// Claves en orden de declaración (uso diagnóstico).
    pub fn all(&self) -> Vec<&StepKey> {
        self.steps.keys().collect()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &StepDefinition> {
        self.steps.values()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Huella blake3 de las claves y rutas en orden.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}
