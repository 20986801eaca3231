//! Core Wizard implementation

use std::fmt;
use std::sync::Arc;

use once_cell::unsync::OnceCell;
use serde_json::Value;
use uuid::Uuid;

use crate::constants::EDIT_ROUTE_PREFIX;
use crate::engine::{DefaultScope, WizardDefinition, WizardScope};
use crate::errors::{Direction, WizardError};
use crate::logging::WizardLogger;
use crate::params::StepParams;
use crate::path::{compose_route_name, resolve_path_arguments, PathArgs};
use crate::registry::StepRegistry;
use crate::routing::RouteResolver;
use crate::step::{StepInstance, StepKey, StepTarget};
use crate::store::Store;

/// Orquestador por petición.
///
/// Guarda la definición compartida, la clave del step actual (puede no
/// haberla), los parámetros crudos y el scope. El step actual se instancia
/// en el primer acceso y se reutiliza durante la vida del wizard; las reglas
/// de navegación se evalúan en cada llamada, sin caché.
pub struct Wizard {
    id: Uuid,
    definition: Arc<WizardDefinition>,
    routes: Arc<dyn RouteResolver>,
    scope: Box<dyn WizardScope>,
    current_step: Option<StepKey>,
    step_params: StepParams,
    current: OnceCell<StepInstance>,
}

impl Wizard {
    pub fn new(definition: Arc<WizardDefinition>, routes: Arc<dyn RouteResolver>) -> Self {
        Self { id: Uuid::new_v4(),
               definition,
               routes,
               scope: Box::new(DefaultScope),
               current_step: None,
               step_params: StepParams::default(),
               current: OnceCell::new() }
    }

    /// Fija la clave del step actual. El llamador debe pasar claves conocidas;
    /// una clave ausente del registro falla en `current_step`.
    pub fn with_current_step(mut self, key: impl Into<StepKey>) -> Self {
        self.current_step = Some(key.into());
        self.current = OnceCell::new();
        self
    }

    pub fn with_step_params(mut self, params: StepParams) -> Self {
        self.step_params = params;
        self.current = OnceCell::new();
        self
    }

    pub fn with_scope(mut self, scope: impl WizardScope + 'static) -> Self {
        self.scope = Box::new(scope);
        self
    }

    /// Identificador de la petición (aparece en cada línea de log).
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn definition(&self) -> &WizardDefinition {
        &self.definition
    }

    pub fn steps(&self) -> &StepRegistry {
        self.definition.steps()
    }

    pub fn scope(&self) -> &dyn WizardScope {
        self.scope.as_ref()
    }

    pub fn routes(&self) -> &dyn RouteResolver {
        self.routes.as_ref()
    }

    pub fn step_params(&self) -> &StepParams {
        &self.step_params
    }

    pub fn logger(&self) -> &WizardLogger {
        self.definition.logger()
    }

    pub fn log_condition(&self) -> bool {
        self.scope.log_condition()
    }

    pub fn default_path_arguments(&self) -> Option<PathArgs> {
        self.scope.default_path_arguments()
    }

    pub fn default_path_prefix(&self) -> Option<String> {
        self.scope.default_path_prefix()
    }

    fn log(&self, message: &str) {
        if self.log_condition() {
            self.logger().info(&format!("{} ({}) {message}", self.definition.name(), self.id));
        }
    }

    pub fn current_step_name(&self) -> Option<&StepKey> {
        self.current_step.as_ref()
    }

    /// Instancia (una vez) el step actual y le asigna los campos permitidos
    /// de `step_params[current_step]`. Sin step actual devuelve `Ok(None)`
    /// sin efectos.
    pub fn current_step(&self) -> Result<Option<&StepInstance>, WizardError> {
        let Some(key) = self.current_step.as_ref() else {
            return Ok(None);
        };
        self.current.get_or_try_init(|| self.instantiate(key)).map(Some)
    }

    fn instantiate(&self, key: &StepKey) -> Result<StepInstance, WizardError> {
        let definition = self.steps()
                             .lookup(key.as_str())
                             .ok_or_else(|| WizardError::UnknownStep(key.clone()))?;
        let mut step = definition.instantiate();
        if let Some(fields) = self.step_params.for_step(key.as_str()) {
            step.bind(fields)?;
        }
        self.log(&format!("entered step {key}"));
        Ok(StepInstance::new(key.clone(), step))
    }

    fn require_current_step(&self) -> Result<&StepInstance, WizardError> {
        self.current_step()?.ok_or(WizardError::NoCurrentStep)
    }

    /// Valida el step actual. Idempotente: sin cambios en los parámetros
    /// devuelve el mismo resultado y el mismo mapa de errores.
    pub fn valid_step(&self) -> Result<bool, WizardError> {
        Ok(self.require_current_step()?.run_validation())
    }

    pub fn invalid_step(&self) -> Result<bool, WizardError> {
        self.valid_step().map(|valid| !valid)
    }

    pub fn permitted_params(&self) -> Result<&'static [&'static str], WizardError> {
        Ok(self.require_current_step()?.step().permitted_params())
    }

    pub fn next_step(&self) -> Result<Option<StepTarget>, WizardError> {
        self.require_current_step()?.step().next_step(self)
    }

    pub fn previous_step(&self) -> Result<Option<StepKey>, WizardError> {
        self.require_current_step()?.step().previous_step(self)
    }

    /// Path del step siguiente.
    ///
    /// Sin destino (o con un destino fuera del registro) falla con
    /// `MissingStep`; con `StepTarget::Exit` devuelve `exit_path` del step
    /// actual sin consultar el resolver de rutas.
    pub fn next_step_path(&self, arguments: Option<PathArgs>) -> Result<String, WizardError> {
        let prefix = self.default_path_prefix();
        self.forward_path(arguments, prefix.as_deref())
    }

    /// Variante de edición: la ruta destino es `edit_<namespace>_<ruta>` y no
    /// lleva el prefijo por defecto del wizard.
    pub fn next_edit_step_path(&self, arguments: Option<PathArgs>) -> Result<String, WizardError> {
        self.forward_path(arguments, Some(EDIT_ROUTE_PREFIX))
    }

    fn forward_path(&self, arguments: Option<PathArgs>, prefix: Option<&str>) -> Result<String, WizardError> {
        let instance = self.require_current_step()?;
        let target = match instance.step().next_step(self)? {
            Some(StepTarget::Exit) => {
                self.log(&format!("exiting wizard from {}", instance.key()));
                return instance.step().exit_path(self);
            }
            Some(StepTarget::Step(key)) => Some(key),
            None => None,
        };
        let step_arguments = instance.step().next_path_arguments(self);
        self.step_path(instance, Direction::Next, target, prefix, arguments, step_arguments)?
            .ok_or_else(|| missing(Direction::Next, instance))
    }

    /// Path del step previo. Sin destino devuelve `fallback` tal cual; sin
    /// fallback falla con `MissingStep`, simétrico con `next_step_path`.
    pub fn previous_step_path(&self, arguments: Option<PathArgs>, fallback: Option<&str>) -> Result<String, WizardError> {
        let instance = self.require_current_step()?;
        let target = instance.step().previous_step(self)?;
        let step_arguments = instance.step().previous_path_arguments(self);
        let prefix = self.default_path_prefix();
        match self.step_path(instance, Direction::Previous, target, prefix.as_deref(), arguments, step_arguments)? {
            Some(path) => Ok(path),
            None => fallback.map(str::to_string)
                            .ok_or_else(|| missing(Direction::Previous, instance)),
        }
    }

    /// `Ok(None)` si el destino no existe en el registro.
    fn step_path(&self,
                 instance: &StepInstance,
                 direction: Direction,
                 target: Option<StepKey>,
                 prefix: Option<&str>,
                 arguments: Option<PathArgs>,
                 step_arguments: Option<PathArgs>)
                 -> Result<Option<String>, WizardError> {
        let Some(definition) = target.as_ref().and_then(|key| self.steps().lookup(key.as_str())) else {
            return Ok(None);
        };
        let args = resolve_path_arguments(arguments, step_arguments, self.default_path_arguments());
        let route = compose_route_name([prefix,
                                        self.definition.route_namespace(),
                                        Some(definition.route_name())]);
        self.log(&format!("{direction} step for {} is {} via route {route}", instance.key(), definition.key()));
        Ok(Some(self.routes.resolve(&route, &args)?))
    }

    /// Instancia el store configurado con este wizard como dependencia.
    pub fn store(&self) -> Option<Box<dyn Store + '_>> {
        self.definition.store_factory().map(|factory| factory(self))
    }

    /// Sin store configurado devuelve `false` (no-op); si existe, el
    /// resultado de `Store::save` sin modificar.
    pub fn save(&self) -> Result<Value, WizardError> {
        let Some(store) = self.store() else {
            return Ok(Value::Bool(false));
        };
        self.log("saving wizard");
        Ok(store.save()?)
    }
}

fn missing(direction: Direction, instance: &StepInstance) -> WizardError {
    WizardError::MissingStep { direction,
                               step: instance.name() }
}

impl fmt::Debug for Wizard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wizard")
         .field("id", &self.id)
         .field("definition", &self.definition.name())
         .field("scope", &self.scope)
         .field("current_step", &self.current_step)
         .field("step_params", &self.step_params)
         .finish()
    }
}
