//! Contrato del store opcional que persiste el estado acumulado del wizard.

use std::sync::Arc;

use serde_json::Value;

use crate::engine::Wizard;
use crate::errors::StoreError;

/// Delegado de persistencia construido con el wizard como única dependencia.
/// El resultado de `save` es opaco para el orquestador.
pub trait Store {
    fn wizard(&self) -> &Wizard;

    fn save(&self) -> Result<Value, StoreError>;
}

/// Fábrica registrada en la definición del wizard.
pub type StoreFactory = Arc<dyn for<'w> Fn(&'w Wizard) -> Box<dyn Store + 'w> + Send + Sync>;
