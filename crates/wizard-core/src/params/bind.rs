//! Filtro de lista blanca aplicado antes de asignar campos a un step.

use serde_json::{Map, Value};

/// Devuelve sólo los campos cuyo nombre aparece en `permitted`.
///
/// Los campos descartados no se reportan como error; sólo quedan en el log de
/// depuración.
pub fn permit(fields: &Map<String, Value>, permitted: &[&str]) -> Map<String, Value> {
    let mut out = Map::new();
    for (name, value) in fields {
        if permitted.contains(&name.as_str()) {
            out.insert(name.clone(), value.clone());
        } else {
            log::debug!(target: crate::constants::DEFAULT_LOG_TARGET, "dropping unpermitted param '{name}'");
        }
    }
    out
}
