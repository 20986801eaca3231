//! `resolve_path_arguments`: elige los argumentos efectivos de una ruta.
//!
//! Precedencia fija: override explícito por llamada > argumentos del step >
//! argumentos por defecto del wizard > mapa vacío. Gana la primera fuente
//! presente; no se mezclan entre sí (un step que quiera conservar los
//! defaults debe fusionarlos él mismo con `merge_maps`).

use serde_json::{Map, Value};

use crate::constants::ROUTE_SEPARATOR;

/// Argumentos que alimentan la resolución de una ruta con nombre.
pub type PathArgs = Map<String, Value>;

pub fn resolve_path_arguments(explicit: Option<PathArgs>, step: Option<PathArgs>, defaults: Option<PathArgs>) -> PathArgs {
    explicit.or(step).or(defaults).unwrap_or_default()
}

/// Une las partes presentes y no vacías con `_`.
pub fn compose_route_name<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts.into_iter()
         .flatten()
         .filter(|p| !p.is_empty())
         .collect::<Vec<_>>()
         .join(ROUTE_SEPARATOR)
}
