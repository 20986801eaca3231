//! Utilidades para fusionar valores JSON de forma determinista.
//!
//! Merge "shallow": las claves de `b` reemplazan a las de `a`. Los objetos
//! anidados no se fusionan recursivamente.

use serde_json::{Map, Value};

/// Merge shallow: keys from `b` override keys from `a` when both are objects.
/// Cuando alguno de los dos valores no es objeto, `b` tiene precedencia.
pub fn merge_json(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Object(ma), Value::Object(mb)) => Value::Object(merge_maps(ma, mb)),
        (_, other) => other.clone(),
    }
}

/// Variante sobre mapas: conserva el orden de `a` y añade al final las claves
/// nuevas de `b`.
pub fn merge_maps(a: &Map<String, Value>, b: &Map<String, Value>) -> Map<String, Value> {
    let mut out = a.clone();
    for (k, v) in b.iter() {
        out.insert(k.clone(), v.clone());
    }
    out
}
