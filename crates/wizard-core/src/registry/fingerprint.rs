//! Huella estable de un registro: blake3 sobre la lista `[clave, ruta]`
//! serializada en orden de declaración.

use serde_json::{json, Value};

use super::StepDefinition;

pub fn fingerprint<'a>(definitions: impl IntoIterator<Item = &'a StepDefinition>) -> String {
    let layout: Vec<Value> = definitions.into_iter()
                                        .map(|d| json!([d.key().as_str(), d.route_name()]))
                                        .collect();
    blake3::hash(Value::Array(layout).to_string().as_bytes()).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::factory;
    use crate::step::WizardStep;

    #[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
    struct Plain;

    impl WizardStep for Plain {}

    #[test]
    fn order_and_route_names_change_the_hash() {
        let a = StepDefinition::new("a", factory::<Plain>);
        let b = StepDefinition::new("b", factory::<Plain>);
        let renamed = StepDefinition::new("b", factory::<Plain>).with_route_name("bee");
        let base = fingerprint([&a, &b]);
        assert_eq!(base, fingerprint([&a, &b]));
        assert_ne!(base, fingerprint([&b, &a]));
        assert_ne!(base, fingerprint([&a, &renamed]));
        assert_eq!(base.len(), 64);
    }
}
