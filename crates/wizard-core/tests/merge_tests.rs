//! Pruebas para utilitarios de merge JSON (asignación de params a steps)
//!
//! Verificamos la semántica shallow: claves de `b` sobreescriben claves de `a`.

use serde_json::json;
use wizard_core::params::{merge_json, merge_maps};

#[test]
fn merge_shallow_overrides_keys() {
    let a = json!({"answer": "no", "nested": {"z": 3}, "keep": "a"});
    let b = json!({"answer": "yes", "nested": "replaced", "new": true});

    let out = merge_json(&a, &b);

    assert_eq!(out["answer"], json!("yes"));
    // un valor no-objeto en b reemplaza completamente
    assert_eq!(out["nested"], json!("replaced"));
    assert_eq!(out["keep"], json!("a"));
    assert_eq!(out["new"], json!(true));
}

#[test]
fn merge_maps_keeps_defaults_and_adds_step_arguments() {
    let defaults = wizard_core::path_args! { "recruitment_cycle_year" => 2025 };
    let step = wizard_core::path_args! { "provider_code" => "1TZ" };
    let out = merge_maps(&defaults, &step);
    assert_eq!(out, wizard_core::path_args! { "recruitment_cycle_year" => 2025, "provider_code" => "1TZ" });
}
