//! Macros utilitarias para declarar registros y argumentos de ruta.
//!
//! Exportadas en la raíz del crate:
//!   use wizard_core::{path_args, step_groups};

/// Declara grupos ordenados de steps (`clave => Tipo`).
///
/// ```ignore
/// let groups = step_groups![
///     { "first" => FirstStep, "second" => SecondStep },
///     { "review" => ReviewStep },
/// ];
/// let registry = StepRegistry::build(groups)?;
/// ```
#[macro_export]
macro_rules! step_groups {
    ($({ $($key:literal => $ty:ty),* $(,)? }),* $(,)?) => {
        vec![$( $crate::registry::StepGroup::new()$(.step::<$ty>($key))* ),*]
    };
}

/// Construye un `PathArgs` (mapa JSON ordenado) a partir de pares.
///
/// ```ignore
/// let args = path_args! { "provider_code" => "1TZ", "year" => 2025 };
/// ```
#[macro_export]
macro_rules! path_args {
    () => { $crate::path::PathArgs::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut args = $crate::path::PathArgs::new();
        $( args.insert(::std::string::String::from($key), $crate::serde_json::json!($value)); )+
        args
    }};
}
