//! Composición de argumentos y nombres de ruta para la navegación.

mod composer;

pub use composer::{compose_route_name, resolve_path_arguments, PathArgs};
