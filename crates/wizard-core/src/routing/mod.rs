//! Resolución de rutas con nombre.
//!
//! El orquestador sólo calcula el nombre de la ruta y sus argumentos; la
//! búsqueda la hace un `RouteResolver`. Un error del resolver no se captura:
//! se propaga al llamador.

mod table;

pub use table::RouteTable;

use crate::errors::RouteError;
use crate::path::PathArgs;

pub trait RouteResolver {
    /// Devuelve el path de la ruta `route_name` con `args` aplicados.
    fn resolve(&self, route_name: &str, args: &PathArgs) -> Result<String, RouteError>;
}

impl<R: RouteResolver + ?Sized> RouteResolver for std::sync::Arc<R> {
    fn resolve(&self, route_name: &str, args: &PathArgs) -> Result<String, RouteError> {
        (**self).resolve(route_name, args)
    }
}
