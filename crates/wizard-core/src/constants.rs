//! Constantes del motor de wizards.
//!
//! Valores estáticos compartidos por el orquestador, el registro y los
//! adaptadores de log/rutas.

/// Valor centinela que un step devuelve como "siguiente" para abandonar el
/// wizard. No puede usarse como clave de step en un registro.
pub const EXIT_SENTINEL: &str = "exit";

/// Etiqueta antepuesta a cada mensaje emitido por `WizardLogger`.
pub const LOG_TAG: &str = "Wizard";

/// Target por defecto usado con la fachada `log`.
pub const DEFAULT_LOG_TARGET: &str = "wizard";

/// Separador entre prefijo, namespace y nombre de ruta.
pub const ROUTE_SEPARATOR: &str = "_";

/// Prefijo de las rutas de edición (`edit_<namespace>_<ruta>`).
pub const EDIT_ROUTE_PREFIX: &str = "edit";
