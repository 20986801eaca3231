//! Puerta de log del wizard.
//!
//! Hay dos compuertas independientes: `WizardScope::log_condition` (nivel
//! orquestador) y el predicado `if` de `WizardLogger`. Cualquiera de las dos
//! puede silenciar la salida; ninguna altera el resultado de la navegación.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::constants::{DEFAULT_LOG_TARGET, LOG_TAG};

/// Destino final de los mensajes.
pub trait LogSink: Send + Sync {
    fn info(&self, message: &str);
}

/// Reenvía a la fachada `log` con el target configurado.
#[derive(Debug, Clone)]
pub struct StdLogSink {
    target: String,
}

impl StdLogSink {
    pub fn new(target: impl Into<String>) -> Self {
        Self { target: target.into() }
    }
}

impl Default for StdLogSink {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_TARGET)
    }
}

impl LogSink for StdLogSink {
    fn info(&self, message: &str) {
        log::info!(target: self.target.as_str(), "{message}");
    }
}

/// Guarda los mensajes en memoria (hosts que quieren inspeccionar el log).
#[derive(Debug, Default)]
pub struct RecordingLogSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl LogSink for RecordingLogSink {
    fn info(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message.to_string());
        }
    }
}

pub type LogPredicate = Arc<dyn Fn() -> bool + Send + Sync>;

/// Logger con predicado `if` opcional. Nunca falla ni bloquea.
#[derive(Clone)]
pub struct WizardLogger {
    sink: Arc<dyn LogSink>,
    condition: Option<LogPredicate>,
}

impl WizardLogger {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink, condition: None }
    }

    /// Logger estándar sobre la fachada `log`.
    pub fn standard() -> Self {
        Self::new(Arc::new(StdLogSink::default()))
    }

    /// Predicado evaluado en cada mensaje; `false` lo descarta.
    pub fn with_condition<F>(mut self, condition: F) -> Self
        where F: Fn() -> bool + Send + Sync + 'static
    {
        self.condition = Some(Arc::new(condition));
        self
    }

    pub fn enabled(&self) -> bool {
        self.condition.as_ref().map(|c| c()).unwrap_or(true)
    }

    pub fn info(&self, message: &str) {
        if !self.enabled() {
            return;
        }
        self.sink.info(&format!("[{LOG_TAG}] {message}"));
    }
}

impl Default for WizardLogger {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for WizardLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardLogger")
         .field("conditional", &self.condition.is_some())
         .finish()
    }
}
