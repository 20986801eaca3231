use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use wizard_core::{PathArgs, WizardScope};

/// Prefijo de todas las rutas del área de candidatos.
pub const ROUTE_PREFIX: &str = "candidate";

/// Identificadores de la petición que viajan en cada ruta del wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseScope {
    pub recruitment_cycle_year: i32,
    #[serde(default)]
    pub provider_code: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default = "default_log")]
    pub log: bool,
}

fn default_log() -> bool {
    true
}

impl CourseScope {
    pub fn new(recruitment_cycle_year: i32) -> Self {
        Self { recruitment_cycle_year,
               provider_code: None,
               course_code: None,
               log: true }
    }

    /// Ciclo de reclutamiento en curso según el reloj del sistema.
    pub fn current() -> Self {
        Self::new(Utc::now().year())
    }

    pub fn provider(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    pub fn course(mut self, code: impl Into<String>) -> Self {
        self.course_code = Some(code.into());
        self
    }

    pub fn log(mut self, enabled: bool) -> Self {
        self.log = enabled;
        self
    }
}

impl Default for CourseScope {
    fn default() -> Self {
        Self::current()
    }
}

impl WizardScope for CourseScope {
    fn default_path_arguments(&self) -> Option<PathArgs> {
        let mut args = PathArgs::new();
        args.insert("recruitment_cycle_year".into(), self.recruitment_cycle_year.into());
        if let Some(code) = &self.provider_code {
            args.insert("provider_code".into(), code.clone().into());
        }
        if let Some(code) = &self.course_code {
            args.insert("course_code".into(), code.clone().into());
        }
        Some(args)
    }

    fn default_path_prefix(&self) -> Option<String> {
        Some(ROUTE_PREFIX.to_string())
    }

    fn log_condition(&self) -> bool {
        self.log
    }
}
