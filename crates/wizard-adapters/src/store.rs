//! `ApplicationStore`: persiste la elección de curso acumulada por el wizard.
//!
//! Las respuestas se reconstruyen vinculando cada step registrado con sus
//! parámetros de la petición (sólo campos permitidos), igual que hace el
//! orquestador con el step actual. Los argumentos por defecto del scope
//! completan lo que no llegó como parámetro.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Map, Value};
use uuid::Uuid;
use wizard_core::params::merge_maps;
use wizard_core::{Step, Store, StoreError, Wizard};

use crate::repository::{ApplicationChoice, ApplicationRepository};

pub struct ApplicationStore<'w> {
    wizard: &'w Wizard,
    repository: Arc<dyn ApplicationRepository>,
}

impl<'w> ApplicationStore<'w> {
    pub fn new(wizard: &'w Wizard, repository: Arc<dyn ApplicationRepository>) -> Self {
        Self { wizard, repository }
    }

    /// Atributos vinculados de todos los steps, en orden de declaración.
    /// Los valores nulos no pisan los ya recogidos.
    pub fn answers(&self) -> Result<Map<String, Value>, StoreError> {
        let mut answers = self.wizard.default_path_arguments().unwrap_or_default();
        for definition in self.wizard.steps().definitions() {
            let Some(fields) = self.wizard.step_params().for_step(definition.key().as_str()) else {
                continue;
            };
            let mut step = definition.instantiate();
            step.bind(fields).map_err(|e| StoreError(e.to_string()))?;
            if let Value::Object(attributes) = step.attributes() {
                let present: Map<String, Value> = attributes.into_iter().filter(|(_, v)| !v.is_null()).collect();
                answers = merge_maps(&answers, &present);
            }
        }
        Ok(answers)
    }

    fn choice(&self) -> Result<ApplicationChoice, StoreError> {
        let answers = self.answers()?;
        let text = |field: &str| answers.get(field).and_then(Value::as_str).map(str::to_string);
        let required = |field: &str| text(field).ok_or_else(|| StoreError(format!("{field} is required to save")));
        Ok(ApplicationChoice { id: Uuid::new_v4(),
                               recruitment_cycle_year: answers.get("recruitment_cycle_year").and_then(Value::as_i64),
                               provider_code: required("provider_code")?,
                               course_code: required("course_code")?,
                               study_mode: text("study_mode"),
                               site_code: text("site_code"),
                               saved_at: Utc::now() })
    }
}

impl Store for ApplicationStore<'_> {
    fn wizard(&self) -> &Wizard {
        self.wizard
    }

    fn save(&self) -> Result<Value, StoreError> {
        let choice = self.choice()?;
        let id = choice.id;
        self.repository.insert(choice)?;
        log::debug!(target: wizard_core::constants::DEFAULT_LOG_TARGET, "application choice {id} saved");
        Ok(json!({ "id": id }))
    }
}
