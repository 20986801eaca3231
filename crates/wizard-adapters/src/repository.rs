//! Repositorio de elecciones de curso guardadas por el wizard.

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wizard_core::StoreError;

/// Elección completa tal como la persiste `ApplicationStore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationChoice {
    pub id: Uuid,
    pub recruitment_cycle_year: Option<i64>,
    pub provider_code: String,
    pub course_code: String,
    pub study_mode: Option<String>,
    pub site_code: Option<String>,
    pub saved_at: DateTime<Utc>,
}

/// Almacenamiento de elecciones. Las implementaciones deben poder
/// compartirse entre peticiones.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, choice: ApplicationChoice) -> Result<(), StoreError>;
    fn get(&self, id: Uuid) -> Option<ApplicationChoice>;
    /// Elecciones ordenadas por `saved_at` ascendente.
    fn list(&self) -> Vec<ApplicationChoice>;
}

#[derive(Debug, Default)]
pub struct InMemoryApplicationRepository {
    inner: DashMap<Uuid, ApplicationChoice>,
}

impl InMemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn insert(&self, choice: ApplicationChoice) -> Result<(), StoreError> {
        match self.inner.entry(choice.id) {
            Entry::Occupied(_) => Err(StoreError(format!("application choice {} already saved", choice.id))),
            Entry::Vacant(slot) => {
                slot.insert(choice);
                Ok(())
            }
        }
    }

    fn get(&self, id: Uuid) -> Option<ApplicationChoice> {
        self.inner.get(&id).map(|entry| entry.value().clone())
    }

    fn list(&self) -> Vec<ApplicationChoice> {
        let mut out: Vec<_> = self.inner.iter().map(|entry| entry.value().clone()).collect();
        out.sort_by_key(|c| c.saved_at);
        out
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn choice() -> ApplicationChoice {
        ApplicationChoice { id: Uuid::new_v4(),
                            recruitment_cycle_year: Some(2025),
                            provider_code: "1TZ".into(),
                            course_code: "2T3F".into(),
                            study_mode: None,
                            site_code: None,
                            saved_at: Utc::now() }
    }

    #[test]
    fn insert_then_get() {
        let repo = InMemoryApplicationRepository::new();
        let c = choice();
        repo.insert(c.clone()).unwrap();
        assert_eq!(repo.get(c.id), Some(c));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let repo = InMemoryApplicationRepository::new();
        let c = choice();
        repo.insert(c.clone()).unwrap();
        assert!(repo.insert(c).is_err());
    }

    #[test]
    fn concurrent_inserts_of_same_id_store_once() {
        let repo = Arc::new(InMemoryApplicationRepository::new());
        let c = choice();
        let handles: Vec<_> = (0..8).map(|_| {
                                        let repo = repo.clone();
                                        let c = c.clone();
                                        std::thread::spawn(move || repo.insert(c).is_ok())
                                    })
                                    .collect();
        let stored = handles.into_iter().map(|h| h.join().unwrap()).filter(|ok| *ok).count();
        assert_eq!(stored, 1);
        assert_eq!(repo.len(), 1);
    }
}
