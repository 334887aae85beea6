use std::sync::Mutex;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::domain::{
    AdoptionApplicationStatus, ApplicationDraft, ApplicationId, ScreeningAnswers,
};
use super::screening::ScreeningWarning;
use crate::catalog::domain::PetId;

/// Repository record for one submitted application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    pub pet_id: PetId,
    pub pet_name: String,
    pub answers: ScreeningAnswers,
    pub draft: ApplicationDraft,
    pub advisory: Option<ScreeningWarning>,
    pub status: AdoptionApplicationStatus,
    pub submitted_at: NaiveDateTime,
}

impl ApplicationRecord {
    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.application_id.clone(),
            pet_id: self.pet_id.clone(),
            pet_name: self.pet_name.clone(),
            status: self.status.label(),
            advisory: self
                .advisory
                .as_ref()
                .map(|warning| warning.message.clone()),
            submitted_at: self.submitted_at,
        }
    }
}

/// Sanitized projection of an application's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub pet_id: PetId,
    pub pet_name: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
    pub submitted_at: NaiveDateTime,
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn pending(&self, limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// The external submission collaborator. Called exactly once per successful
/// submit; the caller never retries on failure.
pub trait SubmissionSink: Send + Sync {
    fn deliver(&self, record: &ApplicationRecord) -> Result<(), SubmissionError>;
}

/// Delivery failure reported by the collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission endpoint unavailable: {0}")]
    Transport(String),
}

/// In-memory repository backing the demo server and tests. Insertion order
/// is preserved so the pending queue lists oldest submissions first.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: Mutex<Vec<ApplicationRecord>>,
}

impl MemoryRepository {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<ApplicationRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl ApplicationRepository for MemoryRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut records = self.lock()?;
        if records
            .iter()
            .any(|existing| existing.application_id == record.application_id)
        {
            return Err(RepositoryError::Conflict);
        }
        records.push(record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
        let mut records = self.lock()?;
        match records
            .iter_mut()
            .find(|existing| existing.application_id == record.application_id)
        {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .find(|record| &record.application_id == id)
            .cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .filter(|record| record.status == AdoptionApplicationStatus::Submitted)
            .take(limit)
            .cloned()
            .collect())
    }
}
