use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{AdoptionSubmission, ApplicationId};
use super::intake::{self, IntakeError};
use super::repository::{
    ApplicationRecord, ApplicationRepository, RepositoryError, SubmissionError, SubmissionSink,
};
use crate::catalog::domain::PetId;
use crate::profile::{AdopterLedger, KeyValueStore};

/// Service composing intake, the repository, the submission collaborator,
/// and the adopter ledger.
pub struct AdoptionService<R, S, K> {
    repository: Arc<R>,
    sink: Arc<S>,
    ledger: AdopterLedger<K>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("adopt-{id:06}"))
}

impl<R, S, K> AdoptionService<R, S, K>
where
    R: ApplicationRepository + 'static,
    S: SubmissionSink + 'static,
    K: KeyValueStore + 'static,
{
    pub fn new(repository: Arc<R>, sink: Arc<S>, ledger: AdopterLedger<K>) -> Self {
        Self {
            repository,
            sink,
            ledger,
        }
    }

    /// Accept a wizard submission: gate on consent, deliver to the
    /// collaborator exactly once, then persist. Delivery happens before the
    /// insert so a failed collaborator call leaves no partial record; the
    /// caller may retry the whole action manually.
    pub fn submit(
        &self,
        submission: AdoptionSubmission,
    ) -> Result<ApplicationRecord, AdoptionServiceError> {
        let submitted_at = Utc::now().naive_utc();
        let mut record = intake::record_from_submission(submission, submitted_at)?;
        record.application_id = next_application_id();

        self.sink.deliver(&record)?;
        let stored = self.repository.insert(record)?;
        self.ledger.mark_applied(&stored.pet_id);

        Ok(stored)
    }

    /// Fetch an application for status display.
    pub fn get(&self, id: &ApplicationId) -> Result<ApplicationRecord, AdoptionServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Oldest-first queue of applications awaiting review.
    pub fn pending(&self, limit: usize) -> Result<Vec<ApplicationRecord>, AdoptionServiceError> {
        Ok(self.repository.pending(limit)?)
    }

    /// Whether this adopter already applied for the given pet.
    pub fn has_applied(&self, pet: &PetId) -> bool {
        self.ledger.has_applied(pet)
    }
}

/// Error raised by the adoption service.
#[derive(Debug, thiserror::Error)]
pub enum AdoptionServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}
