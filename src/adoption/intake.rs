use chrono::NaiveDateTime;

use super::domain::{AdoptionApplicationStatus, AdoptionSubmission, ApplicationId};
use super::repository::ApplicationRecord;
use super::screening;

/// The single hard gate at intake. Field completeness is intentionally not
/// checked; the consent flag is the only requirement.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("the adoption terms must be accepted before submission")]
    ConsentMissing,
}

/// Convert a wizard submission into a repository record. The screening
/// answers are re-evaluated so the advisory note travels with the record
/// for reviewer context; it never rejects the application.
pub fn record_from_submission(
    submission: AdoptionSubmission,
    submitted_at: NaiveDateTime,
) -> Result<ApplicationRecord, IntakeError> {
    if !submission.draft.consent {
        return Err(IntakeError::ConsentMissing);
    }

    let advisory = screening::evaluate(&submission.pet, &submission.answers);

    Ok(ApplicationRecord {
        application_id: ApplicationId("pending".to_string()),
        pet_id: submission.pet.id,
        pet_name: submission.pet.name,
        answers: submission.answers,
        draft: submission.draft,
        advisory,
        status: AdoptionApplicationStatus::Submitted,
        submitted_at,
    })
}
