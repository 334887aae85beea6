//! Adoption application intake: the five-step wizard state machine with
//! advisory screening, the field-update reducer, and the intake, repository,
//! service, and router layers behind it.

pub mod domain;
pub mod draft;
pub mod intake;
pub mod repository;
pub mod router;
pub mod screening;
pub mod service;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use domain::{
    AdoptionApplicationStatus, AdoptionIntent, AdoptionSubmission, ApplicationDraft,
    ApplicationId, DocumentHandle, HouseholdInfo, PersonalInfo, ScreeningAnswers,
    ScreeningQuestion,
};
pub use draft::FieldUpdate;
pub use intake::IntakeError;
pub use repository::{
    ApplicationRecord, ApplicationRepository, ApplicationStatusView, MemoryRepository,
    RepositoryError, SubmissionError, SubmissionSink,
};
pub use router::adoption_router;
pub use screening::{ScreeningWarning, WarningKind};
pub use service::{AdoptionService, AdoptionServiceError};
pub use wizard::{AdoptionWizard, WizardError, WizardStep};
