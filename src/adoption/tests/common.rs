use std::sync::{Arc, Mutex};

use crate::adoption::domain::{AdoptionSubmission, ScreeningQuestion};
use crate::adoption::repository::{
    ApplicationRecord, MemoryRepository, SubmissionError, SubmissionSink,
};
use crate::adoption::service::AdoptionService;
use crate::adoption::wizard::{AdoptionWizard, WizardStep};
use crate::catalog::domain::{
    AdoptionStatus, Compatibility, HealthStatus, PetId, PetRecord, SizeCategory,
};
use crate::profile::{AdopterLedger, MemoryStore};

/// A large dog that needs a yard: not apartment-friendly.
pub(super) fn yard_dog() -> PetRecord {
    PetRecord {
        id: PetId("pet-101".to_string()),
        name: "Koda".to_string(),
        species: "Dog".to_string(),
        breed: "Alaskan Malamute".to_string(),
        age: "4 years".to_string(),
        gender: "Male".to_string(),
        size: SizeCategory::Large,
        health: HealthStatus::Vaccinated,
        status: AdoptionStatus::Available,
        compatibility: Compatibility {
            kids: true,
            pets: false,
            apartment: false,
        },
        location: "Des Moines, IA".to_string(),
    }
}

pub(super) fn apartment_cat() -> PetRecord {
    PetRecord {
        id: PetId("pet-102".to_string()),
        name: "Mochi".to_string(),
        species: "Cat".to_string(),
        breed: "Ragdoll".to_string(),
        age: "8 months".to_string(),
        gender: "Female".to_string(),
        size: SizeCategory::Small,
        health: HealthStatus::Healthy,
        status: AdoptionStatus::Available,
        compatibility: Compatibility {
            kids: true,
            pets: true,
            apartment: true,
        },
        location: "Ames, IA".to_string(),
    }
}

/// Walk a wizard from screening to review and check consent, producing a
/// submission-ready payload.
pub(super) fn completed_submission(pet: PetRecord) -> AdoptionSubmission {
    let mut wizard = AdoptionWizard::open(pet);
    wizard.select_option(ScreeningQuestion::HomeOwnership, "own");
    wizard.select_option(ScreeningQuestion::HomeVisit, "yes");
    while wizard.step() != WizardStep::Review {
        wizard.next();
    }
    wizard.toggle_consent();
    wizard.submit().expect("review step with consent submits")
}

#[derive(Default)]
pub(super) struct RecordingSink {
    deliveries: Mutex<Vec<ApplicationRecord>>,
}

impl RecordingSink {
    pub(super) fn deliveries(&self) -> Vec<ApplicationRecord> {
        self.deliveries.lock().expect("sink mutex poisoned").clone()
    }
}

impl SubmissionSink for RecordingSink {
    fn deliver(&self, record: &ApplicationRecord) -> Result<(), SubmissionError> {
        self.deliveries
            .lock()
            .expect("sink mutex poisoned")
            .push(record.clone());
        Ok(())
    }
}

pub(super) struct OfflineSink;

impl SubmissionSink for OfflineSink {
    fn deliver(&self, _record: &ApplicationRecord) -> Result<(), SubmissionError> {
        Err(SubmissionError::Transport("endpoint offline".to_string()))
    }
}

pub(super) type TestService<S> = AdoptionService<MemoryRepository, S, MemoryStore>;

pub(super) fn build_service() -> (
    TestService<RecordingSink>,
    Arc<MemoryRepository>,
    Arc<RecordingSink>,
    AdopterLedger<MemoryStore>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let sink = Arc::new(RecordingSink::default());
    let ledger = AdopterLedger::new(Arc::new(MemoryStore::default()));
    let service = AdoptionService::new(repository.clone(), sink.clone(), ledger.clone());
    (service, repository, sink, ledger)
}

pub(super) fn build_offline_service() -> (TestService<OfflineSink>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let ledger = AdopterLedger::new(Arc::new(MemoryStore::default()));
    let service = AdoptionService::new(repository.clone(), Arc::new(OfflineSink), ledger);
    (service, repository)
}
