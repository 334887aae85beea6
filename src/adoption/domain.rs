use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::domain::PetRecord;

/// Identifier wrapper for submitted adoption applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// The fixed set of screening questions asked on the wizard's first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningQuestion {
    HomeOwnership,
    HouseholdType,
    HoursAlone,
    OtherPets,
    PriorExperience,
    HomeVisit,
}

impl ScreeningQuestion {
    pub const ALL: [ScreeningQuestion; 6] = [
        ScreeningQuestion::HomeOwnership,
        ScreeningQuestion::HouseholdType,
        ScreeningQuestion::HoursAlone,
        ScreeningQuestion::OtherPets,
        ScreeningQuestion::PriorExperience,
        ScreeningQuestion::HomeVisit,
    ];

    pub const fn prompt(self) -> &'static str {
        match self {
            ScreeningQuestion::HomeOwnership => "Do you own or rent your home?",
            ScreeningQuestion::HouseholdType => "What type of home do you live in?",
            ScreeningQuestion::HoursAlone => "How many hours a day would the pet be alone?",
            ScreeningQuestion::OtherPets => "Do you have other pets at home?",
            ScreeningQuestion::PriorExperience => "Have you cared for a pet before?",
            ScreeningQuestion::HomeVisit => "Would you agree to a home visit?",
        }
    }
}

/// Answers collected so far. Any subset answered is a legal state; the
/// wizard never requires completeness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningAnswers {
    answers: BTreeMap<ScreeningQuestion, String>,
}

impl ScreeningAnswers {
    pub fn select(&mut self, question: ScreeningQuestion, value: impl Into<String>) {
        self.answers.insert(question, value.into());
    }

    pub fn answer(&self, question: ScreeningQuestion) -> Option<&str> {
        self.answers.get(&question).map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == ScreeningQuestion::ALL.len()
    }
}

/// Contact details collected on the second step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub applicant_age: Option<u32>,
    pub address: String,
    pub city: String,
}

/// Household composition collected on the third step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdInfo {
    pub adults: u8,
    pub children: u8,
    pub current_pets: String,
}

/// Motivation and care plan collected on the fourth step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdoptionIntent {
    pub reason: String,
    pub daily_alone_hours: Option<u32>,
    pub primary_caregiver: String,
}

/// Opaque reference to a file held by the external upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHandle {
    pub name: String,
    pub storage_key: String,
}

/// The form state accumulated across wizard steps. Created empty when the
/// wizard opens; discarded wholesale on close-without-submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    pub personal: PersonalInfo,
    pub household: HouseholdInfo,
    pub intent: AdoptionIntent,
    pub documents: Vec<DocumentHandle>,
    pub consent: bool,
}

/// Everything the wizard hands off on a successful submit: the pet snapshot,
/// the screening answers, and the accumulated draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdoptionSubmission {
    pub pet: PetRecord,
    pub answers: ScreeningAnswers,
    pub draft: ApplicationDraft,
}

/// Review status tracked after intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdoptionApplicationStatus {
    Submitted,
    UnderReview,
    Approved,
    Denied,
}

impl AdoptionApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AdoptionApplicationStatus::Submitted => "submitted",
            AdoptionApplicationStatus::UnderReview => "under_review",
            AdoptionApplicationStatus::Approved => "approved",
            AdoptionApplicationStatus::Denied => "denied",
        }
    }
}
