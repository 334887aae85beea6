use super::domain::{AdoptionSubmission, ApplicationDraft, ScreeningAnswers, ScreeningQuestion};
use super::draft::FieldUpdate;
use super::screening::{self, ScreeningWarning};
use crate::catalog::domain::PetRecord;

/// The five linear wizard steps. Steps change only through single
/// `next`/`previous` increments; there is no skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Screening,
    PersonalInfo,
    Household,
    Intent,
    Review,
}

impl WizardStep {
    pub const fn index(self) -> u8 {
        match self {
            WizardStep::Screening => 0,
            WizardStep::PersonalInfo => 1,
            WizardStep::Household => 2,
            WizardStep::Intent => 3,
            WizardStep::Review => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            WizardStep::Screening => "Screening",
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::Household => "Household",
            WizardStep::Intent => "Adoption Intent",
            WizardStep::Review => "Review",
        }
    }

    const fn forward(self) -> Option<WizardStep> {
        match self {
            WizardStep::Screening => Some(WizardStep::PersonalInfo),
            WizardStep::PersonalInfo => Some(WizardStep::Household),
            WizardStep::Household => Some(WizardStep::Intent),
            WizardStep::Intent => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    const fn back(self) -> Option<WizardStep> {
        match self {
            WizardStep::Screening => None,
            WizardStep::PersonalInfo => Some(WizardStep::Screening),
            WizardStep::Household => Some(WizardStep::PersonalInfo),
            WizardStep::Intent => Some(WizardStep::Household),
            WizardStep::Review => Some(WizardStep::Intent),
        }
    }
}

/// Why a submit attempt was refused. These are the only hard gates the
/// wizard enforces; field completeness is deliberately not checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("submission is only available from the review step (currently at {})", .step.label())]
    NotAtReview { step: WizardStep },
    #[error("the adoption terms must be accepted before submitting")]
    ConsentRequired,
}

/// The adoption application wizard for one pet. Owns its answers, draft,
/// and warning for as long as it is open; `submit` and `close` consume it,
/// so reopening always starts from a fresh state.
#[derive(Debug, Clone)]
pub struct AdoptionWizard {
    pet: PetRecord,
    step: WizardStep,
    answers: ScreeningAnswers,
    draft: ApplicationDraft,
    warning: Option<ScreeningWarning>,
}

impl AdoptionWizard {
    pub fn open(pet: PetRecord) -> Self {
        Self {
            pet,
            step: WizardStep::Screening,
            answers: ScreeningAnswers::default(),
            draft: ApplicationDraft::default(),
            warning: None,
        }
    }

    pub fn pet(&self) -> &PetRecord {
        &self.pet
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn answers(&self) -> &ScreeningAnswers {
        &self.answers
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn warning(&self) -> Option<&ScreeningWarning> {
        self.warning.as_ref()
    }

    /// Advance one step. Leaving the screening step first evaluates the
    /// answers and records any advisory warning, but the transition is
    /// never blocked. A no-op at the review step.
    pub fn next(&mut self) -> WizardStep {
        if self.step == WizardStep::Screening {
            self.warning = screening::evaluate(&self.pet, &self.answers);
        }
        if let Some(step) = self.step.forward() {
            self.step = step;
        }
        self.step
    }

    /// Step back one. No side effects; a no-op at the screening step.
    pub fn previous(&mut self) -> WizardStep {
        if let Some(step) = self.step.back() {
            self.step = step;
        }
        self.step
    }

    /// Record a screening answer. Always clears the visible warning so the
    /// next `next()` re-evaluates from the updated answers.
    pub fn select_option(&mut self, question: ScreeningQuestion, value: impl Into<String>) {
        self.answers.select(question, value);
        self.warning = None;
    }

    pub fn update_field(&mut self, update: FieldUpdate) {
        let draft = std::mem::take(&mut self.draft);
        self.draft = draft.apply(update);
    }

    pub fn toggle_consent(&mut self) {
        self.draft.consent = !self.draft.consent;
    }

    /// Hand the accumulated state to the submission collaborator. Only
    /// possible from the review step with consent checked; consuming the
    /// wizard makes submit terminal.
    pub fn submit(self) -> Result<AdoptionSubmission, WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::NotAtReview { step: self.step });
        }
        if !self.draft.consent {
            return Err(WizardError::ConsentRequired);
        }

        Ok(AdoptionSubmission {
            pet: self.pet,
            answers: self.answers,
            draft: self.draft,
        })
    }

    /// Abandon the application. All local state is dropped immediately;
    /// nothing reaches the submission collaborator.
    pub fn close(self) {}
}
