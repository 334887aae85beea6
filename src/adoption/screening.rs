use serde::{Deserialize, Serialize};

use super::domain::{ScreeningAnswers, ScreeningQuestion};
use crate::catalog::domain::PetRecord;

/// Advisory note surfaced on the screening step. Never blocks progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningWarning {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    YardPreferred,
    HomeVisitDeclined,
}

/// Evaluate the screening answers against the pet's compatibility flags.
///
/// At most one warning surfaces, in fixed priority order: the yard check
/// first (pet not apartment-friendly and the applicant rents), then the
/// declined home visit. When both hold, only the yard message shows.
pub fn evaluate(pet: &PetRecord, answers: &ScreeningAnswers) -> Option<ScreeningWarning> {
    let rents = answers
        .answer(ScreeningQuestion::HomeOwnership)
        .is_some_and(|value| value.eq_ignore_ascii_case("rent"));
    if !pet.compatibility.apartment && rents {
        return Some(ScreeningWarning {
            kind: WarningKind::YardPreferred,
            message: format!(
                "{} needs a home with a yard. Renting may not be ideal, but you can still apply!",
                pet.name
            ),
        });
    }

    let declined_visit = answers
        .answer(ScreeningQuestion::HomeVisit)
        .is_some_and(|value| value.eq_ignore_ascii_case("no"));
    if declined_visit {
        return Some(ScreeningWarning {
            kind: WarningKind::HomeVisitDeclined,
            message: "Home visits help us confirm every match is safe and lasting. \
                      Declining one may delay your application."
                .to_string(),
        });
    }

    None
}
