use super::common::*;
use crate::adoption::domain::{ScreeningAnswers, ScreeningQuestion};
use crate::adoption::screening::{evaluate, WarningKind};

#[test]
fn no_answers_raise_no_warning() {
    let answers = ScreeningAnswers::default();
    assert!(evaluate(&yard_dog(), &answers).is_none());
    assert!(evaluate(&apartment_cat(), &answers).is_none());
}

#[test]
fn renting_only_warns_for_pets_that_need_a_yard() {
    let mut answers = ScreeningAnswers::default();
    answers.select(ScreeningQuestion::HomeOwnership, "rent");

    let warning = evaluate(&yard_dog(), &answers).expect("yard warning");
    assert_eq!(warning.kind, WarningKind::YardPreferred);
    assert!(warning.message.starts_with("Koda needs a home with a yard."));

    assert!(
        evaluate(&apartment_cat(), &answers).is_none(),
        "apartment-friendly pets accept renters without comment"
    );
}

#[test]
fn declining_the_home_visit_warns() {
    let mut answers = ScreeningAnswers::default();
    answers.select(ScreeningQuestion::HomeVisit, "no");

    let warning = evaluate(&apartment_cat(), &answers).expect("home visit warning");
    assert_eq!(warning.kind, WarningKind::HomeVisitDeclined);
    assert!(warning.message.contains("Home visits"));
}

#[test]
fn yard_warning_wins_when_both_conditions_hold() {
    let mut answers = ScreeningAnswers::default();
    answers.select(ScreeningQuestion::HomeOwnership, "rent");
    answers.select(ScreeningQuestion::HomeVisit, "no");

    let warning = evaluate(&yard_dog(), &answers).expect("single warning");
    assert_eq!(warning.kind, WarningKind::YardPreferred);
}

#[test]
fn answers_are_matched_case_insensitively() {
    let mut answers = ScreeningAnswers::default();
    answers.select(ScreeningQuestion::HomeOwnership, "Rent");
    assert!(evaluate(&yard_dog(), &answers).is_some());

    let mut answers = ScreeningAnswers::default();
    answers.select(ScreeningQuestion::HomeVisit, "NO");
    assert!(evaluate(&apartment_cat(), &answers).is_some());
}

#[test]
fn affirmative_answers_keep_the_screen_clean() {
    let mut answers = ScreeningAnswers::default();
    answers.select(ScreeningQuestion::HomeOwnership, "own");
    answers.select(ScreeningQuestion::HomeVisit, "yes");
    answers.select(ScreeningQuestion::OtherPets, "one dog");

    assert!(evaluate(&yard_dog(), &answers).is_none());
}
