use super::domain::{ApplicationDraft, DocumentHandle};

/// One field-level change to the draft. The wizard records native-input
/// values as-is; no validation happens here beyond what the types enforce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FullName(String),
    Email(String),
    Phone(String),
    ApplicantAge(u32),
    Address(String),
    City(String),
    Adults(u8),
    Children(u8),
    CurrentPets(String),
    Reason(String),
    DailyAloneHours(u32),
    PrimaryCaregiver(String),
    AttachDocument(DocumentHandle),
}

impl ApplicationDraft {
    /// Produce the next draft snapshot with one field changed. Consent is
    /// not a field update; it flips only through the wizard's toggle.
    pub fn apply(mut self, update: FieldUpdate) -> ApplicationDraft {
        match update {
            FieldUpdate::FullName(value) => self.personal.full_name = value,
            FieldUpdate::Email(value) => self.personal.email = value,
            FieldUpdate::Phone(value) => self.personal.phone = value,
            FieldUpdate::ApplicantAge(value) => self.personal.applicant_age = Some(value),
            FieldUpdate::Address(value) => self.personal.address = value,
            FieldUpdate::City(value) => self.personal.city = value,
            FieldUpdate::Adults(value) => self.household.adults = value,
            FieldUpdate::Children(value) => self.household.children = value,
            FieldUpdate::CurrentPets(value) => self.household.current_pets = value,
            FieldUpdate::Reason(value) => self.intent.reason = value,
            FieldUpdate::DailyAloneHours(value) => self.intent.daily_alone_hours = Some(value),
            FieldUpdate::PrimaryCaregiver(value) => self.intent.primary_caregiver = value,
            FieldUpdate::AttachDocument(handle) => self.documents.push(handle),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_touch_only_their_leaf() {
        let draft = ApplicationDraft::default()
            .apply(FieldUpdate::FullName("Jordan Reyes".to_string()))
            .apply(FieldUpdate::Adults(2))
            .apply(FieldUpdate::Reason("Companion for long hikes".to_string()));

        assert_eq!(draft.personal.full_name, "Jordan Reyes");
        assert_eq!(draft.household.adults, 2);
        assert_eq!(draft.intent.reason, "Companion for long hikes");
        assert_eq!(draft.personal.email, "");
        assert_eq!(draft.household.children, 0);
        assert!(!draft.consent);
    }

    #[test]
    fn earlier_snapshots_are_unaffected() {
        let first = ApplicationDraft::default().apply(FieldUpdate::City("Ames".to_string()));
        let second = first.clone().apply(FieldUpdate::City("Des Moines".to_string()));

        assert_eq!(first.personal.city, "Ames");
        assert_eq!(second.personal.city, "Des Moines");
    }

    #[test]
    fn documents_accumulate_in_attachment_order() {
        let draft = ApplicationDraft::default()
            .apply(FieldUpdate::AttachDocument(DocumentHandle {
                name: "id.pdf".to_string(),
                storage_key: "uploads/id.pdf".to_string(),
            }))
            .apply(FieldUpdate::AttachDocument(DocumentHandle {
                name: "lease.pdf".to_string(),
                storage_key: "uploads/lease.pdf".to_string(),
            }));

        let names: Vec<&str> = draft
            .documents
            .iter()
            .map(|doc| doc.name.as_str())
            .collect();
        assert_eq!(names, ["id.pdf", "lease.pdf"]);
    }

    #[test]
    fn numeric_fields_start_unset() {
        let draft = ApplicationDraft::default();
        assert_eq!(draft.personal.applicant_age, None);
        assert_eq!(draft.intent.daily_alone_hours, None);

        let updated = draft.apply(FieldUpdate::ApplicantAge(34));
        assert_eq!(updated.personal.applicant_age, Some(34));
    }
}
