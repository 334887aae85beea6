use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetId(pub String);

/// Size bucket used both for display chips and for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
}

impl SizeCategory {
    pub const fn label(self) -> &'static str {
        match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" => Some(SizeCategory::Small),
            "medium" => Some(SizeCategory::Medium),
            "large" => Some(SizeCategory::Large),
            _ => None,
        }
    }
}

/// Health disclosure shown on listings. Wire literals are part of the REST
/// contract and must stay as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    #[serde(rename = "healthy")]
    Healthy,
    #[serde(rename = "vaccinated")]
    Vaccinated,
    #[serde(rename = "special-needs")]
    SpecialNeeds,
}

impl HealthStatus {
    pub const fn label(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Vaccinated => "vaccinated",
            HealthStatus::SpecialNeeds => "special-needs",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "healthy" => Some(HealthStatus::Healthy),
            "vaccinated" => Some(HealthStatus::Vaccinated),
            "special-needs" | "special needs" => Some(HealthStatus::SpecialNeeds),
            _ => None,
        }
    }
}

/// Where a pet sits in the adoption funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdoptionStatus {
    Available,
    Pending,
    Adopted,
}

impl AdoptionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AdoptionStatus::Available => "available",
            AdoptionStatus::Pending => "pending",
            AdoptionStatus::Adopted => "adopted",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "available" => Some(AdoptionStatus::Available),
            "pending" => Some(AdoptionStatus::Pending),
            "adopted" => Some(AdoptionStatus::Adopted),
            _ => None,
        }
    }
}

/// Household compatibility flags supplied by the shelter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    pub kids: bool,
    pub pets: bool,
    pub apartment: bool,
}

/// A single catalog entry. `age` stays a display string ("3 years",
/// "8 months"); the sortable year count is derived by
/// [`crate::catalog::age::parse_age_years`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    pub id: PetId,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub size: SizeCategory,
    pub health: HealthStatus,
    pub status: AdoptionStatus,
    pub compatibility: Compatibility,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_round_trips_wire_literals() {
        let json = serde_json::to_string(&HealthStatus::SpecialNeeds).expect("serialize");
        assert_eq!(json, "\"special-needs\"");
        let parsed: HealthStatus = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, HealthStatus::SpecialNeeds);
    }

    #[test]
    fn parse_helpers_are_lenient_about_case_and_whitespace() {
        assert_eq!(SizeCategory::parse("  Large "), Some(SizeCategory::Large));
        assert_eq!(
            HealthStatus::parse("Special Needs"),
            Some(HealthStatus::SpecialNeeds)
        );
        assert_eq!(
            AdoptionStatus::parse("AVAILABLE"),
            Some(AdoptionStatus::Available)
        );
        assert_eq!(AdoptionStatus::parse("fostered"), None);
    }
}
