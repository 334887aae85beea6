use super::domain::{
    AdoptionStatus, Compatibility, HealthStatus, PetId, PetRecord, SizeCategory,
};

/// Built-in catalog used when no CSV export is configured, and by the CLI
/// demo. First-listed counts as newest.
pub fn sample_pets() -> Vec<PetRecord> {
    vec![
        entry(
            "pet-001",
            "Luna",
            "Dog",
            "Siberian Husky",
            "2 years",
            "Female",
            SizeCategory::Large,
            HealthStatus::Vaccinated,
            AdoptionStatus::Available,
            Compatibility {
                kids: true,
                pets: false,
                apartment: false,
            },
            "Des Moines, IA",
        ),
        entry(
            "pet-002",
            "Milo",
            "Cat",
            "Orange Tabby",
            "8 months",
            "Male",
            SizeCategory::Small,
            HealthStatus::Healthy,
            AdoptionStatus::Available,
            Compatibility {
                kids: true,
                pets: true,
                apartment: true,
            },
            "Ames, IA",
        ),
        entry(
            "pet-003",
            "Max",
            "Dog",
            "German Shepherd",
            "5 years",
            "Male",
            SizeCategory::Large,
            HealthStatus::Vaccinated,
            AdoptionStatus::Pending,
            Compatibility {
                kids: true,
                pets: true,
                apartment: false,
            },
            "Cedar Rapids, IA",
        ),
        entry(
            "pet-004",
            "Bella",
            "Cat",
            "Calico",
            "7 years",
            "Female",
            SizeCategory::Medium,
            HealthStatus::SpecialNeeds,
            AdoptionStatus::Available,
            Compatibility {
                kids: false,
                pets: true,
                apartment: true,
            },
            "Iowa City, IA",
        ),
        entry(
            "pet-005",
            "Charlie",
            "Dog",
            "Beagle",
            "3 years",
            "Male",
            SizeCategory::Medium,
            HealthStatus::Healthy,
            AdoptionStatus::Available,
            Compatibility {
                kids: true,
                pets: true,
                apartment: true,
            },
            "Des Moines, IA",
        ),
        entry(
            "pet-006",
            "Kiwi",
            "Bird",
            "Cockatiel",
            "1 year",
            "Female",
            SizeCategory::Small,
            HealthStatus::Healthy,
            AdoptionStatus::Available,
            Compatibility {
                kids: true,
                pets: false,
                apartment: true,
            },
            "Ames, IA",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    species: &str,
    breed: &str,
    age: &str,
    gender: &str,
    size: SizeCategory,
    health: HealthStatus,
    status: AdoptionStatus,
    compatibility: Compatibility,
    location: &str,
) -> PetRecord {
    PetRecord {
        id: PetId(id.to_string()),
        name: name.to_string(),
        species: species.to_string(),
        breed: breed.to_string(),
        age: age.to_string(),
        gender: gender.to_string(),
        size,
        health,
        status,
        compatibility,
        location: location.to_string(),
    }
}
