use serde::{Deserialize, Serialize};

use super::age::{parse_age_years, AgeBand};
use super::domain::{AdoptionStatus, HealthStatus, PetRecord, SizeCategory};

/// Selected values per filter category. An empty category passes every
/// record; within a category values OR together, across categories the
/// predicates AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub species: Vec<String>,
    pub gender: Vec<String>,
    pub size: Vec<SizeCategory>,
    pub age_bands: Vec<AgeBand>,
    pub health: Vec<HealthStatus>,
    pub status: Vec<AdoptionStatus>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
            && self.gender.is_empty()
            && self.size.is_empty()
            && self.age_bands.is_empty()
            && self.health.is_empty()
            && self.status.is_empty()
    }

    fn matches(&self, pet: &PetRecord) -> bool {
        pass_ci(&self.species, &pet.species)
            && pass_ci(&self.gender, &pet.gender)
            && (self.size.is_empty() || self.size.contains(&pet.size))
            && (self.health.is_empty() || self.health.contains(&pet.health))
            && (self.status.is_empty() || self.status.contains(&pet.status))
            && (self.age_bands.is_empty() || self.age_bands.contains(&AgeBand::of(&pet.age)))
    }
}

fn pass_ci(selected: &[String], value: &str) -> bool {
    selected.is_empty() || selected.iter().any(|choice| choice.eq_ignore_ascii_case(value))
}

/// Result ordering. "Newest" is the catalog's insertion order
/// (first-listed = newest), so it applies no reordering at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Name,
    Age,
}

impl SortKey {
    pub const fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Name => "name",
            SortKey::Age => "age",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" => Some(SortKey::Newest),
            "oldest" => Some(SortKey::Oldest),
            "name" => Some(SortKey::Name),
            "age" => Some(SortKey::Age),
            _ => None,
        }
    }
}

/// Full input to one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub filters: FilterSelection,
    pub sort: SortKey,
}

/// Compute the visible result list. Pure function of its inputs: no hidden
/// state, stable for equal sort keys, safe to recompute on every change.
/// An empty output is a valid result, not an error.
pub fn search<'a>(pets: &'a [PetRecord], request: &SearchRequest) -> Vec<&'a PetRecord> {
    let needle = request.query.trim().to_lowercase();

    let mut results: Vec<&PetRecord> = pets
        .iter()
        .filter(|pet| needle.is_empty() || matches_query(pet, &needle))
        .filter(|pet| request.filters.matches(pet))
        .collect();

    match request.sort {
        SortKey::Newest => {}
        SortKey::Oldest => results.reverse(),
        SortKey::Name => {
            results.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        SortKey::Age => results.sort_by_key(|pet| parse_age_years(&pet.age)),
    }

    results
}

fn matches_query(pet: &PetRecord, needle: &str) -> bool {
    [&pet.name, &pet.breed, &pet.location, &pet.species]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
