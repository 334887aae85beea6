use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{
    AdoptionStatus, Compatibility, HealthStatus, PetId, PetRecord, SizeCategory,
};

/// Errors raised while loading a catalog export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog row {row} rejected: {detail}")]
    InvalidRow { row: usize, detail: String },
}

/// Loads pet records from the shelter's CSV export. File order is preserved
/// as insertion order, which is what gives the "newest" sort its meaning.
pub struct PetCatalogImporter;

impl PetCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PetRecord>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PetRecord>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut pets = Vec::new();
        for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            let row = record?;
            pets.push(row.into_record(index + 1)?);
        }

        Ok(pets)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    species: String,
    breed: String,
    age: String,
    gender: String,
    size: String,
    health: String,
    status: String,
    good_with_kids: String,
    good_with_pets: String,
    apartment_friendly: String,
    location: String,
}

impl CatalogRow {
    fn into_record(self, row: usize) -> Result<PetRecord, CatalogImportError> {
        let size = SizeCategory::parse(&self.size).ok_or_else(|| reject(row, "size", &self.size))?;
        let health =
            HealthStatus::parse(&self.health).ok_or_else(|| reject(row, "health", &self.health))?;
        let status = AdoptionStatus::parse(&self.status)
            .ok_or_else(|| reject(row, "status", &self.status))?;

        Ok(PetRecord {
            id: PetId(self.id),
            name: self.name,
            species: self.species,
            breed: self.breed,
            age: self.age,
            gender: self.gender,
            size,
            health,
            status,
            compatibility: Compatibility {
                kids: parse_flag(&self.good_with_kids),
                pets: parse_flag(&self.good_with_pets),
                apartment: parse_flag(&self.apartment_friendly),
            },
            location: self.location,
        })
    }
}

fn reject(row: usize, field: &str, value: &str) -> CatalogImportError {
    CatalogImportError::InvalidRow {
        row,
        detail: format!("unrecognized {field} value '{value}'"),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}
