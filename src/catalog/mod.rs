//! Pet catalog: the entity model and the pure search/filter/sort pipeline,
//! plus the CSV source, a built-in sample catalog, and the browse endpoints.

pub mod age;
pub mod domain;
pub mod import;
pub mod router;
pub mod sample;
pub mod search;

pub use age::{parse_age_years, AgeBand};
pub use domain::{
    AdoptionStatus, Compatibility, HealthStatus, PetId, PetRecord, SizeCategory,
};
pub use import::{CatalogImportError, PetCatalogImporter};
pub use router::{catalog_router, CatalogState};
pub use sample::sample_pets;
pub use search::{search, FilterSelection, SearchRequest, SortKey};
