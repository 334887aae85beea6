use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::age::AgeBand;
use super::domain::{AdoptionStatus, HealthStatus, PetId, PetRecord, SizeCategory};
use super::search::{search, FilterSelection, SearchRequest, SortKey};
use crate::profile::{AdopterLedger, KeyValueStore};

/// Shared state for the catalog endpoints: the ordered pet collection and
/// the adopter ledger for favorite flags.
pub struct CatalogState<S> {
    pub pets: Vec<PetRecord>,
    pub ledger: AdopterLedger<S>,
}

/// Router builder for browsing and favoriting pets.
pub fn catalog_router<S>(state: Arc<CatalogState<S>>) -> Router
where
    S: KeyValueStore + 'static,
{
    Router::new()
        .route("/api/v1/pets", get(search_handler::<S>))
        .route("/api/v1/pets/:pet_id/favorite", post(favorite_handler::<S>))
        .with_state(state)
}

/// Query-string shape for the search endpoint. Multi-value categories are
/// comma separated (`species=Dog,Cat`).
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    species: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    size: Option<String>,
    #[serde(default)]
    age_band: Option<String>,
    #[serde(default)]
    health: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    sort: Option<String>,
}

impl SearchParams {
    fn into_request(self) -> Result<SearchRequest, String> {
        let sort = match self.sort.as_deref() {
            None => SortKey::default(),
            Some(raw) => SortKey::parse(raw).ok_or_else(|| format!("unknown sort '{raw}'"))?,
        };

        let filters = FilterSelection {
            species: split_values(self.species.as_deref()),
            gender: split_values(self.gender.as_deref()),
            size: parse_values(self.size.as_deref(), "size", SizeCategory::parse)?,
            age_bands: parse_values(self.age_band.as_deref(), "age band", AgeBand::parse)?,
            health: parse_values(self.health.as_deref(), "health status", HealthStatus::parse)?,
            status: parse_values(self.status.as_deref(), "adoption status", AdoptionStatus::parse)?,
        };

        Ok(SearchRequest {
            query: self.q.unwrap_or_default(),
            filters,
            sort,
        })
    }
}

fn split_values(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn parse_values<T>(
    raw: Option<&str>,
    category: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<Vec<T>, String> {
    split_values(raw)
        .iter()
        .map(|value| parse(value).ok_or_else(|| format!("unknown {category} '{value}'")))
        .collect()
}

async fn search_handler<S>(
    State(state): State<Arc<CatalogState<S>>>,
    Query(params): Query<SearchParams>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    let request = match params.into_request() {
        Ok(request) => request,
        Err(detail) => {
            let payload = json!({ "error": detail });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let results: Vec<PetRecord> = search(&state.pets, &request)
        .into_iter()
        .cloned()
        .collect();
    let payload = json!({
        "count": results.len(),
        "pets": results,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

async fn favorite_handler<S>(
    State(state): State<Arc<CatalogState<S>>>,
    Path(pet_id): Path<String>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    let id = PetId(pet_id);
    if !state.pets.iter().any(|pet| pet.id == id) {
        let payload = json!({ "error": "pet not found" });
        return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
    }

    let favorite = state.ledger.toggle_favorite(&id);
    let payload = json!({
        "pet_id": id.0,
        "favorite": favorite,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
