use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{AdoptionSubmission, ApplicationId};
use super::repository::{ApplicationRepository, RepositoryError, SubmissionSink};
use super::service::{AdoptionService, AdoptionServiceError};
use crate::profile::KeyValueStore;

/// Router builder exposing application submission and status lookup.
pub fn adoption_router<R, S, K>(service: Arc<AdoptionService<R, S, K>>) -> Router
where
    R: ApplicationRepository + 'static,
    S: SubmissionSink + 'static,
    K: KeyValueStore + 'static,
{
    Router::new()
        .route("/api/v1/adoptions", post(submit_handler::<R, S, K>))
        .route("/api/v1/adoptions/pending", get(pending_handler::<R, S, K>))
        .route(
            "/api/v1/adoptions/:application_id",
            get(status_handler::<R, S, K>),
        )
        .with_state(service)
}

const PENDING_QUEUE_LIMIT: usize = 50;

pub(crate) async fn submit_handler<R, S, K>(
    State(service): State<Arc<AdoptionService<R, S, K>>>,
    axum::Json(submission): axum::Json<AdoptionSubmission>,
) -> Response
where
    R: ApplicationRepository + 'static,
    S: SubmissionSink + 'static,
    K: KeyValueStore + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(AdoptionServiceError::Intake(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AdoptionServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "application already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, S, K>(
    State(service): State<Arc<AdoptionService<R, S, K>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
    S: SubmissionSink + 'static,
    K: KeyValueStore + 'static,
{
    let id = ApplicationId(application_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AdoptionServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "application not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn pending_handler<R, S, K>(
    State(service): State<Arc<AdoptionService<R, S, K>>>,
) -> Response
where
    R: ApplicationRepository + 'static,
    S: SubmissionSink + 'static,
    K: KeyValueStore + 'static,
{
    match service.pending(PENDING_QUEUE_LIMIT) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(|record| record.status_view()).collect();
            let payload = json!({
                "count": views.len(),
                "applications": views,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
