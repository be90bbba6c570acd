//! Candidate CRUD handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::CandidateResponse;
use crate::errors::AppResult;

/// Candidate creation request. Absent fields deserialize as empty and
/// fail the presence gate.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidateRequest {
    #[serde(default)]
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Independent")]
    pub party: String,
    #[serde(default)]
    #[schema(example = "https://example.com/jane.png")]
    pub image_url: String,
}

/// Partial candidate update; any subset of fields, each non-blank.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidateRequest {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "Independent")]
    pub party: Option<String>,
    #[schema(example = "https://example.com/jane.png")]
    pub image_url: Option<String>,
}

/// Confirmation message
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "candidate deleted")]
    pub message: String,
}

/// Create candidate routes
pub fn candidate_routes() -> Router<AppState> {
    Router::new()
        .route("/candidates", get(list_candidates).post(create_candidate))
        .route(
            "/candidates/:id",
            put(update_candidate).delete(delete_candidate),
        )
}

/// List all candidates, most recently updated first
#[utoipa::path(
    get,
    path = "/candidates",
    tag = "Candidates",
    responses(
        (status = 200, description = "Candidates ordered by updatedAt descending", body = [CandidateResponse])
    )
)]
pub async fn list_candidates(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CandidateResponse>>> {
    let candidates = state.candidate_service.list().await?;
    Ok(Json(
        candidates.into_iter().map(CandidateResponse::from).collect(),
    ))
}

/// Create a candidate
#[utoipa::path(
    post,
    path = "/candidates",
    tag = "Candidates",
    request_body = CreateCandidateRequest,
    responses(
        (status = 201, description = "Candidate created", body = CandidateResponse),
        (status = 400, description = "Missing or blank fields"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_candidate(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateCandidateRequest>,
) -> AppResult<(StatusCode, Json<CandidateResponse>)> {
    let candidate = state
        .candidate_service
        .create(payload.name, payload.party, payload.image_url)
        .await?;

    Ok((StatusCode::CREATED, Json(CandidateResponse::from(candidate))))
}

/// Update a candidate's fields
#[utoipa::path(
    put,
    path = "/candidates/{id}",
    tag = "Candidates",
    params(
        ("id" = String, Path, description = "Candidate id (hex ObjectId)")
    ),
    request_body = UpdateCandidateRequest,
    responses(
        (status = 200, description = "Post-update candidate", body = CandidateResponse),
        (status = 400, description = "Malformed id, blank field, or empty update"),
        (status = 404, description = "Candidate not found")
    )
)]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateCandidateRequest>,
) -> AppResult<Json<CandidateResponse>> {
    let candidate = state
        .candidate_service
        .update(&id, payload.name, payload.party, payload.image_url)
        .await?;

    Ok(Json(CandidateResponse::from(candidate)))
}

/// Delete a candidate
#[utoipa::path(
    delete,
    path = "/candidates/{id}",
    tag = "Candidates",
    params(
        ("id" = String, Path, description = "Candidate id (hex ObjectId)")
    ),
    responses(
        (status = 200, description = "Candidate deleted", body = MessageResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Candidate not found")
    )
)]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.candidate_service.delete(&id).await?;

    Ok(Json(MessageResponse {
        message: "candidate deleted".to_string(),
    }))
}
