//! Registration and login handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::SessionUser;
use crate::errors::AppResult;

/// User registration request. Absent fields deserialize as empty and
/// fail the presence gate, mirroring a missing-field submission.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// User's full name
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    /// Desired username (normalized to lowercase)
    #[serde(default)]
    #[schema(example = "ada")]
    pub username: String,
    /// Password (minimum 6 characters)
    #[serde(default)]
    #[schema(example = "secret1", min_length = 6)]
    pub password: String,
}

/// Registration confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    #[schema(example = "registration successful")]
    pub message: String,
    /// The stored, normalized username
    #[schema(example = "ada")]
    pub username: String,
}

/// User login request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "ada")]
    pub username: String,
    #[serde(default)]
    #[schema(example = "secret1")]
    pub password: String,
}

/// Login confirmation with the authenticated identity
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "login successful")]
    pub message: String,
    pub user: SessionUser,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Missing fields or password too short"),
        (status = 409, description = "Username already exists"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let username = state
        .auth_service
        .register(payload.full_name, payload.username, payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "registration successful".to_string(),
            username,
        }),
    ))
}

/// Login with username and password
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing fields"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = state
        .auth_service
        .login(payload.username, payload.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "login successful".to_string(),
        user: SessionUser::from(user),
    }))
}
