//! User profile handler.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users/:username", get(get_user))
}

/// Look up a user profile by username
#[utoipa::path(
    get,
    path = "/users/{username}",
    tag = "Users",
    params(
        ("username" = String, Path, description = "Username, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_by_username(&username).await?;
    Ok(Json(UserResponse::from(user)))
}
