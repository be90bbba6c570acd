//! OpenAPI documentation definition.

use utoipa::OpenApi;

use super::handlers::{auth_handler, candidate_handler, user_handler};
use super::routes;
use crate::domain::{CandidateResponse, SessionUser, UserResponse};

/// OpenAPI document for the voting admin API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Voting Admin API",
        description = "User registration/login and candidate management for an online voting admin tool",
        version = "0.1.0"
    ),
    paths(
        routes::health,
        auth_handler::register,
        auth_handler::login,
        user_handler::get_user,
        candidate_handler::list_candidates,
        candidate_handler::create_candidate,
        candidate_handler::update_candidate,
        candidate_handler::delete_candidate,
    ),
    components(schemas(
        routes::HealthResponse,
        auth_handler::RegisterRequest,
        auth_handler::RegisterResponse,
        auth_handler::LoginRequest,
        auth_handler::LoginResponse,
        candidate_handler::CreateCandidateRequest,
        candidate_handler::UpdateCandidateRequest,
        candidate_handler::MessageResponse,
        UserResponse,
        SessionUser,
        CandidateResponse,
    )),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Authentication", description = "Registration and login"),
        (name = "Users", description = "User profiles"),
        (name = "Candidates", description = "Candidate management"),
    )
)]
pub struct ApiDoc;
