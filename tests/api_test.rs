//! Integration tests for the API endpoints.
//!
//! The real router and services run against in-memory repository
//! implementations, so the full request pipeline (extractors,
//! validation gates, error translation) is exercised without a
//! database connection.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, Response, StatusCode};
use axum::Router;
use bson::oid::ObjectId;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use voting_admin_api::api::{create_router, AppState};
use voting_admin_api::domain::{Candidate, CandidateChanges, User};
use voting_admin_api::errors::{AppError, AppResult};
use voting_admin_api::infra::{CandidateRepository, UserRepository};
use voting_admin_api::services::{Authenticator, CandidateManager, UserManager};

// =============================================================================
// In-memory repositories
// =============================================================================

#[derive(Default)]
struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn insert(&self, mut user: User) -> AppResult<ObjectId> {
        let mut users = self.users.lock().unwrap();
        // Mirrors the unique index on username
        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::Conflict("username"));
        }
        let id = ObjectId::new();
        user.id = Some(id);
        users.push(user);
        Ok(id)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}

#[derive(Default)]
struct InMemoryCandidates {
    candidates: Mutex<Vec<Candidate>>,
}

#[async_trait]
impl CandidateRepository for InMemoryCandidates {
    async fn insert(&self, mut candidate: Candidate) -> AppResult<ObjectId> {
        let id = ObjectId::new();
        candidate.id = Some(id);
        self.candidates.lock().unwrap().push(candidate);
        Ok(id)
    }

    async fn find_all(&self) -> AppResult<Vec<Candidate>> {
        let mut candidates = self.candidates.lock().unwrap().clone();
        candidates.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(candidates)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Candidate>> {
        Ok(self
            .candidates
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == Some(id))
            .cloned())
    }

    async fn update_fields(&self, id: ObjectId, changes: CandidateChanges) -> AppResult<bool> {
        let mut candidates = self.candidates.lock().unwrap();
        let Some(candidate) = candidates.iter_mut().find(|c| c.id == Some(id)) else {
            return Ok(false);
        };
        if let Some(name) = changes.name {
            candidate.name = name;
        }
        if let Some(party) = changes.party {
            candidate.party = party;
        }
        if let Some(image_url) = changes.image_url {
            candidate.image_url = image_url;
        }
        candidate.updated_at = changes.updated_at;
        Ok(true)
    }

    async fn delete(&self, id: ObjectId) -> AppResult<bool> {
        let mut candidates = self.candidates.lock().unwrap();
        let before = candidates.len();
        candidates.retain(|c| c.id != Some(id));
        Ok(candidates.len() < before)
    }
}

// =============================================================================
// Test helpers
// =============================================================================

fn test_app() -> Router {
    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUsers::default());
    let candidates: Arc<dyn CandidateRepository> = Arc::new(InMemoryCandidates::default());

    let state = AppState::new(
        Arc::new(Authenticator::new(users.clone())),
        Arc::new(UserManager::new(users)),
        Arc::new(CandidateManager::new(candidates)),
        "online_voting".to_string(),
    );
    create_router(state)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn send(app: &Router, method: &str, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn register_ada(app: &Router) {
    let response = send_json(
        app,
        "POST",
        "/register",
        json!({"fullName": "Ada L", "username": "Ada", "password": "secret1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn create_candidate(app: &Router, name: &str) -> String {
    let response = send_json(
        app,
        "POST",
        "/candidates",
        json!({"name": name, "party": "X", "imageUrl": "http://x"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    body["id"].as_str().unwrap().to_string()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_database_name() {
    let app = test_app();
    let response = send(&app, "GET", "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({"status": "ok", "database": "online_voting"}));
}

// =============================================================================
// Registration & login
// =============================================================================

#[tokio::test]
async fn register_normalizes_username_and_login_is_case_insensitive() {
    let app = test_app();

    let response = send_json(
        &app,
        "POST",
        "/register",
        json!({"fullName": "Ada L", "username": "Ada", "password": "secret1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["username"], "ada");
    assert_eq!(body["message"], "registration successful");

    let response = send_json(
        &app,
        "POST",
        "/login",
        json!({"username": "ADA", "password": "secret1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["username"], "ada");
    assert_eq!(body["user"]["fullName"], "Ada L");
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn duplicate_registration_is_conflict_case_insensitively() {
    let app = test_app();
    register_ada(&app).await;

    let response = send_json(
        &app,
        "POST",
        "/register",
        json!({"fullName": "Other", "username": "ADA", "password": "secret2"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"], "username already exists");
}

#[tokio::test]
async fn missing_fields_win_over_short_password() {
    let app = test_app();

    // fullName missing AND password too short: missing fields is reported
    let response = send_json(
        &app,
        "POST",
        "/register",
        json!({"username": "ada", "password": "abc"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "fullName, username, and password are required");
}

#[tokio::test]
async fn short_password_is_rejected() {
    let app = test_app();

    let response = send_json(
        &app,
        "POST",
        "/register",
        json!({"fullName": "Ada L", "username": "ada", "password": "abc"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "password must be at least 6 characters");
}

#[tokio::test]
async fn bad_credentials_are_indistinguishable() {
    let app = test_app();
    register_ada(&app).await;

    let wrong_password = send_json(
        &app,
        "POST",
        "/login",
        json!({"username": "ada", "password": "not-the-password"}),
    )
    .await;
    let unknown_user = send_json(
        &app,
        "POST",
        "/login",
        json!({"username": "ghost", "password": "secret1"}),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(wrong_password).await,
        body_json(unknown_user).await
    );
}

#[tokio::test]
async fn login_requires_both_fields() {
    let app = test_app();
    let response = send_json(&app, "POST", "/login", json!({"username": "ada"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "username and password are required");
}

// =============================================================================
// User lookup
// =============================================================================

#[tokio::test]
async fn get_user_excludes_password_hash() {
    let app = test_app();
    register_ada(&app).await;

    let response = send(&app, "GET", "/users/ADA").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["username"], "ada");
    assert_eq!(body["fullName"], "Ada L");
    assert!(body.get("passwordHash").is_none());
    assert!(body["id"].as_str().is_some());
    assert!(body.get("createdAt").is_some());
}

#[tokio::test]
async fn get_unknown_user_is_not_found() {
    let app = test_app();
    let response = send(&app, "GET", "/users/ghost").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "user not found");
}

// =============================================================================
// Candidates
// =============================================================================

#[tokio::test]
async fn create_candidate_returns_normalized_document() {
    let app = test_app();
    let response = send_json(
        &app,
        "POST",
        "/candidates",
        json!({"name": " Jane Doe ", "party": "Independent", "imageUrl": "http://x"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Jane Doe");
    assert_eq!(body["party"], "Independent");
    assert_eq!(body["imageUrl"], "http://x");
    assert!(body["id"].as_str().is_some());
    assert!(body["updatedAt"].as_str().is_some());
}

#[tokio::test]
async fn create_candidate_with_blank_field_is_rejected() {
    let app = test_app();

    for payload in [
        json!({"name": "", "party": "X", "imageUrl": "http://x"}),
        json!({"name": "Jane", "party": "   ", "imageUrl": "http://x"}),
        json!({"name": "Jane", "party": "X"}),
    ] {
        let response = send_json(&app, "POST", "/candidates", payload).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "name, party, and imageUrl are required");
    }
}

#[tokio::test]
async fn list_orders_by_most_recently_updated() {
    let app = test_app();

    create_candidate(&app, "First").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    create_candidate(&app, "Second").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let third_id = create_candidate(&app, "Third").await;

    let response = send(&app, "GET", "/candidates").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);

    // Updating the oldest moves it to the front
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    let first_id = ids[2];
    assert_ne!(first_id, third_id);
    let response = send_json(
        &app,
        "PUT",
        &format!("/candidates/{}", first_id),
        json!({"party": "Y"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(send(&app, "GET", "/candidates").await).await;
    assert_eq!(body[0]["name"], "First");
    assert_eq!(body[0]["party"], "Y");
}

#[tokio::test]
async fn empty_store_lists_as_empty_array() {
    let app = test_app();
    let response = send(&app, "GET", "/candidates").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn update_with_blank_field_is_rejected_and_document_unchanged() {
    let app = test_app();
    let id = create_candidate(&app, "Jane").await;

    let response = send_json(
        &app,
        "PUT",
        &format!("/candidates/{}", id),
        json!({"name": "  "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "name must not be empty");

    let body = body_json(send(&app, "GET", "/candidates").await).await;
    assert_eq!(body[0]["name"], "Jane");
}

#[tokio::test]
async fn update_with_no_fields_is_rejected() {
    let app = test_app();
    let id = create_candidate(&app, "Jane").await;

    let response = send_json(&app, "PUT", &format!("/candidates/{}", id), json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "at least one of name, party, or imageUrl is required"
    );
}

#[tokio::test]
async fn update_with_malformed_id_is_bad_request() {
    let app = test_app();
    let response = send_json(
        &app,
        "PUT",
        "/candidates/not-a-valid-id",
        json!({"name": "Jane"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "invalid candidate id");
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let app = test_app();
    let response = send_json(
        &app,
        "PUT",
        &format!("/candidates/{}", ObjectId::new().to_hex()),
        json!({"name": "Jane"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "candidate not found");
}

#[tokio::test]
async fn update_returns_post_update_document() {
    let app = test_app();
    let id = create_candidate(&app, "Jane").await;

    let response = send_json(
        &app,
        "PUT",
        &format!("/candidates/{}", id),
        json!({"name": " Janet ", "imageUrl": "http://y"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["name"], "Janet");
    assert_eq!(body["party"], "X");
    assert_eq!(body["imageUrl"], "http://y");
}

#[tokio::test]
async fn delete_twice_returns_not_found_second_time() {
    let app = test_app();
    let id = create_candidate(&app, "Jane").await;

    let response = send(&app, "DELETE", &format!("/candidates/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "candidate deleted");

    let response = send(&app, "DELETE", &format!("/candidates/{}", id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "candidate not found");
}

#[tokio::test]
async fn delete_with_malformed_id_is_bad_request() {
    let app = test_app();
    let response = send(&app, "DELETE", "/candidates/12345").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "invalid candidate id");
}

#[tokio::test]
async fn malformed_json_body_is_rejected_with_json_error() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/register")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().is_some());
}
