//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::infra::{CandidateStore, Database, UserStore};
use crate::services::{
    AuthService, Authenticator, CandidateManager, CandidateService, UserManager, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Candidate service
    pub candidate_service: Arc<dyn CandidateService>,
    /// Configured database name, reported by the health check
    pub database_name: String,
}

impl AppState {
    /// Create application state wired to the shared database handle.
    pub fn from_database(db: &Database) -> Self {
        let users = Arc::new(UserStore::new(db.users()));
        let candidates = Arc::new(CandidateStore::new(db.candidates()));

        Self {
            auth_service: Arc::new(Authenticator::new(users.clone())),
            user_service: Arc::new(UserManager::new(users)),
            candidate_service: Arc::new(CandidateManager::new(candidates)),
            database_name: db.name().to_string(),
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        candidate_service: Arc<dyn CandidateService>,
        database_name: String,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            candidate_service,
            database_name,
        }
    }
}
