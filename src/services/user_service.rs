//! User service - Profile lookup.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{normalize_username, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Look up a user by username (case-insensitive).
    async fn get_by_username(&self, username: &str) -> AppResult<User>;
}

/// Concrete implementation of UserService over the user repository.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_by_username(&self, username: &str) -> AppResult<User> {
        self.users
            .find_by_username(&normalize_username(username))
            .await?
            .ok_or(AppError::NotFound("user"))
    }
}
