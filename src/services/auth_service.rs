//! Authentication service - Handles user registration and login.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{normalize_username, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user; returns the normalized username.
    ///
    /// Validation gates run in a fixed order: field presence, then
    /// password length, then the duplicate-username pre-check. The first
    /// failing gate determines the reported error.
    async fn register(
        &self,
        full_name: String,
        username: String,
        password: String,
    ) -> AppResult<String>;

    /// Check credentials and return the authenticated user.
    ///
    /// Unknown username and wrong password are deliberately
    /// indistinguishable to the caller.
    async fn login(&self, username: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of AuthService over the user repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(
        &self,
        full_name: String,
        username: String,
        password: String,
    ) -> AppResult<String> {
        let full_name = full_name.trim().to_string();
        let username = normalize_username(&username);

        if full_name.is_empty() || username.is_empty() || password.is_empty() {
            return Err(AppError::validation(
                "fullName, username, and password are required",
            ));
        }

        // Length gate runs before the duplicate check; the hash is
        // computed here and never the raw password stored.
        let password_hash = Password::new(&password)?.into_string();

        // Optimistic pre-check. The unique index remains the source of
        // truth: a racing insert still comes back as a conflict.
        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AppError::Conflict("username"));
        }

        let user = User::new(full_name, username.clone(), password_hash);
        self.users.insert(user).await?;

        tracing::info!(username = %username, "user registered");
        Ok(username)
    }

    async fn login(&self, username: String, password: String) -> AppResult<User> {
        let username = normalize_username(&username);

        if username.is_empty() || password.is_empty() {
            return Err(AppError::validation("username and password are required"));
        }

        let user = self.users.find_by_username(&username).await?;

        // SECURITY: verify against a dummy hash when the user doesn't
        // exist, so the two failure causes take comparable time and
        // usernames can't be enumerated.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";
        let stored_hash = user
            .as_ref()
            .map(|u| u.password_hash.as_str())
            .unwrap_or(dummy_hash);
        let password_valid = Password::from_hash(stored_hash.to_string()).verify(&password);

        match user {
            Some(user) if password_valid => Ok(user),
            _ => Err(AppError::InvalidCredentials),
        }
    }
}
