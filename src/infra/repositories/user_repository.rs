//! User repository - persistence for the users collection.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::Collection;

use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Server-side error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// User persistence contract.
///
/// `insert` fails with `Conflict` when the normalized username already
/// exists; the unique index is the source of truth, so a race past any
/// optimistic pre-check still surfaces here as a conflict.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user document, returning the generated id.
    async fn insert(&self, user: User) -> AppResult<ObjectId>;

    /// Find a user by normalized username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// MongoDB-backed user store.
pub struct UserStore {
    collection: Collection<User>,
}

impl UserStore {
    pub fn new(collection: Collection<User>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(&self, user: User) -> AppResult<ObjectId> {
        let result = self.collection.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::Conflict("username")
            } else {
                tracing::error!("user insert failed: {:?}", e);
                AppError::Storage("user")
            }
        })?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::internal("inserted user id was not an ObjectId"))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .collection
            .find_one(doc! { "username": username })
            .await?)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_err))
            if write_err.code == DUPLICATE_KEY_CODE
    )
}
