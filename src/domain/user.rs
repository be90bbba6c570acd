//! User domain entity and related types.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Normalize a username for storage and lookup: trimmed and lowercased.
/// The normalized form is the uniqueness key for the users collection.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// User document as stored in the users collection.
///
/// `id` is `None` before insertion; storage generates the `_id`.
/// The password hash is never serialized into a response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub full_name: String,
    pub username: String,
    pub password_hash: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user document ready for insertion.
    ///
    /// The caller supplies an already-trimmed full name, a normalized
    /// username, and the password hash (never the raw password).
    pub fn new(full_name: String, username: String, password_hash: String) -> Self {
        Self {
            id: None,
            full_name,
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Hex form of the storage identifier, empty if not yet inserted.
    pub fn id_hex(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }
}

/// User profile response (safe to return to client; no password hash)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Storage identifier as a hex string
    #[schema(example = "65f1c0a2b3d4e5f60718293a")]
    pub id: String,
    /// User's full name
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    /// Normalized username
    #[schema(example = "ada")]
    pub username: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_hex(),
            full_name: user.full_name,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

/// Compact user identity returned by login.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub full_name: String,
    pub username: String,
}

impl From<User> for SessionUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id_hex(),
            full_name: user.full_name,
            username: user.username,
        }
    }
}
