//! Candidate domain entity and related types.

use bson::oid::ObjectId;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Current UTC time as the RFC 3339 string stored in `updatedAt`.
///
/// Candidates are listed by descending `updatedAt`; a fixed-width UTC
/// format keeps the lexicographic sort equal to the chronological one.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Candidate document as stored in the candidates collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub party: String,
    pub image_url: String,
    pub updated_at: String,
}

impl Candidate {
    /// Create a new candidate document ready for insertion, with
    /// `updatedAt` set to the current time.
    pub fn new(name: String, party: String, image_url: String) -> Self {
        Self {
            id: None,
            name,
            party,
            image_url,
            updated_at: current_timestamp(),
        }
    }

    /// Hex form of the storage identifier, empty if not yet inserted.
    pub fn id_hex(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }
}

/// Partial update to a candidate. Only supplied fields change;
/// `updated_at` is refreshed on every update regardless.
#[derive(Debug, Clone)]
pub struct CandidateChanges {
    pub name: Option<String>,
    pub party: Option<String>,
    pub image_url: Option<String>,
    pub updated_at: String,
}

impl CandidateChanges {
    pub fn new(name: Option<String>, party: Option<String>, image_url: Option<String>) -> Self {
        Self {
            name,
            party,
            image_url,
            updated_at: current_timestamp(),
        }
    }

    /// True if no candidate field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.party.is_none() && self.image_url.is_none()
    }
}

/// Candidate response (normalized client shape)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
    /// Storage identifier as a hex string
    #[schema(example = "65f1c0a2b3d4e5f60718293a")]
    pub id: String,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "Independent")]
    pub party: String,
    #[schema(example = "https://example.com/jane.png")]
    pub image_url: String,
    /// Last modification time, RFC 3339
    pub updated_at: String,
}

impl From<Candidate> for CandidateResponse {
    fn from(candidate: Candidate) -> Self {
        Self {
            id: candidate.id_hex(),
            name: candidate.name,
            party: candidate.party,
            image_url: candidate.image_url,
            updated_at: candidate.updated_at,
        }
    }
}
