//! Candidate service - CRUD over the candidates collection.

use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

use crate::domain::{Candidate, CandidateChanges};
use crate::errors::{AppError, AppResult};
use crate::infra::CandidateRepository;

/// Candidate service trait for dependency injection.
#[async_trait]
pub trait CandidateService: Send + Sync {
    /// All candidates, newest `updatedAt` first.
    async fn list(&self) -> AppResult<Vec<Candidate>>;

    /// Create a candidate; all three fields must be non-blank.
    async fn create(&self, name: String, party: String, image_url: String)
        -> AppResult<Candidate>;

    /// Partially update a candidate by id (hex string from the path).
    /// Returns the post-update document, re-read after the write.
    async fn update(
        &self,
        id: &str,
        name: Option<String>,
        party: Option<String>,
        image_url: Option<String>,
    ) -> AppResult<Candidate>;

    /// Delete a candidate by id.
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of CandidateService over the candidate repository.
pub struct CandidateManager {
    candidates: Arc<dyn CandidateRepository>,
}

impl CandidateManager {
    pub fn new(candidates: Arc<dyn CandidateRepository>) -> Self {
        Self { candidates }
    }
}

/// Parse a path id into a storage identifier; malformed ids are a 400,
/// never a storage error.
fn parse_candidate_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId)
}

/// Trim a supplied field, rejecting blank values with an error naming
/// the field. Absent fields pass through.
fn validated_field(value: Option<String>, field: &'static str) -> AppResult<Option<String>> {
    match value {
        Some(value) => {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                return Err(AppError::validation(format!("{} must not be empty", field)));
            }
            Ok(Some(trimmed))
        }
        None => Ok(None),
    }
}

#[async_trait]
impl CandidateService for CandidateManager {
    async fn list(&self) -> AppResult<Vec<Candidate>> {
        self.candidates.find_all().await
    }

    async fn create(
        &self,
        name: String,
        party: String,
        image_url: String,
    ) -> AppResult<Candidate> {
        let name = name.trim().to_string();
        let party = party.trim().to_string();
        let image_url = image_url.trim().to_string();

        if name.is_empty() || party.is_empty() || image_url.is_empty() {
            return Err(AppError::validation(
                "name, party, and imageUrl are required",
            ));
        }

        let mut candidate = Candidate::new(name, party, image_url);
        let id = self.candidates.insert(candidate.clone()).await?;
        candidate.id = Some(id);

        tracing::info!(id = %candidate.id_hex(), "candidate created");
        Ok(candidate)
    }

    async fn update(
        &self,
        id: &str,
        name: Option<String>,
        party: Option<String>,
        image_url: Option<String>,
    ) -> AppResult<Candidate> {
        let id = parse_candidate_id(id)?;

        let changes = CandidateChanges::new(
            validated_field(name, "name")?,
            validated_field(party, "party")?,
            validated_field(image_url, "imageUrl")?,
        );

        if changes.is_empty() {
            return Err(AppError::validation(
                "at least one of name, party, or imageUrl is required",
            ));
        }

        let matched = self.candidates.update_fields(id, changes).await?;
        if !matched {
            return Err(AppError::NotFound("candidate"));
        }

        // Re-read after the write; not transactional, a concurrent
        // modification between the two calls may be observed.
        self.candidates
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("candidate"))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let id = parse_candidate_id(id)?;

        if !self.candidates.delete(id).await? {
            return Err(AppError::NotFound("candidate"));
        }

        tracing::info!(id = %id.to_hex(), "candidate deleted");
        Ok(())
    }
}
