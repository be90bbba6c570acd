//! Candidate repository - persistence for the candidates collection.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::Collection;

use crate::domain::{Candidate, CandidateChanges};
use crate::errors::{AppError, AppResult};

/// Candidate persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Insert a new candidate document, returning the generated id.
    async fn insert(&self, candidate: Candidate) -> AppResult<ObjectId>;

    /// All candidates, newest `updatedAt` first.
    async fn find_all(&self) -> AppResult<Vec<Candidate>>;

    /// Find a candidate by id.
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Candidate>>;

    /// Apply a partial update. Returns whether a document matched the id.
    async fn update_fields(&self, id: ObjectId, changes: CandidateChanges) -> AppResult<bool>;

    /// Delete a candidate. Returns whether a document was deleted.
    async fn delete(&self, id: ObjectId) -> AppResult<bool>;
}

/// MongoDB-backed candidate store.
pub struct CandidateStore {
    collection: Collection<Candidate>,
}

impl CandidateStore {
    pub fn new(collection: Collection<Candidate>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl CandidateRepository for CandidateStore {
    async fn insert(&self, candidate: Candidate) -> AppResult<ObjectId> {
        let result = self.collection.insert_one(&candidate).await.map_err(|e| {
            tracing::error!("candidate insert failed: {:?}", e);
            AppError::Storage("candidate")
        })?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::internal("inserted candidate id was not an ObjectId"))
    }

    async fn find_all(&self) -> AppResult<Vec<Candidate>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "updatedAt": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Candidate>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn update_fields(&self, id: ObjectId, changes: CandidateChanges) -> AppResult<bool> {
        // updatedAt is refreshed on every update, supplied fields or not
        let mut set = Document::new();
        set.insert("updatedAt", changes.updated_at.as_str());
        if let Some(name) = &changes.name {
            set.insert("name", name.as_str());
        }
        if let Some(party) = &changes.party {
            set.insert("party", party.as_str());
        }
        if let Some(image_url) = &changes.image_url {
            set.insert("imageUrl", image_url.as_str());
        }

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
