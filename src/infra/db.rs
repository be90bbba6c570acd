//! Database connection and initialization.

use bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

use crate::config::Config;
use crate::domain::{Candidate, User};
use crate::errors::AppResult;

/// Database wrapper for connection management.
///
/// Holds the process-wide client handle; all in-flight requests share it.
/// Consistency guarantees (notably username uniqueness) are delegated to
/// the server's own constraint enforcement.
#[derive(Clone)]
pub struct Database {
    database: mongodb::Database,
    users_collection: String,
    candidates_collection: String,
}

impl Database {
    /// Connect to the database, verify connectivity, and ensure indexes.
    ///
    /// The unique index on `username` is established here, once at
    /// process startup; every insert attempt is checked against it by
    /// the server.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_uri_str(&config.mongo_uri).await?;
        let database = client.database(&config.mongo_db);

        let db = Self {
            database,
            users_collection: config.users_collection.clone(),
            candidates_collection: config.candidates_collection.clone(),
        };

        db.ping().await?;
        db.ensure_indexes().await?;
        tracing::info!(database = %db.name(), "database connected");

        Ok(db)
    }

    /// Create the unique index on the username field.
    async fn ensure_indexes(&self) -> AppResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.users().create_index(index).await?;
        Ok(())
    }

    /// The users collection.
    pub fn users(&self) -> Collection<User> {
        self.database.collection(&self.users_collection)
    }

    /// The candidates collection.
    pub fn candidates(&self) -> Collection<Candidate> {
        self.database.collection(&self.candidates_collection)
    }

    /// The configured database name.
    pub fn name(&self) -> &str {
        self.database.name()
    }

    /// Check database connectivity.
    pub async fn ping(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
