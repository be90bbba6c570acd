//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_CANDIDATES_COLLECTION, DEFAULT_MONGO_DB, DEFAULT_MONGO_URI, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_USERS_COLLECTION,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub mongo_db: String,
    pub users_collection: String,
    pub candidates_collection: String,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("mongo_uri", &"[REDACTED]")
            .field("mongo_db", &self.mongo_db)
            .field("users_collection", &self.users_collection)
            .field("candidates_collection", &self.candidates_collection)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// development defaults for anything unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            mongo_uri: env::var("MONGO_URI").unwrap_or_else(|_| DEFAULT_MONGO_URI.to_string()),
            mongo_db: env::var("MONGO_DB").unwrap_or_else(|_| DEFAULT_MONGO_DB.to_string()),
            users_collection: env::var("USERS_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_USERS_COLLECTION.to_string()),
            candidates_collection: env::var("CANDIDATES_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_CANDIDATES_COLLECTION.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
