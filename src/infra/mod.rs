//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and index management
//! - Repositories over the document collections

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{
    CandidateRepository, CandidateStore, UserRepository, UserStore,
};
