//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over the document collections,
//! following the Repository pattern for clean separation of concerns.

mod candidate_repository;
mod user_repository;

pub use candidate_repository::{CandidateRepository, CandidateStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(test)]
pub use candidate_repository::MockCandidateRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
