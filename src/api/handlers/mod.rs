//! HTTP request handlers.

pub mod auth_handler;
pub mod candidate_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use candidate_handler::candidate_routes;
pub use user_handler::user_routes;
