//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default MongoDB connection string (for development)
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";

/// Default database name
pub const DEFAULT_MONGO_DB: &str = "online_voting";

/// Default collection holding registered users
pub const DEFAULT_USERS_COLLECTION: &str = "users";

/// Default collection holding candidates
pub const DEFAULT_CANDIDATES_COLLECTION: &str = "candidates";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 6;
