//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Maximum full name length
pub const MAX_FULL_NAME_LENGTH: u64 = 100;

// =============================================================================
// EXECUTION SERVICE DEFAULTS
// =============================================================================

/// Default per-request timeout for the external execution service, in seconds
pub const DEFAULT_EXECUTOR_TIMEOUT_SECONDS: u64 = 30;

// =============================================================================
// SUPPORTED LANGUAGES
// =============================================================================

/// Language identifiers accepted by the execution service
pub mod languages {
    pub const C: &str = "c";
    pub const CPP: &str = "cpp";
    pub const JAVA: &str = "java";
    pub const PYTHON: &str = "python";
    pub const RUST: &str = "rust";

    /// All supported language identifiers
    pub const ALL: &[&str] = &[C, CPP, JAVA, PYTHON, RUST];
}

/// Language assumed when a request omits the tag
pub const DEFAULT_LANGUAGE: &str = "cpp";

// =============================================================================
// SUBMISSION STATUSES
// =============================================================================

/// Submission status strings as stored in the database
pub mod statuses {
    pub const SUBMITTED: &str = "Submitted";
    pub const FAILED: &str = "Failed";
    pub const NOT_ATTEMPTED: &str = "Not Attempted";
}

// =============================================================================
// RATING
// =============================================================================

/// Rating every account starts from
pub const BASE_RATING: i64 = 1500;

/// Rating awarded per distinct solved problem
pub const RATING_PER_SOLVE: i64 = 10;

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum source code size in bytes (64KB)
pub const MAX_SOURCE_CODE_SIZE: u64 = 65536;
