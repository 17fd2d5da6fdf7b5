// ABOUTME: Centralized constants for environment variables, defaults, and user-facing messages
// ABOUTME: Single source of truth so wire-compatible strings are never retyped at call sites

//! Application-wide constants

/// Environment variable names
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Log level (error, warn, info, debug, trace)
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma-separated CORS origin allowlist, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 3000;
    /// Default SQLite database path
    pub const DATABASE_URL: &str = "sqlite:./data/exercise_tracker.db";
    /// Default CORS policy: allow any origin
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Request timeout applied at the HTTP boundary, in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// User-facing error messages
///
/// These strings are part of the wire contract; clients match on them.
pub mod error_messages {
    /// Returned when user registration is attempted without a username
    pub const USERNAME_REQUIRED: &str = "Username is required";
    /// Returned when a user id does not resolve to a known user
    pub const USER_NOT_FOUND: &str = "User not found!";
    /// Returned when an exercise is recorded without a description
    pub const DESCRIPTION_REQUIRED: &str = "Description is required";
    /// Returned when the exercise duration is missing, non-numeric, or not positive
    pub const DURATION_INVALID: &str = "Duration must be a positive integer";
    /// Returned when a supplied exercise date fails to parse
    pub const DATE_INVALID: &str = "Invalid date format";
}

/// Service identity for logs and health payloads
pub mod service_info {
    /// Service name reported by health endpoints and startup logs
    pub const SERVICE_NAME: &str = "exercise-tracker";
}
