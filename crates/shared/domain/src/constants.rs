//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Department / Employee
// =============================================================================

/// Maximum length of a department name
pub const MAX_DEPARTMENT_NAME_LENGTH: usize = 20;

/// Maximum length of an employee name
pub const MAX_EMPLOYEE_NAME_LENGTH: usize = 20;

// =============================================================================
// User
// =============================================================================

/// Maximum length of a username
pub const MAX_USERNAME_LENGTH: usize = 30;

/// Maximum length of an email address
pub const MAX_EMAIL_LENGTH: usize = 100;

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token lifetime in minutes
pub const DEFAULT_JWT_EXPIRES_IN_MINUTES: i64 = 60;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per minute (for token expiration calculation)
pub const SECONDS_PER_MINUTE: i64 = 60;

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";
