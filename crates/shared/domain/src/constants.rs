//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Maximum length of a stored email address
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Maximum length of a display name
pub const MAX_NAME_LENGTH: usize = 255;

// =============================================================================
// Authentication
// =============================================================================

/// Number of random bytes behind an auth token key
pub const TOKEN_KEY_BYTES: usize = 20;

/// Length of the hex-encoded token key
pub const TOKEN_KEY_LENGTH: usize = TOKEN_KEY_BYTES * 2;
