//! Email address normalization and validation.
//!
//! Only the domain part is case-insensitive; the local part is kept exactly
//! as the user typed it.

use validator::ValidateEmail;

use crate::constants::MAX_EMAIL_LENGTH;
use crate::error::{DomainError, DomainResult};

/// Canonicalize an email address for storage and lookup.
///
/// Surrounding whitespace is trimmed and everything after the last `@` is
/// lowercased. Input without an `@` is returned trimmed but otherwise
/// untouched. Idempotent.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Normalize and validate an email address.
///
/// # Errors
/// Returns `DomainError::InvalidEmail` if the address is empty, malformed or
/// longer than the storage limit.
pub fn validate_email(email: &str) -> DomainResult<String> {
    let normalized = normalize_email(email);

    if normalized.is_empty() {
        return Err(DomainError::invalid_email("User must have an email address"));
    }
    if normalized.chars().count() > MAX_EMAIL_LENGTH {
        return Err(DomainError::invalid_email(format!(
            "Email must be at most {} characters",
            MAX_EMAIL_LENGTH
        )));
    }
    if !normalized.validate_email() {
        return Err(DomainError::invalid_email("Enter a valid email address"));
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_domain_only() {
        let samples = [
            ("test1@EXAMPLE.com", "test1@example.com"),
            ("Test2@Example.com", "Test2@example.com"),
            ("TEST3@EXAMPLE.com", "TEST3@example.com"),
            ("test4@example.COM", "test4@example.com"),
        ];

        for (raw, expected) in samples {
            assert_eq!(normalize_email(raw), expected);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["Test2@Example.com", "  a@B.org ", "no-at-sign", "x@y@Z.COM", ""] {
            let once = normalize_email(raw);
            assert_eq!(normalize_email(&once), once);
        }
    }

    #[test]
    fn test_normalize_splits_on_last_at() {
        assert_eq!(normalize_email("\"a@b\"@EXAMPLE.com"), "\"a@b\"@example.com");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_email("  user@Example.com\n"), "user@example.com");
    }

    #[test]
    fn test_validate_empty_email() {
        assert!(matches!(validate_email(""), Err(DomainError::InvalidEmail(_))));
        assert!(matches!(validate_email("   "), Err(DomainError::InvalidEmail(_))));
    }

    #[test]
    fn test_validate_malformed_email() {
        assert!(matches!(
            validate_email("not-an-email"),
            Err(DomainError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_validate_too_long_email() {
        let email = format!("{}@example.com", "a".repeat(MAX_EMAIL_LENGTH));
        assert!(matches!(validate_email(&email), Err(DomainError::InvalidEmail(_))));
    }

    #[test]
    fn test_validate_returns_normalized() {
        assert_eq!(validate_email("Test2@Example.com").unwrap(), "Test2@example.com");
    }
}
