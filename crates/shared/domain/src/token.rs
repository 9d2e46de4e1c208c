//! Authenticated identity and opaque auth tokens.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::TOKEN_KEY_BYTES;
use crate::user::User;

/// The authenticated representation of a user, used by downstream
/// authorization checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
        }
    }
}

/// Opaque bearer token bound 1:1 to a user.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub key: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

// The key is a credential
impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("key", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl AuthToken {
    /// Mint a fresh token for a user.
    pub fn generate(user_id: Uuid) -> Self {
        Self {
            key: Self::generate_key(),
            user_id,
            created_at: Utc::now(),
        }
    }

    /// Random key: `TOKEN_KEY_BYTES` bytes from the OS, lowercase hex.
    pub fn generate_key() -> String {
        let mut bytes = [0u8; TOKEN_KEY_BYTES];
        OsRng.fill_bytes(&mut bytes);
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Whether the token is older than `ttl` at `now`. No TTL means never,
    /// as does a TTL that reaches past the last representable instant.
    pub fn is_expired(&self, ttl: Option<Duration>, now: DateTime<Utc>) -> bool {
        ttl.and_then(|ttl| self.created_at.checked_add_signed(ttl))
            .is_some_and(|expires_at| expires_at <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOKEN_KEY_LENGTH;

    #[test]
    fn test_key_is_lowercase_hex() {
        let key = AuthToken::generate_key();
        assert_eq!(key.len(), TOKEN_KEY_LENGTH);
        assert!(key
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_keys_are_unique() {
        assert_ne!(AuthToken::generate_key(), AuthToken::generate_key());
    }

    #[test]
    fn test_expiry() {
        let token = AuthToken::generate(Uuid::new_v4());
        let later = token.created_at + Duration::hours(2);

        assert!(!token.is_expired(None, later));
        assert!(!token.is_expired(Some(Duration::hours(3)), later));
        assert!(token.is_expired(Some(Duration::hours(2)), later));
    }

    #[test]
    fn test_huge_ttl_never_expires() {
        let token = AuthToken::generate(Uuid::new_v4());
        let later = token.created_at + Duration::days(365);

        assert!(!token.is_expired(Some(Duration::MAX), later));
        assert!(!token.is_expired(Some(Duration::hours(3_000_000_000)), later));
    }

    #[test]
    fn test_debug_redacts_key() {
        let token = AuthToken::generate(Uuid::new_v4());
        let debug = format!("{:?}", token);
        assert!(!debug.contains(&token.key));
    }
}
