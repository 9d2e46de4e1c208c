//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::MAX_NAME_LENGTH;
use crate::error::{DomainError, DomainResult};
use crate::password::Password;

/// Privilege and lifecycle flags carried by every account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFlags {
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl Default for UserFlags {
    fn default() -> Self {
        Self {
            is_active: true,
            is_staff: false,
            is_superuser: false,
        }
    }
}

impl UserFlags {
    /// Flags of an active staff superuser
    pub fn superuser() -> Self {
        Self {
            is_active: true,
            is_staff: true,
            is_superuser: true,
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Stored password as a value object
    pub fn password(&self) -> Password {
        Password::from_hash(self.password_hash.as_str())
    }

    /// Check a plain text password against the stored hash
    pub fn check_password(&self, plain_text: &str) -> bool {
        self.password().verify(plain_text)
    }
}

/// Validate a display name.
pub fn validate_name(name: &str) -> DomainResult<()> {
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "Name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validated record handed to the store for insertion.
///
/// The email is already normalized and the password already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub flags: UserFlags,
}

/// Store-level partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub password_hash: Option<String>,
    pub is_active: Option<bool>,
}

impl UserChanges {
    /// True when nothing would be written
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Service-level partial update with a plain text password
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    /// New display name
    pub name: Option<String>,
    /// New password, re-hashed before it is stored
    pub password: Option<String>,
    /// Activate or deactivate the account
    pub is_active: Option<bool>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// User email address
    pub email: String,
    /// User display name
    pub name: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: user.created_at,
        }
    }
}
