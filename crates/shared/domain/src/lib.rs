//! Domain layer - Core account entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! user records, email normalization, password hashing and auth tokens.

pub mod constants;
pub mod email;
pub mod error;
pub mod password;
pub mod token;
pub mod user;

pub use constants::*;
pub use email::{normalize_email, validate_email};
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use token::{AuthToken, Identity};
pub use user::{validate_name, NewUser, UpdateUser, User, UserChanges, UserFlags, UserResponse};
