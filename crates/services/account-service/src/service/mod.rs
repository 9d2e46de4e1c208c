//! Account business logic.

mod account_service;
mod auth_service;
mod container;
mod token_service;

pub use account_service::{AccountService, UserAccountService};
pub use auth_service::{AuthService, CredentialAuthenticator};
pub use container::{ServiceContainer, Services};
pub use token_service::{TokenIssuer, TokenService};
