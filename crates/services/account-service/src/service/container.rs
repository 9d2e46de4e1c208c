//! Service container - wires the account, auth and token services together.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use common::{AppResult, TokenConfig};
use domain::User;

use super::{
    AccountService, AuthService, CredentialAuthenticator, TokenIssuer, TokenService,
    UserAccountService,
};
use crate::repository::{TokenStore, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get account management service
    fn accounts(&self) -> Arc<dyn AccountService>;

    /// Get credential authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get token service
    fn tokens(&self) -> Arc<dyn TokenService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    account_service: Arc<dyn AccountService>,
    auth_service: Arc<dyn AuthService>,
    token_service: Arc<dyn TokenService>,
}

impl Services {
    pub fn new(
        account_service: Arc<dyn AccountService>,
        auth_service: Arc<dyn AuthService>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            account_service,
            auth_service,
            token_service,
        }
    }

    /// Create service container from database connection and token policy
    pub fn from_connection(db: DatabaseConnection, tokens: &TokenConfig) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let token_repo = Arc::new(TokenStore::new(db));

        Self {
            account_service: Arc::new(UserAccountService::new(user_repo.clone())),
            auth_service: Arc::new(CredentialAuthenticator::new(user_repo.clone())),
            token_service: Arc::new(TokenIssuer::new(token_repo, user_repo, tokens)),
        }
    }

    /// Authenticate and return the caller's token key.
    pub async fn obtain_token(&self, email: String, password: String) -> AppResult<String> {
        let identity = self.auth_service.authenticate(email, password).await?;
        self.token_service.issue_or_get(&identity).await
    }

    /// Resolve a token key to the full record of its owner.
    pub async fn current_user(&self, key: &str) -> AppResult<User> {
        let identity = self.token_service.resolve(key).await?;
        self.account_service.get_user(identity.user_id).await
    }
}

impl ServiceContainer for Services {
    fn accounts(&self) -> Arc<dyn AccountService> {
        self.account_service.clone()
    }

    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn tokens(&self) -> Arc<dyn TokenService> {
        self.token_service.clone()
    }
}
