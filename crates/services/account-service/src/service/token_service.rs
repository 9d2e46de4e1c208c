//! Opaque token issuance and resolution.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;

use common::{AppError, AppResult, TokenConfig};
use domain::{AuthToken, Identity};

use crate::repository::{TokenRepository, UserRepository};

/// Token service trait for dependency injection.
#[async_trait]
pub trait TokenService: Send + Sync {
    /// Return the user's existing token key, minting one if there is none.
    async fn issue_or_get(&self, identity: &Identity) -> AppResult<String>;

    /// Map a presented token key back to the identity of its owner.
    async fn resolve(&self, key: &str) -> AppResult<Identity>;
}

/// Concrete implementation of TokenService.
///
/// Each user has at most one token. Repeated issuance returns the same key
/// until the token expires (if a TTL is configured).
pub struct TokenIssuer {
    tokens: Arc<dyn TokenRepository>,
    users: Arc<dyn UserRepository>,
    ttl: Option<Duration>,
}

impl TokenIssuer {
    /// Create new token issuer
    pub fn new(
        tokens: Arc<dyn TokenRepository>,
        users: Arc<dyn UserRepository>,
        config: &TokenConfig,
    ) -> Self {
        Self {
            tokens,
            users,
            ttl: config
                .ttl_hours
                .filter(|h| *h > 0)
                .and_then(Duration::try_hours),
        }
    }

    fn is_expired(&self, token: &AuthToken) -> bool {
        token.is_expired(self.ttl, Utc::now())
    }
}

#[async_trait]
impl TokenService for TokenIssuer {
    async fn issue_or_get(&self, identity: &Identity) -> AppResult<String> {
        if let Some(existing) = self.tokens.find_by_user(identity.user_id).await? {
            if !self.is_expired(&existing) {
                return Ok(existing.key);
            }
            self.tokens.delete(&existing.key).await?;
            tracing::debug!(user_id = %identity.user_id, "Expired token discarded");
        }

        match self.tokens.insert(AuthToken::generate(identity.user_id)).await {
            Ok(token) => {
                tracing::info!(user_id = %identity.user_id, "Token issued");
                Ok(token.key)
            }
            // A concurrent request for the same user won the insert.
            Err(AppError::DuplicateToken) => self
                .tokens
                .find_by_user(identity.user_id)
                .await?
                .map(|token| token.key)
                .ok_or(AppError::DuplicateToken),
            Err(e) => Err(e),
        }
    }

    async fn resolve(&self, key: &str) -> AppResult<Identity> {
        if key.is_empty() {
            return Err(AppError::InvalidToken);
        }

        let token = self
            .tokens
            .find_by_key(key)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if self.is_expired(&token) {
            tracing::debug!(user_id = %token.user_id, "Rejected expired token");
            return Err(AppError::InvalidToken);
        }

        let user = self
            .users
            .find_by_id(token.user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or(AppError::InvalidToken)?;

        Ok(Identity::from(&user))
    }
}
