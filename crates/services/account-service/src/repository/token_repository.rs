//! Auth token repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use uuid::Uuid;

use super::entities::auth_token::{self, ActiveModel, Entity as TokenEntity};
use common::{AppError, AppResult};
use domain::AuthToken;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Token repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Find the token bound to a user
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<AuthToken>>;

    /// Find a token by its key
    async fn find_by_key(&self, key: &str) -> AppResult<Option<AuthToken>>;

    /// Persist a new binding. Fails with `DuplicateToken` if the user already
    /// has a token or the key is taken.
    async fn insert(&self, token: AuthToken) -> AppResult<AuthToken>;

    /// Remove a token by key. Missing keys are not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;
}

/// SeaORM-backed implementation of TokenRepository
pub struct TokenStore {
    db: DatabaseConnection,
}

impl TokenStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::DuplicateToken,
        _ => AppError::from(err),
    }
}

#[async_trait]
impl TokenRepository for TokenStore {
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<AuthToken>> {
        let result = TokenEntity::find()
            .filter(auth_token::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(AuthToken::from))
    }

    async fn find_by_key(&self, key: &str) -> AppResult<Option<AuthToken>> {
        let result = TokenEntity::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(AuthToken::from))
    }

    async fn insert(&self, token: AuthToken) -> AppResult<AuthToken> {
        let active_model = ActiveModel {
            key: Set(token.key),
            user_id: Set(token.user_id),
            created_at: Set(token.created_at),
        };

        let model = active_model.insert(&self.db).await.map_err(insert_error)?;
        Ok(AuthToken::from(model))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        TokenEntity::delete_by_id(key.to_string())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
