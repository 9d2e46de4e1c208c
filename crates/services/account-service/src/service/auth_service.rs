//! Credential authentication.
//!
//! Every rejection is the same `InvalidCredentials` error so callers cannot
//! tell an unknown email from a wrong password.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::{normalize_email, Identity, Password};

use crate::repository::UserRepository;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify an email/password pair and return the caller's identity.
    async fn authenticate(&self, email: String, password: String) -> AppResult<Identity>;
}

/// Concrete implementation of AuthService backed by the user store.
pub struct CredentialAuthenticator {
    repo: Arc<dyn UserRepository>,
}

impl CredentialAuthenticator {
    /// Create new authenticator instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AuthService for CredentialAuthenticator {
    async fn authenticate(&self, email: String, password: String) -> AppResult<Identity> {
        let email = normalize_email(&email);
        if email.is_empty() || password.is_empty() {
            return Err(AppError::InvalidCredentials);
        }

        let Some(user) = self.repo.find_by_email(&email).await? else {
            // Burn a hash verification so unknown emails take as long as known ones.
            Password::verify_placeholder(&password);
            tracing::warn!("Authentication failed: unknown email");
            return Err(AppError::InvalidCredentials);
        };

        if !user.check_password(&password) {
            tracing::warn!(user_id = %user.id, "Authentication failed: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        if !user.is_active {
            tracing::warn!(user_id = %user.id, "Authentication failed: inactive account");
            return Err(AppError::InvalidCredentials);
        }

        Ok(Identity::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain::User;
    use mockall::predicate::eq;
    use uuid::Uuid;

    use crate::repository::MockUserRepository;

    fn user_with(password: &str, is_active: bool) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: "test@example.com".into(),
            name: String::new(),
            password_hash: Password::new(password).unwrap().into_string(),
            is_active,
            is_staff: false,
            is_superuser: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let user = user_with("testpass", true);
        let expected_id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("test@example.com"))
            .returning(move |_| Ok(Some(user.clone())));

        let identity = CredentialAuthenticator::new(Arc::new(repo))
            .authenticate("test@example.com".into(), "testpass".into())
            .await
            .unwrap();

        assert_eq!(identity.user_id, expected_id);
        assert_eq!(identity.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_authenticate_normalizes_domain() {
        let user = user_with("testpass", true);

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("test@example.com"))
            .returning(move |_| Ok(Some(user.clone())));

        let result = CredentialAuthenticator::new(Arc::new(repo))
            .authenticate("test@EXAMPLE.com".into(), "testpass".into())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let user = user_with("testpass", true);

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let result = CredentialAuthenticator::new(Arc::new(repo))
            .authenticate("test@example.com".into(), "wrong".into())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let result = CredentialAuthenticator::new(Arc::new(repo))
            .authenticate("nobody@example.com".into(), "testpass".into())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_inactive_user() {
        let user = user_with("testpass", false);

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let result = CredentialAuthenticator::new(Arc::new(repo))
            .authenticate("test@example.com".into(), "testpass".into())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_blank_fields_skip_lookup() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();
        let auth = CredentialAuthenticator::new(Arc::new(repo));

        let result = auth.authenticate("".into(), "testpass".into()).await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));

        let result = auth.authenticate("test@example.com".into(), "".into()).await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_storage_failure_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(AppError::unavailable("connection refused")));

        let result = CredentialAuthenticator::new(Arc::new(repo))
            .authenticate("test@example.com".into(), "testpass".into())
            .await;

        assert!(matches!(result, Err(AppError::Unavailable(_))));
    }
}
