//! Account service - user creation, validation and profile updates.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{validate_email, validate_name, NewUser, Password, UpdateUser, User, UserChanges, UserFlags};

use crate::repository::UserRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Validate, normalize and store a new account.
    async fn create_user(
        &self,
        email: String,
        password: String,
        name: String,
        flags: UserFlags,
    ) -> AppResult<User>;

    /// Create an account and grant it staff and superuser privileges.
    async fn create_superuser(&self, email: String, password: String) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Partially update a user, re-hashing any new password.
    async fn update_user(&self, id: Uuid, update: UpdateUser) -> AppResult<User>;
}

/// Concrete implementation of AccountService over a user repository.
pub struct UserAccountService {
    repo: Arc<dyn UserRepository>,
}

impl UserAccountService {
    /// Create new account service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AccountService for UserAccountService {
    async fn create_user(
        &self,
        email: String,
        password: String,
        name: String,
        flags: UserFlags,
    ) -> AppResult<User> {
        let email = validate_email(&email)?;
        let password_hash = Password::new(&password)?.into_string();
        validate_name(&name)?;

        let user = self
            .repo
            .insert(NewUser {
                email,
                name,
                password_hash,
                flags,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn create_superuser(&self, email: String, password: String) -> AppResult<User> {
        // Flags are written by the insert itself.
        let user = self
            .create_user(email, password, String::new(), UserFlags::superuser())
            .await?;

        tracing::info!(user_id = %user.id, "Superuser created");
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_user(&self, id: Uuid, update: UpdateUser) -> AppResult<User> {
        let mut changes = UserChanges {
            is_active: update.is_active,
            ..Default::default()
        };

        if let Some(name) = update.name {
            validate_name(&name)?;
            changes.name = Some(name);
        }
        if let Some(password) = update.password {
            changes.password_hash = Some(Password::new(&password)?.into_string());
        }
        if changes.is_empty() {
            return self.get_user(id).await;
        }

        let user = self.repo.update(id, changes).await?;
        tracing::debug!(user_id = %user.id, "User updated");
        Ok(user)
    }
}
