//! Account Service Library
//!
//! User accounts, credential authentication and opaque token issuance over a
//! relational store. The binary exposes these as administrative commands.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use tracing::info;

use domain::{UpdateUser, User, UserFlags, UserResponse};

use crate::config::AccountServiceConfig;
use crate::infra::Database;
use crate::service::{ServiceContainer, Services};

type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> CliResult {
    let config = AccountServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Connect using environment configuration and build the service container.
pub async fn connect_services() -> CliResult<Services> {
    let config = AccountServiceConfig::from_env();
    let db = Database::connect(&config.database).await?;
    Ok(Services::from_connection(db.get_connection(), &config.tokens))
}

fn print_user(user: &User) {
    println!("id:           {}", user.id);
    println!("email:        {}", user.email);
    println!("name:         {}", user.name);
    println!("active:       {}", user.is_active);
    println!("staff:        {}", user.is_staff);
    println!("superuser:    {}", user.is_superuser);
    println!("created_at:   {}", user.created_at.to_rfc3339());
}

/// Create a regular account.
pub async fn create_user(email: String, password: String, name: String) -> CliResult {
    let services = connect_services().await?;
    let user = services
        .accounts()
        .create_user(email, password, name, UserFlags::default())
        .await?;

    print_user(&user);
    Ok(())
}

/// Create a staff superuser account.
pub async fn create_superuser(email: String, password: String) -> CliResult {
    let services = connect_services().await?;
    let user = services.accounts().create_superuser(email, password).await?;

    print_user(&user);
    Ok(())
}

/// Authenticate and print the account's token key.
pub async fn issue_token(email: String, password: String) -> CliResult {
    let services = connect_services().await?;
    let key = services.obtain_token(email, password).await?;

    println!("{}", key);
    Ok(())
}

/// Print the account that owns a token.
pub async fn whoami(token: String) -> CliResult {
    let services = connect_services().await?;
    let profile = UserResponse::from(&services.current_user(&token).await?);

    println!("{} <{}>", profile.name, profile.email);
    Ok(())
}

/// Update the name and/or password of the account that owns a token.
pub async fn update_profile(
    token: String,
    name: Option<String>,
    password: Option<String>,
) -> CliResult {
    let services = connect_services().await?;
    let identity = services.tokens().resolve(&token).await?;

    let user = services
        .accounts()
        .update_user(
            identity.user_id,
            UpdateUser {
                name,
                password,
                is_active: None,
            },
        )
        .await?;

    print_user(&user);
    Ok(())
}
