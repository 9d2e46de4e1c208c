//! Account Service - administrative CLI for user accounts and auth tokens.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use account_service_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "account-service")]
#[command(about = "User account and token management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Create a regular user
    CreateUser {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ACCOUNT_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Create a staff superuser
    CreateSuperuser {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ACCOUNT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Authenticate and print the account's token
    IssueToken {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ACCOUNT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show the account a token belongs to
    Whoami {
        #[arg(long, env = "ACCOUNT_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Update the name or password of the token's account
    UpdateProfile {
        #[arg(long, env = "ACCOUNT_TOKEN", hide_env_values = true)]
        token: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            account_service_lib::run_migrations(migrate_action).await?;
        }
        Commands::CreateUser {
            email,
            password,
            name,
        } => {
            account_service_lib::create_user(email, password, name).await?;
        }
        Commands::CreateSuperuser { email, password } => {
            account_service_lib::create_superuser(email, password).await?;
        }
        Commands::IssueToken { email, password } => {
            account_service_lib::issue_token(email, password).await?;
        }
        Commands::Whoami { token } => {
            account_service_lib::whoami(token).await?;
        }
        Commands::UpdateProfile {
            token,
            name,
            password,
        } => {
            account_service_lib::update_profile(token, name, password).await?;
        }
    }

    Ok(())
}
