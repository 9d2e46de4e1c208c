//! Account service configuration.

use std::env;

use common::{DatabaseConfig, TokenConfig};

/// Account service configuration.
#[derive(Debug, Clone, Default)]
pub struct AccountServiceConfig {
    pub database: DatabaseConfig,
    pub tokens: TokenConfig,
}

impl AccountServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any variable source. Unset or unparsable
    /// values fall back to defaults.
    pub fn from_lookup<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: var("ACCOUNT_SERVICE_DATABASE_URL")
                    .or_else(|| var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: var("DATABASE_MAX_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: var("DATABASE_MIN_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
            tokens: TokenConfig {
                ttl_hours: var("TOKEN_TTL_HOURS").and_then(|v| v.parse().ok()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> AccountServiceConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AccountServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = load(&[]);
        let defaults = DatabaseConfig::default();

        assert_eq!(config.database.url, defaults.url);
        assert_eq!(config.database.max_connections, defaults.max_connections);
        assert_eq!(config.database.min_connections, defaults.min_connections);
        assert!(config.tokens.ttl_hours.is_none());
    }

    #[test]
    fn test_service_database_url_wins() {
        let config = load(&[
            ("ACCOUNT_SERVICE_DATABASE_URL", "postgres://svc/accounts"),
            ("DATABASE_URL", "postgres://shared/db"),
        ]);
        assert_eq!(config.database.url, "postgres://svc/accounts");

        let config = load(&[("DATABASE_URL", "postgres://shared/db")]);
        assert_eq!(config.database.url, "postgres://shared/db");
    }

    #[test]
    fn test_pool_bounds_from_environment() {
        let config = load(&[
            ("DATABASE_MAX_CONNECTIONS", "25"),
            ("DATABASE_MIN_CONNECTIONS", "3"),
        ]);
        assert_eq!(config.database.max_connections, 25);
        assert_eq!(config.database.min_connections, 3);

        let config = load(&[("DATABASE_MAX_CONNECTIONS", "lots")]);
        assert_eq!(
            config.database.max_connections,
            DatabaseConfig::default().max_connections
        );
    }

    #[test]
    fn test_token_ttl() {
        assert_eq!(load(&[("TOKEN_TTL_HOURS", "24")]).tokens.ttl_hours, Some(24));
        assert!(load(&[("TOKEN_TTL_HOURS", "forever")])
            .tokens
            .ttl_hours
            .is_none());
        assert!(load(&[("TOKEN_TTL_HOURS", "")]).tokens.ttl_hours.is_none());
    }
}
