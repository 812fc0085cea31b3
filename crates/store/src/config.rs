//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `DATABASE_URL` - Database connection string
//!   (default: `sqlite::memory:`)

use std::env::{self, VarError};

use secrecy::SecretString;
use thiserror::Error;

/// Connection string used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Database connection URL (may contain credentials).
    pub database_url: SecretString,
}

impl StoreConfig {
    /// Load configuration from the environment, reading a `.env` file first
    /// if one is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `DATABASE_URL` is set but
    /// is not valid unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_var(env::var("DATABASE_URL"))
    }

    fn from_var(database_url: Result<String, VarError>) -> Result<Self, ConfigError> {
        let database_url = match database_url {
            Ok(url) => url,
            Err(VarError::NotPresent) => DEFAULT_DATABASE_URL.to_owned(),
            Err(VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidEnvVar(
                    "DATABASE_URL".to_owned(),
                    "value is not valid unicode".to_owned(),
                ));
            }
        };

        Ok(Self {
            database_url: SecretString::from(database_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_defaults_to_in_memory_database() {
        let config = StoreConfig::from_var(Err(VarError::NotPresent)).expect("default config");
        assert_eq!(config.database_url.expose_secret(), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_uses_provided_url() {
        let config = StoreConfig::from_var(Ok("sqlite://catalog.db".to_owned()))
            .expect("explicit config");
        assert_eq!(config.database_url.expose_secret(), "sqlite://catalog.db");
    }
}
