//! Database plumbing for the catalog store.
//!
//! ## Tables
//!
//! - `products` - One row per catalog product
//!
//! # Migrations
//!
//! Migrations are embedded from `crates/store/migrations/` and applied with
//! [`migrate`] when a session starts.

use std::str::FromStr;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub mod products;

pub use products::ProductRepository;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A precondition on the entity was violated (e.g., update without an
    /// assigned id) or a query value could not be interpreted.
    #[error("data validation error: {0}")]
    DataValidation(String),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a connection pool for the given database URL.
///
/// The pool is capped at a single connection: a `sqlite::memory:` database
/// exists per connection, so a wider pool would hand out empty databases.
/// This also matches the one-session-at-a-time model of the store.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn connect(database_url: &secrecy::SecretString) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Apply any pending schema migrations.
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails to apply.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}
