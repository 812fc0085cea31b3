//! Catalog Store - Product persistence library.
//!
//! This crate provides the Product domain model and a repository for
//! creating, updating, deleting and querying products against a relational
//! table.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`db`] - Connection pool, migrations and the product repository
//! - [`models`] - Domain types
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_store::{Category, Product, ProductRepository, StoreConfig, db};
//! use rust_decimal::Decimal;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoreConfig::from_env()?;
//! let pool = db::connect(&config.database_url).await?;
//! db::migrate(&pool).await?;
//!
//! let store = ProductRepository::new(&pool);
//! let mut product = Product::new(
//!     "Fedora",
//!     "A red hat",
//!     Decimal::new(1250, 2),
//!     true,
//!     Category::Cloths,
//! );
//! store.create(&mut product).await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod models;

pub use catalog_core::{Category, CategoryParseError, ProductId};
pub use config::{ConfigError, StoreConfig};
pub use db::{ProductRepository, RepositoryError};
pub use models::{PriceFilter, Product};
