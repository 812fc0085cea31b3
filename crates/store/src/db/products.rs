//! Product repository for database operations.

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use catalog_core::{Category, ProductId};

use super::RepositoryError;
use crate::models::{PriceFilter, Product};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: String,
    available: bool,
    category: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(&row.price).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
        })?;
        let category = Category::from_str(&row.category).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid category in database: {e}"))
        })?;

        Ok(Self {
            id: Some(ProductId::new(row.id)),
            name: row.name,
            description: row.description,
            price,
            available: row.available,
            category,
        })
    }
}

/// Render a price in its canonical stored form.
///
/// Trailing fractional zeros are stripped so that two numerically equal
/// decimals always produce the same text, letting `WHERE price = ?` on the
/// TEXT column behave as numeric equality.
fn price_text(price: Decimal) -> String {
    price.normalize().to_string()
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist an unpersisted product as a new row and assign its id.
    ///
    /// The id is assigned by the store; any id already set on the entity is
    /// overwritten with the fresh row id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, product: &mut Product) -> Result<(), RepositoryError> {
        tracing::debug!(name = %product.name, "creating product");

        let result = sqlx::query(
            "INSERT INTO products (name, description, price, available, category) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(price_text(product.price))
        .bind(product.available)
        .bind(product.category.as_str())
        .execute(self.pool)
        .await?;

        product.id = Some(ProductId::new(result.last_insert_rowid()));
        tracing::debug!(id = %result.last_insert_rowid(), "product created");
        Ok(())
    }

    /// Persist in-memory field changes to the row identified by the
    /// product's id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataValidation` if the product has no id;
    /// nothing is written in that case.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let id = product.id.ok_or_else(|| {
            RepositoryError::DataValidation("update called with empty id field".to_owned())
        })?;
        tracing::debug!(%id, "updating product");

        sqlx::query(
            "UPDATE products SET name = ?, description = ?, price = ?, available = ?, \
             category = ? WHERE id = ?",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(price_text(product.price))
        .bind(product.available)
        .bind(product.category.as_str())
        .bind(id.as_i64())
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Remove the row with the given id.
    ///
    /// Subsequent reads for the id return nothing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        tracing::debug!(%id, "deleting product");

        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// List every persisted product. Order is not significant.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row is invalid.
    pub async fn all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, available, category FROM products",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get the product with the given id, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the row is invalid.
    pub async fn find(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, available, category \
             FROM products WHERE id = ?",
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// List all products with exactly the given name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row is invalid.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, available, category \
             FROM products WHERE name = ?",
        )
        .bind(name)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// List all products whose availability equals the given flag.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row is invalid.
    pub async fn find_by_availability(
        &self,
        available: bool,
    ) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, available, category \
             FROM products WHERE available = ?",
        )
        .bind(available)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// List all products in the given category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row is invalid.
    pub async fn find_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, available, category \
             FROM products WHERE category = ?",
        )
        .bind(category.as_str())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// List all products whose price equals the given value.
    ///
    /// Accepts anything convertible into a [`PriceFilter`]: a `Decimal`, a
    /// float, or a string rendering of the number. A value and its string
    /// rendering produce identical result sets.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataValidation` if the value cannot be
    /// interpreted as a price.
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row is invalid.
    pub async fn find_by_price<P>(&self, price: P) -> Result<Vec<Product>, RepositoryError>
    where
        P: TryInto<PriceFilter>,
        P::Error: std::fmt::Display,
    {
        let filter: PriceFilter = price.try_into().map_err(|e| {
            RepositoryError::DataValidation(format!("invalid price filter: {e}"))
        })?;

        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, available, category \
             FROM products WHERE price = ?",
        )
        .bind(price_text(filter.value()))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
