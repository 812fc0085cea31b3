//! Product domain type and query value types.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{Category, ProductId};

/// A sellable item in the catalog.
///
/// A freshly constructed product has no id; the repository assigns one on
/// the first successful `create`. The entity itself never reassigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Surrogate key, `None` until the product has been persisted.
    pub id: Option<ProductId>,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price. Decimal-exact; equality is numeric, so `12.50 == 12.5`.
    pub price: Decimal,
    /// Whether the product can currently be purchased.
    pub available: bool,
    /// Closed classification of the product.
    pub category: Category,
}

impl Product {
    /// Create an unpersisted product.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            available,
            category,
        }
    }
}

impl fmt::Display for Product {
    /// Renders as `<Product {name} id=[{id}]>`, with `None` for an
    /// unpersisted id.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Product {} id=[", self.name)?;
        match self.id {
            Some(id) => write!(f, "{id}")?,
            None => f.write_str("None")?,
        }
        f.write_str("]>")
    }
}

/// An exact-price query value.
///
/// Callers may hold a price as a [`Decimal`], a float, or a string rendering
/// of the number; all of them convert into the same filter and produce
/// identical result sets. String input is trimmed of whitespace and
/// surrounding double quotes before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceFilter(Decimal);

impl PriceFilter {
    /// The decimal value being matched.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for PriceFilter {
    fn from(price: Decimal) -> Self {
        Self(price)
    }
}

impl TryFrom<f64> for PriceFilter {
    type Error = rust_decimal::Error;

    fn try_from(price: f64) -> Result<Self, Self::Error> {
        Decimal::try_from(price).map(Self)
    }
}

impl FromStr for PriceFilter {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().trim_matches('"').trim();
        Decimal::from_str(cleaned).map(Self)
    }
}

impl TryFrom<&str> for PriceFilter {
    type Error = rust_decimal::Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for PriceFilter {
    type Error = rust_decimal::Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
