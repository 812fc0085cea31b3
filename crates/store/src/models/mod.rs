//! Domain models for the catalog store.

pub mod product;

pub use product::{PriceFilter, Product};
