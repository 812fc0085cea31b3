//! Core types for the catalog.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;

pub use category::{Category, CategoryParseError};
pub use id::*;
