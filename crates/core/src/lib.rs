//! Catalog Core - Shared types library.
//!
//! This crate provides the domain vocabulary used across the catalog
//! workspace:
//!
//! - `store` - Product persistence and queries
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and closed enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
