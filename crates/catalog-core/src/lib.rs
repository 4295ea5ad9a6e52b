//! catalog-core: Shared types, configuration, and error handling for the catalog service.
//!
//! This crate provides the foundational types used across the catalog crates:
//! - Item and Brand records plus their id newtypes
//! - Create/update inputs accepted by the store
//! - Configuration loading
//! - The common error type

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use types::{Brand, BrandId, BrandInput, EntityKind, Item, ItemId, ItemInput};
