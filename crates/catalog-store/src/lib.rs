//! Catalog Store — in-memory tables for items and brands.
//!
//! This crate is the single mutation point for catalog data. All reads and
//! writes flow through [`CatalogStore`] so id allocation and not-found
//! handling stay consistent.

pub mod mutations;
pub mod queries;
pub mod seed;
pub mod store;

pub use store::CatalogStore;
