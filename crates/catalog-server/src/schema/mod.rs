//! GraphQL schema for the catalog.
//!
//! ```graphql
//! # List all items with their brand
//! query {
//!   items { id name price brand { name } }
//! }
//!
//! # Add an item
//! mutation {
//!   addItem(name: "Cap", price: "$12.00", brandId: 1) { id }
//! }
//! ```
//!
//! List fields (`items`, `brands`, `deleteItem`, `deleteBrand`) are typed
//! `[Item!]!` / `[Brand!]!`: the list and its entries are never null.

pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};

use catalog_core::config::GraphqlConfig;
use catalog_store::CatalogStore;

use self::mutation::MutationRoot;
use self::query::QueryRoot;

/// The full GraphQL schema type for the catalog.
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the store injected as context data.
pub fn build_schema(store: CatalogStore, config: &GraphqlConfig) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .limit_depth(config.max_depth)
        .limit_complexity(config.max_complexity)
        .finish()
}

/// Schema definition language for the catalog schema.
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}
