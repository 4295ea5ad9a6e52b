//! catalog-server: GraphQL API over the in-memory item and brand catalog.
//!
//! Exposes the store through an async-graphql schema mounted on axum at
//! `/graphql`, with GraphiQL served on plain `GET` requests.

pub mod error;
pub mod routes;
pub mod schema;
pub mod server;
pub mod telemetry;

pub use error::ServerError;
pub use routes::router;
pub use schema::{build_schema, CatalogSchema};
