//! Error types for the catalog-server crate.

use async_graphql::ErrorExtensions;
use thiserror::Error;

use catalog_core::CatalogError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;

/// Convert a store error into a GraphQL error carrying `extensions.code`.
pub fn graphql_error(err: CatalogError) -> async_graphql::Error {
    let code = err.code();
    tracing::debug!(%err, code, "Resolver failed");
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}
