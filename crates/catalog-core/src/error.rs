use thiserror::Error;

use crate::types::EntityKind;

/// Top-level error type for the catalog service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{entity} not found with id {id}")]
    NotFound { entity: EntityKind, id: i32 },

    #[error("{entity} id sequence exhausted")]
    IdExhausted { entity: EntityKind },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Machine-readable code surfaced to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::IdExhausted { .. } => "ID_EXHAUSTED",
            Self::Config(_) => "CONFIG",
        }
    }
}

impl From<config::ConfigError> for CatalogError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
