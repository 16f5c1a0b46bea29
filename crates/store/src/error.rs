use thiserror::Error;

/// A store configuration was rejected before any I/O occurred.
///
/// One variant per validation rule, evaluated in declaration order with
/// first-failure-wins semantics; each names the offending field so the
/// caller can fix the configuration without inspecting internals.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("store client is required")]
    MissingClient,
    #[error("database name must be non-empty")]
    MissingDatabaseName,
    #[error("container name must be non-empty")]
    MissingContainerName,
    #[error("vector embedding policy is required")]
    MissingEmbeddingPolicy,
    #[error("vector embedding policy must declare at least one embedding")]
    EmptyEmbeddingPolicy,
    #[error("embedding at `{path}` must declare positive dimensions")]
    InvalidDimensions { path: String },
    #[error("vector index spec is required")]
    MissingIndexSpec,
    #[error("vector index spec must declare at least one index")]
    EmptyIndexSpec,
    #[error("index path `{path}` does not match any embedding policy path")]
    UnknownIndexPath { path: String },
}

/// Opaque failure raised by an injected [`StoreClient`](crate::StoreClient)
/// during an add or query. Propagated unchanged, never interpreted or
/// retried here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("persistence failure: {0}")]
pub struct PersistenceError(pub String);

impl PersistenceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A query was rejected before dispatch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidQueryError {
    #[error("top_k must be positive")]
    NonPositiveTopK,
    #[error("query vector has {actual} dimensions, embedding policy expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Errors surfaced by the store facade at runtime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error(transparent)]
    InvalidQuery(#[from] InvalidQueryError),
}
