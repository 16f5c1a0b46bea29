use std::sync::Arc;

use crate::client::StoreClient;
use crate::error::ConfigError;
use crate::policy::{VectorEmbeddingDescriptor, VectorEmbeddingPolicy, VectorIndexSpec};

/// Fully-populated parameter set for building a store.
///
/// Plain data with no behavior of its own; [`StoreParams::validate`] is the
/// only way to turn it into something usable. Callers normally go through
/// [`VectorStoreBuilder`](crate::VectorStoreBuilder), which owns one of
/// these.
#[derive(Default)]
pub struct StoreParams {
    pub client: Option<Arc<dyn StoreClient>>,
    pub database_name: Option<String>,
    pub container_name: Option<String>,
    pub embedding_policy: Option<VectorEmbeddingPolicy>,
    pub vector_indexes: Option<Vec<VectorIndexSpec>>,
}

/// Validated, immutable store configuration.
///
/// Created once at store construction and never mutated; the facade holds
/// it for its whole lifetime alongside the client handle.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub database_name: String,
    pub container_name: String,
    pub embedding_policy: VectorEmbeddingPolicy,
    pub vector_indexes: Vec<VectorIndexSpec>,
}

impl StoreConfig {
    /// The primary embedding descriptor — the first declared path, which
    /// `search` targets. The policy is validated non-empty at
    /// construction, so this always exists.
    pub fn primary_embedding(&self) -> &VectorEmbeddingDescriptor {
        &self.embedding_policy.embeddings[0]
    }
}

impl StoreParams {
    /// Validate the parameter set and produce the immutable configuration.
    ///
    /// Rules are checked in order, first failure wins, and each failure is
    /// a distinct [`ConfigError`] variant naming the field. All-or-nothing:
    /// no partial configuration is ever observable, and nothing here
    /// touches the network.
    pub fn validate(self) -> Result<(Arc<dyn StoreClient>, StoreConfig), ConfigError> {
        let client = self.client.ok_or(ConfigError::MissingClient)?;

        let database_name = self
            .database_name
            .filter(|name| !name.is_empty())
            .ok_or(ConfigError::MissingDatabaseName)?;

        let container_name = self
            .container_name
            .filter(|name| !name.is_empty())
            .ok_or(ConfigError::MissingContainerName)?;

        let embedding_policy = self
            .embedding_policy
            .ok_or(ConfigError::MissingEmbeddingPolicy)?;
        if embedding_policy.embeddings.is_empty() {
            return Err(ConfigError::EmptyEmbeddingPolicy);
        }
        for descriptor in &embedding_policy.embeddings {
            if descriptor.dimensions == 0 {
                return Err(ConfigError::InvalidDimensions {
                    path: descriptor.path.clone(),
                });
            }
        }

        let vector_indexes = self.vector_indexes.ok_or(ConfigError::MissingIndexSpec)?;
        if vector_indexes.is_empty() {
            return Err(ConfigError::EmptyIndexSpec);
        }
        // Cross-entity invariant the raw SDKs don't enforce: every index
        // must point at a declared embedding path, otherwise what is
        // written can never be what is queried.
        for index in &vector_indexes {
            if !embedding_policy.contains_path(&index.path) {
                return Err(ConfigError::UnknownIndexPath {
                    path: index.path.clone(),
                });
            }
        }

        Ok((
            client,
            StoreConfig {
                database_name,
                container_name,
                embedding_policy,
                vector_indexes,
            },
        ))
    }
}
