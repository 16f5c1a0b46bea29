use std::sync::Arc;

use serde_json::{json, Map, Value};
use tracing::debug;

use embedding::Embedding;

use crate::client::{ScoredDocument, StoreClient, VectorQuery};
use crate::config::{StoreConfig, StoreParams};
use crate::error::{ConfigError, InvalidQueryError, StoreError};
use crate::policy::{VectorEmbeddingPolicy, VectorIndexSpec};

/// Embedding store facade over a validated configuration and an injected
/// client.
///
/// All validation happens at build time; runtime operations translate
/// canonical vectors into the store's document shape and delegate to the
/// client. The configuration is immutable and codecs hold no per-call
/// state, so a single instance is safe to share across concurrent callers.
pub struct VectorStore {
    client: Arc<dyn StoreClient>,
    config: StoreConfig,
}

impl std::fmt::Debug for VectorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl VectorStore {
    pub fn builder() -> VectorStoreBuilder {
        VectorStoreBuilder::default()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Insert or replace one embedding document.
    ///
    /// The vector is written at every path the embedding policy declares;
    /// source text and metadata ride along. Re-adding the same id replaces
    /// the previous document. Client failures surface as
    /// [`StoreError::Persistence`].
    pub async fn add(
        &self,
        id: &str,
        embedding: &Embedding,
        metadata: Value,
    ) -> Result<(), StoreError> {
        let mut document = json!({ "id": id, "metadata": metadata });
        if let Some(text) = &embedding.text {
            document["text"] = json!(text);
        }
        for descriptor in &self.config.embedding_policy.embeddings {
            write_at_path(&mut document, &descriptor.path, json!(embedding.values));
        }

        debug!(
            container = %self.config.container_name,
            id,
            dimensions = embedding.dimensions(),
            "upserting embedding document"
        );
        self.client
            .upsert_document(&self.config.container_name, document)
            .await?;
        Ok(())
    }

    /// Similarity search against the primary embedding path.
    ///
    /// Malformed parameters are rejected before dispatch with
    /// [`StoreError::InvalidQuery`]; the query itself runs under the
    /// distance function the policy configured, never one the caller picks
    /// per call. Results come back ranked best-first as
    /// `(id, score, metadata)`.
    pub async fn search(
        &self,
        query: &Embedding,
        filters: Map<String, Value>,
        top_k: usize,
    ) -> Result<Vec<ScoredDocument>, StoreError> {
        if top_k == 0 {
            return Err(InvalidQueryError::NonPositiveTopK.into());
        }
        let primary = self.config.primary_embedding();
        if query.dimensions() != primary.dimensions {
            return Err(InvalidQueryError::DimensionMismatch {
                expected: primary.dimensions,
                actual: query.dimensions(),
            }
            .into());
        }

        debug!(
            container = %self.config.container_name,
            path = %primary.path,
            top_k,
            "running similarity query"
        );
        let hits = self
            .client
            .query(
                &self.config.container_name,
                VectorQuery {
                    path: primary.path.clone(),
                    vector: query.values.clone(),
                    distance: primary.distance,
                    top_k,
                    filters,
                },
            )
            .await?;
        Ok(hits)
    }
}

/// Builder for [`VectorStore`]. Collects the named options and delegates to
/// [`StoreParams::validate`]; on failure no partially-built store escapes.
#[derive(Default)]
pub struct VectorStoreBuilder {
    params: StoreParams,
}

impl VectorStoreBuilder {
    pub fn with_client(mut self, client: Arc<dyn StoreClient>) -> Self {
        self.params.client = Some(client);
        self
    }

    pub fn with_database_name(mut self, name: impl Into<String>) -> Self {
        self.params.database_name = Some(name.into());
        self
    }

    pub fn with_container_name(mut self, name: impl Into<String>) -> Self {
        self.params.container_name = Some(name.into());
        self
    }

    pub fn with_embedding_policy(mut self, policy: VectorEmbeddingPolicy) -> Self {
        self.params.embedding_policy = Some(policy);
        self
    }

    pub fn with_vector_indexes(mut self, indexes: Vec<VectorIndexSpec>) -> Self {
        self.params.vector_indexes = Some(indexes);
        self
    }

    pub fn build(self) -> Result<VectorStore, ConfigError> {
        let (client, config) = self.params.validate()?;
        Ok(VectorStore { client, config })
    }
}

/// Write `value` into `document` at a JSON-pointer style path, creating
/// intermediate objects as needed. A segment that collides with a
/// non-object value is replaced by an object.
fn write_at_path(document: &mut Value, path: &str, value: Value) {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut cursor = document;
    for segment in parents {
        if !cursor.get(*segment).is_some_and(Value::is_object) {
            cursor[*segment] = json!({});
        }
        cursor = &mut cursor[*segment];
    }
    cursor[*last] = value;
}
