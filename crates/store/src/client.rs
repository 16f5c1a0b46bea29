use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use embedding::normalize::{cosine_similarity, relevance_score};

use crate::error::PersistenceError;
use crate::policy::DistanceFunction;

/// Similarity query handed to a store client, fully resolved against the
/// validated configuration: which path to compare, with which distance
/// function, how many results, and which metadata filters apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorQuery {
    pub path: String,
    pub vector: Vec<f32>,
    pub distance: DistanceFunction,
    pub top_k: usize,
    pub filters: Map<String, Value>,
}

/// One ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub id: String,
    pub score: f32,
    pub metadata: Value,
}

/// Seam between the store facade and the backing database.
///
/// Implementations own transport, authentication, and the actual search
/// algorithm; failures surface as an opaque [`PersistenceError`] this layer
/// forwards unchanged.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Insert or replace a document by its `id` field.
    async fn upsert_document(&self, container: &str, document: Value)
        -> Result<(), PersistenceError>;

    /// Run a similarity query, returning hits ranked best-first.
    async fn query(
        &self,
        container: &str,
        query: VectorQuery,
    ) -> Result<Vec<ScoredDocument>, PersistenceError>;
}

/// In-memory store client backed by a `RwLock`-guarded map per container.
///
/// Scores documents with exact similarity: cosine is mapped to a [0, 1]
/// relevance score as `(1 + cos) / 2`, dot product ranks by the raw
/// product, Euclidean by `1 / (1 + distance)` so higher is always better.
/// Filters are metadata equality. Useful for tests and as the reference
/// semantics a real client should match.
pub struct InMemoryStoreClient {
    containers: RwLock<HashMap<String, HashMap<String, Value>>>,
}

impl InMemoryStoreClient {
    pub fn new() -> Self {
        Self {
            containers: RwLock::new(HashMap::new()),
        }
    }

    /// Number of documents currently held in a container.
    pub fn document_count(&self, container: &str) -> usize {
        let guard = self
            .containers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.get(container).map_or(0, HashMap::len)
    }
}

impl Default for InMemoryStoreClient {
    fn default() -> Self {
        Self::new()
    }
}

fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

fn score(distance: DistanceFunction, query: &[f32], candidate: &[f32]) -> f32 {
    match distance {
        DistanceFunction::Cosine => relevance_score(cosine_similarity(query, candidate)),
        DistanceFunction::DotProduct => dot_product(query, candidate),
        DistanceFunction::Euclidean => 1.0 / (1.0 + euclidean_distance(query, candidate)),
    }
}

fn matches_filters(document: &Value, filters: &Map<String, Value>) -> bool {
    filters.iter().all(|(key, expected)| {
        document
            .get("metadata")
            .and_then(|metadata| metadata.get(key))
            .is_some_and(|actual| actual == expected)
    })
}

fn extract_vector(document: &Value, path: &str) -> Option<Vec<f32>> {
    let values = document.pointer(path)?.as_array()?;
    values
        .iter()
        .map(|v| v.as_f64().map(|f| f as f32))
        .collect()
}

#[async_trait]
impl StoreClient for InMemoryStoreClient {
    async fn upsert_document(
        &self,
        container: &str,
        document: Value,
    ) -> Result<(), PersistenceError> {
        let id = document
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| PersistenceError::new("document is missing a string `id` field"))?
            .to_owned();

        let mut guard = self
            .containers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.entry(container.to_owned()).or_default().insert(id, document);
        Ok(())
    }

    async fn query(
        &self,
        container: &str,
        query: VectorQuery,
    ) -> Result<Vec<ScoredDocument>, PersistenceError> {
        let guard = self
            .containers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let documents = match guard.get(container) {
            Some(documents) => documents,
            None => return Ok(Vec::new()),
        };

        let mut hits: Vec<ScoredDocument> = documents
            .iter()
            .filter(|(_, document)| matches_filters(document, &query.filters))
            .filter_map(|(id, document)| {
                let candidate = extract_vector(document, &query.path)?;
                if candidate.len() != query.vector.len() {
                    return None;
                }
                Some(ScoredDocument {
                    id: id.clone(),
                    score: score(query.distance, &query.vector, &candidate),
                    metadata: document.get("metadata").cloned().unwrap_or(Value::Null),
                })
            })
            .collect();

        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(query.top_k);
        Ok(hits)
    }
}
