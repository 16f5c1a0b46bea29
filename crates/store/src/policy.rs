use serde::{Deserialize, Serialize};

/// Numeric storage type of an embedding field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorDataType {
    Float32,
    Float16,
    Int8,
    Uint8,
}

/// Distance function a store applies when comparing vectors at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceFunction {
    Cosine,
    #[serde(rename = "dotproduct")]
    DotProduct,
    Euclidean,
}

/// Index layout a store builds over an embedding path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VectorIndexKind {
    #[serde(rename = "flat")]
    Flat,
    #[serde(rename = "quantizedFlat")]
    QuantizedFlat,
    #[serde(rename = "diskANN")]
    DiskAnn,
}

/// One embedding field declaration: where vectors live in a document, how
/// they are typed, how many components they carry, and which distance
/// function queries against them use.
///
/// Paths use JSON-pointer syntax (`/embedding`, `/content/vector`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorEmbeddingDescriptor {
    pub path: String,
    pub data_type: VectorDataType,
    pub dimensions: usize,
    pub distance: DistanceFunction,
}

impl VectorEmbeddingDescriptor {
    /// Float32 descriptor, the common case.
    pub fn new(path: impl Into<String>, dimensions: usize, distance: DistanceFunction) -> Self {
        Self {
            path: path.into(),
            data_type: VectorDataType::Float32,
            dimensions,
            distance,
        }
    }

    pub fn with_data_type(mut self, data_type: VectorDataType) -> Self {
        self.data_type = data_type;
        self
    }
}

/// Ordered set of embedding field declarations for a container.
///
/// What is written must be what is indexed and queryable; the policy is the
/// single source of truth for both sides, validated before any store
/// operation is permitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VectorEmbeddingPolicy {
    pub embeddings: Vec<VectorEmbeddingDescriptor>,
}

impl VectorEmbeddingPolicy {
    pub fn new(embeddings: Vec<VectorEmbeddingDescriptor>) -> Self {
        Self { embeddings }
    }

    /// Whether any descriptor declares the given path.
    pub fn contains_path(&self, path: &str) -> bool {
        self.embeddings.iter().any(|e| e.path == path)
    }

    /// The first descriptor — the primary embedding field targeted by
    /// `search`. `None` only for an (invalid) empty policy.
    pub fn primary(&self) -> Option<&VectorEmbeddingDescriptor> {
        self.embeddings.first()
    }
}

/// One similarity index declaration over an embedding path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorIndexSpec {
    pub path: String,
    pub kind: VectorIndexKind,
}

impl VectorIndexSpec {
    pub fn new(path: impl Into<String>, kind: VectorIndexKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}
