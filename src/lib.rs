//! Workspace umbrella crate for Vecbridge.
//!
//! This crate stitches together the embedding-model adapter and the vector
//! store facade so callers can go from raw text to a searchable vector
//! store with a single dependency. The two halves share one canonical
//! [`Embedding`] type; everything provider-specific stays behind the codec
//! and client seams.

pub use embedding::{
    CohereCodec, CohereModel, EmbedError, Embedding, EmbeddingCodec, EmbeddingModel,
    EmbeddingModelBuilder, HttpTransport, InputType, OpenAiCodec, ParsedResponse, TitanCodec,
    TitanModel, Transport, TransportError,
};
pub use store::{
    ConfigError, DistanceFunction, InMemoryStoreClient, InvalidQueryError, PersistenceError,
    ScoredDocument, StoreClient, StoreConfig, StoreError, StoreParams, VectorDataType,
    VectorEmbeddingDescriptor, VectorEmbeddingPolicy, VectorIndexKind, VectorIndexSpec,
    VectorQuery, VectorStore, VectorStoreBuilder,
};
