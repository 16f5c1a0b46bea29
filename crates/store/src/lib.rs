//! Vecbridge vector store facade
//!
//! Storing vectors is the easy half; storing them so they can actually be
//! found again is where deployments go wrong. A container whose indexing
//! policy disagrees with what gets written fails silently — documents land,
//! queries return garbage. This crate refuses to let that happen: the
//! combination of {client, database, container, embedding policy, index
//! spec} is validated up front, all-or-nothing, before a single byte moves.
//!
//! The moving parts:
//!
//! - **Policy types** - which document paths hold vectors, their data type
//!   and dimensionality, and the distance function queries use.
//! - **Validator** - [`StoreParams::validate`]: a pure function from a
//!   fully-populated parameter set to an immutable [`StoreConfig`], with
//!   one [`ConfigError`] variant per rule. Includes the cross-check the raw
//!   SDKs skip: every index path must be a declared embedding path.
//! - **VectorStore** - `add`/`search` over the validated config and an
//!   injected [`StoreClient`]. An in-memory client with exact scoring ships
//!   for tests and reference semantics.
//!
//! ## Quick example
//!
//! ```
//! use store::{
//!     DistanceFunction, InMemoryStoreClient, VectorEmbeddingDescriptor,
//!     VectorEmbeddingPolicy, VectorIndexKind, VectorIndexSpec, VectorStore,
//! };
//! use std::sync::Arc;
//!
//! let store = VectorStore::builder()
//!     .with_client(Arc::new(InMemoryStoreClient::new()))
//!     .with_database_name("docs_db")
//!     .with_container_name("passages")
//!     .with_embedding_policy(VectorEmbeddingPolicy::new(vec![
//!         VectorEmbeddingDescriptor::new("/embedding", 128, DistanceFunction::Cosine),
//!     ]))
//!     .with_vector_indexes(vec![
//!         VectorIndexSpec::new("/embedding", VectorIndexKind::Flat),
//!     ])
//!     .build()
//!     .unwrap();
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod policy;

mod facade;

pub use embedding::Embedding;

pub use crate::client::{InMemoryStoreClient, ScoredDocument, StoreClient, VectorQuery};
pub use crate::config::{StoreConfig, StoreParams};
pub use crate::error::{ConfigError, InvalidQueryError, PersistenceError, StoreError};
pub use crate::facade::{VectorStore, VectorStoreBuilder};
pub use crate::policy::{
    DistanceFunction, VectorDataType, VectorEmbeddingDescriptor, VectorEmbeddingPolicy,
    VectorIndexKind, VectorIndexSpec,
};
