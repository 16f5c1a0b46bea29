//! Vecbridge embedding adapter
//!
//! This crate turns text into canonical embedding vectors through whichever
//! provider you point it at. Every provider speaks a different wire dialect
//! — different field names, different nesting, different batching limits —
//! but they all reduce to "texts in, vectors out", and that reduction lives
//! here so nothing above this crate ever branches on provider identity.
//!
//! The moving parts:
//!
//! - **Codec** - one per provider+model family. Builds the request
//!   payload(s) for a batch of texts and decodes the response back into
//!   raw vectors. Cohere, Titan, and OpenAI-compatible dialects ship in
//!   the box.
//! - **Transport** - the injected seam that actually moves bytes. Retries,
//!   auth, and timeouts live on that side of the line, not here. A plain
//!   JSON-over-HTTP implementation is provided.
//! - **EmbeddingModel** - glues a codec to a transport and hands back
//!   [`Embedding`] values in input order.
//!
//! One quirk worth knowing up front: some providers report partial
//! failures by omitting the vector field entirely instead of returning an
//! error code. Codecs decode that as an empty result, and the adapter
//! surfaces the shorter sequence rather than guessing at padding. Check
//! lengths if your batch absolutely must be one-to-one.
//!
//! ## Quick example
//!
//! ```no_run
//! use embedding::{CohereCodec, CohereModel, EmbeddingModel, HttpTransport, InputType};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let transport = Arc::new(
//!         HttpTransport::new("https://router.example.com/{model}/invoke")
//!             .with_auth_header("Bearer YOUR_TOKEN"),
//!     );
//!
//!     let model = EmbeddingModel::builder()
//!         .with_codec(
//!             CohereCodec::new(CohereModel::EmbedEnglishV3)
//!                 .with_input_type(InputType::SearchDocument),
//!         )
//!         .with_transport(transport)
//!         .build()
//!         .unwrap();
//!
//!     let embeddings = model.embed(&["first passage", "second passage"]).await.unwrap();
//!     assert_eq!(embeddings.len(), 2);
//! }
//! ```

pub mod codec;
pub mod error;
pub mod normalize;
pub mod types;

mod model;
mod transport;

pub use crate::codec::cohere::{CohereCodec, CohereModel, InputType};
pub use crate::codec::openai::OpenAiCodec;
pub use crate::codec::titan::{TitanCodec, TitanModel};
pub use crate::codec::{EmbeddingCodec, ParsedResponse};
pub use crate::error::{EmbedError, TransportError};
pub use crate::model::{EmbeddingModel, EmbeddingModelBuilder};
pub use crate::transport::{HttpTransport, Transport};
pub use crate::types::Embedding;
