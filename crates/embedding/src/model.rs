use std::sync::Arc;

use tracing::{debug, warn};

use crate::codec::EmbeddingCodec;
use crate::error::EmbedError;
use crate::transport::Transport;
use crate::types::Embedding;

/// Embedding model adapter: batches of text in, canonical vectors out.
///
/// The adapter orchestrates one codec variant against an injected
/// transport. It batches and dispatches however the codec dictates, then
/// concatenates the parsed vectors in request order, so output position i
/// always corresponds to input text i. It performs no retry, backoff, or
/// interpretation of transport failures.
pub struct EmbeddingModel {
    codec: Box<dyn EmbeddingCodec>,
    transport: Arc<dyn Transport>,
}

impl EmbeddingModel {
    pub fn builder() -> EmbeddingModelBuilder {
        EmbeddingModelBuilder::default()
    }

    /// The configured codec's model identifier.
    pub fn model_id(&self) -> &str {
        self.codec.model_id()
    }

    /// Embed a batch of texts, preserving input order.
    ///
    /// Fails with [`EmbedError::EmptyInput`] on an empty batch, before any
    /// I/O. Output length equals input length whenever the provider returns
    /// a one-to-one response; when a provider returns fewer vectors than
    /// inputs (a documented quirk of some families), the shorter sequence
    /// is surfaced as-is, never padded and never turned into an error.
    pub async fn embed<T: AsRef<str>>(&self, texts: &[T]) -> Result<Vec<Embedding>, EmbedError> {
        if texts.is_empty() {
            return Err(EmbedError::EmptyInput);
        }

        let inputs: Vec<String> = texts.iter().map(|t| t.as_ref().to_owned()).collect();
        let requests = self.codec.build_requests(&inputs);
        debug!(
            model = self.codec.model_id(),
            inputs = inputs.len(),
            requests = requests.len(),
            "dispatching embedding requests"
        );

        let mut embeddings: Vec<Embedding> = Vec::with_capacity(inputs.len());
        for request in requests {
            let response = self.transport.invoke(self.codec.model_id(), request).await?;
            let parsed = self.codec.parse_response(response)?;
            let token_count = parsed.input_token_count.filter(|_| parsed.vectors.len() == 1);
            for vector in parsed.vectors {
                let mut embedding = Embedding::from_values(vector);
                if let Some(count) = token_count {
                    embedding = embedding.with_token_count(count);
                }
                embeddings.push(embedding);
            }
        }

        for (embedding, text) in embeddings.iter_mut().zip(inputs.iter()) {
            embedding.text = Some(text.clone());
        }

        if embeddings.len() < inputs.len() {
            warn!(
                model = self.codec.model_id(),
                expected = inputs.len(),
                received = embeddings.len(),
                "provider returned fewer vectors than inputs"
            );
        }

        Ok(embeddings)
    }

    /// Embed a single text.
    pub async fn embed_one(&self, text: &str) -> Result<Embedding, EmbedError> {
        let mut embeddings = self.embed(&[text]).await?;
        embeddings
            .pop()
            .ok_or_else(|| EmbedError::Response("provider returned no vectors".into()))
    }
}

/// Builder for [`EmbeddingModel`]. Construction is all-or-nothing: `build`
/// either yields a complete adapter or fails with
/// [`EmbedError::InvalidConfig`] naming the missing piece.
#[derive(Default)]
pub struct EmbeddingModelBuilder {
    codec: Option<Box<dyn EmbeddingCodec>>,
    transport: Option<Arc<dyn Transport>>,
}

impl EmbeddingModelBuilder {
    pub fn with_codec(mut self, codec: impl EmbeddingCodec + 'static) -> Self {
        self.codec = Some(Box::new(codec));
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<EmbeddingModel, EmbedError> {
        let codec = self
            .codec
            .ok_or_else(|| EmbedError::InvalidConfig("codec is required".into()))?;
        if codec.model_id().is_empty() {
            return Err(EmbedError::InvalidConfig(
                "codec model id must be non-empty".into(),
            ));
        }
        let transport = self
            .transport
            .ok_or_else(|| EmbedError::InvalidConfig("transport client is required".into()))?;
        Ok(EmbeddingModel { codec, transport })
    }
}
