use thiserror::Error;

/// Opaque failure raised by an injected [`Transport`](crate::Transport).
///
/// Whatever goes wrong below the seam — connection refused, HTTP status,
/// deserialization of the outer envelope — arrives here as a message. This
/// layer forwards it unchanged; it never interprets or retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors surfaced by the embedding model adapter.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// A zero-length input batch was passed to an embedding call.
    #[error("empty input batch")]
    EmptyInput,
    /// The model builder was given an inconsistent or incomplete setup.
    #[error("invalid model config: {0}")]
    InvalidConfig(String),
    /// The injected transport client failed. Propagated unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The provider response was structurally malformed (wrong shapes,
    /// non-numeric entries). Absent vectors are not an error; see the
    /// codec docs.
    #[error("malformed provider response: {0}")]
    Response(String),
}
