use serde_json::Value;

use crate::error::EmbedError;

pub mod cohere;
pub mod openai;
pub mod titan;

/// Decoded payload of a single provider response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedResponse {
    /// Raw vectors in response order. Empty when the provider reported no
    /// vectors at all — some providers surface partial failures as absent
    /// data rather than an error code.
    pub vectors: Vec<Vec<f32>>,
    /// Input token count for this response, when the provider reports one.
    pub input_token_count: Option<u32>,
}

impl ParsedResponse {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Translator between a batch of input texts and one provider+model
/// family's wire format.
///
/// Every provider's envelope differs in field names, nesting, and batching
/// limits, but they all reduce to "texts in, vectors out". A codec isolates
/// that variability so the adapter and the store facade never branch on
/// provider identity.
///
/// `build_requests` may return more than one payload: single-text families
/// (Titan) need one request per input, batch families with a ceiling
/// (Cohere) chunk the inputs. Either way the mapping is deterministic and
/// never reorders or drops inputs, so response vectors concatenated in
/// request order align positionally with the input texts.
pub trait EmbeddingCodec: Send + Sync {
    /// Provider model name/version string used to route the call at the
    /// transport layer. Non-empty for any valid codec.
    fn model_id(&self) -> &str;

    /// Map the input texts into one or more provider request payloads.
    fn build_requests(&self, texts: &[String]) -> Vec<Value>;

    /// Decode one provider response payload into canonical vectors.
    ///
    /// A null or absent vector field decodes to an empty [`ParsedResponse`],
    /// not an error. Token-count extraction is optional and defaults to
    /// unknown.
    fn parse_response(&self, response: Value) -> Result<ParsedResponse, EmbedError>;
}

/// Decode a JSON array of numbers into a float vector.
pub(crate) fn parse_vector(value: &Value) -> Result<Vec<f32>, EmbedError> {
    let entries = value.as_array().ok_or_else(|| {
        EmbedError::Response(format!("embedding vector must be an array, got {value}"))
    })?;
    entries
        .iter()
        .map(|entry| {
            entry.as_f64().map(|f| f as f32).ok_or_else(|| {
                EmbedError::Response(format!("embedding entries must be numbers, got {entry}"))
            })
        })
        .collect()
}

/// Decode a JSON array of numeric arrays into a list of float vectors.
pub(crate) fn parse_matrix(value: &Value) -> Result<Vec<Vec<f32>>, EmbedError> {
    let rows = value.as_array().ok_or_else(|| {
        EmbedError::Response(format!("embedding matrix must be an array, got {value}"))
    })?;
    rows.iter().map(parse_vector).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_vector_accepts_numbers() {
        let parsed = parse_vector(&json!([1.0, 2.5, -3.0])).unwrap();
        assert_eq!(parsed, vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn parse_vector_rejects_non_array() {
        let err = parse_vector(&json!("not a vector")).unwrap_err();
        assert!(matches!(err, EmbedError::Response(_)));
    }

    #[test]
    fn parse_vector_rejects_non_numeric_entries() {
        let err = parse_vector(&json!([1.0, "two", 3.0])).unwrap_err();
        assert!(err.to_string().contains("must be numbers"));
    }

    #[test]
    fn parse_matrix_accepts_nested_arrays() {
        let parsed = parse_matrix(&json!([[1.0, 2.0], [3.0, 4.0]])).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1], vec![3.0, 4.0]);
    }

    #[test]
    fn parse_matrix_empty_is_ok() {
        let parsed = parse_matrix(&json!([])).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn parse_matrix_rejects_scalar_rows() {
        let err = parse_matrix(&json!([1.0, 2.0])).unwrap_err();
        assert!(matches!(err, EmbedError::Response(_)));
    }
}
