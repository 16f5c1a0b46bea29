use serde_json::{json, Value};

use crate::codec::{parse_vector, EmbeddingCodec, ParsedResponse};
use crate::error::EmbedError;

/// Codec for OpenAI-compatible embedding endpoints.
///
/// Many hosted and self-hosted services speak this dialect, so the model
/// identifier is free-form rather than an enum.
///
/// Request shape: `{"input": [...], "model": "..."}` in a single batch.
/// Response shape: `{"data": [{"embedding": [f32]}, ...], "usage":
/// {"prompt_tokens": n}}`. The usage count covers the whole batch, so it is
/// surfaced only for single-text requests where it is attributable.
#[derive(Debug, Clone)]
pub struct OpenAiCodec {
    model: String,
}

impl OpenAiCodec {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

impl EmbeddingCodec for OpenAiCodec {
    fn model_id(&self) -> &str {
        &self.model
    }

    fn build_requests(&self, texts: &[String]) -> Vec<Value> {
        vec![json!({
            "input": texts,
            "model": self.model,
        })]
    }

    fn parse_response(&self, response: Value) -> Result<ParsedResponse, EmbedError> {
        let input_token_count = response
            .pointer("/usage/prompt_tokens")
            .and_then(Value::as_u64)
            .map(|count| count as u32);

        let data = match response.get("data") {
            None | Some(Value::Null) => return Ok(ParsedResponse::empty()),
            Some(data) => data.as_array().ok_or_else(|| {
                EmbedError::Response(format!("`data` must be an array, got {data}"))
            })?,
        };

        let mut vectors = Vec::with_capacity(data.len());
        for item in data {
            let embedding = item.get("embedding").ok_or_else(|| {
                EmbedError::Response("missing `embedding` field in data item".into())
            })?;
            vectors.push(parse_vector(embedding)?);
        }

        Ok(ParsedResponse {
            vectors,
            input_token_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn build_requests_single_batch_with_model() {
        let codec = OpenAiCodec::new("text-embedding-3-small");
        let texts = vec!["a".to_string(), "b".to_string()];
        let requests = codec.build_requests(&texts);

        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0],
            json!({"input": ["a", "b"], "model": "text-embedding-3-small"})
        );
    }

    #[test]
    fn parse_response_decodes_data_items() {
        let codec = OpenAiCodec::new("text-embedding-3-small");
        let parsed = codec
            .parse_response(json!({
                "data": [
                    {"embedding": [0.1, 0.2]},
                    {"embedding": [0.3, 0.4]},
                ],
                "usage": {"prompt_tokens": 9},
            }))
            .unwrap();

        assert_eq!(parsed.vectors.len(), 2);
        assert_eq!(parsed.vectors[1], vec![0.3, 0.4]);
        assert_eq!(parsed.input_token_count, Some(9));
    }

    #[test]
    fn parse_response_null_data_is_empty_not_error() {
        let codec = OpenAiCodec::new("text-embedding-3-small");
        let parsed = codec.parse_response(json!({"data": null})).unwrap();
        assert!(parsed.vectors.is_empty());
    }

    #[test]
    fn parse_response_rejects_data_item_without_embedding() {
        let codec = OpenAiCodec::new("text-embedding-3-small");
        let err = codec
            .parse_response(json!({"data": [{"index": 0}]}))
            .unwrap_err();
        assert!(err.to_string().contains("missing `embedding`"));
    }

    #[test]
    fn parse_response_rejects_non_array_data() {
        let codec = OpenAiCodec::new("text-embedding-3-small");
        let err = codec.parse_response(json!({"data": 42})).unwrap_err();
        assert!(matches!(err, EmbedError::Response(_)));
    }

    #[test]
    fn model_id_is_the_configured_string() {
        let codec = OpenAiCodec::new("nomic-embed-text");
        assert_eq!(codec.model_id(), "nomic-embed-text");
    }
}
