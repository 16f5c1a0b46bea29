use serde_json::{json, Value};

use crate::codec::{parse_vector, EmbeddingCodec, ParsedResponse};
use crate::error::EmbedError;

/// Amazon Titan text embedding family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitanModel {
    #[default]
    TitanEmbedTextV1,
    TitanEmbedTextV2,
}

impl TitanModel {
    pub fn id(&self) -> &'static str {
        match self {
            TitanModel::TitanEmbedTextV1 => "amazon.titan-embed-text-v1",
            TitanModel::TitanEmbedTextV2 => "amazon.titan-embed-text-v2:0",
        }
    }
}

/// Codec for the Titan text embedding family.
///
/// Titan embeds one text per request: `{"inputText": "..."}`, so a batch of
/// N inputs becomes N payloads in input order. The v2 model additionally
/// accepts `dimensions` and `normalize` knobs, emitted only when set.
///
/// Response shape: `{"embedding": [f32], "inputTextTokenCount": n}`. The
/// token count applies to the single input of that request.
#[derive(Debug, Clone, Default)]
pub struct TitanCodec {
    model: TitanModel,
    dimensions: Option<u32>,
    normalize: Option<bool>,
}

impl TitanCodec {
    pub fn new(model: TitanModel) -> Self {
        Self {
            model,
            dimensions: None,
            normalize: None,
        }
    }

    /// Request a specific output dimensionality (v2 models only).
    pub fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Ask the provider to L2-normalize server-side (v2 models only).
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = Some(normalize);
        self
    }
}

impl EmbeddingCodec for TitanCodec {
    fn model_id(&self) -> &str {
        self.model.id()
    }

    fn build_requests(&self, texts: &[String]) -> Vec<Value> {
        texts
            .iter()
            .map(|text| {
                let mut request = json!({ "inputText": text });
                if let Some(dimensions) = self.dimensions {
                    request["dimensions"] = json!(dimensions);
                }
                if let Some(normalize) = self.normalize {
                    request["normalize"] = json!(normalize);
                }
                request
            })
            .collect()
    }

    fn parse_response(&self, response: Value) -> Result<ParsedResponse, EmbedError> {
        let input_token_count = response
            .get("inputTextTokenCount")
            .and_then(Value::as_u64)
            .map(|count| count as u32);

        let embedding = match response.get("embedding") {
            None | Some(Value::Null) => return Ok(ParsedResponse::empty()),
            Some(embedding) => embedding,
        };

        Ok(ParsedResponse {
            vectors: vec![parse_vector(embedding)?],
            input_token_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn model_ids_match_provider_catalog() {
        assert_eq!(
            TitanCodec::new(TitanModel::TitanEmbedTextV1).model_id(),
            "amazon.titan-embed-text-v1"
        );
        assert_eq!(
            TitanCodec::new(TitanModel::TitanEmbedTextV2).model_id(),
            "amazon.titan-embed-text-v2:0"
        );
    }

    #[test]
    fn build_requests_one_per_text() {
        let codec = TitanCodec::new(TitanModel::TitanEmbedTextV1);
        let texts = vec!["first".to_string(), "second".to_string()];
        let requests = codec.build_requests(&texts);

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], json!({"inputText": "first"}));
        assert_eq!(requests[1], json!({"inputText": "second"}));
    }

    #[test]
    fn build_requests_v2_knobs_emitted_only_when_set() {
        let plain = TitanCodec::new(TitanModel::TitanEmbedTextV2);
        let tuned = TitanCodec::new(TitanModel::TitanEmbedTextV2)
            .with_dimensions(256)
            .with_normalize(true);
        let texts = vec!["t".to_string()];

        assert_eq!(plain.build_requests(&texts)[0], json!({"inputText": "t"}));
        assert_eq!(
            tuned.build_requests(&texts)[0],
            json!({"inputText": "t", "dimensions": 256, "normalize": true})
        );
    }

    #[test]
    fn parse_response_decodes_vector_and_token_count() {
        let codec = TitanCodec::default();
        let parsed = codec
            .parse_response(json!({
                "embedding": [0.5, -0.5, 0.25],
                "inputTextTokenCount": 7,
            }))
            .unwrap();

        assert_eq!(parsed.vectors, vec![vec![0.5, -0.5, 0.25]]);
        assert_eq!(parsed.input_token_count, Some(7));
    }

    #[test]
    fn parse_response_missing_embedding_is_empty_not_error() {
        let codec = TitanCodec::default();
        let parsed = codec
            .parse_response(json!({"inputTextTokenCount": 3}))
            .unwrap();
        assert!(parsed.vectors.is_empty());
        assert_eq!(parsed.input_token_count, Some(3));
    }

    #[test]
    fn parse_response_token_count_optional() {
        let codec = TitanCodec::default();
        let parsed = codec
            .parse_response(json!({"embedding": [1.0]}))
            .unwrap();
        assert!(parsed.input_token_count.is_none());
    }

    #[test]
    fn parse_response_rejects_non_numeric_embedding() {
        let codec = TitanCodec::default();
        let err = codec
            .parse_response(json!({"embedding": ["a", "b"]}))
            .unwrap_err();
        assert!(matches!(err, EmbedError::Response(_)));
    }
}
