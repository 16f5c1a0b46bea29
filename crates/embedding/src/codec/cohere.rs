use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::codec::{parse_matrix, EmbeddingCodec, ParsedResponse};
use crate::error::EmbedError;

/// Cohere's embed endpoint caps a single request at 96 texts; larger
/// batches are chunked in input order.
const MAX_TEXTS_PER_REQUEST: usize = 96;

/// Cohere embed model family, v3 generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CohereModel {
    #[default]
    EmbedEnglishV3,
    EmbedMultilingualV3,
}

impl CohereModel {
    pub fn id(&self) -> &'static str {
        match self {
            CohereModel::EmbedEnglishV3 => "cohere.embed-english-v3",
            CohereModel::EmbedMultilingualV3 => "cohere.embed-multilingual-v3",
        }
    }
}

/// Usage discriminator Cohere requires on every embed request. Documents
/// and queries are embedded into slightly different spaces, so indexing
/// and querying must each declare which side they are on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    #[default]
    SearchDocument,
    SearchQuery,
    Classification,
    Clustering,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::SearchDocument => "search_document",
            InputType::SearchQuery => "search_query",
            InputType::Classification => "classification",
            InputType::Clustering => "clustering",
        }
    }
}

/// Codec for the Cohere embed family.
///
/// Request shape: `{"texts": [...], "input_type": "search_document"}`.
/// Response shape: `{"id": ..., "texts": [...], "embeddings": [[f32]]}`.
///
/// Known provider quirk: on partial failure the response carries a null or
/// absent `embeddings` field instead of an error code. That decodes to an
/// empty vector list here. No token usage is reported by this family.
#[derive(Debug, Clone, Default)]
pub struct CohereCodec {
    model: CohereModel,
    input_type: InputType,
}

impl CohereCodec {
    pub fn new(model: CohereModel) -> Self {
        Self {
            model,
            input_type: InputType::default(),
        }
    }

    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }
}

impl EmbeddingCodec for CohereCodec {
    fn model_id(&self) -> &str {
        self.model.id()
    }

    fn build_requests(&self, texts: &[String]) -> Vec<Value> {
        texts
            .chunks(MAX_TEXTS_PER_REQUEST)
            .map(|chunk| {
                json!({
                    "texts": chunk,
                    "input_type": self.input_type.as_str(),
                })
            })
            .collect()
    }

    fn parse_response(&self, response: Value) -> Result<ParsedResponse, EmbedError> {
        let embeddings = match response.get("embeddings") {
            None | Some(Value::Null) => return Ok(ParsedResponse::empty()),
            Some(embeddings) => embeddings,
        };
        Ok(ParsedResponse {
            vectors: parse_matrix(embeddings)?,
            input_token_count: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn texts(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("text-{i}")).collect()
    }

    #[test]
    fn model_ids_match_provider_catalog() {
        assert_eq!(
            CohereCodec::new(CohereModel::EmbedEnglishV3).model_id(),
            "cohere.embed-english-v3"
        );
        assert_eq!(
            CohereCodec::new(CohereModel::EmbedMultilingualV3).model_id(),
            "cohere.embed-multilingual-v3"
        );
    }

    #[test]
    fn build_requests_single_batch() {
        let codec = CohereCodec::new(CohereModel::EmbedEnglishV3);
        let requests = codec.build_requests(&texts(3));

        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0],
            json!({
                "texts": ["text-0", "text-1", "text-2"],
                "input_type": "search_document",
            })
        );
    }

    #[test]
    fn build_requests_honors_input_type() {
        let codec =
            CohereCodec::new(CohereModel::EmbedEnglishV3).with_input_type(InputType::SearchQuery);
        let requests = codec.build_requests(&texts(1));
        assert_eq!(requests[0]["input_type"], "search_query");
    }

    #[test]
    fn build_requests_chunks_at_provider_ceiling() {
        let codec = CohereCodec::new(CohereModel::EmbedEnglishV3);
        let requests = codec.build_requests(&texts(100));

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0]["texts"].as_array().unwrap().len(), 96);
        assert_eq!(requests[1]["texts"].as_array().unwrap().len(), 4);
        // Chunk boundaries preserve input order.
        assert_eq!(requests[0]["texts"][95], "text-95");
        assert_eq!(requests[1]["texts"][0], "text-96");
    }

    #[test]
    fn parse_response_decodes_embeddings() {
        let codec = CohereCodec::default();
        let parsed = codec
            .parse_response(json!({
                "id": "resp-1",
                "texts": ["a", "b"],
                "embeddings": [[0.1, 0.2], [0.3, 0.4]],
            }))
            .unwrap();

        assert_eq!(parsed.vectors.len(), 2);
        assert_eq!(parsed.vectors[0], vec![0.1, 0.2]);
        assert!(parsed.input_token_count.is_none());
    }

    #[test]
    fn parse_response_null_embeddings_is_empty_not_error() {
        let codec = CohereCodec::default();
        let parsed = codec
            .parse_response(json!({"id": "resp-2", "embeddings": null}))
            .unwrap();
        assert!(parsed.vectors.is_empty());
    }

    #[test]
    fn parse_response_absent_embeddings_is_empty_not_error() {
        let codec = CohereCodec::default();
        let parsed = codec.parse_response(json!({"id": "resp-3"})).unwrap();
        assert!(parsed.vectors.is_empty());
    }

    #[test]
    fn parse_response_rejects_malformed_matrix() {
        let codec = CohereCodec::default();
        let err = codec
            .parse_response(json!({"embeddings": "oops"}))
            .unwrap_err();
        assert!(matches!(err, EmbedError::Response(_)));
    }

    #[test]
    fn input_type_serde_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&InputType::SearchDocument).unwrap(),
            "\"search_document\""
        );
        assert_eq!(
            serde_json::from_str::<InputType>("\"clustering\"").unwrap(),
            InputType::Clustering
        );
    }
}
