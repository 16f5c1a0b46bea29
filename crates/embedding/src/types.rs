use serde::{Deserialize, Serialize};

use crate::normalize::l2_normalize_in_place;

/// Canonical embedding vector.
///
/// This is the sole exchange type between provider codecs, the store facade,
/// and callers. Whatever envelope a provider speaks on the wire, it reduces
/// to one of these: an ordered sequence of float components, optionally
/// annotated with the source text and the token count the provider reported
/// for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// Ordered vector components.
    pub values: Vec<f32>,
    /// Source text this vector was produced from, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Input token count reported by the provider. `None` when the provider
    /// does not report usage (most batch endpoints don't).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_count: Option<u32>,
}

impl Embedding {
    /// Build an embedding from raw vector components.
    pub fn from_values(values: Vec<f32>) -> Self {
        Self {
            values,
            text: None,
            token_count: None,
        }
    }

    /// Number of vector components.
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    /// Attach the source text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach the provider-reported input token count.
    pub fn with_token_count(mut self, count: u32) -> Self {
        self.token_count = Some(count);
        self
    }

    /// Return a unit-length copy of this embedding. Zero vectors are
    /// returned unchanged.
    pub fn l2_normalized(&self) -> Embedding {
        let mut copy = self.clone();
        l2_normalize_in_place(&mut copy.values);
        copy
    }
}

impl From<Vec<f32>> for Embedding {
    fn from(values: Vec<f32>) -> Self {
        Embedding::from_values(values)
    }
}
