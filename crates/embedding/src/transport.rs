use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::time::Duration;

use crate::error::TransportError;

// Global HTTP client with connection pooling
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(32)
        .build()
        .expect("Failed to build HTTP client")
});

/// Seam between the adapter core and whatever actually moves bytes.
///
/// Implementations own authentication, timeouts, cancellation, retries, and
/// pooling; this layer injects the payload and the model identifier used to
/// route the call, and forwards any failure as an opaque
/// [`TransportError`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn invoke(&self, model_id: &str, request: Value) -> Result<Value, TransportError>;
}

/// JSON-over-HTTP transport for providers fronted by a plain POST endpoint.
///
/// The endpoint may contain a `{model}` placeholder which is replaced by
/// the codec's model identifier, the usual router-style URL convention.
/// Credentials ride in a preassembled `Authorization` header value;
/// acquiring them is the caller's concern.
pub struct HttpTransport {
    endpoint: String,
    auth_header: Option<String>,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            auth_header: None,
        }
    }

    /// Set the full `Authorization` header value (e.g., `"Bearer sk-..."`).
    pub fn with_auth_header(mut self, header: impl Into<String>) -> Self {
        self.auth_header = Some(header.into());
        self
    }

    fn url_for(&self, model_id: &str) -> String {
        self.endpoint.replace("{model}", model_id)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn invoke(&self, model_id: &str, request: Value) -> Result<Value, TransportError> {
        let mut builder = HTTP_CLIENT.post(self.url_for(model_id));
        builder = builder.header("Content-Type", "application/json");
        if let Some(header) = self.auth_header.as_deref() {
            builder = builder.header("Authorization", header);
        }

        let response = builder
            .json(&request)
            .send()
            .await
            .map_err(|e| TransportError::new(format!("HTTP request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::new(format!("HTTP error {status}: {body}")));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::new(format!("invalid JSON response: {e}")))
    }
}
