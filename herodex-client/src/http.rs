//! HTTP transport implementation.
//!
//! Talks to a real hero API server over reqwest.

use crate::error::{TransportError, TransportResult};
use crate::transport::Transport;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Configuration for the HTTP transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// API root every request path is resolved against
    /// (e.g. `http://localhost:3000/api`).
    pub base_url: String,
    /// Timeout for a single request (seconds).
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP transport backed by a reqwest client.
pub struct HttpTransport {
    config: HttpConfig,
    client: Client,
}

impl HttpTransport {
    /// Creates a new HTTP transport for the given API root.
    pub fn new(config: HttpConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    /// The configured API root.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Sends a prepared request and maps the response onto the transport
    /// error taxonomy. An empty success body resolves as `Value::Null`.
    async fn execute(&self, request: reqwest::RequestBuilder) -> TransportResult<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = if body.is_empty() {
                status.canonical_reason().unwrap_or("unknown status").to_string()
            } else {
                body
            };
            return Err(TransportError::Status {
                status: status.as_u16(),
                reason,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> TransportResult<Value> {
        self.execute(self.client.get(self.url(path))).await
    }

    async fn post(&self, path: &str, body: Value) -> TransportResult<Value> {
        self.execute(self.client.post(self.url(path)).json(&body)).await
    }

    async fn put(&self, path: &str, body: Value) -> TransportResult<Value> {
        self.execute(self.client.put(self.url(path)).json(&body)).await
    }

    async fn delete(&self, path: &str) -> TransportResult<Value> {
        self.execute(self.client.delete(self.url(path))).await
    }
}
