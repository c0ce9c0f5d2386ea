//! Transport abstraction over the hero API.
//!
//! Defines a common interface for anything that can answer REST-style
//! requests with JSON, so the service layer never depends on a concrete
//! HTTP stack.

use crate::error::TransportResult;
use async_trait::async_trait;
use serde_json::Value;

/// Abstract JSON transport interface.
///
/// Paths are relative to the transport's API root (no leading slash), e.g.
/// `heroes` or `heroes/11`. Implementations resolve with the decoded JSON
/// payload of a successful response; an empty success body resolves as
/// `Value::Null`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET request.
    async fn get(&self, path: &str) -> TransportResult<Value>;

    /// Issues a POST request with a JSON body.
    async fn post(&self, path: &str, body: Value) -> TransportResult<Value>;

    /// Issues a PUT request with a JSON body.
    async fn put(&self, path: &str, body: Value) -> TransportResult<Value>;

    /// Issues a DELETE request.
    async fn delete(&self, path: &str) -> TransportResult<Value>;
}
