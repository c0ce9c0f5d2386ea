//! Shared test helpers for hero service tests.

#![allow(dead_code)]

use async_trait::async_trait;
use herodex_client::{HeroService, Transport, TransportError, TransportResult};
use herodex_messages::MessageLog;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// How a [`FailingTransport`] should fail each request.
pub enum Failure {
    /// No response at all (connect failure, timeout).
    Request(String),
    /// An HTTP error status.
    Status(u16, String),
}

/// A transport that fails every request the same way.
pub struct FailingTransport {
    failure: Failure,
    requests: AtomicUsize,
}

impl FailingTransport {
    /// Fails every request as if the server were unreachable.
    pub fn unreachable() -> Self {
        Self::new(Failure::Request("connection refused".to_string()))
    }

    /// Fails every request with the given HTTP status.
    pub fn status(status: u16, reason: &str) -> Self {
        Self::new(Failure::Status(status, reason.to_string()))
    }

    pub fn new(failure: Failure) -> Self {
        Self {
            failure,
            requests: AtomicUsize::new(0),
        }
    }

    /// How many requests reached this transport.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    fn fail(&self) -> TransportError {
        self.requests.fetch_add(1, Ordering::Relaxed);
        match &self.failure {
            Failure::Request(message) => TransportError::Request(message.clone()),
            Failure::Status(status, reason) => TransportError::Status {
                status: *status,
                reason: reason.clone(),
            },
        }
    }
}

#[async_trait]
impl Transport for FailingTransport {
    async fn get(&self, _path: &str) -> TransportResult<Value> {
        Err(self.fail())
    }

    async fn post(&self, _path: &str, _body: Value) -> TransportResult<Value> {
        Err(self.fail())
    }

    async fn put(&self, _path: &str, _body: Value) -> TransportResult<Value> {
        Err(self.fail())
    }

    async fn delete(&self, _path: &str) -> TransportResult<Value> {
        Err(self.fail())
    }
}

/// A transport that answers every request with the same canned payload.
pub struct CannedTransport {
    payload: Value,
}

impl CannedTransport {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn get(&self, _path: &str) -> TransportResult<Value> {
        Ok(self.payload.clone())
    }

    async fn post(&self, _path: &str, _body: Value) -> TransportResult<Value> {
        Ok(self.payload.clone())
    }

    async fn put(&self, _path: &str, _body: Value) -> TransportResult<Value> {
        Ok(self.payload.clone())
    }

    async fn delete(&self, _path: &str) -> TransportResult<Value> {
        Ok(self.payload.clone())
    }
}

/// A transport whose requests never complete.
pub struct StalledTransport;

#[async_trait]
impl Transport for StalledTransport {
    async fn get(&self, _path: &str) -> TransportResult<Value> {
        std::future::pending().await
    }

    async fn post(&self, _path: &str, _body: Value) -> TransportResult<Value> {
        std::future::pending().await
    }

    async fn put(&self, _path: &str, _body: Value) -> TransportResult<Value> {
        std::future::pending().await
    }

    async fn delete(&self, _path: &str) -> TransportResult<Value> {
        std::future::pending().await
    }
}

/// Builds a service over the given transport with a fresh message log.
pub fn service_over<T: Transport + 'static>(transport: Arc<T>) -> (HeroService, Arc<MessageLog>) {
    let log = Arc::new(MessageLog::new());
    let service = HeroService::new(transport, Arc::clone(&log));
    (service, log)
}
