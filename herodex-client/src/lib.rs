//! HTTP client for the herodex hero API.
//!
//! Provides the hero service and the transports it runs over:
//! - reqwest-backed HTTP transport for a real API server
//! - in-memory transport emulating the API for tests and offline use
//!
//! # Architecture
//!
//! ## Components
//!
//! - **Transport**: abstracts REST-style JSON requests behind a trait
//! - **HeroService**: CRUD operations with uniform failure recovery — every
//!   operation resolves, substituting a fallback value when the transport
//!   fails, and records its outcome in a shared [`MessageLog`]
//!
//! [`MessageLog`]: herodex_messages::MessageLog
//!
//! # Example
//!
//! ```
//! use herodex_client::{HeroService, InMemoryTransport};
//! use herodex_messages::MessageLog;
//! use std::sync::Arc;
//!
//! let transport = Arc::new(InMemoryTransport::sample());
//! let log = Arc::new(MessageLog::new());
//!
//! let service = HeroService::new(transport, log);
//! ```

mod error;
mod http;
mod memory;
mod service;
mod transport;

pub use error::{TransportError, TransportResult};
pub use http::{HttpConfig, HttpTransport};
pub use memory::InMemoryTransport;
pub use service::HeroService;
pub use transport::Transport;
