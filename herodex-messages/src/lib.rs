//! In-memory diagnostic message log for herodex.
//!
//! Components that talk to the hero service record human-readable outcome
//! messages here instead of surfacing errors to their callers. A host
//! application renders the log (and offers a clear control) wherever it
//! wants; nothing in this crate does any I/O.

mod log;

pub use log::MessageLog;
