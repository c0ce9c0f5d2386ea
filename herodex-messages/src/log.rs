use std::sync::Mutex;
use tracing::debug;

/// An append-only, in-memory log of diagnostic messages.
///
/// Shared as `Arc<MessageLog>`; every method takes `&self`. The lock is held
/// only for a single push, clear, or clone, so concurrent writers never
/// interleave mid-message and readers always see whole entries.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Mutex<Vec<String>>,
}

impl MessageLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the end of the log.
    pub fn add(&self, message: impl Into<String>) {
        self.messages.lock().unwrap().push(message.into());
    }

    /// Removes every message. Clearing an empty log is a no-op.
    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
        debug!("message log cleared");
    }

    /// A snapshot of all messages in insertion order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// The number of messages currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    /// Whether the log holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.lock().unwrap().is_empty()
    }
}
