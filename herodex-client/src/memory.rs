//! In-memory transport implementation.
//!
//! Emulates the hero API against a local table, for development and tests
//! that should run without a server. Route handling mirrors the real API:
//! unknown paths and missing records answer 404, malformed bodies 400.

use crate::error::{TransportError, TransportResult};
use crate::transport::Transport;
use async_trait::async_trait;
use herodex_types::{Hero, HeroId};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// The id handed to the first hero created in an empty table.
const FIRST_ID: i64 = 11;

/// In-memory hero API emulation.
pub struct InMemoryTransport {
    table: RwLock<Vec<Hero>>,
    /// Requests received, successful or not.
    requests: AtomicUsize,
}

impl InMemoryTransport {
    /// Creates a transport with an empty hero table.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Vec::new()),
            requests: AtomicUsize::new(0),
        }
    }

    /// Creates a transport whose table holds the given heroes.
    pub fn seeded(heroes: impl IntoIterator<Item = Hero>) -> Self {
        Self {
            table: RwLock::new(heroes.into_iter().collect()),
            requests: AtomicUsize::new(0),
        }
    }

    /// Creates a transport seeded with the standard demo roster.
    pub fn sample() -> Self {
        Self::seeded([
            Hero::new(11, "Dr Nice"),
            Hero::new(12, "Narco"),
            Hero::new(13, "Bombasto"),
            Hero::new(14, "Celeritas"),
            Hero::new(15, "Magneta"),
            Hero::new(16, "RubberMan"),
            Hero::new(17, "Dynama"),
            Hero::new(18, "Dr IQ"),
            Hero::new(19, "Magma"),
            Hero::new(20, "Tornado"),
        ])
    }

    /// A snapshot of the hero table.
    pub async fn heroes(&self) -> Vec<Hero> {
        self.table.read().await.clone()
    }

    /// How many requests this transport has received.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    fn count_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Next server-assigned id: one past the current maximum, or the
    /// conventional first id for an empty table. Saturates rather than
    /// overflowing if the table was seeded at the top of the id range.
    fn next_id(table: &[Hero]) -> HeroId {
        table
            .iter()
            .map(|h| h.id.value())
            .max()
            .map_or(HeroId::new(FIRST_ID), |max| {
                HeroId::new(max.saturating_add(1))
            })
    }

    fn not_found() -> TransportError {
        TransportError::Status {
            status: 404,
            reason: "Not Found".to_string(),
        }
    }

    fn bad_request(reason: impl Into<String>) -> TransportError {
        TransportError::Status {
            status: 400,
            reason: reason.into(),
        }
    }

    fn to_json<T: serde::Serialize>(value: &T) -> TransportResult<Value> {
        serde_json::to_value(value).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

impl Default for InMemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn get(&self, path: &str) -> TransportResult<Value> {
        self.count_request();

        if path == "heroes" {
            let table = self.table.read().await;
            return Self::to_json(&*table);
        }

        if let Some(query) = path.strip_prefix("heroes/?name=") {
            let term = urlencoding::decode(query)
                .map_err(|_| Self::bad_request("invalid query encoding"))?;
            let table = self.table.read().await;
            let matches: Vec<&Hero> = table
                .iter()
                .filter(|hero| hero.name.contains(term.as_ref()))
                .collect();
            return Self::to_json(&matches);
        }

        if let Some(rest) = path.strip_prefix("heroes/") {
            if let Ok(id) = rest.parse::<HeroId>() {
                let table = self.table.read().await;
                return match table.iter().find(|hero| hero.id == id) {
                    Some(hero) => Self::to_json(hero),
                    None => Err(Self::not_found()),
                };
            }
        }

        Err(Self::not_found())
    }

    async fn post(&self, path: &str, body: Value) -> TransportResult<Value> {
        self.count_request();

        if path != "heroes" {
            return Err(Self::not_found());
        }

        let name = body
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| Self::bad_request("hero name is required"))?
            .to_string();

        let mut table = self.table.write().await;
        let hero = Hero::new(Self::next_id(&table), name);
        table.push(hero.clone());
        Self::to_json(&hero)
    }

    async fn put(&self, path: &str, body: Value) -> TransportResult<Value> {
        self.count_request();

        if path != "heroes" {
            return Err(Self::not_found());
        }

        let hero: Hero = serde_json::from_value(body)
            .map_err(|e| Self::bad_request(format!("invalid hero payload: {e}")))?;

        let mut table = self.table.write().await;
        match table.iter_mut().find(|stored| stored.id == hero.id) {
            Some(stored) => {
                *stored = hero.clone();
                Self::to_json(&hero)
            }
            None => Err(Self::not_found()),
        }
    }

    async fn delete(&self, path: &str) -> TransportResult<Value> {
        self.count_request();

        if let Some(rest) = path.strip_prefix("heroes/") {
            if let Ok(id) = rest.parse::<HeroId>() {
                let mut table = self.table.write().await;
                let before = table.len();
                table.retain(|hero| hero.id != id);
                return if table.len() < before {
                    // The real API answers a delete with an empty body.
                    Ok(Value::Null)
                } else {
                    Err(Self::not_found())
                };
            }
        }

        Err(Self::not_found())
    }
}
