//! The hero service — CRUD operations with uniform failure recovery.
//!
//! Every operation resolves with a value. Transport failures are intercepted,
//! reported through `tracing`, recorded in the shared message log, and
//! replaced by a fallback (an empty list or an absent record), so a consumer
//! driving a view never has to handle a transport error itself.

use crate::error::{TransportError, TransportResult};
use crate::transport::Transport;
use herodex_messages::MessageLog;
use herodex_types::{Hero, HeroDraft, HeroId};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Client for the remote hero collection.
///
/// Both collaborators are passed at construction so tests can supply fakes;
/// there is no global lookup. All methods take `&self` and may run
/// concurrently. Dropping an operation's future before it resolves abandons
/// the request and writes no log entry for it.
pub struct HeroService {
    transport: Arc<dyn Transport>,
    messages: Arc<MessageLog>,
}

impl HeroService {
    /// Creates a service over the given transport and message log.
    pub fn new(transport: Arc<dyn Transport>, messages: Arc<MessageLog>) -> Self {
        Self {
            transport,
            messages,
        }
    }

    /// Returns a handle to the shared message log.
    pub fn message_log(&self) -> &Arc<MessageLog> {
        &self.messages
    }

    // ── Read operations ──────────────────────────────────────────

    /// Fetches every hero. Resolves with an empty list on failure.
    pub async fn get_heroes(&self) -> Vec<Hero> {
        debug!("Fetching all heroes");
        match self.fetch::<Vec<Hero>>("heroes").await {
            Ok(heroes) => {
                self.log("fetched heroes");
                heroes
            }
            Err(e) => self.recover("getHeroes", &e, Vec::new()),
        }
    }

    /// Fetches one hero by id. Resolves with `None` on failure; a missing
    /// record answers 404 and takes the failure path like any other error.
    pub async fn get_hero(&self, id: impl Into<HeroId>) -> Option<Hero> {
        let id = id.into();
        debug!("Fetching hero id={}", id);
        match self.fetch::<Hero>(&format!("heroes/{id}")).await {
            Ok(hero) => {
                self.log(format!("fetched hero id={id}"));
                Some(hero)
            }
            Err(e) => self.recover(&format!("getHero id={id}"), &e, None),
        }
    }

    /// Fetches the heroes whose names contain the term.
    ///
    /// A term that is empty after trimming resolves immediately with an
    /// empty list: no request is issued and nothing is logged.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }

        debug!("Searching heroes matching {:?}", term);
        let path = format!("heroes/?name={}", urlencoding::encode(term));
        match self.fetch::<Vec<Hero>>(&path).await {
            Ok(heroes) => {
                self.log(format!("found heroes matching '{term}'"));
                heroes
            }
            Err(e) => self.recover("searchHeroes", &e, Vec::new()),
        }
    }

    // ── Write operations ─────────────────────────────────────────

    /// Creates a hero from a draft. Resolves with the stored record,
    /// including its server-assigned id, or `None` on failure.
    pub async fn add_hero(&self, draft: &HeroDraft) -> Option<Hero> {
        debug!("Adding hero {:?}", draft.name());
        match self.create(draft).await {
            Ok(hero) => {
                self.log(format!("added hero w/ id={}", hero.id));
                Some(hero)
            }
            Err(e) => self.recover("addHero", &e, None),
        }
    }

    /// Updates a hero in place. Resolves with `Some(())` on acknowledgement
    /// or `None` on failure.
    ///
    /// The server's response payload is discarded; the API does not
    /// guarantee an echo of the stored record, so a caller keeping a local
    /// copy must treat it as unconfirmed.
    pub async fn update_hero(&self, hero: &Hero) -> Option<()> {
        debug!("Updating hero id={}", hero.id);
        match self.replace(hero).await {
            Ok(()) => {
                self.log(format!("updated hero id={}", hero.id));
                Some(())
            }
            Err(e) => self.recover("updateHero", &e, None),
        }
    }

    /// Deletes a hero, addressed by id or by record. Resolves with
    /// `Some(())` on acknowledgement or `None` on failure; a `None` means
    /// the caller must not assume the delete happened.
    pub async fn delete_hero(&self, hero: impl Into<HeroId>) -> Option<()> {
        let id = hero.into();
        debug!("Deleting hero id={}", id);
        match self.transport.delete(&format!("heroes/{id}")).await {
            Ok(_) => {
                self.log(format!("deleted hero id={id}"));
                Some(())
            }
            Err(e) => self.recover("deleteHero", &e, None),
        }
    }

    // ── Transport plumbing ───────────────────────────────────────

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> TransportResult<T> {
        let payload = self.transport.get(path).await?;
        Self::decode(payload)
    }

    async fn create(&self, draft: &HeroDraft) -> TransportResult<Hero> {
        let payload = self.transport.post("heroes", Self::encode(draft)?).await?;
        Self::decode(payload)
    }

    async fn replace(&self, hero: &Hero) -> TransportResult<()> {
        self.transport.put("heroes", Self::encode(hero)?).await?;
        Ok(())
    }

    fn encode<T: serde::Serialize>(value: &T) -> TransportResult<Value> {
        serde_json::to_value(value).map_err(|e| TransportError::Decode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(payload: Value) -> TransportResult<T> {
        serde_json::from_value(payload).map_err(|e| TransportError::Decode(e.to_string()))
    }

    // ── Failure recovery ─────────────────────────────────────────

    /// Records a message in the shared log, prefixed with the service name.
    fn log(&self, message: impl Into<String>) {
        self.messages.add(format!("HeroService: {}", message.into()));
    }

    /// Uniform recovery: report the failure out of band, append exactly one
    /// diagnostic entry naming the operation, and resolve with the fallback.
    fn recover<T>(&self, operation: &str, error: &TransportError, fallback: T) -> T {
        error!("{} failed: {}", operation, error);
        self.log(format!("{operation} failed: {error}"));
        fallback
    }
}
