//! Hero record types.
//!
//! A `Hero` is the unit of data the client moves around: an integer id the
//! server assigned plus a display name. The wire shape is the conventional
//! `{"id": <integer>, "name": <string>}` object, with collections as JSON
//! arrays of such objects.
//!
//! Ids are only ever minted by the server. The client-side creation payload
//! is a `HeroDraft`, which carries a validated name and no id at all, so a
//! fabricated id can never leak into a create request.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a hero record, assigned by the server.
///
/// Serializes transparently as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroId(i64);

impl HeroId {
    /// Wraps a raw id value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying integer.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HeroId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for HeroId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<&Hero> for HeroId {
    fn from(hero: &Hero) -> Self {
        hero.id
    }
}

impl From<Hero> for HeroId {
    fn from(hero: Hero) -> Self {
        hero.id
    }
}

/// A stored hero record.
///
/// `id` is immutable once assigned; `name` is the mutable display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Server-assigned identifier.
    pub id: HeroId,

    /// Display name.
    pub name: String,
}

impl Hero {
    /// Creates a hero record from an already-assigned id and a name.
    #[must_use]
    pub fn new(id: impl Into<HeroId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id={})", self.name, self.id)
    }
}

/// Creation payload for a new hero: a validated name and nothing else.
///
/// The constructor trims the name and rejects anything empty after
/// trimming, so every draft that exists is sendable. Serializes as
/// `{"name": <string>}` with no id field; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroDraft {
    name: String,
}

impl HeroDraft {
    /// Builds a draft from a raw name, trimming surrounding whitespace.
    ///
    /// Returns `Error::EmptyName` when nothing remains after the trim.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    /// The validated, trimmed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
