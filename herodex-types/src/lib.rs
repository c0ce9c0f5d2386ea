//! Core type definitions for herodex.
//!
//! This crate defines the record types shared by every herodex component:
//! - `HeroId`, the server-assigned integer identifier
//! - `Hero`, a stored roster record
//! - `HeroDraft`, the validated creation payload (name only, no id)
//!
//! Everything here is plain data. Network access, logging, and fallback
//! policy live in `herodex-client`.

mod hero;

pub use hero::{Hero, HeroDraft, HeroId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing record types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A draft name was empty (or whitespace-only) after trimming.
    #[error("hero name must not be empty")]
    EmptyName,
}
