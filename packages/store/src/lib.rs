#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Single source of truth for the incident collection.
//!
//! The store owns the canonical, newest-first list of incident records
//! and enforces the status lifecycle on every write. Persistence is
//! deliberately primitive: the entire collection is serialized as one
//! JSON array into a single key-value slot behind the
//! [`StorageBackend`] trait. Backends are injected so tests run
//! against [`MemoryBackend`] and production uses [`JsonFileBackend`].
//!
//! The store assumes a single writer process. Two concurrent writers
//! would read-modify-write the full blob and the later write would win;
//! coordinating that is explicitly out of scope.

mod backend;
mod ids;
mod seed;
mod store;

pub use backend::{JsonFileBackend, MemoryBackend, StorageBackend};
pub use store::IncidentStore;

use incident_desk_incident_models::IncidentStatus;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the persistence slot failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the collection for persistence failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The persisted blob exists but cannot be decoded.
    ///
    /// The store fails fast here rather than silently resetting to the
    /// seed set, so a damaged slot is never overwritten.
    #[error("Persisted incident data is corrupt: {message}")]
    Corrupt {
        /// Decode failure description.
        message: String,
    },

    /// No incident with the given id exists.
    #[error("No incident with id {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// The requested status change violates the lifecycle.
    #[error("Illegal status transition: {from} -> {to}")]
    IllegalTransition {
        /// Status the record currently has.
        from: IncidentStatus,
        /// Status the caller asked for.
        to: IncidentStatus,
    },
}
