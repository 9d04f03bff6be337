//! Injected persistence backends for the incident store.
//!
//! A backend is a single key-value slot holding one opaque string blob.
//! The store handles all serialization; backends only move raw bytes.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::StoreError;

/// A single load-all / save-all persistence slot.
pub trait StorageBackend: Send + Sync {
    /// Reads the raw blob, or `None` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the slot exists but cannot be read.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replaces the slot contents with `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the slot cannot be written.
    fn save(&self, raw: &str) -> Result<(), StoreError>;
}

/// File-backed slot: one JSON file on local disk.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Creates a backend persisting to the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path this backend persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, raw: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-process slot for tests and ephemeral runs.
pub struct MemoryBackend {
    slot: Mutex<Option<String>>,
}

impl MemoryBackend {
    /// Creates an empty (never-written) slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Creates a slot pre-populated with a raw blob.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn save(&self, raw: &str) -> Result<(), StoreError> {
        *self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(raw.to_string());
        Ok(())
    }
}
