//! Durable key-value storage.
//!
//! The site keeps all persistent state in a flat string-to-string store with
//! the same contract as browser local storage:
//!
//! - `get_item` returns `None` for an absent key
//! - `set_item` creates or overwrites a key
//! - `remove_item` is a no-op for an absent key
//!
//! Every call is synchronous and applies atomically to a single key. Writers
//! are not coordinated beyond that; the last write to a key wins.
//!
//! Two implementations are provided:
//!
//! - [`MemoryStore`] - process-local, used by tests and ephemeral pages
//! - [`FileStore`] - persisted to `storage.json` with write-then-rename

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The durable storage capability injected into page flows.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key` if present.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;

    /// True if `key` is present.
    fn contains_key(&self, key: &str) -> bool {
        self.get_item(key).is_some()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
