//! Key-value storage backends
//!
//! The profile collection lives as a single serialized value under one key.
//! Backends only move strings in and out; encoding is the repository's job.

pub mod json_file;
pub mod memory;

use std::path::PathBuf;
use thiserror::Error;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file is not a JSON object of strings: {}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode storage file")]
    Encode(#[from] serde_json::Error),

    #[error("failed to replace {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Get/set access to string values by key
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` when the key was never set
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
}
