//! Durable key-value persistence for progression state.
//!
//! The progression core treats the store as an external collaborator:
//! save failures are recoverable (in-memory state stays authoritative)
//! and load failures fall back to fresh initialization.

pub mod file;

use std::collections::HashMap;

use thiserror::Error;

use crate::progression::types::ProgressionRoot;

pub use file::FileStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no save entry for key {0:?}")]
    NotFound(String),
    #[error("save data is corrupt: {0}")]
    Corrupt(String),
    #[error("codec error: {0}")]
    Codec(#[from] bincode::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Save/load contract the progression state machine talks through.
pub trait ProgressionStore {
    fn save(&mut self, key: &str, root: &ProgressionRoot) -> Result<(), StoreError>;
    fn load(&self, key: &str) -> Result<ProgressionRoot, StoreError>;
    fn exists(&self, key: &str) -> bool;
}

impl<S: ProgressionStore + ?Sized> ProgressionStore for &mut S {
    fn save(&mut self, key: &str, root: &ProgressionRoot) -> Result<(), StoreError> {
        (**self).save(key, root)
    }

    fn load(&self, key: &str) -> Result<ProgressionRoot, StoreError> {
        (**self).load(key)
    }

    fn exists(&self, key: &str) -> bool {
        (**self).exists(key)
    }
}

/// In-memory store for tests and the simulator.
///
/// Entries round-trip through the binary codec so an in-memory save
/// exercises the same serialization path as the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressionStore for MemoryStore {
    fn save(&mut self, key: &str, root: &ProgressionRoot) -> Result<(), StoreError> {
        let bytes = bincode::serialize(root)?;
        self.entries.insert(key.to_string(), bytes);
        Ok(())
    }

    fn load(&self, key: &str) -> Result<ProgressionRoot, StoreError> {
        let bytes = self
            .entries
            .get(key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        Ok(bincode::deserialize(bytes)?)
    }

    fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
