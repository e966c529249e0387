//! In-memory save store for tests and local runs.

use std::sync::RwLock;

use crate::error::{Result, StorageError};
use crate::record::SaveGame;
use crate::store::SaveStore;

/// Holds the snapshot in a single in-process slot.
pub struct MemorySaveStore {
    slot: RwLock<Option<SaveGame>>,
}

impl MemorySaveStore {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Create with a snapshot already present.
    pub fn with_save(save: SaveGame) -> Self {
        Self {
            slot: RwLock::new(Some(save)),
        }
    }
}

impl Default for MemorySaveStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveStore for MemorySaveStore {
    fn load(&self) -> Result<Option<SaveGame>> {
        let slot = self.slot.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(slot.clone())
    }

    fn save(&self, save: &SaveGame) -> Result<()> {
        let mut slot = self.slot.write().map_err(|_| StorageError::LockPoisoned)?;
        *slot = Some(save.clone());
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        let mut slot = self.slot.write().map_err(|_| StorageError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.slot
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}
