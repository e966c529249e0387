//! Save store contract for games in progress.

use crate::error::Result;
use crate::record::SaveGame;

/// One persistent slot holding at most one game in progress.
///
/// `load` distinguishes "nothing saved" (`Ok(None)`) from a slot that
/// exists but cannot be read (`Err`); policy for the latter belongs to the
/// caller, not the store.
pub trait SaveStore: Send + Sync {
    /// Read the saved game, if any.
    fn load(&self) -> Result<Option<SaveGame>>;

    /// Write the snapshot, replacing any previous one.
    fn save(&self, save: &SaveGame) -> Result<()>;

    /// Remove the snapshot. Removing an empty slot is not an error.
    fn delete(&self) -> Result<()>;

    /// Check whether a snapshot is present.
    fn exists(&self) -> bool;
}
