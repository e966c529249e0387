//! File-backed save store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::SaveGame;
use crate::store::SaveStore;

/// Stores the snapshot as a single pretty-printed JSON document.
///
/// Saves go through a temp file followed by an atomic rename, so a crash
/// mid-write leaves either the old snapshot or the new one, never a torn
/// file.
pub struct FileSaveStore {
    path: PathBuf,
}

impl FileSaveStore {
    /// Creates a store at `path`. A missing `.json` extension is appended
    /// (so `save` and `save.json` name the same file), and parent
    /// directories are created up front.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = normalize(path.as_ref());
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// The resolved on-disk location, shown to the player on quit.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn normalize(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "json") {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".json");
    PathBuf::from(name)
}

impl SaveStore for FileSaveStore {
    fn load(&self) -> Result<Option<SaveGame>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path)?;
        let save: SaveGame = serde_json::from_slice(&bytes)?;
        tracing::debug!("loaded game from {}", self.path.display());
        Ok(Some(save))
    }

    fn save(&self, save: &SaveGame) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(save)?;
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;
        tracing::debug!("saved game to {}", self.path.display());
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!("deleted save {}", self.path.display());
        }
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_extension_is_appended() {
        assert_eq!(normalize(Path::new("save")), PathBuf::from("save.json"));
        assert_eq!(
            normalize(Path::new("saves/game")),
            PathBuf::from("saves/game.json")
        );
    }

    #[test]
    fn explicit_extension_is_not_doubled() {
        assert_eq!(
            normalize(Path::new("save.json")),
            PathBuf::from("save.json")
        );
    }

    #[test]
    fn other_extensions_are_kept_and_suffixed() {
        assert_eq!(
            normalize(Path::new("save.backup")),
            PathBuf::from("save.backup.json")
        );
    }
}
