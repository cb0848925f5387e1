use anime_vault_config::PathManager;
use anime_vault_models::Entry;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::error::PersistenceError;

/// Persistence adapter: one JSON file holding the whole entry collection,
/// rewritten wholesale on every mutation.
#[derive(Clone)]
pub struct VaultFile {
    path: PathBuf,
}

impl VaultFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn from_paths(path_manager: &PathManager) -> anyhow::Result<Self> {
        path_manager.ensure_directories()?;
        Ok(Self::new(path_manager.vault_file()))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the persisted collection. Fails soft: a missing, unreadable, or
    /// corrupt file yields an empty collection and a log line, never an error.
    pub fn load(&self) -> Vec<Entry> {
        if !self.path.exists() {
            debug!("vault file does not exist yet: {:?}", self.path);
            return Vec::new();
        }

        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<Vec<Entry>>(&content) {
                Ok(entries) => {
                    debug!("loaded {} entries from {:?}", entries.len(), self.path);
                    entries
                }
                Err(e) => {
                    warn!(
                        "vault file {:?} is corrupt, starting with an empty collection: {}",
                        self.path, e
                    );
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("failed to read vault file {:?}: {}", self.path, e);
                Vec::new()
            }
        }
    }

    pub fn save(&self, entries: &[Entry]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(PersistenceError::Write)?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(PersistenceError::Serialize)?;
        std::fs::write(&self.path, json).map_err(PersistenceError::Write)?;
        debug!("saved {} entries to {:?}", entries.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anime_vault_models::WatchStatus;
    use chrono::Utc;

    fn entry(id: &str, title: &str) -> Entry {
        Entry {
            id: id.to_string(),
            title: title.to_string(),
            poster_url: "/placeholder.svg".to_string(),
            status: WatchStatus::Ongoing,
            genres: vec!["Action".to_string()],
            description: String::new(),
            date_added: Utc::now(),
            is_read: false,
            external_id: None,
            external_kind: None,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = VaultFile::new(dir.path().join("vault.json"));
        assert!(file.load().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = VaultFile::new(dir.path().join("vault.json"));

        let entries = vec![entry("1", "Naruto"), entry("2", "Bleach")];
        file.save(&entries).unwrap();

        let loaded = file.load();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.json");
        std::fs::write(&path, "{ not json").unwrap();

        let file = VaultFile::new(path.clone());
        assert!(file.load().is_empty());
        // the corrupt file is left in place for manual recovery
        assert!(path.exists());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let file = VaultFile::new(dir.path().join("nested").join("vault.json"));
        file.save(&[entry("1", "Naruto")]).unwrap();
        assert_eq!(file.load().len(), 1);
    }
}
