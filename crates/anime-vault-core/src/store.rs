use anime_vault_models::{Entry, EntryPatch, NewEntry, WatchStatus};
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{Committed, PersistenceWarning, VaultError};
use crate::persist::VaultFile;

#[cfg(test)]
mod tests;

/// Collection store: owns the authoritative in-memory entry list and the
/// persistence adapter. All writes go through here so the invariants hold
/// (unique ids, case-insensitive unique titles, normalized genres).
///
/// Every mutating operation persists synchronously before returning. When the
/// write fails the in-memory change is kept and the returned [`Committed`]
/// carries a [`PersistenceWarning`]; no rollback, no retry.
pub struct VaultStore {
    file: VaultFile,
    entries: Vec<Entry>,
}

/// Placeholder poster used when no image URL is available
pub fn placeholder_poster(title: &str) -> String {
    format!(
        "/placeholder.svg?height=300&width=200&text={}",
        urlencoding::encode(title)
    )
}

/// Split comma-separated genre input, trim each part, drop empties
pub fn normalize_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

impl VaultStore {
    /// Open the store, loading whatever the vault file currently holds
    pub fn open(file: VaultFile) -> Self {
        let entries = file.load();
        Self { file, entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Case-insensitive exact title match, used for duplicate detection
    pub fn find_by_title(&self, title: &str) -> Option<&Entry> {
        let needle = title.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.title.to_lowercase() == needle)
    }

    pub fn insert(&mut self, candidate: NewEntry) -> Result<Committed<Entry>, VaultError> {
        let title = candidate.title.trim();
        if title.is_empty() {
            return Err(VaultError::Validation { field: "title" });
        }
        let status = candidate
            .status
            .ok_or(VaultError::Validation { field: "status" })?;

        if let Some(existing) = self.find_by_title(title) {
            debug!("insert rejected, duplicate title: {}", existing.title);
            return Err(VaultError::Duplicate {
                title: existing.title.to_string(),
            });
        }

        let poster_url = if candidate.poster_url.trim().is_empty() {
            placeholder_poster(title)
        } else {
            candidate.poster_url.trim().to_string()
        };

        let entry = Entry {
            id: self.next_id(),
            title: title.to_string(),
            poster_url,
            status,
            genres: normalize_genres(&candidate.genres),
            description: candidate.description.trim().to_string(),
            date_added: Utc::now(),
            is_read: status == WatchStatus::Completed,
            external_id: candidate.external_id,
            external_kind: candidate.external_kind,
        };

        info!("adding entry {} ({})", entry.id, entry.title);
        self.entries.push(entry.clone());
        let warning = self.persist();
        Ok(Committed {
            value: entry,
            warning,
        })
    }

    pub fn update(&mut self, id: &str, patch: EntryPatch) -> Result<Committed<Entry>, VaultError> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(VaultError::Validation { field: "title" });
            }
        }

        let idx = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| VaultError::NotFound { id: id.to_string() })?;

        // renaming onto another entry's title would break uniqueness
        if let Some(title) = &patch.title {
            let needle = title.trim().to_lowercase();
            if let Some(other) = self
                .entries
                .iter()
                .find(|e| e.id != id && e.title.to_lowercase() == needle)
            {
                return Err(VaultError::Duplicate {
                    title: other.title.to_string(),
                });
            }
        }

        let entry = &mut self.entries[idx];
        if let Some(title) = patch.title {
            entry.title = title.trim().to_string();
        }
        if let Some(poster_url) = patch.poster_url {
            // blank poster in the patch keeps the existing value
            if !poster_url.trim().is_empty() {
                entry.poster_url = poster_url.trim().to_string();
            }
        }
        if let Some(status) = patch.status {
            entry.status = status;
        }
        if let Some(genres) = patch.genres {
            entry.genres = normalize_genres(&genres);
        }
        if let Some(description) = patch.description {
            entry.description = description.trim().to_string();
        }
        entry.is_read = entry.status == WatchStatus::Completed;

        let updated = entry.clone();
        info!("updated entry {} ({})", updated.id, updated.title);
        let warning = self.persist();
        Ok(Committed {
            value: updated,
            warning,
        })
    }

    pub fn delete(&mut self, id: &str) -> Result<Committed<Entry>, VaultError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| VaultError::NotFound { id: id.to_string() })?;

        let removed = self.entries.remove(idx);
        info!("deleted entry {} ({})", removed.id, removed.title);
        let warning = self.persist();
        Ok(Committed {
            value: removed,
            warning,
        })
    }

    /// Flip the read flag. Read implies completed; unread always lands on
    /// ongoing, even for entries that started as plan-to-watch.
    pub fn toggle_read(&mut self, id: &str) -> Result<Committed<Entry>, VaultError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| VaultError::NotFound { id: id.to_string() })?;

        entry.is_read = !entry.is_read;
        entry.status = if entry.is_read {
            WatchStatus::Completed
        } else {
            WatchStatus::Ongoing
        };

        let toggled = entry.clone();
        info!(
            "entry {} marked as {}",
            toggled.id,
            toggled.status.as_str()
        );
        let warning = self.persist();
        Ok(Committed {
            value: toggled,
            warning,
        })
    }

    /// Empty the collection unconditionally. Returns how many entries were
    /// removed. Confirmation is the caller's job.
    pub fn clear(&mut self) -> Committed<usize> {
        let removed = self.entries.len();
        self.entries.clear();
        info!("cleared vault ({} entries removed)", removed);
        let warning = self.persist();
        Committed {
            value: removed,
            warning,
        }
    }

    fn persist(&self) -> Option<PersistenceWarning> {
        match self.file.save(&self.entries) {
            Ok(()) => None,
            Err(e) => {
                warn!("vault not persisted: {}", e);
                Some(PersistenceWarning::from(e))
            }
        }
    }

    /// Millisecond timestamp as an opaque id, bumped on collision so rapid
    /// inserts within the same millisecond still get unique ids
    fn next_id(&self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let id = millis.to_string();
            if !self.entries.iter().any(|e| e.id == id) {
                return id;
            }
            millis += 1;
        }
    }
}
