use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::WatchStatus;

/// One tracked title in the vault.
///
/// Field names stay camelCase on the wire so the persisted JSON matches the
/// schema the web app wrote to localStorage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub poster_url: String,
    pub status: WatchStatus,
    pub genres: Vec<String>,
    pub description: String,
    pub date_added: DateTime<Utc>,
    pub is_read: bool,
    /// MAL id when this entry was imported from search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<u64>,
    /// Media type from search ("TV", "Movie", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_kind: Option<String>,
}

/// Candidate for insertion. The store assigns id, date_added and is_read.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub title: String,
    pub poster_url: String,
    pub status: Option<WatchStatus>,
    /// Raw comma-separated genre input; the store normalizes it
    pub genres: String,
    pub description: String,
    pub external_id: Option<u64>,
    pub external_kind: Option<String>,
}

/// Partial update applied to an existing entry. `None` fields are untouched;
/// id and date_added are never patchable.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub poster_url: Option<String>,
    pub status: Option<WatchStatus>,
    pub genres: Option<String>,
    pub description: Option<String>,
}
