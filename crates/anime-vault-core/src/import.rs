//! Import adapter: maps external search records into insert candidates.
//! The full synopsis is stored; any truncation for display happens in the
//! presentation layer.

use anime_vault_models::{Entry, NewEntry, WatchStatus};
use anime_vault_sources::SearchResult;
use tracing::debug;

use crate::error::{Committed, VaultError};
use crate::store::{placeholder_poster, VaultStore};

/// How many genre names are carried over from a search record
const IMPORTED_GENRE_LIMIT: usize = 3;

/// Build an insert candidate from a search record. A missing or blank title
/// fails the import; every other field degrades to a sensible default.
pub fn entry_from_search(result: &SearchResult) -> Result<NewEntry, VaultError> {
    let title = result
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| VaultError::Import("search result has no title".to_string()))?;

    let poster_url = result
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| placeholder_poster(title));

    debug!("mapping search result {:?} ({})", result.mal_id, title);

    Ok(NewEntry {
        title: title.to_string(),
        poster_url,
        status: Some(WatchStatus::PlanToWatch),
        genres: result
            .genres
            .iter()
            .take(IMPORTED_GENRE_LIMIT)
            .cloned()
            .collect::<Vec<_>>()
            .join(", "),
        description: result.synopsis.clone().unwrap_or_default(),
        external_id: result.mal_id,
        external_kind: result.media_type.clone(),
    })
}

/// Map a search record and insert it. Duplicate titles surface unchanged
/// from the store.
pub fn import_result(
    store: &mut VaultStore,
    result: &SearchResult,
) -> Result<Committed<Entry>, VaultError> {
    let candidate = entry_from_search(result)?;
    store.insert(candidate)
}
