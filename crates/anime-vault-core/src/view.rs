//! View projector: pure functions over a snapshot of the collection.
//! Nothing here mutates the store; the CLI composes these for display.

use anime_vault_models::{Entry, VaultStats, WatchStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    DateAdded,
}

/// All entries when no filter is given, otherwise only exact status matches
pub fn filtered(entries: &[Entry], status: Option<WatchStatus>) -> Vec<Entry> {
    match status {
        None => entries.to_vec(),
        Some(status) => entries
            .iter()
            .filter(|e| e.status == status)
            .cloned()
            .collect(),
    }
}

/// Title sorts case-insensitively ascending; date sorts newest first.
/// No key leaves the input order unchanged.
pub fn sorted(entries: &[Entry], key: Option<SortKey>) -> Vec<Entry> {
    let mut out = entries.to_vec();
    match key {
        Some(SortKey::Title) => out.sort_by_key(|e| e.title.to_lowercase()),
        Some(SortKey::DateAdded) => out.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
        None => {}
    }
    out
}

/// Counts by status over the full slice. `total` is the slice length,
/// independent of any filter applied to the displayed list.
pub fn stats(entries: &[Entry]) -> VaultStats {
    let mut stats = VaultStats {
        total: entries.len(),
        ..Default::default()
    };
    for entry in entries {
        match entry.status {
            WatchStatus::Completed => stats.completed += 1,
            WatchStatus::Ongoing => stats.ongoing += 1,
            WatchStatus::PlanToWatch => stats.plan_to_watch += 1,
        }
    }
    stats
}
