use super::*;
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> VaultStore {
    VaultStore::open(VaultFile::new(dir.path().join("vault.json")))
}

fn candidate(title: &str, status: WatchStatus) -> NewEntry {
    NewEntry {
        title: title.to_string(),
        status: Some(status),
        ..Default::default()
    }
}

#[test]
fn test_insert_assigns_id_and_derives_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    let added = store
        .insert(candidate("Naruto", WatchStatus::Ongoing))
        .unwrap();
    assert!(!added.value.id.is_empty());
    assert!(!added.value.is_read);
    assert!(added.warning.is_none());

    let added = store
        .insert(candidate("Monster", WatchStatus::Completed))
        .unwrap();
    assert!(added.value.is_read);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_insert_distinct_titles_grows_collection() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    for title in ["A", "B", "C", "D", "E"] {
        store.insert(candidate(title, WatchStatus::Ongoing)).unwrap();
    }
    assert_eq!(store.len(), 5);

    let ids: std::collections::HashSet<_> =
        store.entries().iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids.len(), 5);
}

#[test]
fn test_insert_duplicate_title_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    store
        .insert(candidate("Naruto", WatchStatus::Ongoing))
        .unwrap();
    let err = store
        .insert(candidate("naruto", WatchStatus::Completed))
        .unwrap_err();
    assert!(matches!(err, VaultError::Duplicate { .. }));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_insert_requires_title_and_status() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    let err = store
        .insert(candidate("   ", WatchStatus::Ongoing))
        .unwrap_err();
    assert!(matches!(err, VaultError::Validation { field: "title" }));

    let err = store
        .insert(NewEntry {
            title: "Naruto".to_string(),
            status: None,
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, VaultError::Validation { field: "status" }));
    assert!(store.is_empty());
}

#[test]
fn test_insert_normalizes_genres_and_poster() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    let added = store
        .insert(NewEntry {
            title: "One Piece".to_string(),
            status: Some(WatchStatus::Ongoing),
            genres: " Action , , Adventure ,".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(added.value.genres, vec!["Action", "Adventure"]);
    assert!(added.value.poster_url.starts_with("/placeholder.svg?"));
    assert!(added.value.poster_url.contains("One%20Piece"));
}

#[test]
fn test_update_merges_patch_and_rederives_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    let added = store
        .insert(candidate("Naruto", WatchStatus::Ongoing))
        .unwrap();
    let id = added.value.id.clone();
    let date_added = added.value.date_added;

    let updated = store
        .update(
            &id,
            EntryPatch {
                status: Some(WatchStatus::Completed),
                description: Some("classic".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.value.id, id);
    assert_eq!(updated.value.date_added, date_added);
    assert_eq!(updated.value.title, "Naruto");
    assert_eq!(updated.value.description, "classic");
    assert!(updated.value.is_read);
}

#[test]
fn test_update_blank_poster_keeps_existing() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    let added = store
        .insert(NewEntry {
            title: "Naruto".to_string(),
            status: Some(WatchStatus::Ongoing),
            poster_url: "https://cdn.example/naruto.jpg".to_string(),
            ..Default::default()
        })
        .unwrap();
    let id = added.value.id.clone();

    let updated = store
        .update(
            &id,
            EntryPatch {
                poster_url: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.value.poster_url, "https://cdn.example/naruto.jpg");
}

#[test]
fn test_update_unknown_id_leaves_collection_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    store
        .insert(candidate("Naruto", WatchStatus::Ongoing))
        .unwrap();
    let before = store.entries().to_vec();

    let err = store
        .update(
            "missing",
            EntryPatch {
                title: Some("Bleach".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, VaultError::NotFound { .. }));
    assert_eq!(store.entries(), &before[..]);
}

#[test]
fn test_update_rejects_empty_title() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    let added = store
        .insert(candidate("Naruto", WatchStatus::Ongoing))
        .unwrap();
    let err = store
        .update(
            &added.value.id,
            EntryPatch {
                title: Some("  ".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, VaultError::Validation { field: "title" }));
}

#[test]
fn test_update_rejects_rename_onto_existing_title() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    store
        .insert(candidate("Naruto", WatchStatus::Ongoing))
        .unwrap();
    let added = store
        .insert(candidate("Bleach", WatchStatus::Ongoing))
        .unwrap();

    let err = store
        .update(
            &added.value.id,
            EntryPatch {
                title: Some("NARUTO".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, VaultError::Duplicate { .. }));

    // renaming to its own title (case changed) is fine
    let updated = store
        .update(
            &added.value.id,
            EntryPatch {
                title: Some("BLEACH".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.value.title, "BLEACH");
}

#[test]
fn test_delete_removes_entry() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    let added = store
        .insert(candidate("Naruto", WatchStatus::Ongoing))
        .unwrap();
    let removed = store.delete(&added.value.id).unwrap();
    assert_eq!(removed.value.title, "Naruto");
    assert!(store.is_empty());
}

#[test]
fn test_delete_unknown_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    store
        .insert(candidate("Naruto", WatchStatus::Ongoing))
        .unwrap();
    let err = store.delete("missing").unwrap_err();
    assert!(matches!(err, VaultError::NotFound { .. }));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_toggle_read_is_involutive_for_ongoing() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    let added = store
        .insert(candidate("Naruto", WatchStatus::Ongoing))
        .unwrap();
    let id = added.value.id.clone();

    let toggled = store.toggle_read(&id).unwrap();
    assert!(toggled.value.is_read);
    assert_eq!(toggled.value.status, WatchStatus::Completed);

    let toggled = store.toggle_read(&id).unwrap();
    assert!(!toggled.value.is_read);
    assert_eq!(toggled.value.status, WatchStatus::Ongoing);
}

#[test]
fn test_toggle_read_plan_to_watch_never_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    let added = store
        .insert(candidate("Naruto", WatchStatus::PlanToWatch))
        .unwrap();
    let id = added.value.id.clone();

    let toggled = store.toggle_read(&id).unwrap();
    assert!(toggled.value.is_read);
    assert_eq!(toggled.value.status, WatchStatus::Completed);

    // unread lands on ongoing, not back on plan-to-watch
    let toggled = store.toggle_read(&id).unwrap();
    assert!(!toggled.value.is_read);
    assert_eq!(toggled.value.status, WatchStatus::Ongoing);
}

#[test]
fn test_toggle_read_unknown_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);
    let err = store.toggle_read("missing").unwrap_err();
    assert!(matches!(err, VaultError::NotFound { .. }));
}

#[test]
fn test_clear_empties_collection() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    store
        .insert(candidate("Naruto", WatchStatus::Ongoing))
        .unwrap();
    store
        .insert(candidate("Bleach", WatchStatus::Completed))
        .unwrap();

    let cleared = store.clear();
    assert_eq!(cleared.value, 2);
    assert!(store.is_empty());

    // the empty collection is persisted too
    let reopened = open_store(&dir);
    assert!(reopened.is_empty());
}

#[test]
fn test_failed_write_keeps_in_memory_change_and_warns() {
    let dir = tempfile::tempdir().unwrap();
    // a directory at the vault path makes every write fail
    let vault_path = dir.path().join("vault.json");
    std::fs::create_dir(&vault_path).unwrap();
    let mut store = VaultStore::open(VaultFile::new(vault_path));

    let added = store
        .insert(candidate("Naruto", WatchStatus::Ongoing))
        .unwrap();
    assert!(added.warning.is_some());
    assert_eq!(store.len(), 1);
    assert!(store.find_by_title("Naruto").is_some());

    // later mutations keep working against the in-memory copy
    let toggled = store.toggle_read(&added.value.id).unwrap();
    assert!(toggled.warning.is_some());
    assert_eq!(toggled.value.status, WatchStatus::Completed);
}

#[test]
fn test_find_by_title_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    store
        .insert(candidate("Fullmetal Alchemist", WatchStatus::Completed))
        .unwrap();
    assert!(store.find_by_title("fullmetal alchemist").is_some());
    assert!(store.find_by_title("FULLMETAL ALCHEMIST").is_some());
    assert!(store.find_by_title("Fullmetal").is_none());
}

#[test]
fn test_mutations_are_written_through() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir);

    let added = store
        .insert(candidate("Naruto", WatchStatus::Ongoing))
        .unwrap();
    store
        .update(
            &added.value.id,
            EntryPatch {
                status: Some(WatchStatus::Completed),
                ..Default::default()
            },
        )
        .unwrap();

    // a fresh store sees the same state field for field
    let reopened = open_store(&dir);
    assert_eq!(reopened.entries(), store.entries());
}
