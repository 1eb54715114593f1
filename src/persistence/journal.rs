use crate::domain::Store;
use crate::persistence::{atomic_write, backup_file};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// Failures while moving the journal between memory and disk
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Could not read journal {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Journal {} is not valid: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not save journal {}: {message}", path.display())]
    Save { path: PathBuf, message: String },
}

impl StoreError {
    /// True for failures that happened while loading
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }
}

/// Load the journal; a missing file yields the default store
pub fn load_store<P: AsRef<Path>>(path: P) -> Result<Store, StoreError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Store::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut store: Store = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let repaired = store.repair_task_ids();
    if repaired > 0 {
        tracing::info!(path = %path.display(), repaired, "assigned ids to tasks without a usable one");
    }

    Ok(store)
}

/// Load the journal, falling back to defaults on any failure
///
/// A file that exists but does not parse is copied aside first so the next
/// save cannot destroy it. The error is handed back for the caller to show.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> (Store, Option<StoreError>) {
    let path = path.as_ref();

    match load_store(path) {
        Ok(store) => {
            tracing::info!(
                path = %path.display(),
                days = store.day_keys().len(),
                activities = store.activity_list.len(),
                "journal loaded"
            );
            (store, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "journal load failed, using defaults");
            if matches!(err, StoreError::Parse { .. }) {
                match backup_file(path) {
                    Ok(backup) => tracing::info!(backup = %backup.display(), "kept copy of unreadable journal"),
                    Err(e) => tracing::error!(error = %e, "could not back up unreadable journal"),
                }
            }
            (Store::default(), Some(err))
        }
    }
}

/// Render the journal document (pretty-printed, four-space indent)
pub fn serialize_store(store: &Store) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    store.serialize(&mut serializer)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the whole journal to disk
pub fn save_store<P: AsRef<Path>>(path: P, store: &Store) -> Result<(), StoreError> {
    let path = path.as_ref();

    let json = serialize_store(store).map_err(|e| StoreError::Save {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    atomic_write(path, &json).map_err(|e| StoreError::Save {
        path: path.to_path_buf(),
        message: format!("{:#}", e),
    })?;

    tracing::info!(path = %path.display(), bytes = json.len(), "journal saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DayKey, DEFAULT_ACTIVITY};
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_load_nonexistent_journal() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("journal.json");

        let store = load_store(&path).unwrap();
        assert_eq!(store, Store::default());

        let (store, err) = load_or_default(&path);
        assert_eq!(store.activity_list, vec![DEFAULT_ACTIVITY.to_string()]);
        assert!(err.is_none());
    }

    #[test]
    fn test_malformed_journal_falls_back_and_is_backed_up() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("journal.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let (store, err) = load_or_default(&path);
        assert_eq!(store, Store::default());
        let err = err.unwrap();
        assert!(err.is_load_failure());
        assert!(matches!(err, StoreError::Parse { .. }));

        let backups = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".bak."))
            .count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn test_wrong_shape_is_load_failure() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("journal.json");
        std::fs::write(&path, r#"{"tasks": "nope"}"#).unwrap();

        assert!(matches!(load_store(&path), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("journal.json");

        let mut store = Store::default();
        store.add_activity("Zumba");
        store.add_activity("Apnea");
        let d1 = day("2024-01-01");
        let d2 = day("2024-01-02");
        store.ensure_day(&d1);
        store.ensure_day(&d2);
        let time = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        store.add_task_at(&d1, "zeta", time);
        store.add_task_at(&d1, "alpha", time);
        store.add_task_at(&d1, "mid", time);
        store.set_activity_done(&d2, "Apnea", true);
        store.set_rating(&d2, 9);
        store.set_reading_title(&d1, "Dune");
        store.set_reading_pages(&d1, 120);

        save_store(&path, &store).unwrap();
        let loaded = load_store(&path).unwrap();

        assert_eq!(loaded, store);
        assert_eq!(
            loaded.activity_list,
            vec![
                DEFAULT_ACTIVITY.to_string(),
                "Zumba".to_string(),
                "Apnea".to_string()
            ]
        );
        let texts: Vec<&str> = loaded.tasks_for(&d1).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("journal.json");

        let mut store = Store {
            activity_list: Vec::new(),
            ..Store::default()
        };
        let d = day("2024-01-01");

        store.add_activity("Read");
        store.ensure_day(&d);
        assert_eq!(
            store.activities["2024-01-01"],
            crate::domain::store::ActivityMap::from([("Read".to_string(), false)])
        );

        assert!(store.add_task(&d, "Buy milk"));
        assert_eq!(store.tasks_for(&d).len(), 1);
        assert!(!store.tasks_for(&d)[0].completed);

        let id = store.tasks_for(&d)[0].id.clone();
        store.set_task_completed(&d, &id, true);
        assert!(store.tasks_for(&d)[0].completed);

        save_store(&path, &store).unwrap();
        let loaded = load_store(&path).unwrap();

        assert_eq!(loaded.tasks_for(&d), store.tasks_for(&d));
        assert_eq!(loaded.tasks_for(&d)[0].id, id);
        assert!(loaded.tasks_for(&d)[0].completed);
    }

    #[test]
    fn test_document_shape() {
        let mut store = Store::default();
        let d = day("2024-01-01");
        store.ensure_day(&d);
        store.set_reading_title(&d, "Emma");

        let json = serialize_store(&store).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["ratings"]["2024-01-01"], 5);
        assert_eq!(value["reading"]["2024-01-01"]["cim"], "Emma");
        assert_eq!(value["reading"]["2024-01-01"]["oldalak"], 0);
        assert_eq!(value["activities"]["2024-01-01"][DEFAULT_ACTIVITY], false);
        assert!(value["tasks"]["2024-01-01"].as_array().unwrap().is_empty());
        assert!(json.contains("\n    \"activity_list\""));
    }

    #[test]
    fn test_legacy_document_loads() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("journal.json");
        let legacy = r#"{
    "tasks": {
        "2024-05-01": [
            {"text": "Bevásárlás", "completed": true, "timestamp": "10:12"},
            {"text": "Mosás", "completed": false, "timestamp": "11:40"}
        ],
        "2024-05-02": [
            {"text": "Posta", "completed": false, "timestamp": "09:03"}
        ]
    },
    "activities": {"2024-05-01": {"Futás": true}},
    "ratings": {"2024-05-01": 7},
    "reading": {"2024-05-01": {"cim": "Egri csillagok", "oldalak": 25}},
    "activity_list": ["Futás"]
}"#;
        std::fs::write(&path, legacy).unwrap();

        let (store, err) = load_or_default(&path);
        assert!(err.is_none());

        let d = day("2024-05-01");
        assert_eq!(store.tasks_for(&d)[0].text, "Bevásárlás");
        assert!(store.tasks_for(&d)[0].completed);
        assert_eq!(store.tasks_for(&d)[1].timestamp, "11:40");

        let ids: Vec<&str> = store.tasks.values().flatten().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| !id.is_empty()));
        let unique: std::collections::HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 3);

        assert!(store.activity_done(&d, "Futás"));
        assert_eq!(store.rating_for(&d).value(), 7);
        assert_eq!(store.reading_for(&d).title, "Egri csillagok");
        assert_eq!(store.reading_for(&d).pages, 25);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("journal.json");

        let err = save_store(&path, &Store::default()).unwrap_err();
        assert!(!err.is_load_failure());
        assert!(matches!(err, StoreError::Save { .. }));
    }
}
