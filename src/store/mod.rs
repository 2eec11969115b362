//! File-backed key-value store.
//!
//! Stands in for the browser's localStorage: string keys, JSON-encoded
//! values, one file per key under a data directory. This is the only channel
//! between the quiz view (which writes scores) and the results view (which
//! reads them on a later invocation).
//!
//! Access is read-then-write with no locking. The tool is single-user and
//! single-process, so concurrent writers are out of scope.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Key holding an admin-saved question set that overrides the bundled one.
pub const KEY_QUESTIONS: &str = "ca_questions";
/// Key holding the serialized score map from the last submitted quiz.
pub const KEY_RESULTS: &str = "ca_results";
/// Key holding the answered-question count from the last submitted quiz.
pub const KEY_LAST_QUESTION_COUNT: &str = "ca_last_question_count";

/// Directory used when neither `--data-dir` nor `CAREERQ_DATA_DIR` is set.
pub const DEFAULT_DATA_DIR: &str = ".careerq";

#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read the raw JSON text stored under `key`.
    ///
    /// Missing or unreadable keys read as absent; the caller decides whether
    /// the text parses.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    /// Read and decode the value stored under `key`.
    ///
    /// Returns `None` both when the key is absent and when the stored text
    /// fails to decode; use [`get_raw`](Self::get_raw) to distinguish.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key)?;
        serde_json::from_str(&raw).ok()
    }

    /// Encode `value` as JSON and store it under `key`, creating the data
    /// directory on first write.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::storage(format!(
                "Failed to create data directory '{}': {e}",
                self.dir.display()
            ))
        })?;
        let text = serde_json::to_string(value)
            .map_err(|e| AppError::storage(format!("Failed to encode value for '{key}': {e}")))?;
        fs::write(self.key_path(key), text)
            .map_err(|e| AppError::storage(format!("Failed to write key '{key}': {e}")))?;
        Ok(())
    }

    /// Remove `key` if present. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) {
        let _ = fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScoreMap;

    fn temp_store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn absent_key_reads_as_none() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get_raw(KEY_RESULTS), None);
        assert_eq!(store.get::<ScoreMap>(KEY_RESULTS), None);
    }

    #[test]
    fn score_map_round_trips() {
        let (_dir, store) = temp_store();

        let mut scores = ScoreMap::new();
        scores.bump("logic");
        scores.bump("logic");
        scores.bump("people");

        store.set(KEY_RESULTS, &scores).unwrap();
        let back: ScoreMap = store.get(KEY_RESULTS).unwrap();
        assert_eq!(back, scores);
    }

    #[test]
    fn answered_count_round_trips_as_plain_integer() {
        let (_dir, store) = temp_store();
        store.set(KEY_LAST_QUESTION_COUNT, &3usize).unwrap();
        assert_eq!(store.get_raw(KEY_LAST_QUESTION_COUNT).unwrap(), "3");
        assert_eq!(store.get::<usize>(KEY_LAST_QUESTION_COUNT), Some(3));
    }

    #[test]
    fn malformed_value_decodes_as_none_but_raw_survives() {
        let (_dir, store) = temp_store();
        store.set(KEY_RESULTS, &"not a map").unwrap();
        assert_eq!(store.get::<ScoreMap>(KEY_RESULTS), None);
        assert!(store.get_raw(KEY_RESULTS).is_some());
    }

    #[test]
    fn remove_is_idempotent() {
        let (_dir, store) = temp_store();
        store.set(KEY_QUESTIONS, &Vec::<String>::new()).unwrap();
        store.remove(KEY_QUESTIONS);
        store.remove(KEY_QUESTIONS);
        assert_eq!(store.get_raw(KEY_QUESTIONS), None);
    }
}
