//! Question-source resolution.
//!
//! The active question set is resolved through an ordered chain, first
//! success wins:
//!
//! 1. admin override saved in the key-value store (`ca_questions`)
//! 2. the bundled resource, fetched once (HTTP URL or local file path)
//! 3. an embedded five-question default
//!
//! The final leg cannot fail, so [`load`] is infallible: everything
//! downstream operates on a plain `Vec<Question>` and never sees this
//! boundary. A fetch gets exactly one attempt with no retry; there is no
//! timeout beyond the client default, so a hung request stalls loading (a
//! known limitation of the single-shot design).

use std::fs;

use reqwest::blocking::Client;

use crate::domain::Question;
use crate::error::AppError;
use crate::store::{KEY_QUESTIONS, LocalStore};

/// Bundled resource used when `CAREERQ_QUESTIONS` / `--source` is unset.
pub const DEFAULT_SOURCE: &str = "data/questions.json";

/// Environment variable overriding the bundled resource location.
pub const ENV_QUESTIONS: &str = "CAREERQ_QUESTIONS";

/// Environment variable overriding the key-value store directory.
pub const ENV_DATA_DIR: &str = "CAREERQ_DATA_DIR";

/// Resolve the active question set. Never fails.
pub fn load(store: &LocalStore, source: &str) -> Vec<Question> {
    // 1) Admin override. A stored value that fails to parse is corrupt
    //    cache: drop the key so the next run skips straight to the fetch.
    if let Some(raw) = store.get_raw(KEY_QUESTIONS) {
        match serde_json::from_str::<Vec<Question>>(&raw) {
            Ok(questions) if !questions.is_empty() => return questions,
            Ok(_) => {}
            Err(_) => store.remove(KEY_QUESTIONS),
        }
    }

    // 2) Bundled resource, one attempt.
    if let Ok(questions) = fetch_questions(source) {
        if !questions.is_empty() {
            return questions;
        }
    }

    // 3) Answer of last resort.
    default_questions()
}

/// Fetch the bundled question resource.
///
/// `http(s)` sources are fetched over the network; anything else is read as
/// a local file path.
pub fn fetch_questions(source: &str) -> Result<Vec<Question>, AppError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_remote(source)
    } else {
        let text = fs::read_to_string(source).map_err(|e| {
            AppError::config(format!("Failed to read question file '{source}': {e}"))
        })?;
        serde_json::from_str(&text)
            .map_err(|e| AppError::config(format!("Invalid question file '{source}': {e}")))
    }
}

fn fetch_remote(url: &str) -> Result<Vec<Question>, AppError> {
    let resp = Client::new()
        .get(url)
        .send()
        .map_err(|e| AppError::config(format!("Question fetch failed: {e}")))?;

    if !resp.status().is_success() {
        return Err(AppError::config(format!(
            "Question fetch failed with status {}.",
            resp.status()
        )));
    }

    resp.json()
        .map_err(|e| AppError::config(format!("Failed to parse question response: {e}")))
}

/// The embedded default question set.
///
/// Five yes/no questions covering the four built-in categories. This is the
/// set returned when both the override and the fetch come up empty.
pub fn default_questions() -> Vec<Question> {
    fn q(text: &str, category: &str) -> Question {
        Question {
            text: text.to_string(),
            options: vec!["Yes".to_string(), "No".to_string()],
            category: category.to_string(),
        }
    }

    vec![
        q("Do you enjoy solving logical problems?", "logic"),
        q("Do you like designing or creating visuals?", "creative"),
        q("Do you enjoy working with data and numbers?", "logic"),
        q("Do you prefer teamwork and communication tasks?", "people"),
        q(
            "Do you enjoy working with your hands or building things?",
            "hands",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        (dir, store)
    }

    /// Path that neither exists nor resolves, forcing the fetch leg to fail.
    const DEAD_SOURCE: &str = "does/not/exist/questions.json";

    #[test]
    fn falls_back_to_embedded_default_when_everything_fails() {
        let (_dir, store) = temp_store();
        let questions = load(&store, DEAD_SOURCE);

        let categories: Vec<&str> = questions.iter().map(|q| q.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["logic", "creative", "logic", "people", "hands"]
        );
        for q in &questions {
            assert_eq!(q.options, vec!["Yes", "No"]);
        }
    }

    #[test]
    fn stored_override_wins_over_fetch() {
        let (_dir, store) = temp_store();
        let override_set = vec![Question {
            text: "Do you enjoy tuning engines?".to_string(),
            options: vec!["Yes".to_string(), "No".to_string()],
            category: "hands".to_string(),
        }];
        store.set(KEY_QUESTIONS, &override_set).unwrap();

        assert_eq!(load(&store, DEAD_SOURCE), override_set);
    }

    #[test]
    fn corrupt_override_is_removed_and_skipped() {
        let (_dir, store) = temp_store();
        store.set(KEY_QUESTIONS, &"{{{not json").unwrap();
        // The stored value is a JSON string, not a question list.
        let questions = load(&store, DEAD_SOURCE);
        assert_eq!(questions.len(), 5);
        assert_eq!(store.get_raw(KEY_QUESTIONS), None);
    }

    #[test]
    fn empty_override_falls_through_without_removal() {
        let (_dir, store) = temp_store();
        store.set(KEY_QUESTIONS, &Vec::<Question>::new()).unwrap();
        let questions = load(&store, DEAD_SOURCE);
        assert_eq!(questions.len(), 5);
        assert!(store.get_raw(KEY_QUESTIONS).is_some());
    }

    #[test]
    fn local_file_source_is_fetched() {
        let (_dir, store) = temp_store();
        let file = tempfile::NamedTempFile::new().unwrap();
        let set = vec![Question {
            text: "Do you enjoy writing?".to_string(),
            options: vec!["Yes".to_string(), "No".to_string()],
            category: "creative".to_string(),
        }];
        fs::write(file.path(), serde_json::to_string(&set).unwrap()).unwrap();

        let loaded = load(&store, file.path().to_str().unwrap());
        assert_eq!(loaded, set);
    }

    #[test]
    fn malformed_file_source_falls_back() {
        let (_dir, store) = temp_store();
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "not json at all").unwrap();

        let loaded = load(&store, file.path().to_str().unwrap());
        assert_eq!(loaded.len(), 5);
    }
}
