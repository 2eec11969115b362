//! Shared quiz pipeline used by both the CLI subcommands and the TUI.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! resolve questions -> score selections -> persist -> recommend
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::cli::CommonArgs;
use crate::data;
use crate::domain::{Question, ScoreMap, Scored};
use crate::error::AppError;
use crate::store::{DEFAULT_DATA_DIR, KEY_LAST_QUESTION_COUNT, KEY_RESULTS, LocalStore};

/// Resolved runtime context: where the store lives and where questions come
/// from. Precedence for both is flag, then environment, then default.
#[derive(Debug, Clone)]
pub struct QuizContext {
    pub store: LocalStore,
    pub source: String,
}

impl QuizContext {
    pub fn from_args(args: &CommonArgs) -> Self {
        let dir = args
            .data_dir
            .clone()
            .or_else(|| std::env::var(data::ENV_DATA_DIR).ok().map(Into::into))
            .unwrap_or_else(|| DEFAULT_DATA_DIR.into());
        let source = args
            .source
            .clone()
            .or_else(|| std::env::var(data::ENV_QUESTIONS).ok())
            .unwrap_or_else(|| data::DEFAULT_SOURCE.to_string());
        Self {
            store: LocalStore::new(dir),
            source,
        }
    }

    /// Resolve the active question set through the fallback chain.
    pub fn load_questions(&self) -> Vec<Question> {
        data::load(&self.store, &self.source)
    }
}

/// Score the selections and persist the outcome.
///
/// Scoring itself is pure; this is the one place that writes `ca_results`
/// and `ca_last_question_count`, so the results view on a later invocation
/// sees exactly what was submitted here.
pub fn submit<'a, F>(
    store: &LocalStore,
    questions: &[Question],
    selection: F,
) -> Result<Scored, AppError>
where
    F: Fn(usize) -> Option<&'a str>,
{
    let scored = crate::score::score_answers(questions, selection);
    store.set(KEY_RESULTS, &scored.scores)?;
    store.set(KEY_LAST_QUESTION_COUNT, &scored.answered)?;
    Ok(scored)
}

/// Read back the persisted outcome for the results view.
///
/// Missing or unparsable stored data reads as an empty tally, which the
/// recommendation engine turns into the "No data" sentinel.
pub fn stored_results(store: &LocalStore) -> Scored {
    Scored {
        scores: store.get::<ScoreMap>(KEY_RESULTS).unwrap_or_default(),
        answered: store.get::<usize>(KEY_LAST_QUESTION_COUNT).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_questions;

    fn temp_store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn submit_persists_what_results_reads() {
        let (_dir, store) = temp_store();
        let questions = default_questions();
        let selections = [Some("Yes"), Some("No"), Some("yes"), None, Some("Yes")];

        let scored = submit(&store, &questions, |i| {
            selections.get(i).copied().flatten()
        })
        .unwrap();

        let back = stored_results(&store);
        assert_eq!(back, scored);
        assert_eq!(back.scores.get("logic"), Some(2));
        assert_eq!(back.answered, 3);
    }

    #[test]
    fn missing_results_read_as_empty() {
        let (_dir, store) = temp_store();
        let back = stored_results(&store);
        assert!(back.scores.is_empty());
        assert_eq!(back.answered, 0);
    }

    #[test]
    fn corrupt_results_read_as_empty() {
        let (_dir, store) = temp_store();
        store.set(KEY_RESULTS, &vec![1, 2, 3]).unwrap();
        store.set(KEY_LAST_QUESTION_COUNT, &"three").unwrap();

        let back = stored_results(&store);
        assert!(back.scores.is_empty());
        assert_eq!(back.answered, 0);
        assert_eq!(crate::recommend::recommend(&back.scores)[0].title, "No data");
    }
}
