//! Scoring engine.
//!
//! A pure function of the question list and the current selections: no store
//! access, no UI access. The presenter hands in selections as a plain
//! `index -> Option<&str>` lookup, and the caller decides what to do with
//! the result (the pipeline persists it).

use crate::domain::{Question, Scored};

/// True when `label` counts as an affirmative answer.
///
/// Matching is case-insensitive on the literal label, so "Yes", "yes" and
/// "YES" all score; "No" and anything else do not.
pub fn is_affirmative(label: &str) -> bool {
    label.eq_ignore_ascii_case("yes")
}

/// Tally affirmative answers per category.
///
/// For each question, in index order: an affirmative selection bumps the
/// question's category count and the answered count. An absent selection, or
/// any non-affirmative label, contributes to neither. The accumulation is
/// commutative, so permuting questions (with their selections) yields an
/// equal tally.
pub fn score_answers<'a, F>(questions: &[Question], selection: F) -> Scored
where
    F: Fn(usize) -> Option<&'a str>,
{
    let mut scored = Scored::default();
    for (i, question) in questions.iter().enumerate() {
        let Some(label) = selection(i) else { continue };
        if is_affirmative(label) {
            scored.scores.bump(&question.category);
            scored.answered += 1;
        }
    }
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_questions;
    use crate::domain::ScoreMap;

    fn selections_lookup(selections: &[Option<&'static str>]) -> impl Fn(usize) -> Option<&'static str> {
        let selections = selections.to_vec();
        move |i| selections.get(i).copied().flatten()
    }

    #[test]
    fn affirmative_match_is_case_insensitive() {
        assert!(is_affirmative("Yes"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YES"));
        assert!(!is_affirmative("No"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("maybe"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn tallies_affirmatives_per_category() {
        let questions = default_questions();
        // logic, creative, logic, people, hands
        let scored = score_answers(
            &questions,
            selections_lookup(&[Some("Yes"), Some("No"), Some("yes"), None, Some("YES")]),
        );

        assert_eq!(scored.answered, 3); // logic x2 + hands x1
        assert_eq!(scored.scores.get("logic"), Some(2));
        assert_eq!(scored.scores.get("hands"), Some(1));
        assert_eq!(scored.scores.get("creative"), None);
        assert_eq!(scored.scores.get("people"), None);
    }

    #[test]
    fn answered_counts_only_affirmatives() {
        let questions = default_questions();
        // Every question has a selection, but only one is affirmative.
        let scored = score_answers(
            &questions,
            selections_lookup(&[Some("No"), Some("No"), Some("Yes"), Some("No"), Some("No")]),
        );
        assert_eq!(scored.answered, 1);
        assert!(scored.answered <= questions.len());
    }

    #[test]
    fn no_selections_yield_empty_tally() {
        let questions = default_questions();
        let scored = score_answers(&questions, |_| None);
        assert!(scored.scores.is_empty());
        assert_eq!(scored.answered, 0);
    }

    #[test]
    fn scoring_is_commutative_over_question_order() {
        let questions = default_questions();
        let selections = [Some("Yes"), Some("No"), Some("yes"), None, Some("YES")];
        let baseline = score_answers(&questions, selections_lookup(&selections));

        // Reverse both the questions and their paired selections.
        let reversed_questions: Vec<_> = questions.iter().rev().cloned().collect();
        let reversed_selections: Vec<_> = selections.iter().rev().copied().collect();
        let reversed = score_answers(&reversed_questions, selections_lookup(&reversed_selections));

        assert_eq!(reversed.answered, baseline.answered);
        // Insertion order differs, so compare as unordered maps.
        let as_sorted = |m: &ScoreMap| {
            let mut v: Vec<(String, u32)> =
                m.iter().map(|(c, n)| (c.to_string(), n)).collect();
            v.sort();
            v
        };
        assert_eq!(as_sorted(&reversed.scores), as_sorted(&baseline.scores));
    }
}
