//! Recommendation engine.
//!
//! Maps a score tally to a short list of career suggestions:
//!
//! 1. Empty tally: a single "No data" sentinel.
//! 2. Rank categories by descending count; ties keep first-seen order
//!    (the `ScoreMap` iteration order).
//! 3. Take the top 2 categories.
//! 4. Mapped categories contribute up to 2 table entries in table order;
//!    unmapped ones contribute one generic suggestion.
//!
//! Always produces a non-empty result; there is no error path.

use crate::domain::{Recommendation, ScoreMap};

/// Categories ranked per recommendation pass.
const TOP_CATEGORIES: usize = 2;

/// Suggestions taken per category.
const PER_CATEGORY: usize = 2;

/// Built-in career suggestions per category.
///
/// Returns `None` for categories without a curated list; those fall back to
/// a generic suggestion synthesized from the category name.
fn table_entries(category: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match category {
        "logic" => Some(&[
            (
                "Software Developer",
                "Strong logical and problem-solving skills.",
            ),
            ("Data Analyst", "Good at working with data and numbers."),
        ]),
        "creative" => Some(&[
            ("Graphic Designer", "Strong visual and creative skills."),
            (
                "Content Creator",
                "Good at creative expression and communication.",
            ),
        ]),
        "people" => Some(&[
            ("HR / Manager", "Enjoys teamwork and people tasks."),
            ("Teacher / Trainer", "Good at communication and mentoring."),
        ]),
        "hands" => Some(&[(
            "Engineer / Technician",
            "Likes hands-on work and practical tasks.",
        )]),
        _ => None,
    }
}

fn item(title: impl Into<String>, reason: impl Into<String>) -> Recommendation {
    Recommendation {
        title: title.into(),
        reason: reason.into(),
    }
}

/// Produce career suggestions for a score tally.
pub fn recommend(scores: &ScoreMap) -> Vec<Recommendation> {
    if scores.is_empty() {
        return vec![item("No data", "No answers recorded.")];
    }

    let mut out = Vec::new();
    for (category, _) in scores.ranked().into_iter().take(TOP_CATEGORIES) {
        match table_entries(category) {
            Some(entries) => {
                for &(title, reason) in entries.iter().take(PER_CATEGORY) {
                    out.push(item(title, reason));
                }
            }
            None => out.push(item(
                format!("General: {category}"),
                "Based on your responses.",
            )),
        }
    }
    out
}
