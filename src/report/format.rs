//! String builders for the `results` and `questions` subcommands.

use crate::domain::{Question, Recommendation, ScoreMap};

/// Format the results view: score tally, answered count, suggestions.
pub fn format_results(
    scores: &ScoreMap,
    answered: usize,
    recommendations: &[Recommendation],
) -> String {
    let mut out = String::new();

    out.push_str("=== careerq - Results ===\n");
    out.push_str(&format!("Answered (yes): {answered}\n"));

    if scores.is_empty() {
        out.push_str("Scores: (none)\n");
    } else {
        out.push_str("Scores:\n");
        for (category, count) in scores.ranked() {
            out.push_str(&format!("  {category:<12} {count}\n"));
        }
    }

    out.push_str("\nSuggestions:\n");
    for rec in recommendations {
        out.push_str(&format!("- {}\n    {}\n", rec.title, rec.reason));
    }

    out
}

/// Format the resolved question set with display numbering.
pub fn format_questions(questions: &[Question]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} question(s):\n", questions.len()));
    for (i, q) in questions.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. [{}] {} ({})\n",
            i + 1,
            q.category,
            q.text,
            q.options.join(" / ")
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_questions;
    use crate::recommend::recommend;

    #[test]
    fn results_list_scores_in_rank_order() {
        let scores: ScoreMap = [("people".to_string(), 1), ("logic".to_string(), 3)]
            .into_iter()
            .collect();
        let recs = recommend(&scores);
        let text = format_results(&scores, 4, &recs);

        assert!(text.contains("Answered (yes): 4"));
        let logic_at = text.find("logic").unwrap();
        let people_at = text.find("people").unwrap();
        assert!(logic_at < people_at);
        assert!(text.contains("Software Developer"));
    }

    #[test]
    fn empty_results_render_the_sentinel() {
        let scores = ScoreMap::new();
        let recs = recommend(&scores);
        let text = format_results(&scores, 0, &recs);
        assert!(text.contains("Scores: (none)"));
        assert!(text.contains("No data"));
        assert!(text.contains("No answers recorded."));
    }

    #[test]
    fn questions_are_numbered_from_one() {
        let text = format_questions(&default_questions());
        assert!(text.starts_with("5 question(s):"));
        assert!(text.contains("  1. [logic] Do you enjoy solving logical problems? (Yes / No)"));
        assert!(text.contains("  5. [hands]"));
    }
}
