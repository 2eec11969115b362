//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the question set
//! - runs the quiz TUI or the scripted scoring path
//! - prints results/question listings
//! - persists scores through the key-value store

use std::fs;

use clap::Parser;

use crate::cli::{Command, CommonArgs, QuizArgs, ScoreArgs};
use crate::error::AppError;

pub mod pipeline;

use pipeline::QuizContext;

/// Entry point for the `careerq` binary.
pub fn run() -> Result<(), AppError> {
    // Pick up CAREERQ_* settings from a .env file, if one exists.
    dotenvy::dotenv().ok();

    // We want `careerq` and `careerq --page-size 6` to behave like
    // `careerq quiz ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Quiz(args) => handle_quiz(args),
        Command::Results(args) => handle_results(args),
        Command::Questions(args) => handle_questions(args),
        Command::Score(args) => handle_score(args),
    }
}

fn handle_quiz(args: QuizArgs) -> Result<(), AppError> {
    let ctx = QuizContext::from_args(&args.common);
    crate::tui::run(&ctx, args.page_size.max(1))
}

fn handle_results(args: CommonArgs) -> Result<(), AppError> {
    let ctx = QuizContext::from_args(&args);
    let scored = pipeline::stored_results(&ctx.store);
    let recommendations = crate::recommend::recommend(&scored.scores);
    println!(
        "{}",
        crate::report::format_results(&scored.scores, scored.answered, &recommendations)
    );
    Ok(())
}

fn handle_questions(args: CommonArgs) -> Result<(), AppError> {
    let ctx = QuizContext::from_args(&args);
    let questions = ctx.load_questions();
    println!("{}", crate::report::format_questions(&questions));
    Ok(())
}

fn handle_score(args: ScoreArgs) -> Result<(), AppError> {
    let ctx = QuizContext::from_args(&args.common);
    let questions = ctx.load_questions();

    let text = fs::read_to_string(&args.answers).map_err(|e| {
        AppError::config(format!(
            "Failed to read answers file '{}': {e}",
            args.answers.display()
        ))
    })?;
    let selections: Vec<Option<String>> = serde_json::from_str(&text).map_err(|e| {
        AppError::config(format!(
            "Invalid answers file '{}': expected a JSON array of labels or nulls: {e}",
            args.answers.display()
        ))
    })?;

    let scored = pipeline::submit(&ctx.store, &questions, |i| {
        selections.get(i).and_then(|s| s.as_deref())
    })?;

    let recommendations = crate::recommend::recommend(&scored.scores);
    println!(
        "{}",
        crate::report::format_results(&scored.scores, scored.answered, &recommendations)
    );
    Ok(())
}

/// Rewrite argv so `careerq` defaults to `careerq quiz`.
///
/// Rules:
/// - `careerq`                         -> `careerq quiz`
/// - `careerq --page-size 6 ...`       -> `careerq quiz --page-size 6 ...`
/// - `careerq --help/--version/-h`     -> unchanged (top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("quiz".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "quiz" | "results" | "questions" | "score");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "quiz flags".
    if arg1.starts_with('-') {
        argv.insert(1, "quiz".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_quiz() {
        assert_eq!(rewrite_args(args(&["careerq"])), args(&["careerq", "quiz"]));
    }

    #[test]
    fn leading_flag_is_treated_as_quiz_flag() {
        assert_eq!(
            rewrite_args(args(&["careerq", "--page-size", "6"])),
            args(&["careerq", "quiz", "--page-size", "6"])
        );
    }

    #[test]
    fn explicit_subcommands_pass_through() {
        for sub in ["quiz", "results", "questions", "score"] {
            assert_eq!(
                rewrite_args(args(&["careerq", sub])),
                args(&["careerq", sub])
            );
        }
    }

    #[test]
    fn help_and_version_pass_through() {
        for flag in ["-h", "--help", "-V", "--version", "help"] {
            assert_eq!(
                rewrite_args(args(&["careerq", flag])),
                args(&["careerq", flag])
            );
        }
    }
}
