//! Command-line parsing for the career-assessment quiz.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the loading/scoring/recommending code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "careerq", version, about = "Career-assessment quiz (terminal)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Take the quiz in a paged terminal UI.
    ///
    /// This is the default: plain `careerq` behaves like `careerq quiz`.
    Quiz(QuizArgs),
    /// Print the stored scores and career suggestions (the results page).
    Results(CommonArgs),
    /// Print the resolved question set (override -> bundled -> embedded).
    Questions(CommonArgs),
    /// Score answers from a JSON file, persist them, and print the results.
    ///
    /// Useful for scripting: the file holds an array with one entry per
    /// question index, each either a selected option label or null.
    Score(ScoreArgs),
}

/// Options shared by every subcommand.
#[derive(Debug, Parser, Clone)]
pub struct CommonArgs {
    /// Key-value store directory (falls back to CAREERQ_DATA_DIR, then ".careerq").
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Question resource: an http(s) URL or a local file path
    /// (falls back to CAREERQ_QUESTIONS, then "data/questions.json").
    #[arg(long, value_name = "URL|PATH")]
    pub source: Option<String>,
}

/// Options for the interactive quiz.
#[derive(Debug, Parser, Clone)]
pub struct QuizArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Questions shown per page.
    #[arg(long, default_value_t = 4)]
    pub page_size: usize,
}

/// Options for scripted scoring.
#[derive(Debug, Parser, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Answers file: JSON array of option labels (string or null) by question index.
    #[arg(long, value_name = "JSON")]
    pub answers: PathBuf,
}
