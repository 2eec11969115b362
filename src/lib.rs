//! `careerq` library crate.
//!
//! The binary (`careerq`) is a thin wrapper around this library so that:
//!
//! - core logic (loading, scoring, recommending) is testable without a terminal
//! - the TUI and the scripting subcommands share one pipeline
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod recommend;
pub mod report;
pub mod score;
pub mod store;
pub mod tui;
