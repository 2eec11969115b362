//! Domain types shared across the quiz pipeline.
//!
//! This module defines:
//!
//! - the question schema (`Question`)
//! - the per-category affirmative tally (`ScoreMap`, `Scored`)
//! - career suggestions (`Recommendation`)

pub mod types;

pub use types::*;
