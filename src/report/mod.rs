//! Formatted terminal output.
//!
//! Formatting lives in one place so:
//! - the loading/scoring/recommending code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;
