//! Question acquisition.
//!
//! - resolution chain (store override -> fetch -> embedded default) (`source`)

pub mod source;

pub use source::*;
