//! Command implementations
//!
//! `run` and `check` return the process exit code so the sequence's
//! exit-code contract can pass through `main` untouched.

pub mod check;
pub mod completions;
pub mod run;
pub mod version;
