//! Infrastructure layer
//!
//! Concrete implementations of external concerns: configuration on disk,
//! child process execution and the per-VCS backends.

pub mod filesystem;
pub mod process;
pub mod vcs;
