//! Taskbranch - a dependency-ordered task runner
//!
//! Taskbranch reads a declared set of tasks (shell commands with optional
//! gates and dependencies), compiles them into a small behavior tree of
//! sequences and selectors, and walks that tree with short-circuit
//! success/failure semantics. A dry-run mode previews the work without
//! spawning any process.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod ui;

// Re-export commonly used types
pub use error::{Result, TaskbranchError};

/// Current version of Taskbranch
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
