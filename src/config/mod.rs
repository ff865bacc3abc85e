//! Task file parsing and discovery
//!
//! This module handles locating taskbranch task files and decoding them
//! from JSON or YAML into plain definition types.

pub mod parse;
pub mod types;

// Re-export main types
pub use parse::*;
pub use types::*;
