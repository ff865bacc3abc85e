//! Task execution engine
//!
//! This module holds the task model, the strategies that run commands and
//! check conditions, the plan builder that turns a task set into a tree of
//! sequences and selectors, and the evaluator that walks it.

pub mod command;
pub mod context;
pub mod node;
pub mod plan;
pub mod status;
pub mod strategy;
pub mod task;

// Re-export main types
pub use command::*;
pub use context::*;
pub use node::*;
pub use plan::*;
pub use status::*;
pub use strategy::*;
pub use task::*;
