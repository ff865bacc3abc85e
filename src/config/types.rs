//! Core configuration types
//!
//! This module defines the data structures that represent a task file as it
//! is decoded from disk, before any strategy has been bound.

use serde::{Deserialize, Serialize};

/// Top-level task file structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFile {
    /// Tasks in declaration order
    #[serde(default)]
    pub tasks: Vec<TaskDef>,

    /// Preview every task without spawning processes
    #[serde(default)]
    pub dry_run: bool,

    /// Interpreter used to run commands (e.g., ["sh", "-c"])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<Vec<String>>,
}

/// A task definition
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDef {
    /// Unique task identifier
    pub id: String,

    /// Command line to run
    #[serde(default)]
    pub command: String,

    /// IDs of tasks that must succeed first, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    /// Guard command; the task is skipped (and fails) when it exits non-zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execute_if: Option<String>,

    /// Output-matching precondition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionDef>,

    /// Strategy used to run the command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<StrategyKind>,
}

/// A condition definition
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionDef {
    /// Command whose trimmed output is compared
    pub check_command: String,

    /// Value the trimmed output must equal
    #[serde(default)]
    pub expected_outcome: String,

    /// Strategy used to run the check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<StrategyKind>,
}

/// Built-in execution strategies selectable from a task file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Run through the configured shell
    #[default]
    Shell,

    /// In-process placeholder that always succeeds
    Custom,
}
