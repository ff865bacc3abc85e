//! Error types for Taskbranch

use std::io;
use thiserror::Error;

/// Result type alias for Taskbranch operations
pub type Result<T> = std::result::Result<T, TaskbranchError>;

/// Main error type for Taskbranch
#[derive(Error, Debug)]
pub enum TaskbranchError {
    /// Task definition errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Process execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing errors
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Task definition errors. All of these are fatal: nothing runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not found. Please make sure the file exists.")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Task at position {0} has an empty id")]
    EmptyTaskId(usize),

    #[error("Task '{0}' is defined more than once")]
    DuplicateTask(String),
}

/// Errors from the process execution primitive
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("No interpreter configured to run '{0}'")]
    EmptyInterpreter(String),

    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;
