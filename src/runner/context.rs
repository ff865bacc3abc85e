//! Execution context for plan evaluation
//!
//! The context carries the read-only parameters shared by every step of an
//! evaluation: the dry-run flag, the interpreter, the working directory and
//! the console verbosity.

use colored::Colorize;
use std::env;
use std::path::PathBuf;

/// Default interpreter used to run command lines
pub const DEFAULT_INTERPRETER: &[&str] = &["sh", "-c"];

/// Execution context shared by all steps of one evaluation
#[derive(Debug, Clone)]
pub struct Context {
    /// Preview mode: no process is ever spawned
    pub dry_run: bool,

    /// Directory commands run in
    pub working_dir: PathBuf,

    /// Interpreter prefix (e.g., ["bash", "-c"])
    pub interpreter: Vec<String>,

    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            dry_run: false,
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            interpreter: DEFAULT_INTERPRETER.iter().map(|s| s.to_string()).collect(),
            verbosity: Verbosity::Normal,
        }
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Create a context with a specific working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set the interpreter
    pub fn with_interpreter(mut self, interpreter: Vec<String>) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "[INFO]".cyan(), message);
        }
    }

    /// Print what dry-run mode would have done
    pub fn print_dry_run(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "[DRY RUN]".yellow(), message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprintln!("{} {}", "[ERROR]".red(), message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{} {}", "[DEBUG]".dimmed(), message);
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
