//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use taskbranch::runner::{Condition, Context, ExecutionStrategy, Status, Task, Verbosity};
use tempfile::TempDir;

/// Create a temporary directory holding a task file with the given name
pub fn create_task_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

/// A context that prints nothing
pub fn silent_ctx() -> Context {
    Context::new().with_verbosity(Verbosity::Silent)
}

/// Strategy that records every call instead of spawning processes.
///
/// Tasks whose command is "fail" fail; conditions are satisfied when their
/// expected outcome is "yes".
#[derive(Debug, Default)]
pub struct RecordingStrategy {
    pub executed: Mutex<Vec<String>>,
    pub checked: Mutex<Vec<String>>,
}

impl RecordingStrategy {
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }

    pub fn checked(&self) -> Vec<String> {
        self.checked.lock().unwrap().clone()
    }
}

impl ExecutionStrategy for RecordingStrategy {
    fn execute(&self, task: &Task, _ctx: &Context) -> Status {
        self.executed.lock().unwrap().push(task.id.clone());
        Status::from(task.command != "fail")
    }

    fn check_condition(&self, condition: &Condition, _ctx: &Context) -> bool {
        self.checked
            .lock()
            .unwrap()
            .push(condition.check_command.clone());
        condition.expected_outcome == "yes"
    }
}
