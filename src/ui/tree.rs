//! Declared task tree rendering
//!
//! Walks the declared tasks, not the compiled plan, and never runs anything.

use crate::runner::{Task, TaskSet};
use std::fmt::{self, Write};

/// Every task with its dependencies expanded depth-first
#[derive(Debug, Clone, Copy)]
pub struct TaskTree<'a>(pub &'a TaskSet);

impl fmt::Display for TaskTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tasks:")?;
        let mut path = Vec::new();
        for task in &self.0.tasks {
            render_task(f, task, "", true, self.0, &mut path)?;
        }
        Ok(())
    }
}

/// Render the task tree as a string
pub fn render_task_tree(task_set: &TaskSet) -> String {
    TaskTree(task_set).to_string()
}

/// Print the task tree to stdout
pub fn print_task_tree(task_set: &TaskSet) {
    print!("{}", TaskTree(task_set));
}

fn render_task<'a, W: Write>(
    out: &mut W,
    task: &'a Task,
    prefix: &str,
    is_last: bool,
    task_set: &'a TaskSet,
    path: &mut Vec<&'a str>,
) -> fmt::Result {
    let (branch, indent) = if is_last {
        ("└─── ", "    ")
    } else {
        ("├─── ", "│   ")
    };

    if path.contains(&task.id.as_str()) {
        return writeln!(out, "{}{}ID: {} (cycle)", prefix, branch, task.id);
    }

    writeln!(out, "{}{}ID: {}", prefix, branch, task.id)?;
    let prefix = format!("{}{}", prefix, indent);
    if !task.command.is_empty() {
        writeln!(out, "{}    Command: {}", prefix, task.command)?;
    }
    if !task.depends_on.is_empty() {
        writeln!(out, "{}    Depends On: {}", prefix, task.depends_on.join(", "))?;
    }
    if let Some(guard) = &task.execute_if {
        writeln!(out, "{}    Execute If: {}", prefix, guard)?;
    }
    if let Some(condition) = &task.condition {
        writeln!(out, "{}    Condition:", prefix)?;
        writeln!(out, "{}        Check Command: {}", prefix, condition.check_command)?;
        writeln!(out, "{}        Expected Outcome: {}", prefix, condition.expected_outcome)?;
    }

    let deps: Vec<&Task> = task
        .depends_on
        .iter()
        .filter_map(|dep| task_set.find(dep))
        .collect();

    path.push(task.id.as_str());
    for (idx, dep) in deps.iter().copied().enumerate() {
        render_task(out, dep, &prefix, idx == deps.len() - 1, task_set, path)?;
    }
    path.pop();

    Ok(())
}
