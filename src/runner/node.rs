//! Executable plan nodes
//!
//! A compiled plan is a tree of two combinators over two kinds of leaves:
//!
//! - `Sequence` ticks children left to right and fails at the first failure.
//! - `Selector` ticks children left to right and succeeds at the first success.
//! - `Condition` checks a task's condition through its bound strategy.
//! - `Action` runs a task, honoring its `executeIf` guard and dry-run mode.
//!
//! Nodes are shared through `Arc`, so a task used by several chains is
//! compiled once.

use crate::runner::command::check_command;
use crate::runner::{Condition, Context, Status, Task};
use std::sync::Arc;

/// Shared handle to a compiled node
pub type NodeRef = Arc<Node>;

#[derive(Debug)]
pub enum Node {
    /// AND: all children must succeed
    Sequence(Vec<NodeRef>),

    /// OR: one succeeding child is enough
    Selector(Vec<NodeRef>),

    /// Condition gate of a task
    Condition(ConditionStep),

    /// The task itself
    Action(ActionStep),
}

impl Node {
    pub fn sequence(children: Vec<NodeRef>) -> NodeRef {
        Arc::new(Node::Sequence(children))
    }

    pub fn selector(children: Vec<NodeRef>) -> NodeRef {
        Arc::new(Node::Selector(children))
    }

    /// Evaluate this node and its children
    pub fn tick(&self, ctx: &Context) -> Status {
        match self {
            Node::Sequence(children) => {
                for child in children {
                    if child.tick(ctx) == Status::Failure {
                        return Status::Failure;
                    }
                }
                Status::Success
            }
            Node::Selector(children) => {
                for child in children {
                    if child.tick(ctx) == Status::Success {
                        return Status::Success;
                    }
                }
                Status::Failure
            }
            Node::Condition(step) => step.tick(ctx),
            Node::Action(step) => step.tick(ctx),
        }
    }

    /// Number of leaf steps reachable from this node, counting shared nodes
    /// once per occurrence
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Sequence(children) | Node::Selector(children) => {
                children.iter().map(|child| child.leaf_count()).sum()
            }
            Node::Condition(_) | Node::Action(_) => 1,
        }
    }
}

/// Leaf that checks a task's condition
#[derive(Debug)]
pub struct ConditionStep {
    pub task_id: String,
    pub condition: Condition,
}

impl ConditionStep {
    pub fn tick(&self, ctx: &Context) -> Status {
        let satisfied = self.condition.strategy.check_condition(&self.condition, ctx);
        if !satisfied {
            ctx.print_debug(&format!("Condition not satisfied for task {}", self.task_id));
        }
        Status::from(satisfied)
    }
}

/// Leaf that runs a task
#[derive(Debug)]
pub struct ActionStep {
    pub task: Task,
}

impl ActionStep {
    pub fn tick(&self, ctx: &Context) -> Status {
        let task = &self.task;

        if let Some(guard) = &task.execute_if {
            if ctx.dry_run {
                ctx.print_dry_run(&format!("Would check executeIf condition: {}", guard));
            } else {
                ctx.print_info(&format!("Checking executeIf condition: {}", guard));
                let passed = match check_command(guard, ctx) {
                    Ok(passed) => passed,
                    Err(e) => {
                        ctx.print_error(&e.to_string());
                        false
                    }
                };
                if !passed {
                    ctx.print_info(&format!("executeIf condition not met for task {}", task.id));
                    return Status::Failure;
                }
            }
        }

        if ctx.dry_run {
            ctx.print_dry_run(&format!("Would execute: {}", task.command));
            return Status::Success;
        }

        let status = task.strategy.execute(task, ctx);
        ctx.print_debug(&format!("Task {} finished: {}", task.id, status));
        status
    }
}
