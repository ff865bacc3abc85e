//! Execution strategies
//!
//! A strategy decides how a task's command is run and how a condition is
//! checked. Strategies are bound to tasks and conditions when the task set
//! is built and never change afterwards.

use crate::config::StrategyKind;
use crate::runner::command::{capture_command, describe_status, execute_command, COMMAND_NOT_FOUND};
use crate::runner::{Condition, Context, Status, Task};
use std::fmt;
use std::sync::Arc;

/// How to run a task and how to check a condition.
///
/// Implementations must not have side effects when `ctx.dry_run` is set.
pub trait ExecutionStrategy: fmt::Debug + Send + Sync {
    /// Run the task's command
    fn execute(&self, task: &Task, ctx: &Context) -> Status;

    /// Decide whether a condition is satisfied
    fn check_condition(&self, condition: &Condition, ctx: &Context) -> bool;
}

/// Shared handle to a bound strategy
pub type StrategyRef = Arc<dyn ExecutionStrategy>;

/// Runs commands as OS processes through the context interpreter
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellStrategy;

impl ExecutionStrategy for ShellStrategy {
    fn execute(&self, task: &Task, ctx: &Context) -> Status {
        if ctx.dry_run {
            ctx.print_dry_run(&format!("Would execute: {}", task.command));
            return Status::Success;
        }

        ctx.print_info(&format!("Executing: {}", task.command));
        match execute_command(&task.command, ctx) {
            Ok(status) if status.success() => Status::Success,
            Ok(status) => {
                ctx.print_error(&format!(
                    "Error executing task {}: {}",
                    task.id,
                    describe_status(&status)
                ));
                Status::Failure
            }
            Err(e) => {
                ctx.print_error(&format!("Error executing task {}: {}", task.id, e));
                Status::Failure
            }
        }
    }

    fn check_condition(&self, condition: &Condition, ctx: &Context) -> bool {
        if ctx.dry_run {
            ctx.print_dry_run(&format!("Checking condition: {}", condition.check_command));
            return true;
        }

        ctx.print_info(&format!("Checking condition: {}", condition.check_command));
        let captured = match capture_command(&condition.check_command, ctx) {
            Ok(captured) => captured,
            Err(e) => {
                ctx.print_error(&format!("Condition check failed: {}", e));
                return false;
            }
        };

        let output = captured.output.trim();
        if captured.status.code() == Some(COMMAND_NOT_FOUND) {
            ctx.print_error(&format!(
                "Condition command not found: {}, treating as failure to satisfy condition",
                condition.check_command
            ));
            return false;
        }
        if !captured.status.success() {
            ctx.print_error(&format!(
                "Condition check failed: {}, Output: {}",
                describe_status(&captured.status),
                output
            ));
            return false;
        }

        let satisfied = output == condition.expected_outcome;
        if !satisfied {
            ctx.print_debug(&format!(
                "Condition output '{}' does not match '{}'",
                output, condition.expected_outcome
            ));
        }
        satisfied
    }
}

/// Placeholder for in-process logic: always succeeds and spawns nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomLogicStrategy;

impl ExecutionStrategy for CustomLogicStrategy {
    fn execute(&self, task: &Task, ctx: &Context) -> Status {
        ctx.print_info(&format!("Performing custom logic for task: {}", task.id));
        Status::Success
    }

    fn check_condition(&self, condition: &Condition, ctx: &Context) -> bool {
        ctx.print_info(&format!(
            "Performing custom logic for condition: {}",
            condition.check_command
        ));
        true
    }
}

/// Instantiate the strategy a task file asked for
pub fn strategy_for(kind: StrategyKind) -> StrategyRef {
    match kind {
        StrategyKind::Shell => Arc::new(ShellStrategy),
        StrategyKind::Custom => Arc::new(CustomLogicStrategy),
    }
}

/// Strategy used when nothing else was bound
pub fn default_strategy() -> StrategyRef {
    strategy_for(StrategyKind::default())
}
