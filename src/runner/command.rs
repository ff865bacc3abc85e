//! Command execution
//!
//! This module is the only place that spawns processes. Every command line
//! is handed to the context interpreter (`sh -c` by default) and run in the
//! context working directory.

use crate::error::{ExecutionError, ExecutionResult};
use crate::runner::Context;
use std::process::{Command as StdCommand, ExitStatus, Stdio};

/// Exit code shells use for "command not found"
pub const COMMAND_NOT_FOUND: i32 = 127;

/// Status and combined output of a captured command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status: ExitStatus,
    /// stdout followed by stderr
    pub output: String,
}

/// Build an interpreter invocation for a command line
fn shell_command(cmd_str: &str, ctx: &Context) -> ExecutionResult<StdCommand> {
    let (program, args) = ctx
        .interpreter
        .split_first()
        .ok_or_else(|| ExecutionError::EmptyInterpreter(cmd_str.to_string()))?;

    let mut command = StdCommand::new(program);
    command.args(args);
    command.arg(cmd_str);
    command.current_dir(&ctx.working_dir);
    Ok(command)
}

fn spawn_error(cmd_str: &str) -> impl FnOnce(std::io::Error) -> ExecutionError + '_ {
    move |source| ExecutionError::Spawn {
        command: cmd_str.to_string(),
        source,
    }
}

/// Run a command with stdio forwarded to ours and return its exit status
pub fn execute_command(cmd_str: &str, ctx: &Context) -> ExecutionResult<ExitStatus> {
    let mut command = shell_command(cmd_str, ctx)?;

    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    command.status().map_err(spawn_error(cmd_str))
}

/// Check if a command succeeds, discarding its output
pub fn check_command(cmd_str: &str, ctx: &Context) -> ExecutionResult<bool> {
    let mut command = shell_command(cmd_str, ctx)?;

    command.stdin(Stdio::null());
    command.stdout(Stdio::null());
    command.stderr(Stdio::null());

    let status = command.status().map_err(spawn_error(cmd_str))?;
    Ok(status.success())
}

/// Run a command and collect everything it printed
pub fn capture_command(cmd_str: &str, ctx: &Context) -> ExecutionResult<CommandOutput> {
    let mut command = shell_command(cmd_str, ctx)?;
    command.stdin(Stdio::null());

    let output = command.output().map_err(spawn_error(cmd_str))?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(CommandOutput {
        status: output.status,
        output: combined,
    })
}

/// Human-readable exit status
pub fn describe_status(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
