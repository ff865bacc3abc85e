//! Main CLI application

use crate::config::{parse_config_auto, parse_config_file, TaskFile};
use crate::error::TaskbranchError;
use crate::runner::{build_plan_with, Context, RootPolicy, Status, TaskSet, Verbosity};
use crate::ui::{print_summary, print_task_tree};
use anyhow::Context as _;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

/// Flags that shape a run, independent of the task file
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub print_only: bool,
    pub force_dry_run: bool,
    pub policy: RootPolicy,
    pub verbosity: Verbosity,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            print_only: false,
            force_dry_run: false,
            policy: RootPolicy::default(),
            verbosity: Verbosity::Normal,
        }
    }
}

/// CLI application
pub struct App {
    /// Decoded task file
    file: TaskFile,
    /// Task file path
    config_path: PathBuf,
}

impl App {
    /// Create a new app by discovering the task file
    pub fn new() -> Result<Self, TaskbranchError> {
        let (file, config_path) = parse_config_auto()?;
        Ok(App { file, config_path })
    }

    /// Create app with a specific task file
    pub fn with_config_file(path: PathBuf) -> Result<Self, TaskbranchError> {
        let file = parse_config_file(&path)?;
        Ok(App {
            file,
            config_path: path,
        })
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Print the task tree or evaluate the plan.
    ///
    /// Returns `None` when only printing.
    pub fn run(self, options: &RunOptions) -> Result<Option<Status>, TaskbranchError> {
        let mut ctx = Context::new().with_verbosity(options.verbosity);
        if let Some(interpreter) = &self.file.interpreter {
            ctx = ctx.with_interpreter(interpreter.clone());
        }

        let task_set = TaskSet::from_config(self.file);
        let plan = build_plan_with(&task_set, options.policy)?;

        if options.print_only {
            print_task_tree(&task_set);
            return Ok(None);
        }

        let ctx = ctx.with_dry_run(task_set.dry_run || options.force_dry_run);
        ctx.print_debug(&format!(
            "Compiled {} task(s) into {} chain(s), {} step(s) from {}",
            task_set.tasks.len(),
            plan.chain_count(),
            plan.root().leaf_count(),
            self.config_path.display()
        ));

        Ok(Some(plan.evaluate(&ctx)))
    }
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("taskbranch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run a declared set of dependent tasks")
        .arg(
            Arg::new("task-file")
                .short('f')
                .long("task-file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to the task file (default: search for taskbranch.json/.yml/.yaml)"),
        )
        .arg(
            Arg::new("print")
                .short('p')
                .long("print")
                .help("Print the task graph and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Show what would run without running anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("require-all")
                .long("require-all")
                .help("Require every top-level branch to succeed instead of any one")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no progress output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .value_parser(value_parser!(Shell))
                .help("Print a shell completion script and exit"),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Translate matches into run options
fn run_options(matches: &ArgMatches) -> RunOptions {
    RunOptions {
        print_only: matches.get_flag("print"),
        force_dry_run: matches.get_flag("dry-run"),
        policy: if matches.get_flag("require-all") {
            RootPolicy::AllSucceed
        } else {
            RootPolicy::AnySucceeds
        },
        verbosity: get_verbosity(matches),
    }
}

/// Run the CLI application with process arguments
pub fn run() -> anyhow::Result<()> {
    run_with_matches(build_command().get_matches())
}

fn run_with_matches(matches: ArgMatches) -> anyhow::Result<()> {
    if let Some(shell) = matches.get_one::<Shell>("completions") {
        let mut command = build_command();
        clap_complete::generate(*shell, &mut command, "taskbranch", &mut io::stdout());
        return Ok(());
    }

    let app = match matches.get_one::<PathBuf>("task-file") {
        Some(path) => App::with_config_file(path.clone())
            .with_context(|| format!("Failed to load tasks from {}", path.display()))?,
        None => App::new().context("Failed to load tasks")?,
    };

    let config_path = app.config_path().clone();
    let status = app
        .run(&run_options(&matches))
        .with_context(|| format!("Failed to run tasks from {}", config_path.display()))?;

    if let Some(status) = status {
        print_summary(status);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_verbosity_normal() {
        let matches = build_command().get_matches_from(vec!["taskbranch"]);
        assert_eq!(get_verbosity(&matches), Verbosity::Normal);
    }

    #[test]
    fn test_silent_wins_over_verbose() {
        let matches = build_command().get_matches_from(vec!["taskbranch", "-s", "-v"]);
        assert_eq!(get_verbosity(&matches), Verbosity::Silent);
    }

    #[test]
    fn test_run_options_from_flags() {
        let matches = build_command().get_matches_from(vec![
            "taskbranch",
            "--print",
            "--dry-run",
            "--require-all",
            "-f",
            "tasks.yml",
        ]);
        let options = run_options(&matches);

        assert!(options.print_only);
        assert!(options.force_dry_run);
        assert_eq!(options.policy, RootPolicy::AllSucceed);
        assert_eq!(
            matches.get_one::<PathBuf>("task-file"),
            Some(&PathBuf::from("tasks.yml"))
        );
    }

    #[test]
    fn test_default_run_options() {
        let matches = build_command().get_matches_from(vec!["taskbranch"]);
        let options = run_options(&matches);

        assert!(!options.print_only);
        assert!(!options.force_dry_run);
        assert_eq!(options.policy, RootPolicy::AnySucceeds);
    }

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }
}
