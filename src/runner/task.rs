//! Task entity model
//!
//! Runtime representation of tasks and conditions. These differ from the
//! `config` types by carrying the strategy instance each one is bound to.

use crate::config;
use crate::runner::strategy::{default_strategy, strategy_for, StrategyRef};

/// Runtime task representation
#[derive(Debug, Clone)]
pub struct Task {
    /// Unique identifier, the only cross-reference key
    pub id: String,

    /// Command line to run
    pub command: String,

    /// Guard command that must exit 0 before `command` runs
    pub execute_if: Option<String>,

    /// Output-matching precondition
    pub condition: Option<Condition>,

    /// IDs of tasks that must succeed first, in declared order
    pub depends_on: Vec<String>,

    /// Strategy that runs `command`
    pub strategy: StrategyRef,
}

impl Task {
    /// Create a shell task with no gates or dependencies
    pub fn new(id: impl Into<String>, command: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            command: command.into(),
            execute_if: None,
            condition: None,
            depends_on: Vec::new(),
            strategy: default_strategy(),
        }
    }

    /// Create from config
    pub fn from_config(config: config::TaskDef) -> Self {
        Task {
            id: config.id,
            command: config.command,
            execute_if: config.execute_if.filter(|guard| !guard.is_empty()),
            condition: config.condition.map(Condition::from_config),
            depends_on: config.depends_on,
            strategy: strategy_for(config.strategy.unwrap_or_default()),
        }
    }

    pub fn with_depends_on<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on = deps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_execute_if(mut self, guard: impl Into<String>) -> Self {
        self.execute_if = Some(guard.into());
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyRef) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Runtime representation of a condition
#[derive(Debug, Clone)]
pub struct Condition {
    /// Command whose trimmed output is compared
    pub check_command: String,

    /// Exact value the trimmed output must equal
    pub expected_outcome: String,

    /// Strategy that runs the check
    pub strategy: StrategyRef,
}

impl Condition {
    pub fn new(check_command: impl Into<String>, expected_outcome: impl Into<String>) -> Self {
        Condition {
            check_command: check_command.into(),
            expected_outcome: expected_outcome.into(),
            strategy: default_strategy(),
        }
    }

    pub fn from_config(config: config::ConditionDef) -> Self {
        Condition {
            check_command: config.check_command,
            expected_outcome: config.expected_outcome,
            strategy: strategy_for(config.strategy.unwrap_or_default()),
        }
    }

    pub fn with_strategy(mut self, strategy: StrategyRef) -> Self {
        self.strategy = strategy;
        self
    }
}

/// The declared tasks plus the global dry-run flag.
///
/// Duplicate IDs and dangling dependencies are not rejected here; the plan
/// builder deals with them.
#[derive(Debug, Clone, Default)]
pub struct TaskSet {
    pub tasks: Vec<Task>,
    pub dry_run: bool,
}

impl TaskSet {
    pub fn new(tasks: Vec<Task>) -> Self {
        TaskSet {
            tasks,
            dry_run: false,
        }
    }

    pub fn from_config(config: config::TaskFile) -> Self {
        TaskSet {
            tasks: config.tasks.into_iter().map(Task::from_config).collect(),
            dry_run: config.dry_run,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// First task declared with this ID
    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }
}
