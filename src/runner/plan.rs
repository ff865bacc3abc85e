//! Plan builder
//!
//! Compiles a task set into a single root node:
//!
//! 1. every task gets a unit node, `[condition, action]` or just `action`,
//!    memoized by task ID;
//! 2. every task with dependencies gets a chain, the unit nodes of its
//!    resolvable dependencies in declared order followed by its own, each
//!    unit at most once;
//! 3. the root is a selector over all unit nodes when nothing has
//!    dependencies, the chain itself when there is exactly one, and a
//!    selector over the chains otherwise.
//!
//! Dangling dependency IDs are skipped. Chains are not transitive: a chain
//! holds only direct dependencies.

use crate::error::{ConfigError, ConfigResult};
use crate::runner::node::{ActionStep, ConditionStep, Node, NodeRef};
use crate::runner::{Context, Status, Task, TaskSet};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// How the root combines unit nodes or chains
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RootPolicy {
    /// Selector: the run succeeds if any one branch succeeds
    #[default]
    AnySucceeds,

    /// Sequence: every branch must succeed
    AllSucceed,
}

impl RootPolicy {
    fn combine(self, children: Vec<NodeRef>) -> NodeRef {
        match self {
            RootPolicy::AnySucceeds => Node::selector(children),
            RootPolicy::AllSucceed => Node::sequence(children),
        }
    }
}

/// A compiled, ready-to-evaluate task set
#[derive(Debug)]
pub struct Plan {
    root: NodeRef,
    chain_count: usize,
}

impl Plan {
    pub fn root(&self) -> &NodeRef {
        &self.root
    }

    /// Number of dependency chains the task set produced
    pub fn chain_count(&self) -> usize {
        self.chain_count
    }

    /// Evaluate the whole plan and return the aggregate status
    pub fn evaluate(&self, ctx: &Context) -> Status {
        self.root.tick(ctx)
    }
}

/// Build-time memo table of unit nodes, keyed by task ID
#[derive(Debug, Default)]
struct UnitTable {
    by_id: HashMap<String, NodeRef>,
    in_order: Vec<NodeRef>,
}

impl UnitTable {
    fn insert(&mut self, id: &str, node: NodeRef) {
        self.by_id.insert(id.to_string(), node.clone());
        self.in_order.push(node);
    }

    fn get(&self, id: &str) -> Option<&NodeRef> {
        self.by_id.get(id)
    }
}

/// Compile a task set with the default root policy
pub fn build_plan(task_set: &TaskSet) -> ConfigResult<Plan> {
    build_plan_with(task_set, RootPolicy::default())
}

/// Compile a task set
pub fn build_plan_with(task_set: &TaskSet, policy: RootPolicy) -> ConfigResult<Plan> {
    let units = build_units(&task_set.tasks)?;

    let mut chains: Vec<NodeRef> = task_set
        .tasks
        .iter()
        .filter(|task| !task.depends_on.is_empty())
        .map(|task| build_chain(task, &units))
        .collect();
    let chain_count = chains.len();

    let root = match chain_count {
        0 => policy.combine(units.in_order),
        1 => chains.swap_remove(0),
        _ => policy.combine(chains),
    };

    Ok(Plan { root, chain_count })
}

fn build_units(tasks: &[Task]) -> ConfigResult<UnitTable> {
    let mut units = UnitTable::default();

    for (index, task) in tasks.iter().enumerate() {
        if task.id.is_empty() {
            return Err(ConfigError::EmptyTaskId(index));
        }
        if units.get(&task.id).is_some() {
            return Err(ConfigError::DuplicateTask(task.id.clone()));
        }
        units.insert(&task.id, unit_node(task));
    }

    Ok(units)
}

fn unit_node(task: &Task) -> NodeRef {
    let action = Arc::new(Node::Action(ActionStep { task: task.clone() }));

    match &task.condition {
        Some(condition) => {
            let check = Arc::new(Node::Condition(ConditionStep {
                task_id: task.id.clone(),
                condition: condition.clone(),
            }));
            Node::sequence(vec![check, action])
        }
        None => action,
    }
}

/// Each unit appears at most once per chain; a task naming itself or
/// repeating a dependency still runs last and once.
fn build_chain(task: &Task, units: &UnitTable) -> NodeRef {
    let mut seen: HashSet<&str> = HashSet::from([task.id.as_str()]);
    let mut steps: Vec<NodeRef> = task
        .depends_on
        .iter()
        .filter(|dep| seen.insert(dep.as_str()))
        .filter_map(|dep| units.get(dep).cloned())
        .collect();

    if let Some(own) = units.get(&task.id) {
        steps.push(own.clone());
    }

    Node::sequence(steps)
}
