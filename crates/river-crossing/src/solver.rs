//! Breadth-first shortest-path solver.
//!
//! The frontier holds whole paths rather than bare states, so the answer
//! is available as soon as the goal is dequeued. Edges are unweighted and
//! every state is enqueued at most once, which makes the first path that
//! reaches the goal a shortest one.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rules::violation;
use crate::state::{Configuration, Item, Position};
use crate::transition::{successors, Action};

/// Order in which actions are tried from each state.
///
/// Only affects which of several equally short paths is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOrder {
    /// Carry predator, grazer, plant, then cross alone
    #[default]
    ItemsFirst,
    /// Cross alone, then carry predator, grazer, plant
    AloneFirst,
}

impl ActionOrder {
    pub fn actions(self) -> [Action; 4] {
        match self {
            ActionOrder::ItemsFirst => Action::ALL,
            ActionOrder::AloneFirst => [
                Action::Alone,
                Action::Carry(Item::Predator),
                Action::Carry(Item::Grazer),
                Action::Carry(Item::Plant),
            ],
        }
    }
}

/// Configuration for the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Configuration to reach
    pub goal: Configuration,
    /// Action enumeration order
    pub action_order: ActionOrder,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            goal: Configuration::goal(),
            action_order: ActionOrder::default(),
        }
    }
}

/// An immutable path from the initial configuration, used as a frontier entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    path: Vec<Configuration>,
}

impl SearchNode {
    /// Single-state path
    pub fn root(initial: Configuration) -> Self {
        Self {
            path: vec![initial],
        }
    }

    /// Copy of this path with one more state appended
    pub fn extended(&self, next: Configuration) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);
        Self { path }
    }

    /// Final state of the path
    pub fn last(&self) -> Configuration {
        // A node is never built with an empty path
        self.path[self.path.len() - 1]
    }

    pub fn path(&self) -> &[Configuration] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Configuration> {
        self.path
    }
}

/// One crossing in a solved path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based step number
    pub number: usize,
    pub from: Position,
    pub to: Position,
    pub action: Action,
    /// Configuration after the crossing
    pub state: Configuration,
}

/// A shortest path plus search statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub path: Vec<Configuration>,
    /// States marked visited, including the initial one
    pub states_visited: usize,
    /// Paths dequeued from the frontier
    pub nodes_expanded: usize,
}

impl Solution {
    /// Number of crossings
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Describe each crossing by diffing consecutive configurations
    pub fn steps(&self) -> Vec<Step> {
        self.path
            .windows(2)
            .enumerate()
            .filter_map(|(i, pair)| {
                let (prev, next) = (pair[0], pair[1]);
                Action::between(&prev, &next).map(|action| Step {
                    number: i + 1,
                    from: prev.agent,
                    to: next.agent,
                    action,
                    state: next,
                })
            })
            .collect()
    }
}

/// Find a shortest path from `initial` to `goal` with the default action order.
pub fn solve(initial: Configuration, goal: Configuration) -> Result<Vec<Configuration>> {
    let config = SolverConfig {
        goal,
        ..SolverConfig::default()
    };
    solve_with(initial, &config).map(|solution| solution.path)
}

/// Find a shortest path from `initial` to `config.goal`.
///
/// Fails with [`Error::InvalidInitialState`] before searching if `initial`
/// is illegal, and with [`Error::NoSolutionFound`] if the goal is not
/// reachable.
pub fn solve_with(initial: Configuration, config: &SolverConfig) -> Result<Solution> {
    if let Some(v) = violation(&initial) {
        return Err(Error::InvalidInitialState {
            state: initial,
            violation: v,
        });
    }

    let goal = config.goal;
    let order = config.action_order.actions();
    tracing::debug!(%initial, %goal, action_order = ?config.action_order, "starting search");

    if initial == goal {
        return Ok(Solution {
            path: vec![initial],
            states_visited: 1,
            nodes_expanded: 0,
        });
    }

    let mut queue: VecDeque<SearchNode> = VecDeque::new();
    let mut visited: HashSet<Configuration> = HashSet::new();
    queue.push_back(SearchNode::root(initial));
    visited.insert(initial);

    let mut nodes_expanded: usize = 0;

    while let Some(node) = queue.pop_front() {
        nodes_expanded += 1;
        let last = node.last();

        if last == goal {
            tracing::debug!(
                moves = node.path().len() - 1,
                states_visited = visited.len(),
                nodes_expanded,
                "goal reached"
            );
            return Ok(Solution {
                path: node.into_path(),
                states_visited: visited.len(),
                nodes_expanded,
            });
        }

        for (action, next) in successors(&last, &order) {
            if visited.insert(next) {
                tracing::trace!(from = %last, to = %next, %action, depth = node.path().len(), "enqueue");
                queue.push_back(node.extended(next));
            }
        }
    }

    tracing::debug!(states_visited = visited.len(), nodes_expanded, "search exhausted");
    Err(Error::NoSolutionFound { initial, goal })
}
