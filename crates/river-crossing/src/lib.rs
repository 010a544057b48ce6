//! Shortest-path solver for the river-crossing puzzle.
//!
//! The puzzle is modelled as a finite automaton: states are
//! [`Configuration`]s, the alphabet is the four [`Action`]s, and the
//! transition function rejects any crossing that would leave the predator
//! with the grazer or the grazer with the plant while the agent is away.
//! [`solve`] runs a breadth-first search over that automaton.

pub mod error;
pub mod rules;
pub mod solver;
pub mod state;
pub mod transition;

// Re-export main types
pub use error::{Error, ParseError, Result};
pub use rules::{is_legal, violation, Violation, CONSTRAINED_PAIRS};
pub use solver::{solve, solve_with, ActionOrder, SearchNode, Solution, SolverConfig, Step};
pub use state::{Configuration, Item, Position};
pub use transition::{apply, successors, try_apply, Action, Rejection};
