//! Error types for the river-crossing solver.

use thiserror::Error;

use crate::rules::Violation;
use crate::state::Configuration;

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the public solver operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The initial configuration leaves a constrained pair unsupervised.
    #[error("initial state [{state}] is illegal: {violation}")]
    InvalidInitialState {
        state: Configuration,
        violation: Violation,
    },

    /// Search exhausted every reachable configuration without meeting the goal.
    #[error("no solution from [{initial}] to [{goal}]")]
    NoSolutionFound {
        initial: Configuration,
        goal: Configuration,
    },
}

/// Errors from parsing the textual state format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 4 side tokens (agent predator grazer plant), got {0}")]
    WrongTokenCount(usize),

    #[error("unknown side token {0:?}, expected N or F")]
    UnknownSide(String),
}
