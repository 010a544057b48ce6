//! Supervision rules for the river-crossing puzzle.
//!
//! A constrained pair may share a bank only while the agent is there too.
//! The predator and the plant have no constraint between them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::{Configuration, Item, Position};

/// Pairs that must never be left together without the agent.
/// The first item of each pair is the one that would eat the second.
pub const CONSTRAINED_PAIRS: [(Item, Item); 2] = [
    (Item::Predator, Item::Grazer),
    (Item::Grazer, Item::Plant),
];

/// A constrained pair left unsupervised on one bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    pub eater: Item,
    pub eaten: Item,
    /// Bank where the pair was left alone
    pub side: Position,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} left alone with {} on the {} bank",
            self.eater, self.eaten, self.side
        )
    }
}

/// Find the first constrained pair left unsupervised, if any
pub fn violation(config: &Configuration) -> Option<Violation> {
    CONSTRAINED_PAIRS.iter().find_map(|&(eater, eaten)| {
        let side = config.item(eater);
        if side == config.item(eaten) && side != config.agent {
            Some(Violation { eater, eaten, side })
        } else {
            None
        }
    })
}

/// Check that no constrained pair is left unsupervised
pub fn is_legal(config: &Configuration) -> bool {
    violation(config).is_none()
}
