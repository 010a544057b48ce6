//! Transition function of the crossing automaton.
//!
//! Every crossing flips the agent to the other bank, optionally carrying
//! one item from the agent's bank. Transitions that would leave a
//! constrained pair unsupervised are rejected; rejection means "not
//! applicable from here", never a failure.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::rules::{violation, Violation};
use crate::state::{Configuration, Item};

/// A single crossing of the river
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Agent crosses with the given item
    Carry(Item),
    /// Agent crosses empty-handed
    Alone,
}

impl Action {
    /// Items first, then alone
    pub const ALL: [Action; 4] = [
        Action::Carry(Item::Predator),
        Action::Carry(Item::Grazer),
        Action::Carry(Item::Plant),
        Action::Alone,
    ];

    /// The item carried, if any
    pub fn item(self) -> Option<Item> {
        match self {
            Action::Carry(item) => Some(item),
            Action::Alone => None,
        }
    }

    /// Recover the action that turns `prev` into `next`.
    ///
    /// Returns `None` when the agent did not cross, when an item moved
    /// without the agent, or when more than one item moved.
    pub fn between(prev: &Configuration, next: &Configuration) -> Option<Action> {
        if prev.agent == next.agent {
            return None;
        }

        let mut moved = Item::ALL
            .iter()
            .copied()
            .filter(|&item| prev.item(item) != next.item(item));

        match (moved.next(), moved.next()) {
            (None, _) => Some(Action::Alone),
            (Some(item), None)
                if prev.item(item) == prev.agent && next.item(item) == next.agent =>
            {
                Some(Action::Carry(item))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Carry(item) => write!(f, "carrying the {item}"),
            Action::Alone => f.write_str("alone"),
        }
    }
}

/// Why a transition was not applicable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The item to carry is on the other bank
    ItemOnOtherSide(Item),
    /// The crossing would leave a constrained pair alone
    Unsafe(Violation),
}

/// Apply an action, reporting why it was rejected
pub fn try_apply(config: &Configuration, action: Action) -> Result<Configuration, Rejection> {
    let destination = config.agent.opposite();
    let mut next = config.with_agent(destination);

    if let Some(item) = action.item() {
        if !config.is_with_agent(item) {
            return Err(Rejection::ItemOnOtherSide(item));
        }
        next = next.with_item(item, destination);
    }

    match violation(&next) {
        Some(v) => Err(Rejection::Unsafe(v)),
        None => Ok(next),
    }
}

/// Apply an action, returning `None` if it is not applicable
pub fn apply(config: &Configuration, action: Action) -> Option<Configuration> {
    try_apply(config, action).ok()
}

/// All applicable transitions from `config`, in the given action order
pub fn successors(
    config: &Configuration,
    order: &[Action],
) -> SmallVec<[(Action, Configuration); 4]> {
    let mut out = SmallVec::new();
    for &action in order {
        match try_apply(config, action) {
            Ok(next) => out.push((action, next)),
            Err(rejection) => {
                tracing::trace!(state = %config, %action, ?rejection, "transition rejected");
            }
        }
    }
    out
}
