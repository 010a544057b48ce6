//! Property-based tests for the crossing automaton and solver.
//!
//! The state space is small enough that the strategies below cover it
//! exhaustively after a handful of cases; the shortest-path check also
//! walks every configuration explicitly.

use std::collections::BTreeSet;

use proptest::prelude::*;
use river_crossing::{
    apply, is_legal, solve, solve_with, violation, Action, ActionOrder, Configuration, Error,
    Item, Position, SolverConfig,
};

fn arb_position() -> impl Strategy<Value = Position> {
    prop_oneof![Just(Position::Near), Just(Position::Far)]
}

fn arb_configuration() -> impl Strategy<Value = Configuration> {
    (arb_position(), arb_position(), arb_position(), arb_position())
        .prop_map(|(agent, predator, grazer, plant)| {
            Configuration::new(agent, predator, grazer, plant)
        })
}

fn arb_legal_configuration() -> impl Strategy<Value = Configuration> {
    arb_configuration().prop_filter("legal configuration", is_legal)
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Alone),
        Just(Action::Carry(Item::Predator)),
        Just(Action::Carry(Item::Grazer)),
        Just(Action::Carry(Item::Plant)),
    ]
}

/// Goal depth by level-set expansion over the explicit state list,
/// without using the solver's frontier.
fn exhaustive_depth(initial: Configuration, goal: Configuration) -> Option<usize> {
    let legal: Vec<Configuration> = Configuration::enumerate().filter(is_legal).collect();
    let mut seen: BTreeSet<Configuration> = BTreeSet::from([initial]);
    let mut level: BTreeSet<Configuration> = BTreeSet::from([initial]);
    let mut depth = 0;

    while !level.is_empty() {
        if level.contains(&goal) {
            return Some(depth);
        }
        let next: BTreeSet<Configuration> = legal
            .iter()
            .copied()
            .filter(|candidate| !seen.contains(candidate))
            .filter(|candidate| {
                level
                    .iter()
                    .any(|from| Action::ALL.iter().any(|&a| apply(from, a) == Some(*candidate)))
            })
            .collect();
        seen.extend(next.iter().copied());
        level = next;
        depth += 1;
    }
    None
}

proptest! {
    /// Legality fails exactly when a constrained pair shares a bank without the agent.
    #[test]
    fn prop_legality_matches_constraints(c in arb_configuration()) {
        let predator_grazer = c.predator == c.grazer && c.agent != c.grazer;
        let grazer_plant = c.grazer == c.plant && c.agent != c.grazer;
        prop_assert_eq!(is_legal(&c), !(predator_grazer || grazer_plant));
        prop_assert_eq!(is_legal(&c), violation(&c).is_none());
    }

    /// Applying an action twice from the same state gives the same answer,
    /// and any accepted result is legal with the agent on the other bank.
    #[test]
    fn prop_apply_deterministic_and_legal(c in arb_legal_configuration(), action in arb_action()) {
        let first = apply(&c, action);
        prop_assert_eq!(first, apply(&c, action));
        if let Some(next) = first {
            prop_assert!(is_legal(&next));
            prop_assert_eq!(next.agent, c.agent.opposite());
            // Crossings are reversible with the same action
            prop_assert_eq!(apply(&next, action), Some(c));
        }
    }

    /// Carrying an item from the far bank is never possible.
    #[test]
    fn prop_cannot_carry_from_other_bank(c in arb_legal_configuration(), item in prop_oneof![
        Just(Item::Predator), Just(Item::Grazer), Just(Item::Plant)
    ]) {
        if !c.is_with_agent(item) {
            prop_assert_eq!(apply(&c, Action::Carry(item)), None);
        }
    }

    /// Solving from a state to itself takes zero crossings.
    #[test]
    fn prop_solve_to_self(c in arb_legal_configuration()) {
        prop_assert_eq!(solve(c, c), Ok(vec![c]));
    }

    /// Every returned path starts and ends where asked, alternates the
    /// agent, stays legal, and is made of applicable crossings.
    #[test]
    fn prop_paths_are_valid(
        initial in arb_legal_configuration(),
        goal in arb_legal_configuration(),
        alone_first in any::<bool>(),
    ) {
        let config = SolverConfig {
            goal,
            action_order: if alone_first { ActionOrder::AloneFirst } else { ActionOrder::ItemsFirst },
        };
        let solution = solve_with(initial, &config).expect("legal states are connected");
        let path = &solution.path;

        prop_assert_eq!(path.first(), Some(&initial));
        prop_assert_eq!(path.last(), Some(&goal));
        prop_assert!(path.iter().all(is_legal));
        for pair in path.windows(2) {
            prop_assert_ne!(pair[0].agent, pair[1].agent);
            let action = Action::between(&pair[0], &pair[1]);
            prop_assert!(action.is_some());
            prop_assert_eq!(apply(&pair[0], action.unwrap()), Some(pair[1]));
        }
        prop_assert_eq!(solution.steps().len(), solution.moves());
    }

    /// Illegal initial states are refused before any search.
    #[test]
    fn prop_illegal_initial_rejected(c in arb_configuration()) {
        if !is_legal(&c) {
            let rejected = matches!(
                solve(c, Configuration::goal()),
                Err(Error::InvalidInitialState { .. })
            );
            prop_assert!(rejected);
        }
    }
}

#[test]
fn test_canonical_puzzle_takes_seven_crossings() {
    let path = solve(Configuration::start(), Configuration::goal()).unwrap();
    assert_eq!(path.len(), 8);
    for pair in path.windows(2) {
        assert_ne!(pair[0].agent, pair[1].agent);
    }
    assert!(path.iter().all(is_legal));
}

#[test]
fn test_solver_matches_exhaustive_depth() {
    for goal in Configuration::enumerate().filter(is_legal) {
        for initial in Configuration::enumerate().filter(is_legal) {
            let expected = exhaustive_depth(initial, goal);
            let actual = solve(initial, goal).ok().map(|path| path.len() - 1);
            assert_eq!(actual, expected, "{initial} -> {goal}");
        }
    }
}

#[test]
fn test_illegal_goal_has_no_solution() {
    for goal in Configuration::enumerate().filter(|c| !is_legal(c)) {
        assert_eq!(exhaustive_depth(Configuration::start(), goal), None);
        assert_eq!(
            solve(Configuration::start(), goal),
            Err(Error::NoSolutionFound {
                initial: Configuration::start(),
                goal,
            })
        );
    }
}

#[test]
fn test_all_legal_states_reach_far_bank() {
    let depths: Vec<(String, Option<usize>)> = Configuration::enumerate()
        .filter(is_legal)
        .map(|c| (c.to_string(), solve(c, Configuration::goal()).ok().map(|p| p.len() - 1)))
        .collect();

    let expected = [
        ("N N N N", 7),
        ("N N N F", 3),
        ("N N F N", 5),
        ("N F N N", 3),
        ("N F N F", 1),
        ("F N F N", 6),
        ("F N F F", 4),
        ("F F N F", 2),
        ("F F F N", 4),
        ("F F F F", 0),
    ];
    assert_eq!(depths.len(), expected.len());
    for ((state, depth), (want_state, want_depth)) in depths.iter().zip(expected) {
        assert_eq!(state, want_state);
        assert_eq!(*depth, Some(want_depth));
    }
}
