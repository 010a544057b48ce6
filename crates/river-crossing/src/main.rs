//! CLI entry point for the river-crossing solver.
//!
//! Usage:
//!   river-crossing solve [STATE] [options]
//!   river-crossing solve --stdin [options]
//!   river-crossing check STATE
//!   river-crossing states [--goal STATE]
//!
//! A STATE is four side tokens, N (near) or F (far), in the order
//! agent, predator, grazer, plant. For example: `N N N N`.
//!
//! Options:
//!   --goal <STATE>   Configuration to reach (default: F F F F)
//!   --alone-first    Try crossing alone before carrying an item
//!   --json           Print machine-readable JSON
//!   -v, --verbose    Raise log level (repeat for more); RUST_LOG overrides

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use river_crossing::{
    solve_with, violation, ActionOrder, Configuration, Error, Solution, SolverConfig, Step,
};

#[derive(Parser)]
#[command(name = "river-crossing")]
#[command(about = "Shortest-path solver for the river-crossing puzzle")]
#[command(version)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest sequence of crossings to the goal
    Solve {
        /// Initial state as side tokens, e.g. `N N N N` (default: everyone near)
        #[arg(value_name = "STATE", num_args = 0..)]
        state: Vec<String>,

        /// Read a JSON request {"initial": ..., "goal": ...} from stdin
        #[arg(long, conflicts_with = "state")]
        stdin: bool,

        /// Goal state as side tokens
        #[arg(long, value_name = "STATE")]
        goal: Option<String>,

        /// Try crossing alone before carrying an item
        #[arg(long)]
        alone_first: bool,
    },

    /// Check whether a state leaves a pair unsupervised
    Check {
        /// State as side tokens, e.g. `F N N N`
        #[arg(value_name = "STATE", required = true, num_args = 1..)]
        state: Vec<String>,
    },

    /// List every configuration with its distance to the goal
    States {
        /// Goal state as side tokens
        #[arg(long, value_name = "STATE")]
        goal: Option<String>,
    },
}

/// Request format for `solve --stdin`
#[derive(Debug, Deserialize)]
struct SolveRequest {
    initial: Configuration,
    #[serde(default)]
    goal: Option<Configuration>,
}

/// Output format for a solve run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    initial: Configuration,
    goal: Configuration,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    path: Vec<Configuration>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    steps: Vec<Step>,
    states_visited: usize,
    nodes_expanded: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOutput {
    state: Configuration,
    legal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StateRow {
    state: Configuration,
    legal: bool,
    /// Minimum crossings to the goal; absent if illegal or unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<usize>,
}

const RULE: &str = "-------------------------------------------------------";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// Run a subcommand; `Ok(false)` means a valid but negative outcome
fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Commands::Solve {
            state,
            stdin,
            goal,
            alone_first,
        } => {
            let (initial, goal) = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read from stdin")?;
                let request: SolveRequest =
                    serde_json::from_str(&buffer).context("failed to parse solve request JSON")?;
                let goal = match goal {
                    Some(text) => parse_state(&text)?,
                    None => request.goal.unwrap_or_else(Configuration::goal),
                };
                (request.initial, goal)
            } else {
                let initial = if state.is_empty() {
                    Configuration::start()
                } else {
                    parse_state(&state.join(" "))?
                };
                (initial, parse_goal(goal.as_deref())?)
            };

            let config = SolverConfig {
                goal,
                action_order: if alone_first {
                    ActionOrder::AloneFirst
                } else {
                    ActionOrder::ItemsFirst
                },
            };

            let result = solve_with(initial, &config);
            let solved = result.is_ok();

            if cli.json {
                let output = format_result(initial, goal, &result);
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_result(initial, goal, &result);
            }
            Ok(solved)
        }

        Commands::Check { state } => {
            let config = parse_state(&state.join(" "))?;
            let found = violation(&config);

            if cli.json {
                let output = CheckOutput {
                    state: config,
                    legal: found.is_none(),
                    reason: found.map(|v| v.to_string()),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                match found {
                    None => println!("{config}: legal"),
                    Some(v) => println!("{config}: illegal ({v})"),
                }
            }
            Ok(found.is_none())
        }

        Commands::States { goal } => {
            let config = SolverConfig {
                goal: parse_goal(goal.as_deref())?,
                ..SolverConfig::default()
            };
            let rows = state_table(&config);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("Distances to [{}]", config.goal);
                println!("{RULE}");
                for row in &rows {
                    let moves = match (row.legal, row.moves) {
                        (false, _) => "-".to_string(),
                        (true, Some(m)) => m.to_string(),
                        (true, None) => "unreachable".to_string(),
                    };
                    let legality = if row.legal { "legal" } else { "illegal" };
                    println!("{}  {:<8} {}", row.state, legality, moves);
                }
            }
            Ok(true)
        }
    }
}

fn parse_state(text: &str) -> anyhow::Result<Configuration> {
    text.parse::<Configuration>()
        .with_context(|| format!("invalid state {text:?}"))
}

fn parse_goal(text: Option<&str>) -> anyhow::Result<Configuration> {
    match text {
        Some(text) => parse_state(text),
        None => Ok(Configuration::goal()),
    }
}

fn state_table(config: &SolverConfig) -> Vec<StateRow> {
    Configuration::enumerate()
        .map(|state| {
            let result = solve_with(state, config);
            StateRow {
                state,
                legal: !matches!(result, Err(Error::InvalidInitialState { .. })),
                moves: result.ok().map(|solution| solution.moves()),
            }
        })
        .collect()
}

fn format_result(
    initial: Configuration,
    goal: Configuration,
    result: &river_crossing::Result<Solution>,
) -> SolveOutput {
    match result {
        Ok(solution) => SolveOutput {
            solved: true,
            initial,
            goal,
            reason: None,
            moves: Some(solution.moves()),
            path: solution.path.clone(),
            steps: solution.steps(),
            states_visited: solution.states_visited,
            nodes_expanded: solution.nodes_expanded,
        },
        Err(e) => SolveOutput {
            solved: false,
            initial,
            goal,
            reason: Some(e.to_string()),
            moves: None,
            path: Vec::new(),
            steps: Vec::new(),
            states_visited: 0,
            nodes_expanded: 0,
        },
    }
}

fn print_result(
    initial: Configuration,
    goal: Configuration,
    result: &river_crossing::Result<Solution>,
) {
    let solution = match result {
        Ok(solution) => solution,
        Err(Error::InvalidInitialState { state, violation }) => {
            println!("\nInitial state [{state}] breaks the rules: {violation}.");
            println!(
                "The predator cannot stay with the grazer, and the grazer cannot stay with the plant, unless the agent is there."
            );
            return;
        }
        Err(Error::NoSolutionFound { .. }) => {
            println!("\n>> No solution found from [{initial}] to [{goal}].");
            return;
        }
    };

    println!("\nSolution found for the river crossing");
    println!("Initial state: {initial}");
    println!("{RULE}");

    if solution.moves() == 0 {
        println!("The initial state is already the goal. No crossings needed.");
    } else {
        for step in solution.steps() {
            println!(
                "Step {}: agent crosses from the {} bank to the {} bank {}",
                step.number, step.from, step.to, step.action
            );
            println!("   New state: {}", step.state);
        }
    }

    println!("{RULE}");
    if goal == Configuration::goal() {
        println!("Everyone reached the far bank safely.");
    } else {
        println!("Reached [{goal}] in {} crossings.", solution.moves());
    }
}
