//! State representation for the river-crossing automaton.
//!
//! A [`Configuration`] records which bank the agent and each of the three
//! items occupy. These types serialize to the same JSON shape the CLI
//! accepts on stdin.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Side of the river - near bank or far bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Near,
    Far,
}

impl Position {
    /// The bank across the river
    pub fn opposite(self) -> Position {
        match self {
            Position::Near => Position::Far,
            Position::Far => Position::Near,
        }
    }

    /// Single-letter token used in the textual state format
    pub fn token(self) -> char {
        match self {
            Position::Near => 'N',
            Position::Far => 'F',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Position::Near => "near",
            Position::Far => "far",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Position::Near),
            "F" => Ok(Position::Far),
            _ => Err(ParseError::UnknownSide(s.to_string())),
        }
    }
}

/// A transportable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Item {
    Predator,
    Grazer,
    Plant,
}

impl Item {
    /// All items in configuration order
    pub const ALL: [Item; 3] = [Item::Predator, Item::Grazer, Item::Plant];

    pub fn name(self) -> &'static str {
        match self {
            Item::Predator => "predator",
            Item::Grazer => "grazer",
            Item::Plant => "plant",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full snapshot of where the agent and every item are.
///
/// Field order is the documented construction order: agent, predator,
/// grazer, plant. The derived `Ord` follows the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Configuration {
    pub agent: Position,
    pub predator: Position,
    pub grazer: Position,
    pub plant: Position,
}

impl Configuration {
    pub fn new(agent: Position, predator: Position, grazer: Position, plant: Position) -> Self {
        Self {
            agent,
            predator,
            grazer,
            plant,
        }
    }

    /// Everyone on one side
    pub fn all(side: Position) -> Self {
        Self::new(side, side, side, side)
    }

    /// Canonical start: everyone on the near bank
    pub fn start() -> Self {
        Self::all(Position::Near)
    }

    /// Canonical goal: everyone on the far bank
    pub fn goal() -> Self {
        Self::all(Position::Far)
    }

    /// Position of an item
    pub fn item(&self, item: Item) -> Position {
        match item {
            Item::Predator => self.predator,
            Item::Grazer => self.grazer,
            Item::Plant => self.plant,
        }
    }

    /// Copy with one item moved to `side`
    pub fn with_item(mut self, item: Item, side: Position) -> Self {
        match item {
            Item::Predator => self.predator = side,
            Item::Grazer => self.grazer = side,
            Item::Plant => self.plant = side,
        }
        self
    }

    /// Copy with the agent moved to `side`
    pub fn with_agent(mut self, side: Position) -> Self {
        self.agent = side;
        self
    }

    /// Check if an item is on the same bank as the agent
    pub fn is_with_agent(&self, item: Item) -> bool {
        self.item(item) == self.agent
    }

    /// Enumerate all 16 configurations in ascending order
    pub fn enumerate() -> impl Iterator<Item = Configuration> {
        (0u8..16).map(|bits| {
            let side = |bit: u8| {
                if bits & (1 << bit) == 0 {
                    Position::Near
                } else {
                    Position::Far
                }
            };
            Configuration::new(side(3), side(2), side(1), side(0))
        })
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.agent.token(),
            self.predator.token(),
            self.grazer.token(),
            self.plant.token()
        )
    }
}

impl FromStr for Configuration {
    type Err = ParseError;

    /// Parse four whitespace-separated side tokens: agent, predator, grazer, plant
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != 4 {
            return Err(ParseError::WrongTokenCount(tokens.len()));
        }
        Ok(Configuration::new(
            tokens[0].parse()?,
            tokens[1].parse()?,
            tokens[2].parse()?,
            tokens[3].parse()?,
        ))
    }
}
