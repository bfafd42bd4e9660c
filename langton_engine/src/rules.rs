use crate::error::{GridError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const MIN_STATES: usize = 2;
pub const MAX_STATES: usize = 12;

static NOT_A_TURN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^LR]").unwrap());

/// Where the agent turns after stepping onto a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// Maps every cell state to the turn the agent makes on it.
///
/// Parsed from a string such as `"RL"` where the character at index `i`
/// decides the turn for state `i`. The number of characters is the number of
/// states a cell cycles through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnTable {
    config: String,
    turns: Vec<Turn>,
}

impl TurnTable {
    /// Parses a turn configuration.
    ///
    /// # Arguments
    /// * `config` - Between 2 and 12 characters, each either `L` or `R`.
    pub fn parse(config: &str) -> Result<TurnTable> {
        let invalid = |reason: String| GridError::InvalidConfiguration {
            config: config.to_string(),
            reason,
        };

        let length = config.chars().count();
        if !(MIN_STATES..=MAX_STATES).contains(&length) {
            return Err(invalid(format!(
                "expected {MIN_STATES} to {MAX_STATES} states, got {length}"
            )));
        }

        if let Some(found) = NOT_A_TURN.find(config) {
            let index = config[..found.start()].chars().count();
            return Err(invalid(format!(
                "unexpected {:?} at index {index}, only 'L' and 'R' are allowed",
                found.as_str()
            )));
        }

        let turns = config
            .chars()
            .map(|c| match c {
                'R' => Turn::Right,
                _ => Turn::Left,
            })
            .collect();

        Ok(TurnTable {
            config: config.to_string(),
            turns,
        })
    }

    /// Returns the turn for the given cell state.
    ///
    /// Cells never hold a state outside `0..states()`, so the lookup wraps
    /// rather than failing.
    pub fn turn_for(&self, state: u8) -> Turn {
        self.turns[state as usize % self.turns.len()]
    }

    /// Number of states a cell cycles through.
    pub fn states(&self) -> usize {
        self.turns.len()
    }

    pub fn as_str(&self) -> &str {
        &self.config
    }
}

impl fmt::Display for TurnTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.config)
    }
}
