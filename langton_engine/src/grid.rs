use crate::entities::{Agent, Cell, Position};
use crate::error::{non_negative, GridError, Result};
use crate::history::History;
use crate::rules::{Turn, TurnTable};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The board for Langton's Ant.
/// Main entry point for running the simulation.
///
/// The board is a torus: an agent leaving one edge reappears on the opposite
/// one. Every step is recorded so that any number of steps can be rolled
/// back exactly, even after the board has been resized in between.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    // Row-major, `y * width + x`
    cells: Vec<Cell>,
    agent: Option<Agent>,
    turn_table: TurnTable,
    step_count: usize,
    history: History,
}

/// An owned copy of everything observable about a grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    pub config: String,
    pub step_count: usize,
    pub agent: Option<Agent>,
    /// Cell states, one inner vector per row from top to bottom.
    pub cells: Vec<Vec<u8>>,
}

impl GridSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Grid {
    /// Creates an empty board without an agent.
    ///
    /// # Arguments
    /// * `width` - Number of columns.
    /// * `height` - Number of rows.
    /// * `config` - The turn configuration, e.g. `"RL"` for the classic ant.
    pub fn new(width: i64, height: i64, config: &str) -> Result<Grid> {
        let width = non_negative("width", width)?;
        let height = non_negative("height", height)?;
        let area = area(width, height)?;
        let turn_table = TurnTable::parse(config)?;

        debug!("Created a {width}x{height} board with configuration {turn_table}");

        Ok(Grid {
            width,
            height,
            cells: vec![Cell::default(); area],
            agent: None,
            turn_table,
            step_count: 0,
            history: History::new(),
        })
    }

    /// Places a new agent, facing west, at `(x, y)`.
    ///
    /// An agent that is already on the board is replaced.
    pub fn set_agent(&mut self, x: i64, y: i64) -> Result<()> {
        check_index(x, self.width)?;
        check_index(y, self.height)?;

        self.agent = Some(Agent::new(x, y));
        Ok(())
    }

    pub fn clear_agents(&mut self) {
        self.agent = None;
    }

    /// Returns all agents on the board keyed by their position.
    pub fn agents(&self) -> HashMap<Position, Agent> {
        self.agent
            .iter()
            .map(|agent| (agent.position(), *agent))
            .collect()
    }

    pub fn agent(&self) -> Option<Agent> {
        self.agent
    }

    /// Moves the agent `steps` times and returns the new step count.
    pub fn perform_step(&mut self, steps: i64) -> Result<usize> {
        let steps = non_negative("steps", steps)?;
        let mut agent = self.agent.ok_or(GridError::NoAgentPresent)?;

        for _ in 0..steps {
            self.history.record(agent);
            self.advance(&mut agent);
            self.step_count += 1;
        }
        self.agent = Some(agent);

        debug!("Performed {steps} steps, now at step {}", self.step_count);
        Ok(self.step_count)
    }

    /// Rolls the board back by `steps` steps and returns the new step count.
    ///
    /// The board is cleared and the recorded history is replayed up to the
    /// target step. Recorded positions that no longer fit on the board, which
    /// happens after it shrank, are skipped but still counted as steps.
    pub fn reset(&mut self, steps: i64) -> Result<usize> {
        let steps = non_negative("steps", steps)?;
        if steps > self.step_count {
            return Err(GridError::InvalidStepCount {
                requested: steps,
                available: self.step_count,
            });
        }
        if steps == 0 {
            return Ok(self.step_count);
        }

        let target = self.step_count - steps;
        // The agent as it was right before the first undone step
        let resume = self
            .history
            .get(target)
            .filter(|agent| agent.is_within(self.width, self.height));

        self.wipe();
        for step in 0..target {
            if let Some(mut agent) = self
                .history
                .get(step)
                .filter(|agent| agent.is_within(self.width, self.height))
            {
                self.advance(&mut agent);
            }
            self.step_count += 1;
        }
        self.history.truncate(target);
        self.agent = resume;

        debug!("Rolled back {steps} steps, now at step {}", self.step_count);
        Ok(self.step_count)
    }

    /// Changes the size of the board keeping its content centered.
    ///
    /// The agent and the history move along with the content. If the agent
    /// ends up outside a shrunk board it is removed.
    pub fn resize(&mut self, cols: i64, rows: i64) -> Result<()> {
        let cols = non_negative("cols", cols)?;
        let rows = non_negative("rows", rows)?;
        // A mixed resize passes through the larger of both boards
        area(cols.max(self.width), rows.max(self.height))?;

        debug!(
            "Resizing board from {}x{} to {cols}x{rows}",
            self.width, self.height
        );

        if cols < self.width && rows < self.height {
            self.shrink(cols, rows);
        } else if cols >= self.width && rows >= self.height {
            self.expand(cols, rows);
        } else {
            // One axis grows while the other shrinks
            self.expand(cols.max(self.width), rows.max(self.height));
            self.shrink(cols, rows);
        }
        Ok(())
    }

    /// Resets every cell, removes the agent and forgets all steps.
    pub fn clear(&mut self) {
        self.wipe();
        self.history.clear();
        debug!("Cleared the board");
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Number of states each cell cycles through.
    pub fn states(&self) -> usize {
        self.turn_table.states()
    }

    pub fn turn_table(&self) -> &TurnTable {
        &self.turn_table
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns a copy of the cells in column `i`, top to bottom.
    pub fn column(&self, i: i64) -> Result<Vec<Cell>> {
        let x = check_index(i, self.width)?;
        Ok((0..self.height)
            .map(|y| self.cells[self.index(x, y)])
            .collect())
    }

    /// Returns a copy of the cells in row `j`, left to right.
    pub fn row(&self, j: i64) -> Result<Vec<Cell>> {
        let y = check_index(j, self.height)?;
        let start = y * self.width;
        Ok(self.cells[start..start + self.width].to_vec())
    }

    pub fn cell(&self, x: i64, y: i64) -> Result<Cell> {
        let x = check_index(x, self.width)?;
        let y = check_index(y, self.height)?;
        Ok(self.cells[self.index(x, y)])
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let cells = if self.width == 0 {
            vec![vec![]; self.height]
        } else {
            self.cells
                .chunks(self.width)
                .map(|row| row.iter().map(Cell::state).collect())
                .collect()
        };

        GridSnapshot {
            width: self.width,
            height: self.height,
            config: self.turn_table.as_str().to_string(),
            step_count: self.step_count,
            agent: self.agent,
            cells,
        }
    }
}

impl Grid {
    /// One step without touching the history or the step count.
    ///
    /// The agent must be on the board, which also means the board is not
    /// degenerate.
    fn advance(&mut self, agent: &mut Agent) {
        let states = self.turn_table.states();
        let from = self.index(agent.x() as usize, agent.y() as usize);
        self.cells[from].advance(states);

        agent.move_forward();
        // Torus: each axis wraps on its own
        let x = agent.x().rem_euclid(self.width as i64);
        let y = agent.y().rem_euclid(self.height as i64);
        agent.set_position(x, y);

        let state = self.cells[self.index(x as usize, y as usize)].state();
        match self.turn_table.turn_for(state) {
            Turn::Right => agent.turn_right(),
            Turn::Left => agent.turn_left(),
        }

        trace!(
            "Agent moved to ({x}, {y}) facing {:?}",
            agent.orientation()
        );
    }

    /// Zeroes the board, removes the agent and resets the step count.
    /// The history is left alone so that `reset` can replay it.
    fn wipe(&mut self) {
        self.cells.fill(Cell::default());
        self.agent = None;
        self.step_count = 0;
    }

    /// Crops the centered `cols` x `rows` rectangle out of the board.
    fn shrink(&mut self, cols: usize, rows: usize) {
        let x_shift = (self.width - cols) / 2;
        let y_shift = (self.height - rows) / 2;

        let mut cells = Vec::with_capacity(cols * rows);
        for y in 0..rows {
            let start = self.index(x_shift, y + y_shift);
            cells.extend_from_slice(&self.cells[start..start + cols]);
        }

        self.relocate(cells, cols, rows, -(x_shift as i64), -(y_shift as i64));
    }

    /// Embeds the board in the center of a blank `cols` x `rows` board.
    fn expand(&mut self, cols: usize, rows: usize) {
        let x_shift = (cols - self.width) / 2;
        let y_shift = (rows - self.height) / 2;

        let mut cells = vec![Cell::default(); cols * rows];
        for y in 0..self.height {
            let from = self.index(0, y);
            let to = (y + y_shift) * cols + x_shift;
            cells[to..to + self.width].copy_from_slice(&self.cells[from..from + self.width]);
        }

        self.relocate(cells, cols, rows, x_shift as i64, y_shift as i64);
    }

    /// Installs resized cells and moves the agent and the history along.
    fn relocate(&mut self, cells: Vec<Cell>, cols: usize, rows: usize, dx: i64, dy: i64) {
        self.cells = cells;
        self.width = cols;
        self.height = rows;
        self.history.translate(dx, dy);

        if let Some(mut agent) = self.agent.take() {
            agent.translate(dx, dy);
            if agent.is_within(cols, rows) {
                self.agent = Some(agent);
            } else {
                warn!(
                    "Agent at ({}, {}) is outside the {cols}x{rows} board and was removed",
                    agent.x(),
                    agent.y()
                );
            }
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

fn area(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .ok_or(GridError::BoardTooLarge { width, height })
}

fn check_index(index: i64, bound: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|index| *index < bound)
        .ok_or(GridError::IndexOutOfRange { index, bound })
}
