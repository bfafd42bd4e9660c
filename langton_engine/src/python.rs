use crate::entities::{Agent, Cell, Orientation};
use crate::error::GridError;
use crate::grid::Grid;
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use std::collections::HashMap;

impl From<GridError> for PyErr {
    fn from(error: GridError) -> PyErr {
        match error {
            GridError::IndexOutOfRange { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

/// Represents the ant in the state handed to Python.
#[derive(Clone)]
#[pyclass(name = "Agent", module = "langton_engine", get_all)]
pub struct PyAgent {
    /// The column the ant stands on.
    pub x: i64,
    /// The row the ant stands on.
    pub y: i64,
    /// The direction the ant is facing.
    pub orientation: Orientation,
}

impl From<Agent> for PyAgent {
    fn from(agent: Agent) -> PyAgent {
        PyAgent {
            x: agent.x(),
            y: agent.y(),
            orientation: agent.orientation(),
        }
    }
}

/// The board for Langton's Ant.
#[pyclass(name = "Grid", module = "langton_engine")]
pub struct PyGrid {
    grid: Grid,
}

#[pymethods]
impl PyGrid {
    /// Creates a new board.
    ///
    /// # Arguments
    /// * `width` - Number of columns.
    /// * `height` - Number of rows.
    /// * `config` - The turn configuration, 2 to 12 characters of `L` and `R`.
    #[new]
    pub fn new(width: i64, height: i64, config: &str) -> PyResult<PyGrid> {
        Ok(PyGrid {
            grid: Grid::new(width, height, config)?,
        })
    }

    pub fn set_agent(&mut self, x: i64, y: i64) -> PyResult<()> {
        Ok(self.grid.set_agent(x, y)?)
    }

    pub fn clear_agents(&mut self) {
        self.grid.clear_agents();
    }

    /// Returns the ants on the board keyed by their `(x, y)` position, at most one.
    pub fn agents(&self) -> HashMap<(i64, i64), PyAgent> {
        self.grid
            .agents()
            .into_iter()
            .map(|(position, agent)| ((position.x, position.y), agent.into()))
            .collect()
    }

    /// Moves the ant `steps` times and returns the new step count.
    #[pyo3(signature = (steps=1))]
    pub fn perform_step(&mut self, steps: i64) -> PyResult<usize> {
        Ok(self.grid.perform_step(steps)?)
    }

    /// Rolls back `steps` steps and returns the new step count.
    pub fn reset(&mut self, steps: i64) -> PyResult<usize> {
        Ok(self.grid.reset(steps)?)
    }

    pub fn resize(&mut self, cols: i64, rows: i64) -> PyResult<()> {
        Ok(self.grid.resize(cols, rows)?)
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn step_count(&self) -> usize {
        self.grid.step_count()
    }

    pub fn row(&self, j: i64) -> PyResult<Vec<u32>> {
        Ok(states(self.grid.row(j)?))
    }

    pub fn column(&self, i: i64) -> PyResult<Vec<u32>> {
        Ok(states(self.grid.column(i)?))
    }

    /// Returns the whole board as a JSON document.
    pub fn to_json(&self) -> PyResult<String> {
        self.grid
            .snapshot()
            .to_json()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

// Plain integers, a `Vec<u8>` would reach Python as `bytes`
fn states(cells: Vec<Cell>) -> Vec<u32> {
    cells.iter().map(|cell| cell.state() as u32).collect()
}

#[pymodule]
fn langton_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Orientation>()?;
    m.add_class::<PyAgent>()?;
    m.add_class::<PyGrid>()?;
    Ok(())
}
