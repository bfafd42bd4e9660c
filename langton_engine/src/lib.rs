//! # langton_engine
//!
//! The simulation engine for Langton's Ant.
//! A single ant walks a toroidal board, flipping the state of every cell it
//! leaves and turning left or right depending on the state of the cell it
//! enters. Steps can be rolled back and the board can be resized at any time.

pub mod entities;
pub mod error;
pub mod grid;
pub mod rules;

pub use entities::{Agent, Cell, Orientation, Position};
pub use error::{GridError, Result};
pub use grid::{Grid, GridSnapshot};
pub use rules::{Turn, TurnTable};

mod history;
#[cfg(feature = "python")]
mod python;
