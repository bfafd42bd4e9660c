use langton_engine::GridError;
use std::fmt;

/// Problems reported back to the user, one fixed message each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellError {
    InvalidInput,
    InvalidStates,
    UnknownCommand,
    NoBoard,
    NoAnt,
    TooManyAnts,
    IndexOutOfRange,
    NotEnoughSteps,
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ShellError::InvalidInput => "Invalid input.",
            ShellError::InvalidStates => "Invalid states.",
            ShellError::UnknownCommand => "This command does not exist.",
            ShellError::NoBoard => "No board existing.",
            ShellError::NoAnt => "No ant existing.",
            ShellError::TooManyAnts => "Only one ant is allowed at once.",
            ShellError::IndexOutOfRange => "Index out of range.",
            ShellError::NotEnoughSteps => "Not enough steps to reset.",
        };
        write!(f, "Error! {message}")
    }
}

impl std::error::Error for ShellError {}

impl From<GridError> for ShellError {
    fn from(error: GridError) -> ShellError {
        match error {
            GridError::InvalidConfiguration { .. } => ShellError::InvalidStates,
            GridError::NoAgentPresent => ShellError::NoAnt,
            GridError::InvalidStepCount { .. } => ShellError::NotEnoughSteps,
            GridError::InvalidArgument { .. } | GridError::BoardTooLarge { .. } => {
                ShellError::InvalidInput
            }
            GridError::IndexOutOfRange { .. } => ShellError::IndexOutOfRange,
        }
    }
}
