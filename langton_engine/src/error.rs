use std::fmt;

/// Result type used throughout the engine.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors reported by the grid and its building blocks.
///
/// A failed operation never changes the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The turn configuration is not 2 to 12 characters of `L` and `R`.
    InvalidConfiguration {
        /// The rejected configuration string.
        config: String,
        /// What is wrong with it.
        reason: String,
    },
    /// A step was requested while no agent is on the board.
    NoAgentPresent,
    /// A rollback asked for more steps than have been taken.
    InvalidStepCount {
        /// Number of steps to roll back.
        requested: usize,
        /// Number of steps taken so far.
        available: usize,
    },
    /// A dimension or a step count was negative.
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// The value that was passed.
        value: i64,
    },
    /// The board would have more cells than can be addressed.
    BoardTooLarge {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// A row, column or position lies outside the board.
    IndexOutOfRange {
        /// The requested index.
        index: i64,
        /// The exclusive upper bound that applied.
        bound: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { config, reason } => {
                write!(f, "invalid turn configuration {config:?}: {reason}")
            }
            Self::NoAgentPresent => write!(f, "no agent on the board"),
            Self::InvalidStepCount {
                requested,
                available,
            } => write!(
                f,
                "cannot roll back {requested} steps, only {available} taken"
            ),
            Self::InvalidArgument { name, value } => {
                write!(f, "argument `{name}` must be non-negative, got {value}")
            }
            Self::BoardTooLarge { width, height } => {
                write!(f, "a {width}x{height} board has too many cells")
            }
            Self::IndexOutOfRange { index, bound } => {
                write!(f, "index {index} out of range 0..{bound}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Converts a signed argument to `usize`, rejecting negative values.
pub(crate) fn non_negative(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| GridError::InvalidArgument { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_converting_a_non_negative_argument_the_value_is_kept() {
        assert_eq!(non_negative("cols", 0), Ok(0));
        assert_eq!(non_negative("cols", 42), Ok(42));
    }

    #[test]
    fn when_converting_a_negative_argument_an_invalid_argument_error_is_returned() {
        assert_eq!(
            non_negative("rows", -3),
            Err(GridError::InvalidArgument {
                name: "rows",
                value: -3
            })
        );
    }

    #[test]
    fn when_formatting_errors_the_message_names_the_problem() {
        let error = GridError::InvalidStepCount {
            requested: 5,
            available: 2,
        };
        assert_eq!(error.to_string(), "cannot roll back 5 steps, only 2 taken");

        let error = GridError::BoardTooLarge {
            width: 1 << 40,
            height: 1 << 40,
        };
        assert_eq!(
            error.to_string(),
            "a 1099511627776x1099511627776 board has too many cells"
        );

        let error = GridError::IndexOutOfRange { index: 7, bound: 4 };
        assert_eq!(error.to_string(), "index 7 out of range 0..4");
    }
}
