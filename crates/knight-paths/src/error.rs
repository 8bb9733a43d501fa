use std::fmt;

use knight_core::{InvalidNotation, Square};

/// Errors returned for malformed search input.
///
/// An unreachable goal is not an error; searches report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The start, goal or an obstacle is not valid algebraic notation.
    InvalidNotation(InvalidNotation),
    /// An endpoint lies off the board.
    OutOfBounds(Square),
}

impl From<InvalidNotation> for PathError {
    fn from(err: InvalidNotation) -> Self {
        Self::InvalidNotation(err)
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNotation(e) => e.fmt(f),
            Self::OutOfBounds(sq) => {
                write!(f, "square ({}, {}) is off the board", sq.row, sq.col)
            }
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidNotation(e) => Some(e),
            Self::OutOfBounds(_) => None,
        }
    }
}
