//! Algebraic notation codec.
//!
//! A square is written as a file letter `a`..`h` followed by a rank digit
//! `1`..`8`. Parsing is case-insensitive and ignores surrounding whitespace.

use std::fmt;

use crate::geom::Square;

/// Convert algebraic notation (`"e4"`, `"H8"`, `" b2 "`) into a [`Square`].
///
/// The column is the file index (`a` = 0) and the row is the rank minus one.
pub fn parse(notation: &str) -> Result<Square, InvalidNotation> {
    let s = notation.trim();
    let mut chars = s.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(InvalidNotation::new(notation));
    };
    let file = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return Err(InvalidNotation::new(notation));
    }
    let col = (file as u8 - b'a') as i32;
    let row = (rank as u8 - b'1') as i32;
    Ok(Square::new(row, col))
}

/// Convert an on-board [`Square`] into lowercase algebraic notation.
///
/// Callers must only pass squares with [`Square::in_bounds`]; use
/// [`try_format`] when that is not already known.
pub fn format(sq: Square) -> String {
    debug_assert!(sq.in_bounds(), "format called with off-board square {sq:?}");
    let file = (b'a' + sq.col as u8) as char;
    let rank = (b'1' + sq.row as u8) as char;
    let mut s = String::with_capacity(2);
    s.push(file);
    s.push(rank);
    s
}

/// Checked variant of [`format`]; returns `None` for off-board squares.
pub fn try_format(sq: Square) -> Option<String> {
    if sq.in_bounds() {
        Some(format(sq))
    } else {
        None
    }
}

/// Error returned when a string is not a valid square in algebraic notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNotation {
    /// The rejected input, as given.
    pub input: String,
}

impl InvalidNotation {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for InvalidNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid square notation \u{201c}{}\u{201d}: expected a file a-h followed by a rank 1-8",
            self.input
        )
    }
}

impl std::error::Error for InvalidNotation {}
