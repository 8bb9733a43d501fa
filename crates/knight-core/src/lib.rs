//! **knight-core** — board geometry and algebraic notation.
//!
//! This crate provides the value types shared by the *knight* crates: the
//! [`Square`] coordinate on a fixed 8×8 board and the codec that converts
//! between squares and algebraic notation (`"a1"` .. `"h8"`).

pub mod geom;
pub mod notation;

pub use geom::{BOARD_SIZE, SQUARE_COUNT, Square, SquareIter};
pub use notation::{InvalidNotation, format, parse, try_format};
