//! Board geometry: the [`Square`] coordinate and iteration over the board.
//!
//! Rows grow with the rank (rank 1 is row 0) and columns grow with the file
//! (file `a` is column 0). Squares may be built off the board by [`Square::shift`];
//! use [`Square::in_bounds`] or [`Square::index`] before treating one as a
//! real board square.

use std::fmt;
use std::iter::FusedIterator;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i32 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A board coordinate as a `(row, col)` pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    /// Bottom-left corner, `a1`.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new square. The result is not checked against the board.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return the square shifted by `(dr, dc)`.
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Whether both coordinates lie in `[0, BOARD_SIZE)`.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Flat index `row * 8 + col`, or `None` off the board.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if !self.in_bounds() {
            return None;
        }
        Some((self.row * BOARD_SIZE + self.col) as usize)
    }

    /// Inverse of [`Square::index`]. Indices past the board wrap into rows
    /// beyond rank 8 and are therefore out of bounds.
    #[inline]
    pub const fn from_index(idx: usize) -> Self {
        let idx = idx as i32;
        Self {
            row: idx / BOARD_SIZE,
            col: idx % BOARD_SIZE,
        }
    }

    /// Iterate over all 64 squares in index order (`a1`, `b1`, .. `h8`).
    #[inline]
    pub fn all() -> SquareIter {
        SquareIter { next: 0 }
    }

    /// Squared Euclidean distance between two squares.
    #[inline]
    pub const fn dist_sq(self, other: Self) -> i32 {
        let dr = self.row - other.row;
        let dc = self.col - other.col;
        dr * dr + dc * dc
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Square {
    /// On-board squares print as algebraic notation, anything else as a raw
    /// `(row, col)` pair.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::notation::try_format(*self) {
            Some(s) => f.write_str(&s),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl std::str::FromStr for Square {
    type Err = crate::notation::InvalidNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::notation::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match crate::notation::try_format(*self) {
            Some(s) => serializer.serialize_str(&s),
            None => Err(serde::ser::Error::custom(format_args!(
                "square ({}, {}) is off the board",
                self.row, self.col
            ))),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        crate::notation::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// SquareIter
// ---------------------------------------------------------------------------

/// Iterator over every board square in index order.
#[derive(Clone, Debug)]
pub struct SquareIter {
    next: usize,
}

impl Iterator for SquareIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.next >= SQUARE_COUNT {
            return None;
        }
        let sq = Square::from_index(self.next);
        self.next += 1;
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = SQUARE_COUNT.saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareIter {}

impl FusedIterator for SquareIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn shift_and_bounds() {
        let a1 = Square::ORIGIN;
        assert!(a1.in_bounds());
        assert_eq!(a1.shift(2, 1), Square::new(2, 1));
        assert!(!a1.shift(-1, 2).in_bounds());
        assert!(!a1.shift(2, -1).in_bounds());
        assert!(Square::new(7, 7).in_bounds());
        assert!(!Square::new(8, 0).in_bounds());
        assert!(!Square::new(0, 8).in_bounds());
    }

    #[test]
    fn index_round_trip() {
        for i in 0..SQUARE_COUNT {
            let sq = Square::from_index(i);
            assert!(sq.in_bounds());
            assert_eq!(sq.index(), Some(i));
        }
        assert_eq!(Square::new(0, 8).index(), None);
        assert_eq!(Square::new(-1, 0).index(), None);
        assert!(!Square::from_index(SQUARE_COUNT).in_bounds());
    }

    #[test]
    fn all_visits_every_square_once() {
        let it = Square::all();
        assert_eq!(it.len(), 64);
        let squares: Vec<_> = it.collect();
        assert_eq!(squares.first(), Some(&Square::new(0, 0)));
        assert_eq!(squares.last(), Some(&Square::new(7, 7)));
        let unique: HashSet<_> = squares.iter().copied().collect();
        assert_eq!(unique.len(), 64);
        // Index order is also sort order.
        let mut sorted = squares.clone();
        sorted.sort();
        assert_eq!(sorted, squares);
    }

    #[test]
    fn dist_sq_is_symmetric() {
        let a = Square::new(1, 2);
        let b = Square::new(4, 6);
        assert_eq!(a.dist_sq(b), 25);
        assert_eq!(b.dist_sq(a), 25);
        assert_eq!(a.dist_sq(a), 0);
    }

    #[test]
    fn display_uses_notation_on_board() {
        assert_eq!(Square::new(0, 0).to_string(), "a1");
        assert_eq!(Square::new(3, 4).to_string(), "e4");
        assert_eq!(Square::new(-1, 9).to_string(), "(-1, 9)");
    }

    #[test]
    fn from_str_parses_notation() {
        let sq: Square = "g7".parse().unwrap();
        assert_eq!(sq, Square::new(6, 6));
        assert!("i1".parse::<Square>().is_err());
    }
}
