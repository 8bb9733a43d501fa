use std::collections::HashSet;

use knight_core::Square;

use crate::neighbors::is_knight_move;
use crate::obstacles::ObstacleSet;

/// A non-empty sequence of squares from start to goal, each consecutive
/// pair one knight move apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KnightPath(Vec<Square>);

impl KnightPath {
    /// Wrap squares produced by the search engine. `squares` must be non-empty.
    pub(crate) fn from_squares(squares: Vec<Square>) -> Self {
        debug_assert!(!squares.is_empty());
        Self(squares)
    }

    #[inline]
    pub fn squares(&self) -> &[Square] {
        &self.0
    }

    /// Number of knight moves (one less than the number of squares).
    #[inline]
    pub fn moves(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.0[0]
    }

    #[inline]
    pub fn goal(&self) -> Square {
        self.0[self.0.len() - 1]
    }

    /// The path in algebraic notation, start first.
    pub fn to_notation(&self) -> Vec<String> {
        self.0.iter().map(|&sq| knight_core::format(sq)).collect()
    }

    /// Whether every square is on the board and unblocked, no square repeats,
    /// and every step is a knight move.
    pub fn is_valid(&self, obstacles: &ObstacleSet) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        let squares_ok = self
            .0
            .iter()
            .all(|&sq| sq.in_bounds() && !obstacles.contains(sq) && seen.insert(sq));
        squares_ok && self.0.windows(2).all(|w| is_knight_move(w[0], w[1]))
    }

    pub fn into_squares(self) -> Vec<Square> {
        self.0
    }
}
