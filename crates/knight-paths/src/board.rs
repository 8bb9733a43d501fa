use knight_core::Square;

use crate::distance::knight_estimate;
use crate::neighbors::KNIGHT_OFFSETS;
use crate::obstacles::ObstacleSet;
use crate::traits::{AstarPather, Pather};

/// An 8×8 board where a knight moves around blocked squares.
#[derive(Clone, Copy, Debug, Default)]
pub struct KnightBoard {
    obstacles: ObstacleSet,
}

impl KnightBoard {
    pub fn new(obstacles: ObstacleSet) -> Self {
        Self { obstacles }
    }

    #[inline]
    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    /// Whether a knight may stand on `sq`.
    #[inline]
    pub fn is_open(&self, sq: Square) -> bool {
        sq.in_bounds() && !self.obstacles.contains(sq)
    }
}

impl Pather for KnightBoard {
    fn neighbors(&self, sq: Square, buf: &mut Vec<Square>) {
        for &(dr, dc) in KNIGHT_OFFSETS.iter() {
            let n = sq.shift(dr, dc);
            if self.is_open(n) {
                buf.push(n);
            }
        }
    }

    #[inline]
    fn is_passable(&self, sq: Square) -> bool {
        self.is_open(sq)
    }
}

impl AstarPather for KnightBoard {
    #[inline]
    fn estimate(&self, from: Square, to: Square) -> u32 {
        knight_estimate(from, to)
    }
}
