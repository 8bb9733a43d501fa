use knight_core::Square;

/// Minimal pathfinding interface — provides neighbor enumeration.
///
/// Every move between neighbors costs exactly one step.
pub trait Pather {
    /// Append neighbors of `sq` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, sq: Square, buf: &mut Vec<Square>);

    /// Whether a walker may stand on `sq`. Searches treat a square that is
    /// not passable as having no path to or from it.
    #[inline]
    fn is_passable(&self, _sq: Square) -> bool {
        true
    }
}

/// Pather with an admissible heuristic, required for A*.
pub trait AstarPather: Pather {
    /// Lower bound on the number of steps from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Square, to: Square) -> u32;
}
