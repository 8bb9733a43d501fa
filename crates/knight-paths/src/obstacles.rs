use knight_core::{InvalidNotation, SQUARE_COUNT, Square};

/// A set of blocked board squares, one bit per square index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ObstacleSet {
    bits: u64,
}

impl ObstacleSet {
    /// Create an empty set.
    #[inline]
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build a set from squares in algebraic notation.
    ///
    /// Duplicates collapse; the first malformed entry is returned as an error.
    pub fn build<I, S>(notations: I) -> Result<Self, InvalidNotation>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for n in notations {
            set.insert(knight_core::parse(n.as_ref())?);
        }
        Ok(set)
    }

    /// Block `sq`. Returns `true` if it was not already blocked.
    /// Off-board squares are ignored and return `false`.
    pub fn insert(&mut self, sq: Square) -> bool {
        let Some(i) = sq.index() else {
            return false;
        };
        let was_set = self.bits & (1 << i) != 0;
        self.bits |= 1 << i;
        !was_set
    }

    /// Whether `sq` is blocked. Off-board squares are never blocked.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        match sq.index() {
            Some(i) => self.bits & (1 << i) != 0,
            None => false,
        }
    }

    /// Number of blocked squares.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Blocked squares in index order.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        (0..SQUARE_COUNT)
            .filter(|&i| self.bits & (1 << i) != 0)
            .map(Square::from_index)
    }
}

impl FromIterator<Square> for ObstacleSet {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        let mut set = Self::new();
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl Extend<Square> for ObstacleSet {
    fn extend<T: IntoIterator<Item = Square>>(&mut self, iter: T) {
        for sq in iter {
            self.insert(sq);
        }
    }
}
