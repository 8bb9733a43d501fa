use std::collections::VecDeque;

use knight_core::{SQUARE_COUNT, Square};

use crate::traits::Pather;

/// Move counts from a single source to every board square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMap {
    source: Square,
    dist: [Option<u32>; SQUARE_COUNT],
}

impl DistanceMap {
    /// The square the distances are measured from.
    #[inline]
    pub fn source(&self) -> Square {
        self.source
    }

    /// Distance to `sq`, or `None` if it is off the board or unreachable.
    #[inline]
    pub fn at(&self, sq: Square) -> Option<u32> {
        self.dist[sq.index()?]
    }

    /// Reached squares with their distances, in index order.
    pub fn reached(&self) -> impl Iterator<Item = (Square, u32)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (Square::from_index(i), d)))
    }
}

/// Compute a breadth-first distance map from `source`.
///
/// Each step has cost 1. An off-board or impassable source yields a map where
/// nothing is reached.
pub fn bfs_map<P: Pather>(pather: &P, source: Square) -> DistanceMap {
    let mut map = DistanceMap {
        source,
        dist: [None; SQUARE_COUNT],
    };
    let Some(si) = source.index() else {
        return map;
    };
    if !pather.is_passable(source) {
        return map;
    }
    map.dist[si] = Some(0);

    let mut queue: VecDeque<Square> = VecDeque::new();
    queue.push_back(source);
    let mut nbuf = Vec::with_capacity(8);

    while let Some(cp) = queue.pop_front() {
        let Some(current_dist) = cp.index().and_then(|i| map.dist[i]) else {
            continue;
        };

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = np.index() else {
                continue;
            };
            if map.dist[ni].is_some() {
                continue;
            }
            map.dist[ni] = Some(current_dist + 1);
            queue.push_back(np);
        }
    }

    map
}
