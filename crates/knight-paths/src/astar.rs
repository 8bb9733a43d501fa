use knight_core::{SQUARE_COUNT, Square};
use log::{debug, trace};

use crate::frontier::{Frontier, SearchNode};
use crate::traits::AstarPather;

/// Counters collected during one A* run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Squares moved into the closed set.
    pub expanded: usize,
    /// Nodes pushed onto the frontier, including the start node.
    pub pushed: usize,
    /// Popped nodes discarded because their square was already closed.
    pub stale: usize,
}

/// Compute the shortest path from `from` to `to` using A*.
///
/// Returns the full path (including both endpoints) or `None` if no path
/// exists or either endpoint is off the board or not passable.
pub fn astar_path<P: AstarPather>(pather: &P, from: Square, to: Square) -> Option<Vec<Square>> {
    astar_search(pather, from, to).0
}

/// Like [`astar_path`], but also reports [`SearchStats`] for the run.
pub fn astar_search<P: AstarPather>(
    pather: &P,
    from: Square,
    to: Square,
) -> (Option<Vec<Square>>, SearchStats) {
    let mut stats = SearchStats::default();
    let (Some(start_idx), Some(goal_idx)) = (from.index(), to.index()) else {
        return (None, stats);
    };
    if !pather.is_passable(from) || !pather.is_passable(to) {
        debug!("astar {} -> {}: endpoint is not passable", from, to);
        return (None, stats);
    }

    // All bookkeeping is local to this call, indexed by square.
    let mut g_score: [Option<u32>; SQUARE_COUNT] = [None; SQUARE_COUNT];
    let mut came_from: [Option<usize>; SQUARE_COUNT] = [None; SQUARE_COUNT];
    let mut closed = [false; SQUARE_COUNT];

    let start_h = pather.estimate(from, to);
    debug!("astar {} -> {}: start h={}", from, to, start_h);

    g_score[start_idx] = Some(0);
    let mut open = Frontier::new();
    open.push(SearchNode::new(from, 0, start_h));
    stats.pushed += 1;

    let mut nbuf = Vec::with_capacity(8);

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };
        let Some(ci) = current.square.index() else {
            continue;
        };

        if ci == goal_idx {
            break 'search true;
        }

        // Skip stale entries.
        if closed[ci] {
            stats.stale += 1;
            continue;
        }
        closed[ci] = true;
        stats.expanded += 1;
        trace!(
            "expand {} g={} h={} f={}",
            current.square, current.g, current.h, current.f
        );

        nbuf.clear();
        pather.neighbors(current.square, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = np.index() else {
                continue;
            };
            if closed[ni] {
                continue;
            }
            let tentative_g = current.g + 1;
            if g_score[ni].is_some_and(|g| tentative_g >= g) {
                continue;
            }
            came_from[ni] = Some(ci);
            g_score[ni] = Some(tentative_g);
            open.push(SearchNode::new(np, tentative_g, pather.estimate(np, to)));
            stats.pushed += 1;
        }
    };

    debug!(
        "astar {} -> {}: found={} expanded={} pushed={} stale={}",
        from, to, found, stats.expanded, stats.pushed, stats.stale
    );

    if !found {
        return (None, stats);
    }

    // Reconstruct path.
    let mut path = Vec::new();
    let mut ci = Some(goal_idx);
    while let Some(i) = ci {
        path.push(Square::from_index(i));
        ci = came_from[i];
    }
    path.reverse();
    (Some(path), stats)
}
