use std::cmp::Ordering;
use std::collections::BinaryHeap;

use knight_core::Square;

// ---------------------------------------------------------------------------
// Search node
// ---------------------------------------------------------------------------

/// A candidate square discovered during A*, with its cost bookkeeping.
///
/// Several nodes for the same square may sit in the frontier at once; only
/// the cheapest is ever expanded and the rest are skipped when popped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub square: Square,
    /// Moves taken from the start.
    pub g: u32,
    /// Heuristic estimate of moves left to the goal.
    pub h: u32,
    /// `g + h`.
    pub f: u32,
}

impl SearchNode {
    #[inline]
    pub fn new(square: Square, g: u32, h: u32) -> Self {
        Self {
            square,
            g,
            h,
            f: g + h,
        }
    }

    /// Whether `self` should be expanded before `other`: lower `f` first, and
    /// on equal `f` the node estimated closer to the goal.
    #[inline]
    pub fn precedes(&self, other: &Self) -> bool {
        self.f < other.f || (self.f == other.f && self.h < other.h)
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the preceding node first. The
        // square only breaks remaining ties so pops are deterministic.
        if self.precedes(other) {
            Ordering::Greater
        } else if other.precedes(self) {
            Ordering::Less
        } else {
            other.square.cmp(&self.square)
        }
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Binary min-heap of [`SearchNode`]s ordered by [`SearchNode::precedes`].
///
/// There is no decrease-key: an improved cost is pushed as a new node.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<SearchNode>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, node: SearchNode) {
        self.heap.push(node);
    }

    /// Remove and return the highest-priority node, or `None` when empty.
    #[inline]
    pub fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
