//! Shortest knight paths on an 8×8 board with blocked squares.
//!
//! The entry point is [`find_knight_path`], which takes the start, goal and
//! obstacles in algebraic notation and returns the squares of a shortest
//! knight path, `Ok(None)` when the goal cannot be reached, or a
//! [`PathError`] for malformed input.
//!
//! The building blocks are public as well:
//!
//! - **A\*** search over any [`AstarPather`] ([`astar_path`], [`astar_search`])
//! - **BFS** exact distance maps over any [`Pather`] ([`bfs_map`])
//! - [`KnightBoard`], the knight move set around an [`ObstacleSet`]
//! - [`knight_estimate`], the admissible `ceil(d / sqrt(5))` heuristic
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`AstarPather`] : [`Pather`] | A* |

mod astar;
mod bfs;
mod board;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod obstacles;
mod path;
mod search;
mod traits;

pub use astar::{SearchStats, astar_path, astar_search};
pub use bfs::{DistanceMap, bfs_map};
pub use board::KnightBoard;
pub use distance::{euclidean, knight_estimate};
pub use error::PathError;
pub use frontier::{Frontier, SearchNode};
pub use neighbors::{KNIGHT_OFFSETS, is_knight_move, knight_moves};
pub use obstacles::ObstacleSet;
pub use path::KnightPath;
pub use search::{find_knight_path, find_knight_path_squares, knight_distance};
pub use traits::{AstarPather, Pather};
