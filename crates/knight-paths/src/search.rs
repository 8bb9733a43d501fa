//! Notation-level entry points.

use knight_core::Square;
use log::debug;

use crate::astar::astar_path;
use crate::bfs::bfs_map;
use crate::board::KnightBoard;
use crate::error::PathError;
use crate::obstacles::ObstacleSet;
use crate::path::KnightPath;

/// Validated endpoints plus the board they are searched on.
struct Query {
    start: Square,
    goal: Square,
    board: KnightBoard,
}

impl Query {
    fn parse<S: AsRef<str>>(start: &str, goal: &str, obstacles: &[S]) -> Result<Self, PathError> {
        let start = knight_core::parse(start)?;
        let goal = knight_core::parse(goal)?;
        for sq in [start, goal] {
            if !sq.in_bounds() {
                return Err(PathError::OutOfBounds(sq));
            }
        }
        let obstacles = ObstacleSet::build(obstacles)?;
        Ok(Self {
            start,
            goal,
            board: KnightBoard::new(obstacles),
        })
    }

    fn endpoint_blocked(&self) -> bool {
        let blocked = !self.board.is_open(self.start) || !self.board.is_open(self.goal);
        if blocked {
            debug!("{} -> {}: endpoint is blocked", self.start, self.goal);
        }
        blocked
    }
}

/// Find the shortest knight path from `start` to `goal` avoiding `obstacles`,
/// all given in algebraic notation.
///
/// Returns the squares from `start` to `goal` inclusive, `Ok(None)` when the
/// goal cannot be reached (including when either endpoint is blocked), or an
/// error when any input is not valid notation.
///
/// ```
/// let path = knight_paths::find_knight_path("b1", "c3", &["a3"]).unwrap();
/// assert_eq!(path, Some(vec!["b1".to_string(), "c3".to_string()]));
/// ```
pub fn find_knight_path<S: AsRef<str>>(
    start: &str,
    goal: &str,
    obstacles: &[S],
) -> Result<Option<Vec<String>>, PathError> {
    Ok(find_knight_path_squares(start, goal, obstacles)?.map(|p| p.to_notation()))
}

/// Typed variant of [`find_knight_path`].
pub fn find_knight_path_squares<S: AsRef<str>>(
    start: &str,
    goal: &str,
    obstacles: &[S],
) -> Result<Option<KnightPath>, PathError> {
    let query = Query::parse(start, goal, obstacles)?;
    if query.endpoint_blocked() {
        return Ok(None);
    }
    Ok(astar_path(&query.board, query.start, query.goal).map(KnightPath::from_squares))
}

/// Exact knight-move distance from `start` to `goal` by breadth-first search.
///
/// Validation and blocked endpoints behave as in [`find_knight_path`].
pub fn knight_distance<S: AsRef<str>>(
    start: &str,
    goal: &str,
    obstacles: &[S],
) -> Result<Option<u32>, PathError> {
    let query = Query::parse(start, goal, obstacles)?;
    if query.endpoint_blocked() {
        return Ok(None);
    }
    Ok(bfs_map(&query.board, query.start).at(query.goal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::astar_search;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const NONE: &[&str] = &[];

    fn strings(path: &[&str]) -> Option<Vec<String>> {
        Some(path.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn same_square_trivial_path() {
        assert_eq!(find_knight_path("d4", "d4", NONE).unwrap(), strings(&["d4"]));
    }

    #[test]
    fn blocked_endpoint_is_no_path() {
        assert_eq!(find_knight_path("a1", "a1", &["a1"]).unwrap(), None);
        assert_eq!(find_knight_path("a1", "c2", &["c2"]).unwrap(), None);
        assert_eq!(find_knight_path("c2", "a1", &["c2"]).unwrap(), None);
        assert_eq!(knight_distance("a1", "c2", &["a1"]).unwrap(), None);
    }

    #[test]
    fn a1_to_b2_matches_bfs() {
        let path = find_knight_path("a1", "b2", NONE).unwrap().unwrap();
        let dist = knight_distance("a1", "b2", NONE).unwrap().unwrap();
        assert_eq!(dist, 4);
        assert_eq!(path.len() - 1, dist as usize);
        assert_eq!(path.first().map(String::as_str), Some("a1"));
        assert_eq!(path.last().map(String::as_str), Some("b2"));
    }

    #[test]
    fn full_blockade_of_goal() {
        // Every square a knight could enter e4 from.
        let ring = ["f6", "g5", "g3", "f2", "d2", "c3", "c5", "d6"];
        assert_eq!(find_knight_path("a1", "e4", &ring).unwrap(), None);
        assert_eq!(knight_distance("a1", "e4", &ring).unwrap(), None);
        // The goal itself stays open.
        assert_eq!(find_knight_path("e4", "e4", &ring).unwrap(), strings(&["e4"]));
    }

    #[test]
    fn invalid_notation_is_an_error() {
        let err = find_knight_path("z9", "a1", NONE).unwrap_err();
        assert!(matches!(err, PathError::InvalidNotation(ref e) if e.input == "z9"));
        let err = find_knight_path("a1", "a0", NONE).unwrap_err();
        assert!(matches!(err, PathError::InvalidNotation(_)));
        let err = find_knight_path("a1", "b3", &["c3", "k2"]).unwrap_err();
        assert!(matches!(err, PathError::InvalidNotation(ref e) if e.input == "k2"));
    }

    #[test]
    fn invalid_obstacle_beats_blocked_endpoint() {
        // Input is validated before the blocked-endpoint short circuit.
        let err = find_knight_path("a1", "a1", &["a1", "??"]).unwrap_err();
        assert!(matches!(err, PathError::InvalidNotation(_)));
    }

    #[test]
    fn accepts_owned_and_mixed_case_input() {
        let obstacles = vec!["A3".to_string(), "d2".to_string(), "d2".to_string()];
        let path = find_knight_path("B1", " c3 ", &obstacles[..]).unwrap();
        assert_eq!(path, strings(&["b1", "c3"]));
    }

    #[test]
    fn typed_path_is_valid() {
        let obstacles = ["c3", "d2"];
        let path = find_knight_path_squares("b1", "h8", &obstacles).unwrap().unwrap();
        let set = ObstacleSet::build(obstacles).unwrap();
        assert!(path.is_valid(&set));
        assert_eq!(path.start(), Square::new(0, 1));
        assert_eq!(path.goal(), Square::new(7, 7));
    }

    #[test]
    fn error_messages() {
        let err = find_knight_path("a1", "x1", NONE).unwrap_err();
        assert!(err.to_string().contains("x1"));
        assert!(std::error::Error::source(&err).is_some());
        let oob = PathError::OutOfBounds(Square::new(9, 0));
        assert!(oob.to_string().contains("off the board"));
    }

    // -----------------------------------------------------------------------
    // Randomized properties
    // -----------------------------------------------------------------------

    fn random_board(rng: &mut StdRng) -> KnightBoard {
        let density = rng.random_range(0.0..0.4);
        KnightBoard::new(
            Square::all()
                .filter(|_| rng.random_bool(density))
                .collect(),
        )
    }

    #[test]
    fn astar_is_valid_and_optimal_against_bfs() {
        let mut rng = StdRng::seed_from_u64(0x6b6e_6967);
        for _ in 0..200 {
            let board = random_board(&mut rng);
            let start = Square::from_index(rng.random_range(0..64));
            if !board.is_open(start) {
                continue;
            }
            let dist = bfs_map(&board, start);
            for goal in Square::all().filter(|&g| board.is_open(g)) {
                let found = astar_path(&board, start, goal);
                match (found, dist.at(goal)) {
                    (Some(squares), Some(d)) => {
                        assert_eq!(squares.len() - 1, d as usize, "{start} -> {goal}");
                        let path = KnightPath::from_squares(squares);
                        assert!(path.is_valid(board.obstacles()));
                        assert_eq!(path.start(), start);
                        assert_eq!(path.goal(), goal);
                    }
                    (None, None) => {}
                    (found, d) => panic!("{start} -> {goal}: astar {found:?} vs bfs {d:?}"),
                }
            }
        }
    }

    #[test]
    fn repeated_searches_are_identical() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let board = random_board(&mut rng);
            let a = Square::from_index(rng.random_range(0..64));
            let b = Square::from_index(rng.random_range(0..64));
            let first = astar_search(&board, a, b);
            let second = astar_search(&board, a, b);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn reverse_path_has_equal_length() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let board = random_board(&mut rng);
            let a = Square::from_index(rng.random_range(0..64));
            let b = Square::from_index(rng.random_range(0..64));
            if !board.is_open(a) || !board.is_open(b) {
                continue;
            }
            let there = astar_path(&board, a, b).map(|p| p.len());
            let back = astar_path(&board, b, a).map(|p| p.len());
            assert_eq!(there, back, "{a} <-> {b}");
        }
    }

    #[test]
    fn notation_and_typed_entry_points_agree() {
        let obstacles = ["d5", "e3", "c6", "f4"];
        for goal in ["h8", "a8", "h1", "e4"] {
            let names = find_knight_path("a1", goal, &obstacles).unwrap();
            let typed = find_knight_path_squares("a1", goal, &obstacles)
                .unwrap()
                .map(|p| p.to_notation());
            assert_eq!(names, typed);
            let dist = knight_distance("a1", goal, &obstacles).unwrap();
            assert_eq!(names.map(|p| p.len() as u32 - 1), dist);
        }
    }
}
