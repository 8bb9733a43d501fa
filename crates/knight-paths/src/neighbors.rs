use knight_core::Square;

/// The eight knight moves as `(row, col)` deltas, in expansion order.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// On-board squares a knight on `sq` can jump to, in [`KNIGHT_OFFSETS`] order.
pub fn knight_moves(sq: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .iter()
        .map(move |&(dr, dc)| sq.shift(dr, dc))
        .filter(|n| n.in_bounds())
}

/// Whether `a` and `b` are exactly one knight move apart.
#[inline]
pub fn is_knight_move(a: Square, b: Square) -> bool {
    let dr = (a.row - b.row).abs();
    let dc = (a.col - b.col).abs();
    (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_has_eight_moves() {
        let d4 = Square::new(3, 3);
        let moves: Vec<_> = knight_moves(d4).collect();
        assert_eq!(moves.len(), 8);
        assert_eq!(moves[0], Square::new(5, 4));
        assert!(moves.iter().all(|&m| is_knight_move(d4, m)));
    }

    #[test]
    fn corner_has_two_moves() {
        let moves: Vec<_> = knight_moves(Square::ORIGIN).collect();
        assert_eq!(moves, vec![Square::new(2, 1), Square::new(1, 2)]);
    }

    #[test]
    fn offsets_are_distinct_and_reversible() {
        for (i, &(dr, dc)) in KNIGHT_OFFSETS.iter().enumerate() {
            assert!(KNIGHT_OFFSETS.contains(&(-dr, -dc)));
            assert!(!KNIGHT_OFFSETS[i + 1..].contains(&(dr, dc)));
        }
    }

    #[test]
    fn is_knight_move_rejects_other_steps() {
        let a = Square::new(3, 3);
        assert!(!is_knight_move(a, a));
        assert!(!is_knight_move(a, Square::new(4, 4)));
        assert!(!is_knight_move(a, Square::new(5, 5)));
        assert!(is_knight_move(a, Square::new(1, 2)));
    }

    #[test]
    fn move_counts_sum_to_board_edges() {
        // 168 undirected knight edges on an 8x8 board.
        let total: usize = Square::all().map(|s| knight_moves(s).count()).sum();
        assert_eq!(total, 336);
    }
}
