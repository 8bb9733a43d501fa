use knight_core::Square;

/// Squared Euclidean length of a single knight move, `2² + 1²`.
const KNIGHT_STEP_SQ: i32 = 5;

/// Lower bound on the knight moves between `a` and `b`:
/// `ceil(euclidean(a, b) / sqrt(5))`.
///
/// Each knight move covers exactly `sqrt(5)` in straight-line distance, so no
/// path can be shorter than this. The ceiling is computed in integers as the
/// smallest `k` with `5k² >= d²`, so exact multiples of `sqrt(5)` never round
/// up. Returns 0 only when `a == b`.
#[inline]
pub fn knight_estimate(a: Square, b: Square) -> u32 {
    let d2 = a.dist_sq(b);
    let mut k = 0;
    while KNIGHT_STEP_SQ * k * k < d2 {
        k += 1;
    }
    k as u32
}

/// Straight-line distance between two squares.
#[inline]
pub fn euclidean(a: Square, b: Square) -> f64 {
    f64::from(a.dist_sq(b)).sqrt()
}
