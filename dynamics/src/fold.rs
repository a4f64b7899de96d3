//! Symmetry folding of the landscape angle index.
//!
//! One full turn of the landscape is `4K` angle steps, where `K` is the
//! strongest-penalty index (a 90 degree rotation). The landscape is also
//! symmetric under reflection through the +/-90 degree axes
//! (`phi -> pi - phi`), so every angle index has exactly one representative
//! in `[-K, K]`, and only those `2K + 1` penalty functions are ever built.

/// Fold any angle index onto `[-K, K]`.
///
/// Indices already in range are returned unchanged. Everything else is
/// reduced modulo `4K` to `(-2K, 2K]` and reflected through `+2K` or `-2K`
/// when it lies beyond a quarter turn.
#[must_use]
pub fn fold_angle_index(idx: i32, strongest_penalty_index: i32) -> i32 {
    let k = strongest_penalty_index;
    debug_assert!(k > 0, "strongest penalty index must be positive");

    if idx.unsigned_abs() <= k.unsigned_abs() {
        return idx;
    }

    let period = 4 * k;
    let mut reduced = idx.rem_euclid(period);
    if reduced > 2 * k {
        reduced -= period;
    }

    if reduced > k {
        2 * k - reduced
    } else if reduced < -k {
        -2 * k - reduced
    } else {
        reduced
    }
}
