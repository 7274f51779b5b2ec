//! Candidate preparation.
//!
//! Turns raw host cells into the sorted candidate sequence the enumerator
//! walks:
//!
//! 1. Blank, boolean, non-numeric and non-finite entries are dropped.
//! 2. Text is coerced to a number.
//! 3. [`SignMode::SameSignBounded`] drops zero and every value on the wrong
//!    side of the target (see [`SignMode::admits`]).
//! 4. The survivors are sorted ascending.
//!
//! Coercion runs before the sign filter so the filter always compares
//! numbers. Entries that fail coercion are dropped either way, so the order
//! of the two steps does not change the outcome.

use super::types::{Cell, SignMode};

/// Prepares host cells for a search aiming at `target`.
///
/// Never fails: bad entries are dropped silently and an empty result is
/// legal.
///
/// # Examples
///
/// ```
/// use u_combsearch::combination::{prepare, Cell, SignMode};
///
/// let cells = vec![Cell::from(4.0), Cell::from("2"), Cell::Empty, Cell::from(9.0), Cell::from(0.0)];
/// assert_eq!(prepare(&cells, 5.0, SignMode::SameSignBounded), vec![2.0, 4.0]);
/// assert_eq!(prepare(&cells, 5.0, SignMode::SignedFree), vec![0.0, 2.0, 4.0, 9.0]);
/// ```
pub fn prepare(values: &[Cell], target: f64, mode: SignMode) -> Vec<f64> {
    collect_sorted(values.iter().map(Cell::as_number), target, mode)
}

/// Prepares plain numbers; NaN and infinities are dropped.
pub fn prepare_numbers(values: &[f64], target: f64, mode: SignMode) -> Vec<f64> {
    collect_sorted(
        values.iter().map(|&v| v.is_finite().then_some(v)),
        target,
        mode,
    )
}

fn collect_sorted<I>(values: I, target: f64, mode: SignMode) -> Vec<f64>
where
    I: Iterator<Item = Option<f64>>,
{
    let mut prepared: Vec<f64> = values
        .flatten()
        .filter(|&v| mode.admits(v, target))
        .collect();
    prepared.sort_by(f64::total_cmp);
    prepared
}
