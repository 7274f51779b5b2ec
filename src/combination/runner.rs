//! Combination enumeration.
//!
//! # Algorithm
//!
//! Binary include/exclude recursion over the prepared (sorted) candidates.
//! Each frame holds `(index, accumulated, chosen)`:
//!
//! 1. If `chosen` is non-empty and `|accumulated - target| <= tolerance`,
//!    emit a copy of `chosen`. Under [`AcceptPolicy::PrefixAccept`] the frame
//!    returns here.
//! 2. If `index` is past the end, return.
//! 3. **Include** `candidates[index]` when [`SignMode::admits`] allows it.
//! 4. **Exclude** it.
//!
//! Include runs before exclude, so output is ordered lexicographically over
//! inclusion sequences, preferring inclusion.
//!
//! A frame reached through an exclude step carries the same `chosen` as its
//! parent, which was already tested. Acceptance is therefore only checked
//! right after an include, which gives the same output for prefix-accept and
//! emits each subset once under complete enumeration.

use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::config::SearchConfig;
use super::prepare::{prepare, prepare_numbers};
use super::types::{AcceptPolicy, Cell, NegativeTolerance, SignMode};
use crate::error::{Result, SearchError};

/// Result of a combination search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    /// Accepted combinations in emission order.
    ///
    /// Each combination is non-decreasing and non-empty.
    pub combinations: Vec<Vec<f64>>,

    /// The prepared candidate sequence that was searched.
    pub prepared: Vec<f64>,

    /// Number of recursion frames entered, root included.
    pub nodes_visited: u64,

    /// Wall-clock time spent enumerating.
    pub elapsed_ms: u64,
}

impl SearchResult {
    /// Whether no combination was accepted.
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

/// Runs combination searches.
///
/// # Usage
///
/// ```
/// use u_combsearch::combination::{Cell, CombinationRunner, SearchConfig};
///
/// let values: Vec<Cell> = [1.0, 2.0, 3.0, 4.0, 5.0].into_iter().map(Cell::from).collect();
/// let result = CombinationRunner::run(&values, 5.0, &SearchConfig::default()).unwrap();
/// assert_eq!(result.combinations, vec![vec![1.0, 4.0], vec![2.0, 3.0], vec![5.0]]);
/// ```
pub struct CombinationRunner;

impl CombinationRunner {
    /// Prepares `values` and enumerates the combinations hitting `target`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidConfig`] if [`SearchConfig::validate`] fails.
    /// - [`SearchError::NonFiniteTarget`] if `target` is NaN or infinite.
    /// - [`SearchError::NegativeTolerance`] for a negative tolerance under
    ///   [`NegativeTolerance::Reject`].
    /// - [`SearchError::TooManyCandidates`] if the prepared sequence is longer
    ///   than [`SearchConfig::max_candidates`].
    pub fn run(values: &[Cell], target: f64, config: &SearchConfig) -> Result<SearchResult> {
        config.validate().map_err(SearchError::InvalidConfig)?;
        if !target.is_finite() {
            return Err(SearchError::NonFiniteTarget(target));
        }
        let tolerance = resolve_tolerance(config.tolerance, config.negative_tolerance)?;

        let prepared = prepare(values, target, config.mode);
        if let Some(limit) = config.max_candidates {
            if prepared.len() > limit {
                return Err(SearchError::TooManyCandidates {
                    count: prepared.len(),
                    limit,
                });
            }
        }

        Ok(Self::enumerate(prepared, target, tolerance, config))
    }

    /// Enumerates combinations over an already prepared candidate sequence.
    ///
    /// `prepared` is searched as given; callers that skip [`prepare`] are
    /// responsible for sorting it. `tolerance` must be non-negative.
    pub fn enumerate(
        prepared: Vec<f64>,
        target: f64,
        tolerance: f64,
        config: &SearchConfig,
    ) -> SearchResult {
        let start = Instant::now();

        debug!(
            event = "search_start",
            candidates = prepared.len(),
            target,
            tolerance,
            mode = ?config.mode,
            policy = ?config.policy,
        );

        let mut search = Search {
            candidates: &prepared,
            target,
            tolerance,
            mode: config.mode,
            policy: config.policy,
            chosen: Vec::with_capacity(prepared.len()),
            combinations: Vec::new(),
            nodes_visited: 0,
        };
        search.descend(0, 0.0);

        let Search {
            combinations,
            nodes_visited,
            ..
        } = search;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        debug!(
            event = "search_end",
            combinations = combinations.len(),
            nodes_visited,
            duration_ms = elapsed_ms,
        );

        SearchResult {
            combinations,
            prepared,
            nodes_visited,
            elapsed_ms,
        }
    }
}

/// Enumerates the combinations of `values` summing to `target` within `tolerance`.
///
/// A total convenience over [`CombinationRunner`] with prefix-accept: a
/// negative tolerance is replaced by its absolute value, and a non-finite
/// target or NaN tolerance yields no combinations.
///
/// # Examples
///
/// ```
/// use u_combsearch::search_combinations;
/// use u_combsearch::combination::SignMode;
///
/// let found = search_combinations(&[-1.0, 0.0, 1.0, 2.0], 1.0, 0.0, SignMode::SignedFree);
/// assert_eq!(
///     found,
///     vec![vec![-1.0, 0.0, 2.0], vec![-1.0, 2.0], vec![0.0, 1.0], vec![1.0]]
/// );
/// ```
pub fn search_combinations(
    values: &[f64],
    target: f64,
    tolerance: f64,
    mode: SignMode,
) -> Vec<Vec<f64>> {
    if !target.is_finite() || tolerance.is_nan() {
        return Vec::new();
    }
    let Ok(tolerance) = resolve_tolerance(tolerance, NegativeTolerance::Absolute) else {
        return Vec::new();
    };
    let config = SearchConfig::default().with_mode(mode);
    let prepared = prepare_numbers(values, target, mode);
    CombinationRunner::enumerate(prepared, target, tolerance, &config).combinations
}

/// Resolves a configured tolerance against the negative tolerance policy.
fn resolve_tolerance(tolerance: f64, policy: NegativeTolerance) -> Result<f64> {
    if tolerance >= 0.0 {
        return Ok(tolerance);
    }
    match policy {
        NegativeTolerance::Reject => Err(SearchError::NegativeTolerance(tolerance)),
        NegativeTolerance::Absolute => {
            warn!(tolerance, "negative tolerance, using its absolute value");
            Ok(tolerance.abs())
        }
    }
}

/// Per-call enumeration state.
///
/// `chosen` is shared across frames and restored on unwind.
struct Search<'a> {
    candidates: &'a [f64],
    target: f64,
    tolerance: f64,
    mode: SignMode,
    policy: AcceptPolicy,
    chosen: Vec<f64>,
    combinations: Vec<Vec<f64>>,
    nodes_visited: u64,
}

impl Search<'_> {
    fn descend(&mut self, index: usize, accumulated: f64) {
        self.nodes_visited += 1;

        let Some(&value) = self.candidates.get(index) else {
            return;
        };

        if self.mode.admits(value, self.target) {
            let sum = accumulated + value;
            self.chosen.push(value);
            if !self.accept(sum) || self.policy == AcceptPolicy::Complete {
                self.descend(index + 1, sum);
            }
            self.chosen.pop();
        }

        self.descend(index + 1, accumulated);
    }

    /// Emits `chosen` if `sum` is within tolerance.
    fn accept(&mut self, sum: f64) -> bool {
        if (sum - self.target).abs() > self.tolerance {
            return false;
        }
        trace!(combination = ?self.chosen, sum, "combination accepted");
        self.combinations.push(self.chosen.clone());
        true
    }
}
