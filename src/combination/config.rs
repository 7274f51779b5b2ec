//! Search configuration.
//!
//! [`SearchConfig`] holds every knob of a combination search apart from the
//! values and the target themselves.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{AcceptPolicy, NegativeTolerance, SignMode};

/// Configuration for a combination search.
///
/// # Defaults
///
/// ```
/// use u_combsearch::combination::{AcceptPolicy, SearchConfig, SignMode};
///
/// let config = SearchConfig::default();
/// assert_eq!(config.tolerance, 0.0);
/// assert_eq!(config.mode, SignMode::SameSignBounded);
/// assert_eq!(config.policy, AcceptPolicy::PrefixAccept);
/// assert_eq!(config.max_candidates, None);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_combsearch::combination::{AcceptPolicy, SearchConfig, SignMode};
///
/// let config = SearchConfig::default()
///     .with_tolerance(0.01)
///     .with_mode(SignMode::SignedFree)
///     .with_policy(AcceptPolicy::Complete)
///     .with_max_candidates(24);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Maximum permitted `|sum - target|` for a combination to be accepted.
    ///
    /// Zero demands exact equality.
    pub tolerance: f64,

    /// Sign-filtering rule.
    pub mode: SignMode,

    /// Whether accepted combinations are extended further.
    pub policy: AcceptPolicy,

    /// Handling of a negative `tolerance`.
    pub negative_tolerance: NegativeTolerance,

    /// Upper bound on the prepared sequence length.
    ///
    /// The search is exponential in this length. `None` disables the check.
    pub max_candidates: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            mode: SignMode::default(),
            policy: AcceptPolicy::default(),
            negative_tolerance: NegativeTolerance::default(),
            max_candidates: None,
        }
    }
}

impl SearchConfig {
    /// Sets the acceptance tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the sign mode.
    pub fn with_mode(mut self, mode: SignMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the accept policy.
    pub fn with_policy(mut self, policy: AcceptPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the negative tolerance policy.
    pub fn with_negative_tolerance(mut self, policy: NegativeTolerance) -> Self {
        self.negative_tolerance = policy;
        self
    }

    /// Limits the number of prepared candidates.
    pub fn with_max_candidates(mut self, n: usize) -> Self {
        self.max_candidates = Some(n);
        self
    }

    /// Validates the configuration.
    ///
    /// A negative tolerance passes here; it is resolved against
    /// [`negative_tolerance`](Self::negative_tolerance) when the search runs.
    pub fn validate(&self) -> Result<(), String> {
        if !self.tolerance.is_finite() {
            return Err("tolerance must be finite".into());
        }
        if self.max_candidates == Some(0) {
            return Err("max_candidates must be positive or None".into());
        }
        Ok(())
    }
}
