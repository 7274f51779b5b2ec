//! Input cells and search modes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sign-filtering rule applied to candidates.
///
/// The two modes differ in both the preparation filter and the per-step
/// include guard, so they are kept as named variants rather than a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SignMode {
    /// Candidates of either sign, zero included, with no bound against the target.
    SignedFree,
    /// Zero is dropped and no candidate may pass the target on its side of zero.
    ///
    /// With a positive target every `v <= target` is admitted, with a negative
    /// target every `v >= target`. A zero target admits nothing.
    #[default]
    SameSignBounded,
}

impl SignMode {
    /// Maps the spreadsheet "positive and negative values" flag to a mode.
    pub fn from_signed_flag(positive_and_negative: bool) -> Self {
        if positive_and_negative {
            SignMode::SignedFree
        } else {
            SignMode::SameSignBounded
        }
    }

    /// Whether `value` may be included in a combination aiming at `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_combsearch::combination::SignMode;
    ///
    /// assert!(SignMode::SameSignBounded.admits(3.0, 5.0));
    /// assert!(!SignMode::SameSignBounded.admits(6.0, 5.0));
    /// assert!(!SignMode::SameSignBounded.admits(0.0, 5.0));
    /// assert!(SignMode::SignedFree.admits(-6.0, 5.0));
    /// ```
    #[inline]
    pub fn admits(self, value: f64, target: f64) -> bool {
        match self {
            SignMode::SignedFree => true,
            SignMode::SameSignBounded => {
                value != 0.0
                    && ((target > 0.0 && value <= target) || (target < 0.0 && value >= target))
            }
        }
    }
}

/// What happens once a partial combination is within tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AcceptPolicy {
    /// Emit the combination and stop extending it along that path.
    ///
    /// Supersets of an accepted combination are never explored from the
    /// accepting node.
    #[default]
    PrefixAccept,
    /// Emit the combination and keep extending it.
    ///
    /// Every in-tolerance positional subset is emitted exactly once.
    Complete,
}

/// Handling of a tolerance below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NegativeTolerance {
    /// Fail with [`SearchError::NegativeTolerance`](crate::SearchError::NegativeTolerance).
    #[default]
    Reject,
    /// Use the absolute value.
    Absolute,
}

/// One host-supplied entry of a value range.
///
/// Spreadsheet ranges mix numbers, text, booleans and blanks. Only numbers
/// and numeric text take part in a search.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Cell {
    /// A numeric cell.
    Number(f64),
    /// A checkbox or logical cell.
    Bool(bool),
    /// Text, possibly holding a number.
    Text(String),
    /// A blank cell.
    #[default]
    Empty,
}

impl Cell {
    /// Coerces the cell to a finite number.
    ///
    /// Text is trimmed and parsed; blanks, booleans, unparsable text and
    /// non-finite numbers yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_combsearch::combination::Cell;
    ///
    /// assert_eq!(Cell::from(2.5).as_number(), Some(2.5));
    /// assert_eq!(Cell::from(" -4 ").as_number(), Some(-4.0));
    /// assert_eq!(Cell::from("n/a").as_number(), None);
    /// assert_eq!(Cell::Empty.as_number(), None);
    /// ```
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Cell::Number(v) => *v,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Bool(_) | Cell::Empty => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Number(v as f64)
    }
}

impl From<bool> for Cell {
    fn from(v: bool) -> Self {
        Cell::Bool(v)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Cell::Empty, Into::into)
    }
}
