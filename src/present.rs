//! Spreadsheet presentation.
//!
//! A spreadsheet custom function hands over a rectangular range and expects a
//! matrix (or a single message) back. This module holds that glue:
//!
//! - [`flatten_rows`]: row-major flattening of a range into cells
//! - [`transpose`]: one column per combination, padded with blanks
//! - [`SheetOutput`]: the matrix or the message shown in the sheet
//! - [`search_combination`]: the whole round trip behind one call

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::combination::{Cell, CombinationRunner, SearchConfig, SignMode};
use crate::error::{Result, SearchError};

/// Message shown when a search accepts nothing.
pub const NO_COMBINATIONS: &str = "No combinations found";

/// What a custom function writes back into the sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SheetOutput {
    /// Row-major matrix; `None` renders as a blank cell.
    Matrix(Vec<Vec<Option<f64>>>),
    /// A single-cell message.
    Message(String),
}

impl SheetOutput {
    /// Renders a search outcome.
    ///
    /// Combinations become a transposed matrix, an empty result becomes
    /// [`NO_COMBINATIONS`] and an error becomes `"Error: <message>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_combsearch::present::{SheetOutput, NO_COMBINATIONS};
    ///
    /// let output = SheetOutput::render(Ok(vec![vec![1.0, 4.0], vec![5.0]]));
    /// assert_eq!(
    ///     output,
    ///     SheetOutput::Matrix(vec![vec![Some(1.0), Some(5.0)], vec![Some(4.0), None]])
    /// );
    /// assert_eq!(SheetOutput::render(Ok(vec![])), SheetOutput::Message(NO_COMBINATIONS.into()));
    /// ```
    pub fn render(outcome: Result<Vec<Vec<f64>>>) -> Self {
        match outcome {
            Ok(combinations) if combinations.is_empty() => {
                SheetOutput::Message(NO_COMBINATIONS.to_string())
            }
            Ok(combinations) => SheetOutput::Matrix(transpose(&combinations)),
            Err(err) => {
                warn!(error = %err, "combination search failed");
                SheetOutput::Message(format!("Error: {err}"))
            }
        }
    }

    /// Returns the message, if this output is one.
    pub fn message(&self) -> Option<&str> {
        match self {
            SheetOutput::Message(m) => Some(m.as_str()),
            SheetOutput::Matrix(_) => None,
        }
    }
}

/// Flattens a range row by row.
///
/// # Examples
///
/// ```
/// use u_combsearch::combination::Cell;
/// use u_combsearch::present::flatten_rows;
///
/// let cells = flatten_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
/// assert_eq!(cells, vec![Cell::from(1.0), Cell::from(2.0), Cell::from(3.0), Cell::from(4.0)]);
/// ```
pub fn flatten_rows<R, C>(rows: R) -> Vec<Cell>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: Into<Cell>,
{
    rows.into_iter().flatten().map(Into::into).collect()
}

/// Lays combinations out as columns.
///
/// Row `i` holds the `i`-th value of every combination. The matrix has as
/// many rows as the longest combination; shorter columns are padded with
/// `None`.
pub fn transpose(combinations: &[Vec<f64>]) -> Vec<Vec<Option<f64>>> {
    let height = combinations.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|row| {
            combinations
                .iter()
                .map(|column| column.get(row).copied())
                .collect()
        })
        .collect()
}

/// Searches a spreadsheet range and renders the outcome for the sheet.
///
/// `positive_and_negative` selects [`SignMode::SignedFree`]; otherwise
/// [`SignMode::SameSignBounded`] applies. `margin` is the tolerance; a
/// negative margin is reported as an error. A target cell that does not hold
/// a number is reported as an error as well.
///
/// # Examples
///
/// ```
/// use u_combsearch::combination::Cell;
/// use u_combsearch::present::{search_combination, SheetOutput};
///
/// let range = vec![
///     vec![Cell::from(1.0), Cell::from(2.0)],
///     vec![Cell::from(3.0), Cell::Empty],
/// ];
/// let output = search_combination(&range, &Cell::from(3.0), 0.0, false);
/// assert_eq!(
///     output,
///     SheetOutput::Matrix(vec![vec![Some(1.0), Some(3.0)], vec![Some(2.0), None]])
/// );
/// ```
pub fn search_combination(
    range: &[Vec<Cell>],
    target: &Cell,
    margin: f64,
    positive_and_negative: bool,
) -> SheetOutput {
    SheetOutput::render(run_range(range, target, margin, positive_and_negative))
}

fn run_range(
    range: &[Vec<Cell>],
    target: &Cell,
    margin: f64,
    positive_and_negative: bool,
) -> Result<Vec<Vec<f64>>> {
    let target = target
        .as_number()
        .ok_or(SearchError::NonFiniteTarget(f64::NAN))?;
    let values = flatten_rows(range.iter().map(|row| row.iter().cloned()));
    let config = SearchConfig::default()
        .with_tolerance(margin)
        .with_mode(SignMode::from_signed_flag(positive_and_negative));
    CombinationRunner::run(&values, target, &config).map(|result| result.combinations)
}
