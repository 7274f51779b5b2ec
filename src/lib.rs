//! Bounded subset-sum combination search.
//!
//! Finds the groups of numbers in a list that add up to a target, give or
//! take a tolerance. The typical use is reconciliation in spreadsheets:
//! which invoices make up this payment?
//!
//! - **Combination search** ([`combination`]): candidate preparation and the
//!   include/exclude enumeration, with sign modes and accept policies.
//! - **Presentation** ([`present`]): spreadsheet-shaped glue. It flattens
//!   ranges, transposes results into columns and renders the "no result" and
//!   error messages.
//! - **Errors** ([`error`]): typed errors for out-of-contract requests.
//!
//! # Quick start
//!
//! ```
//! use u_combsearch::search_combinations;
//! use u_combsearch::combination::SignMode;
//!
//! let found = search_combinations(&[1.0, 2.0, 3.0, 4.0, 5.0], 5.0, 0.0, SignMode::SameSignBounded);
//! assert_eq!(found, vec![vec![1.0, 4.0], vec![2.0, 3.0], vec![5.0]]);
//! ```
//!
//! # Complexity
//!
//! The search is exhaustive and exponential in the number of candidates.
//! Nothing is pruned beyond the sign rule and value-equal combinations are
//! not deduplicated.

pub mod combination;
pub mod error;
pub mod present;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use combination::search_combinations;
pub use error::{Result, SearchError};
