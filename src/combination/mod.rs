//! Bounded subset-sum combination search.
//!
//! Given a multiset of numbers and a target, enumerates the subsets whose sum
//! lies within an absolute tolerance of the target.
//!
//! # Key Types
//!
//! - [`Cell`]: One host-supplied entry (number, text, boolean, blank)
//! - [`SignMode`]: Sign-filtering rule for candidates
//! - [`AcceptPolicy`]: Prefix-accept or complete enumeration
//! - [`SearchConfig`]: Tolerance, mode, policy and limits
//! - [`CombinationRunner`]: Prepares candidates and runs the enumeration
//! - [`SearchResult`]: Accepted combinations with search statistics
//!
//! # Complexity
//!
//! The enumeration visits up to `2^(n+1) - 1` frames for `n` prepared
//! candidates. Use [`SearchConfig::with_max_candidates`] to refuse inputs
//! that are too large.

mod config;
mod prepare;
mod runner;
mod types;

pub use config::SearchConfig;
pub use prepare::{prepare, prepare_numbers};
pub use runner::{search_combinations, CombinationRunner, SearchResult};
pub use types::{AcceptPolicy, Cell, NegativeTolerance, SignMode};
