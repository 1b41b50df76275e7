//! Fan-out release search.
//!
//! This module runs one query against every configured tracker at once and
//! picks the release with the most seeders. Per-tracker failures are
//! isolated: a tracker that is slow, unreachable or returns garbage simply
//! contributes nothing.

mod aggregate;
mod dispatcher;
mod executor;
mod finder;
mod types;

pub use aggregate::{best_release, flatten_results, rank_results, select_best};
pub use dispatcher::dispatch;
pub use executor::{build_search_params, search_tracker};
pub use finder::ReleaseFinder;
pub use types::*;
