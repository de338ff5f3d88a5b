//! Savings-based route construction.
//!
//! - [`rank_savings`] — Directional savings for every ordered pair of loads, best first, O(n² log n)
//! - [`RouteAssembler`] — Greedy endpoint merging of ranked savings, one pass, no backtracking
//! - [`clarke_wright_savings`] — Full Clarke-Wright pipeline (Clarke & Wright, 1964)

mod clarke_wright;
mod savings;

pub use clarke_wright::{clarke_wright_savings, MergeOutcome, Rejection, RouteAssembler};
pub use savings::{rank_savings, Saving};
