//! Route evaluation.
//!
//! Replays routes from scratch to check their round-trip time against the
//! vehicle's limit.

mod evaluator;

pub use evaluator::{RouteEvaluator, TIME_TOLERANCE};
