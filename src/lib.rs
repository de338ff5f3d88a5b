//! # u-dispatch
//!
//! Assigns point-to-point loads to vehicles that leave from and return to a
//! single depot, using the Clarke-Wright savings heuristic under a maximum
//! round-trip time per vehicle.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Load, Route, Vehicle, Solution)
//! - [`registry`] — Id-ordered load registry with depot-relative distances
//! - [`constructive`] — Savings ranking and greedy route assembly
//! - [`evaluation`] — Round-trip replay and limit checking
//! - [`io`] — Load file parsing and route output
//! - [`error`] — Crate error type

pub mod constructive;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod registry;
