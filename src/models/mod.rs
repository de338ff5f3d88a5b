//! Domain model types for load dispatching.
//!
//! Provides the core abstractions: points and their distances, loads with
//! depot-relative distances, routes as double-ended load sequences, the
//! vehicle round-trip limit, and the solution that collects the routes.

mod load;
mod point;
mod route;
mod solution;
mod vehicle;

pub use load::{Load, LoadId};
pub use point::{distance, Point};
pub use route::Route;
pub use solution::{Solution, Violation, ViolationType};
pub use vehicle::{Vehicle, DEFAULT_MAX_DURATION};
