//! Solution and violation types.

use serde::Serialize;

use super::{LoadId, Route};

/// A type of constraint violation in a solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViolationType {
    /// Route round-trip time exceeds the vehicle's maximum.
    MaxDurationExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Actual round-trip time.
        duration: f64,
        /// Maximum allowed round-trip time.
        max_duration: f64,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// The routes produced by one run of the heuristic.
///
/// Routes keep the order in which they were created; a singleton route
/// whose own round trip is over the limit is kept and recorded as a
/// violation.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Route, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::pair(1, 2, 30.0));
/// sol.add_route(Route::singleton(3, 12.0));
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 3);
/// assert!((sol.total_time() - 42.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Solution {
    routes: Vec<Route>,
    violations: Vec<Violation>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Records a violation.
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Returns the recorded violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns `true` if no route exceeds the limit.
    pub fn is_feasible(&self) -> bool {
        self.violations.is_empty()
    }

    /// Sum of round-trip times across all routes.
    pub fn total_time(&self) -> f64 {
        self.routes.iter().map(|r| r.round_trip_time()).sum()
    }

    /// Total number of loads served (across all routes).
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Load IDs of every route, in route order.
    pub fn load_ids(&self) -> Vec<Vec<LoadId>> {
        self.routes.iter().map(|r| r.load_ids()).collect()
    }
}
