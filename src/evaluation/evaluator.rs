//! Route evaluator that replays round-trip times and checks the limit.

use crate::error::DispatchResult;
use crate::models::{LoadId, Route, Solution, Vehicle, Violation, ViolationType};
use crate::registry::LoadRegistry;

/// Slack allowed between an incrementally maintained round-trip time and a
/// full replay of the same route.
pub const TIME_TOLERANCE: f64 = 1e-6;

/// Evaluates routes by replaying them from the depot: travel to each pickup,
/// carry each load, and return from the last drop-off.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Point, Vehicle};
/// use u_dispatch::registry::LoadRegistry;
/// use u_dispatch::evaluation::RouteEvaluator;
///
/// let registry = LoadRegistry::from_loads(Point::ORIGIN, vec![
///     (1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
///     (2, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
/// ]).unwrap();
/// let vehicle = Vehicle::default();
///
/// let evaluator = RouteEvaluator::new(&registry, &vehicle);
/// let time = evaluator.round_trip_time(&[1, 2]).unwrap();
/// assert!((time - 40.0).abs() < 1e-10);
/// ```
pub struct RouteEvaluator<'a> {
    registry: &'a LoadRegistry,
    vehicle: &'a Vehicle,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given loads and vehicle.
    pub fn new(registry: &'a LoadRegistry, vehicle: &'a Vehicle) -> Self {
        Self { registry, vehicle }
    }

    /// Replays the round trip of a load sequence. An empty sequence takes no
    /// time.
    pub fn round_trip_time(&self, load_ids: &[LoadId]) -> DispatchResult<f64> {
        if load_ids.is_empty() {
            return Ok(0.0);
        }

        let depot = self.registry.depot();
        let mut time = 0.0;
        let mut position = depot;
        for &id in load_ids {
            let load = self.registry.get(id)?;
            time += position.distance_to(&load.start()) + load.load_distance();
            position = load.end();
        }

        // Return to depot
        Ok(time + position.distance_to(&depot))
    }

    /// Replays one route and reports it if it is over the limit.
    pub fn check_route(
        &self,
        route_index: usize,
        route: &Route,
    ) -> DispatchResult<Option<Violation>> {
        let duration = self.round_trip_time(&route.load_ids())?;
        let max_duration = self.vehicle.max_duration();
        if duration > max_duration + TIME_TOLERANCE {
            return Ok(Some(Violation::new(ViolationType::MaxDurationExceeded {
                route_index,
                duration,
                max_duration,
            })));
        }
        Ok(None)
    }

    /// Evaluates an entire solution, returning the replayed total time and
    /// every route over the limit.
    pub fn evaluate_solution(&self, solution: &Solution) -> DispatchResult<(f64, Vec<Violation>)> {
        let mut total_time = 0.0;
        let mut violations = Vec::new();

        for (idx, route) in solution.routes().iter().enumerate() {
            total_time += self.round_trip_time(&route.load_ids())?;
            if let Some(violation) = self.check_route(idx, route)? {
                violations.push(violation);
            }
        }

        Ok((total_time, violations))
    }
}
