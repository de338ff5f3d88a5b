//! Point-to-point loads.

use super::Point;

/// Identifier of a load, as given in the input file.
pub type LoadId = u32;

/// A single delivery: pick up at `start`, drop off at `end`.
///
/// The three distances used by the savings heuristic are computed once, at
/// construction, against the depot.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
///
/// let load = Load::new(1, Point::new(3.0, 4.0), Point::new(3.0, 0.0), Point::ORIGIN);
/// assert_eq!(load.id(), 1);
/// assert!((load.depot_to_start() - 5.0).abs() < 1e-10);
/// assert!((load.load_distance() - 4.0).abs() < 1e-10);
/// assert!((load.depot_to_end() - 3.0).abs() < 1e-10);
/// assert!((load.round_trip_time() - 12.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Load {
    id: LoadId,
    start: Point,
    end: Point,
    load_distance: f64,
    depot_to_start: f64,
    depot_to_end: f64,
}

impl Load {
    /// Creates a load and derives its distances relative to `depot`.
    pub fn new(id: LoadId, start: Point, end: Point, depot: Point) -> Self {
        Self {
            id,
            start,
            end,
            load_distance: start.distance_to(&end),
            depot_to_start: depot.distance_to(&start),
            depot_to_end: end.distance_to(&depot),
        }
    }

    /// Load identifier.
    pub fn id(&self) -> LoadId {
        self.id
    }

    /// Pickup location.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Drop-off location.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Distance driven while carrying the load (start → end).
    pub fn load_distance(&self) -> f64 {
        self.load_distance
    }

    /// Distance from the depot to the pickup.
    pub fn depot_to_start(&self) -> f64 {
        self.depot_to_start
    }

    /// Distance from the drop-off back to the depot.
    pub fn depot_to_end(&self) -> f64 {
        self.depot_to_end
    }

    /// Time of serving this load alone: depot → start → end → depot.
    pub fn round_trip_time(&self) -> f64 {
        self.depot_to_start + self.load_distance + self.depot_to_end
    }
}
