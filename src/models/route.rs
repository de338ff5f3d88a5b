//! Route type.

use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

use serde::Serialize;

use super::LoadId;

/// An ordered sequence of loads served by one vehicle in one round trip.
///
/// The depot is implicit at both ends. Loads are only ever added at the
/// front or the back, so the sequence is kept in a [`VecDeque`].
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Route;
///
/// let mut route = Route::pair(1, 2, 30.0);
/// route.push_back(3, 45.0);
/// assert_eq!(route.load_ids(), vec![1, 2, 3]);
/// assert_eq!(route.first(), Some(1));
/// assert_eq!(route.last(), Some(3));
/// assert_eq!(route.to_string(), "[1,2,3]");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    loads: VecDeque<LoadId>,
    round_trip_time: f64,
}

impl Route {
    /// Creates a route serving a single load.
    pub fn singleton(load: LoadId, round_trip_time: f64) -> Self {
        Self {
            loads: VecDeque::from([load]),
            round_trip_time,
        }
    }

    /// Creates a route serving `first` then `second`.
    pub fn pair(first: LoadId, second: LoadId, round_trip_time: f64) -> Self {
        Self {
            loads: VecDeque::from([first, second]),
            round_trip_time,
        }
    }

    /// Appends a load after the current last one.
    pub fn push_back(&mut self, load: LoadId, round_trip_time: f64) {
        self.loads.push_back(load);
        self.round_trip_time = round_trip_time;
    }

    /// Inserts a load before the current first one.
    pub fn push_front(&mut self, load: LoadId, round_trip_time: f64) {
        self.loads.push_front(load);
        self.round_trip_time = round_trip_time;
    }

    /// Appends all loads of `other`, in order, and takes the new time.
    pub fn absorb(&mut self, other: Route, round_trip_time: f64) {
        self.loads.extend(other.loads);
        self.round_trip_time = round_trip_time;
    }

    /// First load visited.
    pub fn first(&self) -> Option<LoadId> {
        self.loads.front().copied()
    }

    /// Last load visited.
    pub fn last(&self) -> Option<LoadId> {
        self.loads.back().copied()
    }

    /// Iterates loads in visiting order.
    pub fn iter(&self) -> impl Iterator<Item = LoadId> + '_ {
        self.loads.iter().copied()
    }

    /// Returns the load IDs in visiting order.
    pub fn load_ids(&self) -> Vec<LoadId> {
        self.iter().collect()
    }

    /// Number of loads on this route.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Returns `true` if this route serves no loads.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Total travel time from leaving the depot until returning to it.
    pub fn round_trip_time(&self) -> f64 {
        self.round_trip_time
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.loads.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_singleton() {
        let r = Route::singleton(4, 12.5);
        assert_eq!(r.len(), 1);
        assert_eq!(r.first(), Some(4));
        assert_eq!(r.last(), Some(4));
        assert_eq!(r.round_trip_time(), 12.5);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_route_push_both_ends() {
        let mut r = Route::pair(2, 3, 10.0);
        r.push_front(1, 20.0);
        r.push_back(4, 30.0);
        assert_eq!(r.load_ids(), vec![1, 2, 3, 4]);
        assert_eq!(r.round_trip_time(), 30.0);
    }

    #[test]
    fn test_route_absorb_keeps_order() {
        let mut survivor = Route::pair(5, 1, 40.0);
        let absorbed = Route::pair(9, 2, 50.0);
        survivor.absorb(absorbed, 70.0);
        assert_eq!(survivor.load_ids(), vec![5, 1, 9, 2]);
        assert_eq!(survivor.round_trip_time(), 70.0);
    }

    #[test]
    fn test_route_display() {
        assert_eq!(Route::singleton(7, 1.0).to_string(), "[7]");
        assert_eq!(Route::pair(10, 2, 1.0).to_string(), "[10,2]");
    }
}
