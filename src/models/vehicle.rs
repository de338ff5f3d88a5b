//! Vehicle type with its round-trip limit.

/// Default maximum round-trip time: a 12-hour shift, in minutes.
pub const DEFAULT_MAX_DURATION: f64 = 12.0 * 60.0;

/// The (homogeneous, unlimited) vehicle that serves every route.
///
/// Travel time equals distance, so `max_duration` bounds the length of each
/// depot-to-depot round trip.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Vehicle, DEFAULT_MAX_DURATION};
///
/// assert_eq!(Vehicle::default().max_duration(), DEFAULT_MAX_DURATION);
/// assert_eq!(Vehicle::new(480.0).max_duration(), 480.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    max_duration: f64,
}

impl Vehicle {
    /// Creates a vehicle with the given round-trip limit.
    pub fn new(max_duration: f64) -> Self {
        Self { max_duration }
    }

    /// Sets the round-trip limit.
    pub fn with_max_duration(mut self, max: f64) -> Self {
        self.max_duration = max;
        self
    }

    /// Maximum round-trip time. A route whose time equals it is feasible.
    pub fn max_duration(&self) -> f64 {
        self.max_duration
    }

    /// Returns `true` if a round trip of `duration` fits within the limit.
    pub fn admits(&self, duration: f64) -> bool {
        duration <= self.max_duration
    }
}

impl Default for Vehicle {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DURATION)
    }
}
