//! Directional savings between pairs of loads.

use crate::models::{Load, LoadId};
use crate::registry::LoadRegistry;

/// Time saved by driving from the end of `first` straight to the start of
/// `second` instead of returning to the depot in between.
///
/// ```text
/// s(i, j) = d(end_i, depot) + d(depot, start_j) - d(end_i, start_j)
/// ```
///
/// The link is directional: `(i, j)` and `(j, i)` are different savings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saving {
    first: LoadId,
    second: LoadId,
    saved_distance: f64,
}

impl Saving {
    /// Computes the saving of serving `second` right after `first`.
    pub fn between(first: &Load, second: &Load) -> Self {
        Self {
            first: first.id(),
            second: second.id(),
            saved_distance: first.depot_to_end() + second.depot_to_start()
                - first.end().distance_to(&second.start()),
        }
    }

    /// Load whose end is linked.
    pub fn first(&self) -> LoadId {
        self.first
    }

    /// Load whose start is linked.
    pub fn second(&self) -> LoadId {
        self.second
    }

    /// Time saved by the link. May be negative.
    pub fn saved_distance(&self) -> f64 {
        self.saved_distance
    }
}

/// Computes the saving of every ordered pair of distinct loads and ranks
/// them by decreasing value.
///
/// Pairs are enumerated by `first` ascending, then `second` ascending, and
/// the sort is stable, so equal savings keep that order.
///
/// # Complexity
///
/// O(n² log n) where n = number of loads.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
/// use u_dispatch::registry::LoadRegistry;
/// use u_dispatch::constructive::rank_savings;
///
/// let registry = LoadRegistry::from_loads(Point::ORIGIN, vec![
///     (1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
///     (2, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
/// ]).unwrap();
///
/// let savings = rank_savings(&registry);
/// assert_eq!(savings.len(), 2);
/// assert_eq!((savings[0].first(), savings[0].second()), (1, 2));
/// assert!((savings[0].saved_distance() - 20.0).abs() < 1e-10);
/// ```
pub fn rank_savings(registry: &LoadRegistry) -> Vec<Saving> {
    let n = registry.len();
    let mut savings = Vec::with_capacity(n * n.saturating_sub(1));
    for first in registry.iter() {
        for second in registry.iter() {
            if first.id() != second.id() {
                savings.push(Saving::between(first, second));
            }
        }
    }

    // `sort_by` is stable
    savings.sort_by(|a, b| b.saved_distance.total_cmp(&a.saved_distance));
    savings
}
