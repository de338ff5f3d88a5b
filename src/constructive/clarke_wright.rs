//! Clarke-Wright savings algorithm for point-to-point loads.
//!
//! # Algorithm
//!
//! Every load starts unassigned. Savings are processed once, in decreasing
//! order; each one may link the end of `first` to the start of `second`:
//!
//! - both unassigned: open a new route `[first, second]`;
//! - `first` ends a route, `second` unassigned: append `second`;
//! - `first` unassigned, `second` starts a route: prepend `first`;
//! - `first` ends one route and `second` starts another: join the routes.
//!
//! A link is only committed if the resulting round trip fits the vehicle's
//! limit. Rejected savings are skipped; there is no backtracking. Loads left
//! unassigned at the end become singleton routes.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of loads (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use std::collections::HashMap;

use log::{debug, trace, warn};

use super::savings::{rank_savings, Saving};
use crate::error::DispatchResult;
use crate::models::{LoadId, Route, Solution, Vehicle, Violation, ViolationType};
use crate::registry::LoadRegistry;

/// Why a saving was not committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Both loads are already on the same route.
    SameRoute,
    /// The link would touch a load that is not at the required route end.
    NotAtEndpoint,
    /// The resulting round trip would exceed the vehicle's limit.
    ExceedsMaxDuration,
}

/// What applying one saving did to the routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Both loads were unassigned and now form a new route.
    Created {
        /// Slot of the new route.
        route: usize,
    },
    /// `second` was appended after `first`.
    Appended {
        /// Slot of the extended route.
        route: usize,
    },
    /// `first` was prepended before `second`.
    Prepended {
        /// Slot of the extended route.
        route: usize,
    },
    /// The route ending in `first` absorbed the route starting with `second`.
    Joined {
        /// Slot of the surviving route.
        route: usize,
        /// Slot of the absorbed route, now empty.
        absorbed: usize,
    },
    /// Nothing changed.
    Rejected(Rejection),
}

impl MergeOutcome {
    /// Returns `true` if the saving changed the routes.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MergeOutcome::Rejected(_))
    }
}

/// Greedy route builder driven by a ranked savings list.
///
/// Routes live in slots indexed by creation order. When two routes are
/// joined the absorbed slot is emptied, not removed, so slot indices held by
/// loads stay valid for the whole pass.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Point, Vehicle};
/// use u_dispatch::registry::LoadRegistry;
/// use u_dispatch::constructive::{rank_savings, MergeOutcome, RouteAssembler};
///
/// let registry = LoadRegistry::from_loads(Point::ORIGIN, vec![
///     (1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
///     (2, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
/// ]).unwrap();
/// let vehicle = Vehicle::default();
///
/// let mut assembler = RouteAssembler::new(&registry, &vehicle);
/// let best = rank_savings(&registry)[0];
/// assert_eq!(assembler.apply(&best).unwrap(), MergeOutcome::Created { route: 0 });
///
/// let solution = assembler.finish();
/// assert_eq!(solution.load_ids(), vec![vec![1, 2]]);
/// ```
#[derive(Debug)]
pub struct RouteAssembler<'a> {
    registry: &'a LoadRegistry,
    vehicle: &'a Vehicle,
    routes: Vec<Option<Route>>,
    route_of: HashMap<LoadId, usize>,
}

impl<'a> RouteAssembler<'a> {
    /// Creates an assembler with every load unassigned.
    pub fn new(registry: &'a LoadRegistry, vehicle: &'a Vehicle) -> Self {
        Self {
            registry,
            vehicle,
            routes: Vec::new(),
            route_of: HashMap::with_capacity(registry.len()),
        }
    }

    /// Slot of the route serving `load`, or `None` if unassigned.
    pub fn route_of(&self, load: LoadId) -> Option<usize> {
        self.route_of.get(&load).copied()
    }

    /// Route in `slot`, or `None` if the slot was absorbed or never used.
    pub fn route(&self, slot: usize) -> Option<&Route> {
        self.routes.get(slot).and_then(Option::as_ref)
    }

    /// Iterates the live routes in slot order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> + '_ {
        self.routes.iter().flatten()
    }

    /// Applies one saving, committing its link if feasible.
    ///
    /// Only the orientation given by the saving is tried.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::LoadNotFound`](crate::error::DispatchError::LoadNotFound)
    /// if either load is not in the registry.
    pub fn apply(&mut self, saving: &Saving) -> DispatchResult<MergeOutcome> {
        let registry = self.registry;
        let first = registry.get(saving.first())?;
        let second = registry.get(saving.second())?;
        let gap = first.end().distance_to(&second.start());

        let outcome = match (self.route_of(first.id()), self.route_of(second.id())) {
            (None, None) => {
                let time = first.depot_to_start()
                    + first.load_distance()
                    + gap
                    + second.load_distance()
                    + second.depot_to_end();
                if !self.vehicle.admits(time) {
                    MergeOutcome::Rejected(Rejection::ExceedsMaxDuration)
                } else {
                    let slot = self.routes.len();
                    self.routes
                        .push(Some(Route::pair(first.id(), second.id(), time)));
                    self.route_of.insert(first.id(), slot);
                    self.route_of.insert(second.id(), slot);
                    MergeOutcome::Created { route: slot }
                }
            }
            (Some(slot), None) => {
                let route = self.live(slot);
                if route.last() != Some(first.id()) {
                    MergeOutcome::Rejected(Rejection::NotAtEndpoint)
                } else {
                    let time = route.round_trip_time() - first.depot_to_end()
                        + gap
                        + second.load_distance()
                        + second.depot_to_end();
                    if !self.vehicle.admits(time) {
                        MergeOutcome::Rejected(Rejection::ExceedsMaxDuration)
                    } else {
                        self.live_mut(slot).push_back(second.id(), time);
                        self.route_of.insert(second.id(), slot);
                        MergeOutcome::Appended { route: slot }
                    }
                }
            }
            (None, Some(slot)) => {
                let route = self.live(slot);
                if route.first() != Some(second.id()) {
                    MergeOutcome::Rejected(Rejection::NotAtEndpoint)
                } else {
                    let time = route.round_trip_time() - second.depot_to_start()
                        + gap
                        + first.load_distance()
                        + first.depot_to_start();
                    if !self.vehicle.admits(time) {
                        MergeOutcome::Rejected(Rejection::ExceedsMaxDuration)
                    } else {
                        self.live_mut(slot).push_front(first.id(), time);
                        self.route_of.insert(first.id(), slot);
                        MergeOutcome::Prepended { route: slot }
                    }
                }
            }
            (Some(survivor), Some(absorbed)) if survivor == absorbed => {
                MergeOutcome::Rejected(Rejection::SameRoute)
            }
            (Some(survivor), Some(absorbed)) => {
                let head = self.live(survivor);
                let tail = self.live(absorbed);
                if head.last() != Some(first.id()) || tail.first() != Some(second.id()) {
                    MergeOutcome::Rejected(Rejection::NotAtEndpoint)
                } else {
                    let time = head.round_trip_time() - first.depot_to_end()
                        + gap
                        + tail.round_trip_time()
                        - second.depot_to_start();
                    if !self.vehicle.admits(time) {
                        MergeOutcome::Rejected(Rejection::ExceedsMaxDuration)
                    } else {
                        let tail = self.routes[absorbed]
                            .take()
                            .expect("absorbed slot checked live above");
                        for id in tail.iter() {
                            self.route_of.insert(id, survivor);
                        }
                        self.live_mut(survivor).absorb(tail, time);
                        MergeOutcome::Joined {
                            route: survivor,
                            absorbed,
                        }
                    }
                }
            }
        };

        trace!(
            "saving ({}, {}) = {:.3}: {:?}",
            saving.first(),
            saving.second(),
            saving.saved_distance(),
            outcome
        );
        Ok(outcome)
    }

    /// Ends the pass: emits live routes in slot order, then a singleton
    /// route for every load still unassigned, in identifier order.
    ///
    /// Singletons are emitted even when their own round trip exceeds the
    /// limit; each such route is recorded as a violation.
    pub fn finish(self) -> Solution {
        let Self {
            registry,
            vehicle,
            routes,
            route_of,
        } = self;

        let mut solution = Solution::new();
        for route in routes.into_iter().flatten() {
            solution.add_route(route);
        }

        for load in registry.iter().filter(|l| !route_of.contains_key(&l.id())) {
            let time = load.round_trip_time();
            if !vehicle.admits(time) {
                warn!(
                    "load {} alone needs {:.3}, over the limit of {:.3}",
                    load.id(),
                    time,
                    vehicle.max_duration()
                );
                solution.add_violation(Violation::new(ViolationType::MaxDurationExceeded {
                    route_index: solution.num_routes(),
                    duration: time,
                    max_duration: vehicle.max_duration(),
                }));
            }
            solution.add_route(Route::singleton(load.id(), time));
        }
        solution
    }

    fn live(&self, slot: usize) -> &Route {
        self.routes[slot]
            .as_ref()
            .expect("assigned loads point at live routes")
    }

    fn live_mut(&mut self, slot: usize) -> &mut Route {
        self.routes[slot]
            .as_mut()
            .expect("assigned loads point at live routes")
    }
}

/// Builds routes for all loads using the Clarke-Wright savings algorithm.
///
/// Ranks every directional saving, applies them greedily in one pass, and
/// places leftover loads on singleton routes.
///
/// # Arguments
///
/// * `registry` — All loads, with distances derived against the depot
/// * `vehicle` — Vehicle type (homogeneous fleet, unlimited count)
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Point, Vehicle};
/// use u_dispatch::registry::LoadRegistry;
/// use u_dispatch::constructive::clarke_wright_savings;
///
/// let registry = LoadRegistry::from_loads(Point::ORIGIN, vec![
///     (1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
///     (2, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
/// ]).unwrap();
///
/// let solution = clarke_wright_savings(&registry, &Vehicle::default()).unwrap();
/// assert_eq!(solution.load_ids(), vec![vec![1, 2]]);
/// // 0 + 10 + 0 + 10 + 20: the drop-off of load 2 is 20 from the depot
/// assert!((solution.total_time() - 40.0).abs() < 1e-10);
/// ```
pub fn clarke_wright_savings(
    registry: &LoadRegistry,
    vehicle: &Vehicle,
) -> DispatchResult<Solution> {
    let savings = rank_savings(registry);
    debug!(
        "ranked {} savings for {} loads",
        savings.len(),
        registry.len()
    );

    let mut assembler = RouteAssembler::new(registry, vehicle);
    let mut accepted = 0usize;
    for saving in &savings {
        if assembler.apply(saving)?.is_accepted() {
            accepted += 1;
        }
    }

    let solution = assembler.finish();
    debug!(
        "{} of {} savings committed, {} routes, total time {:.3}",
        accepted,
        savings.len(),
        solution.num_routes(),
        solution.total_time()
    );
    Ok(solution)
}
