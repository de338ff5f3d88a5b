//! Id-ordered load registry.

use std::collections::BTreeMap;

use crate::error::{DispatchError, DispatchResult};
use crate::models::{Load, LoadId, Point};

/// All loads of one problem instance, keyed by identifier.
///
/// Derived distances are computed against the registry's depot when a load
/// is inserted. Iteration is in ascending identifier order over the ids that
/// are actually stored; gaps in the numbering are fine.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
/// use u_dispatch::registry::LoadRegistry;
///
/// let mut registry = LoadRegistry::new(Point::ORIGIN);
/// registry.insert(7, Point::new(0.0, 0.0), Point::new(10.0, 0.0)).unwrap();
/// registry.insert(3, Point::new(10.0, 0.0), Point::new(20.0, 0.0)).unwrap();
///
/// assert_eq!(registry.ids().collect::<Vec<_>>(), vec![3, 7]);
/// assert!((registry.get(7).unwrap().depot_to_end() - 10.0).abs() < 1e-10);
/// assert!(registry.get(1).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoadRegistry {
    depot: Point,
    loads: BTreeMap<LoadId, Load>,
}

impl LoadRegistry {
    /// Creates an empty registry for the given depot.
    pub fn new(depot: Point) -> Self {
        Self {
            depot,
            loads: BTreeMap::new(),
        }
    }

    /// Builds a registry from `(id, start, end)` records.
    ///
    /// Fails on the first repeated identifier.
    pub fn from_loads<I>(depot: Point, records: I) -> DispatchResult<Self>
    where
        I: IntoIterator<Item = (LoadId, Point, Point)>,
    {
        let mut registry = Self::new(depot);
        for (id, start, end) in records {
            registry.insert(id, start, end)?;
        }
        Ok(registry)
    }

    /// Registers a load and derives its distances.
    pub fn insert(&mut self, id: LoadId, start: Point, end: Point) -> DispatchResult<&Load> {
        if self.loads.contains_key(&id) {
            return Err(DispatchError::DuplicateLoad(id));
        }
        let load = Load::new(id, start, end, self.depot);
        Ok(self.loads.entry(id).or_insert(load))
    }

    /// Looks up a load by identifier.
    pub fn get(&self, id: LoadId) -> DispatchResult<&Load> {
        self.loads.get(&id).ok_or(DispatchError::LoadNotFound(id))
    }

    /// Returns `true` if a load with this identifier is registered.
    pub fn contains(&self, id: LoadId) -> bool {
        self.loads.contains_key(&id)
    }

    /// Iterates loads in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Load> + '_ {
        self.loads.values()
    }

    /// Iterates identifiers in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = LoadId> + '_ {
        self.loads.keys().copied()
    }

    /// Number of registered loads.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Returns `true` if no loads are registered.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// The depot all distances are measured from.
    pub fn depot(&self) -> Point {
        self.depot
    }
}
