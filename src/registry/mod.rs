//! Load registry.
//!
//! Holds the immutable geometric facts of every load, keyed by identifier.

mod loads;

pub use loads::LoadRegistry;
