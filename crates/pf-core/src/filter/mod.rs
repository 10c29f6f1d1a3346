//! Filter domain module.
//!
//! This module defines the gallery filter state, its matching predicate and
//! the pure transition function driven by control events.

pub mod predicate;
pub mod state;
pub mod state_machine;

pub use predicate::ProjectFilter;
pub use state::FilterState;
pub use state_machine::{CatalogEvent, FilterStateMachine};
