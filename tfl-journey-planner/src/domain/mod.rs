//! Domain types for normalized journeys.
//!
//! This module contains the core domain model for journey results. All
//! types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod error;
mod geo;
mod journey;
mod leg;

pub mod instruction;
pub mod path;

pub use error::DomainError;
pub use geo::GeoPoint;
pub use journey::Journey;
pub use leg::{Leg, Mode};
