//! Journey leg type.
//!
//! A `Leg` is one homogeneous segment of a journey: a walk along a single
//! street, or a single ride on one transport line. Mode-specific fields
//! live in the `Mode` variant, so the instruction formatter can
//! pattern-match instead of probing for optional fields at runtime.

use super::{DomainError, GeoPoint};

/// Mode-specific descriptive fields for a leg.
///
/// Each variant carries exactly the fields its instruction needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// A walk along one street.
    Walking {
        /// Street walked along.
        street_name: String,
        /// Turn taken onto the street; `None` when continuing straight.
        turn_direction: Option<String>,
    },

    /// A bus ride on one route.
    Bus {
        /// Route name, e.g. "H25".
        line_name: String,
        /// Stop the leg arrives at.
        destination: String,
        /// Direction the service is heading, e.g. its terminus.
        towards: String,
    },

    /// A ride on a rail service (tube, DLR, overground, national rail,
    /// tram).
    Rail {
        line_name: String,
        destination: String,
        towards: String,
    },

    /// Any other scheduled vehicle (coach, river bus, cable car).
    OtherVehicle {
        /// Word used for the vehicle in instruction text, e.g. "coach".
        mode_word: String,
        line_name: String,
        destination: String,
        towards: String,
    },
}

impl Mode {
    /// Returns true for walking legs.
    pub fn is_walking(&self) -> bool {
        matches!(self, Mode::Walking { .. })
    }
}

/// One homogeneous segment of a journey.
///
/// Immutable once constructed from a raw record.
///
/// # Invariants
///
/// - A walking leg's path has at least a start and an end point
/// - A vehicle leg's path has at least one point
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    mode: Mode,
    distance_metres: f64,
    duration_seconds: u32,
    path: Vec<GeoPoint>,
}

impl Leg {
    /// Construct a leg, validating the path length for the mode.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the path is shorter than the mode requires.
    pub fn new(
        mode: Mode,
        distance_metres: f64,
        duration_seconds: u32,
        path: Vec<GeoPoint>,
    ) -> Result<Self, DomainError> {
        let required = if mode.is_walking() { 2 } else { 1 };
        if path.len() < required {
            return Err(DomainError::PathTooShort {
                required,
                actual: path.len(),
            });
        }

        Ok(Leg {
            mode,
            distance_metres,
            duration_seconds,
            path,
        })
    }

    /// Returns the mode-specific fields.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Returns the distance covered, in metres.
    pub fn distance_metres(&self) -> f64 {
        self.distance_metres
    }

    /// Returns the duration, in seconds.
    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Returns the geographic path of this leg, in travel order.
    pub fn path(&self) -> &[GeoPoint] {
        &self.path
    }
}
