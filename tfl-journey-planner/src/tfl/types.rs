//! TfL Journey API response DTOs.
//!
//! These types map directly to the journey planner's JSON responses. They
//! use `Option` liberally because the API omits fields rather than sending
//! null values in many cases.

use serde::Deserialize;

/// Response from `Journey/JourneyResults/{from}/to/{to}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResult {
    /// Candidate journeys, best first.
    pub journeys: Option<Vec<RawJourney>>,
}

/// One candidate journey.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJourney {
    /// When the journey starts (ISO 8601 local datetime).
    pub start_date_time: Option<String>,

    /// When the journey arrives.
    pub arrival_date_time: Option<String>,

    /// The legs making up this journey, in travel order.
    pub legs: Option<Vec<RawLeg>>,
}

/// One leg of a journey.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLeg {
    /// Travel mode for this leg.
    pub mode: Option<RawMode>,

    /// Distance covered, in metres.
    pub distance: Option<f64>,

    /// Duration of the leg, in seconds.
    pub duration: Option<i64>,

    /// Street walked along (walking legs).
    pub street_name: Option<String>,

    /// Turn taken at the start of the leg (walking legs). `STRAIGHT` or
    /// absent when continuing along the current street.
    pub turn_direction: Option<String>,

    /// Lines this leg can be ridden on (vehicle legs). The first entry is
    /// the advertised route.
    pub route_options: Option<Vec<RawRouteOption>>,

    /// Stop or place the leg departs from.
    pub departure_point: Option<RawStopPoint>,

    /// Stop or place the leg arrives at.
    pub arrival_point: Option<RawStopPoint>,

    /// Geographic path of the leg.
    pub path: Option<RawPath>,
}

/// Mode descriptor for a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMode {
    /// Stable mode identifier, e.g. "walking", "bus", "tube".
    pub id: String,

    /// Display name (usually matches `id`).
    pub name: Option<String>,
}

/// A line/direction pair a vehicle leg can be ridden on.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRouteOption {
    /// Line name, e.g. "H25".
    pub name: Option<String>,

    /// Direction descriptions, e.g. the service's terminus.
    pub directions: Option<Vec<String>>,
}

/// A named stop point.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStopPoint {
    /// Human-readable name, e.g. "Bedfont Library".
    pub common_name: Option<String>,
}

/// Leg path container.
///
/// The coordinate sequence arrives as `lineString`: a JSON string that
/// itself contains a JSON array of `[latitude, longitude]` pairs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPath {
    pub line_string: Option<String>,
}
