//! Journey result normalization.
//!
//! This module walks a raw itinerary response and produces domain
//! `Journey`s: one per raw journey entry, in input order. All validation
//! happens here, so every journey that comes out renders a full
//! instruction list and a complete map path.
//!
//! Normalization is fail-fast: the first malformed entry fails the whole
//! batch. Callers that want to isolate entries can run `convert_journey`
//! on each raw entry themselves.

use crate::domain::{GeoPoint, Journey, Leg, Mode};

use super::types::{ItineraryResult, RawJourney, RawLeg};

/// Error during raw response to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NormalizeError {
    /// Structurally invalid data, or a required field is missing
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Leg mode id not in the known set
    #[error("unsupported mode: {0}")]
    UnsupportedMode(String),
}

impl NormalizeError {
    fn missing(field: &str) -> Self {
        NormalizeError::MalformedResponse(format!("missing required field: {field}"))
    }
}

/// Converts a raw itinerary response into domain journeys.
///
/// Order is preserved: journey `i` of the output corresponds to raw entry
/// `i`.
///
/// # Errors
///
/// Fails on the first malformed journey entry. A response with no
/// `journeys` collection at all is malformed; an empty collection is not.
pub fn normalize_itinerary(result: &ItineraryResult) -> Result<Vec<Journey>, NormalizeError> {
    let raw_journeys = result
        .journeys
        .as_deref()
        .ok_or_else(|| NormalizeError::missing("journeys"))?;

    raw_journeys.iter().map(convert_journey).collect()
}

/// Converts a single raw journey entry.
///
/// # Errors
///
/// Returns `MalformedResponse` if the entry has no legs or a leg is
/// missing mode-required fields, and `UnsupportedMode` for a leg whose
/// mode id is not in the known set.
pub fn convert_journey(raw: &RawJourney) -> Result<Journey, NormalizeError> {
    let start_date_time = raw
        .start_date_time
        .as_deref()
        .ok_or_else(|| NormalizeError::missing("startDateTime"))?;

    let raw_legs = raw.legs.as_deref().unwrap_or(&[]);
    if raw_legs.is_empty() {
        return Err(NormalizeError::MalformedResponse(
            "journey has no legs".to_string(),
        ));
    }

    let legs = raw_legs
        .iter()
        .map(convert_leg)
        .collect::<Result<Vec<_>, _>>()?;

    Journey::new(start_date_time, legs)
        .map_err(|e| NormalizeError::MalformedResponse(e.to_string()))
}

/// Converts a single leg record, dispatching on its mode id.
fn convert_leg(raw: &RawLeg) -> Result<Leg, NormalizeError> {
    let mode_id = raw
        .mode
        .as_ref()
        .map(|m| m.id.as_str())
        .ok_or_else(|| NormalizeError::missing("mode"))?;

    let distance = raw
        .distance
        .ok_or_else(|| NormalizeError::missing("distance"))?;
    let duration = convert_duration(raw.duration)?;
    let path = decode_path(raw)?;
    let mode = convert_mode(mode_id, raw)?;

    Leg::new(mode, distance, duration, path)
        .map_err(|e| NormalizeError::MalformedResponse(e.to_string()))
}

/// Maps a raw mode id onto the mode variants.
///
/// Grouping: street-level walking; buses; anything running on rails; and
/// the remaining scheduled vehicles, which keep their own wording.
fn convert_mode(mode_id: &str, raw: &RawLeg) -> Result<Mode, NormalizeError> {
    match mode_id {
        "walking" => {
            let street_name = raw
                .street_name
                .clone()
                .ok_or_else(|| NormalizeError::missing("streetName"))?;
            Ok(Mode::Walking {
                street_name,
                turn_direction: convert_turn(raw.turn_direction.as_deref()),
            })
        }
        "bus" | "replacement-bus" => {
            let (line_name, destination, towards) = ride_fields(raw)?;
            Ok(Mode::Bus {
                line_name,
                destination,
                towards,
            })
        }
        "tube" | "dlr" | "overground" | "elizabeth-line" | "national-rail" | "tram" => {
            let (line_name, destination, towards) = ride_fields(raw)?;
            Ok(Mode::Rail {
                line_name,
                destination,
                towards,
            })
        }
        "coach" | "river-bus" | "cable-car" => {
            let (line_name, destination, towards) = ride_fields(raw)?;
            Ok(Mode::OtherVehicle {
                mode_word: mode_id.replace('-', " "),
                line_name,
                destination,
                towards,
            })
        }
        other => Err(NormalizeError::UnsupportedMode(other.to_string())),
    }
}

/// `STRAIGHT` (or nothing) means continue along the current street; any
/// other value is a turn, lowercased for instruction text.
fn convert_turn(raw: Option<&str>) -> Option<String> {
    match raw {
        None => None,
        Some(turn) if turn.eq_ignore_ascii_case("STRAIGHT") => None,
        Some(turn) => Some(turn.to_ascii_lowercase()),
    }
}

/// Extracts the line name, destination and direction for a vehicle leg.
fn ride_fields(raw: &RawLeg) -> Result<(String, String, String), NormalizeError> {
    let route = raw
        .route_options
        .as_deref()
        .and_then(|options| options.first())
        .ok_or_else(|| NormalizeError::missing("routeOptions"))?;

    let line_name = route
        .name
        .clone()
        .ok_or_else(|| NormalizeError::missing("routeOptions.name"))?;
    let towards = route
        .directions
        .as_deref()
        .and_then(|directions| directions.first())
        .cloned()
        .ok_or_else(|| NormalizeError::missing("routeOptions.directions"))?;
    let destination = raw
        .arrival_point
        .as_ref()
        .and_then(|point| point.common_name.clone())
        .ok_or_else(|| NormalizeError::missing("arrivalPoint.commonName"))?;

    Ok((line_name, destination, towards))
}

fn convert_duration(raw: Option<i64>) -> Result<u32, NormalizeError> {
    let seconds = raw.ok_or_else(|| NormalizeError::missing("duration"))?;

    u32::try_from(seconds)
        .map_err(|_| NormalizeError::MalformedResponse(format!("duration out of range: {seconds}")))
}

/// Decodes a leg's `lineString` into geographic points.
///
/// The wire value is a JSON string containing a JSON array of
/// `[latitude, longitude]` pairs. Order and values are preserved exactly:
/// no resampling, no deduplication, no reordering.
fn decode_path(raw: &RawLeg) -> Result<Vec<GeoPoint>, NormalizeError> {
    let line_string = raw
        .path
        .as_ref()
        .and_then(|path| path.line_string.as_deref())
        .ok_or_else(|| NormalizeError::missing("path.lineString"))?;

    let pairs: Vec<[f64; 2]> = serde_json::from_str(line_string)
        .map_err(|e| NormalizeError::MalformedResponse(format!("invalid lineString: {e}")))?;

    Ok(pairs
        .iter()
        .map(|[latitude, longitude]| GeoPoint::new(*latitude, *longitude))
        .collect())
}
