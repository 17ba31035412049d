//! TfL Journey API client and result normalizer.
//!
//! This module talks to the journey planner endpoint of the TfL unified
//! API and turns its responses into domain journeys.
//!
//! Key characteristics of the API:
//! - `from`/`to` are free-form locations: postcodes, stop ids, or
//!   `lat,long` pairs
//! - requests authenticate with `app_id`/`app_key` query parameters;
//!   anonymous requests are served at a reduced rate
//! - each leg's geometry arrives as `path.lineString`, a JSON string that
//!   itself contains a JSON array of `[latitude, longitude]` pairs

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{JourneyClient, TflConfig};
pub use convert::{NormalizeError, convert_journey, normalize_itinerary};
pub use error::TflError;
pub use mock::MockJourneyClient;
pub use types::{
    ItineraryResult, RawJourney, RawLeg, RawMode, RawPath, RawRouteOption, RawStopPoint,
};
