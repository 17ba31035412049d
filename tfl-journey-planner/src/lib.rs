//! TfL journey planner client.
//!
//! Fetches multi-option public-transport itineraries from the TfL journey
//! planner and normalizes the raw, deeply nested responses into a small
//! domain model: each candidate `Journey` exposes one human-readable
//! instruction per leg and a flattened geographic path for map display.

pub mod cache;
pub mod domain;
pub mod tfl;
