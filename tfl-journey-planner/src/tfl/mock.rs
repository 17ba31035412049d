//! Mock journey client for testing without API access.
//!
//! Loads recorded itinerary responses from JSON files and serves them
//! through the same interface as `JourneyClient`, running the real
//! normalizer over each payload. Tests swap the client for a fixture
//! directory and nothing else changes; no HTTP interception is involved.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::Journey;

use super::convert::normalize_itinerary;
use super::error::TflError;
use super::types::ItineraryResult;

/// Mock journey client that serves data from JSON files.
#[derive(Clone)]
pub struct MockJourneyClient {
    /// Pre-loaded responses, keyed by slugified location pair.
    responses: Arc<HashMap<String, ItineraryResult>>,
}

impl MockJourneyClient {
    /// Create a new mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{from}_to_{to}.json` where both locations are
    /// slugified (lowercased, runs of non-alphanumerics collapsed to `-`),
    /// e.g. `tw14-9nt_to_tw14-8ex.json`.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, TflError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| TflError::Api {
            status: 0,
            message: format!("Failed to read fixture directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| TflError::Api {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let key = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| TflError::Api {
                    status: 0,
                    message: format!("Invalid filename: {:?}", path),
                })?
                .to_string();

            let json = std::fs::read_to_string(&path).map_err(|e| TflError::Api {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            let result: ItineraryResult =
                serde_json::from_str(&json).map_err(|e| TflError::Api {
                    status: 0,
                    message: format!("Failed to parse {:?}: {}", path, e),
                })?;

            responses.insert(key, result);
        }

        if responses.is_empty() {
            return Err(TflError::Api {
                status: 0,
                message: format!("No fixture files found in {:?}", data_dir),
            });
        }

        Ok(Self {
            responses: Arc::new(responses),
        })
    }

    /// Plan journeys between two locations from recorded fixtures.
    ///
    /// Mimics the `JourneyClient::get_journeys` interface.
    pub async fn get_journeys(&self, from: &str, to: &str) -> Result<Vec<Journey>, TflError> {
        let key = fixture_key(from, to);

        let result = self.responses.get(&key).ok_or_else(|| TflError::Api {
            status: 404,
            message: format!(
                "No fixture for {}. Available: {:?}",
                key,
                self.responses.keys().collect::<Vec<_>>()
            ),
        })?;

        Ok(normalize_itinerary(result)?)
    }
}

/// Builds the fixture key for a location pair.
fn fixture_key(from: &str, to: &str) -> String {
    format!("{}_to_{}", slug(from), slug(to))
}

/// Lowercases and collapses runs of non-alphanumerics to a single `-`.
fn slug(location: &str) -> String {
    let mut out = String::with_capacity(location.len());
    let mut gap = false;

    for c in location.chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !out.is_empty() {
                out.push('-');
            }
            gap = false;
            out.push(c.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }

    out
}
