//! Map path assembly.
//!
//! Flattens a journey's legs into one drawable point sequence. Leg paths
//! are concatenated exactly as stored: when two adjacent legs share their
//! boundary point, that point appears twice in the output. Recorded paths
//! downstream rely on the repeated point, so it is kept rather than
//! deduplicated.

use super::{GeoPoint, Leg};

/// Concatenates the paths of `legs`, in order.
///
/// No points are added, dropped or reordered. An empty slice yields an
/// empty path.
pub fn assemble(legs: &[Leg]) -> Vec<GeoPoint> {
    legs.iter()
        .flat_map(|leg| leg.path().iter().copied())
        .collect()
}
