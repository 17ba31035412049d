//! Caching layer for journey planner responses.
//!
//! Journey results for an origin/destination pair stay useful for a
//! minute or two. Time bucketing (5-minute buckets) bounds cache
//! cardinality while keeping reasonable freshness.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Timelike, Utc};
use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::Journey;
use crate::tfl::{JourneyClient, TflError};

/// Cache key for journey results: (from, to, date, time bucket).
/// Time bucket is minutes from midnight divided by the bucket size.
type JourneyKey = (String, String, NaiveDate, u16);

/// Cached journey list.
type JourneyEntry = Arc<Vec<Journey>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,

    /// Time bucket size in minutes.
    pub bucket_mins: u16,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(90),
            max_capacity: 1000,
            bucket_mins: 5,
        }
    }
}

/// Cache for journey planner responses.
pub struct JourneyCache {
    /// Journey results keyed by (from, to, date, time_bucket).
    journeys: MokaCache<JourneyKey, JourneyEntry>,

    /// Time bucket size in minutes.
    bucket_mins: u16,
}

impl JourneyCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let journeys = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            journeys,
            bucket_mins: config.bucket_mins,
        }
    }

    /// Compute the time bucket for the given minutes from midnight.
    fn time_bucket(&self, minutes_from_midnight: u16) -> u16 {
        minutes_from_midnight / self.bucket_mins
    }

    /// Get a cached entry.
    pub async fn get(&self, key: &JourneyKey) -> Option<JourneyEntry> {
        self.journeys.get(key).await
    }

    /// Insert an entry into the cache.
    pub async fn insert(&self, key: JourneyKey, entry: JourneyEntry) {
        self.journeys.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.journeys.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.journeys.invalidate_all();
    }
}

/// Journey client with caching.
///
/// Wraps a `JourneyClient` and caches normalized journey results.
pub struct CachedJourneyClient {
    client: JourneyClient,
    cache: JourneyCache,
}

impl CachedJourneyClient {
    /// Create a new cached client.
    pub fn new(client: JourneyClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: JourneyCache::new(cache_config),
        }
    }

    /// Plan journeys, using the cache when a fresh entry exists.
    pub async fn get_journeys(&self, from: &str, to: &str) -> Result<JourneyEntry, TflError> {
        let now = Utc::now();
        let minutes = (now.time().hour() * 60 + now.time().minute()) as u16;
        let bucket = self.cache.time_bucket(minutes);
        let key = (from.to_string(), to.to_string(), now.date_naive(), bucket);

        if let Some(cached) = self.cache.get(&key).await {
            debug!(from, to, "journey cache hit");
            return Ok(cached);
        }

        let journeys = self.client.get_journeys(from, to).await?;

        let entry = Arc::new(journeys);
        self.cache.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying cache (for monitoring).
    pub fn cache(&self) -> &JourneyCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, Leg, Mode};

    #[test]
    fn config_defaults() {
        let config = CacheConfig::default();

        assert_eq!(config.ttl, Duration::from_secs(90));
        assert_eq!(config.max_capacity, 1000);
        assert_eq!(config.bucket_mins, 5);
    }

    #[test]
    fn time_buckets_divide_the_day() {
        let cache = JourneyCache::new(&CacheConfig::default());

        assert_eq!(cache.time_bucket(0), 0);
        assert_eq!(cache.time_bucket(4), 0);
        assert_eq!(cache.time_bucket(5), 1);
        assert_eq!(cache.time_bucket(1439), 287);
    }

    #[test]
    fn coarser_buckets() {
        let config = CacheConfig {
            bucket_mins: 15,
            ..CacheConfig::default()
        };
        let cache = JourneyCache::new(&config);

        assert_eq!(cache.time_bucket(14), 0);
        assert_eq!(cache.time_bucket(15), 1);
        assert_eq!(cache.time_bucket(44), 2);
    }

    #[tokio::test]
    async fn insert_and_get_roundtrip() {
        let cache = JourneyCache::new(&CacheConfig::default());

        let mode = Mode::Bus {
            line_name: "H25".to_string(),
            destination: "Bedfont Library".to_string(),
            towards: "Hatton Cross".to_string(),
        };
        let leg = Leg::new(mode, 1240.0, 240, vec![GeoPoint::new(51.45, -0.42)]).unwrap();
        let journey = Journey::new("2016-02-01T07:30:00", vec![leg]).unwrap();
        let entry = Arc::new(vec![journey]);

        let date = NaiveDate::from_ymd_opt(2016, 2, 1).unwrap();
        let key = ("tw14 9nt".to_string(), "tw14 8ex".to_string(), date, 90);

        assert!(cache.get(&key).await.is_none());

        cache.insert(key.clone(), entry.clone()).await;

        let cached = cache.get(&key).await.unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].start_date_time(), "2016-02-01T07:30:00");
    }
}
