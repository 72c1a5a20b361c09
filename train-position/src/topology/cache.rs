//! Copy-on-write cache of per-line station arrays.
//!
//! Station lists are fetched upstream and arrive as a whole. The cache
//! stores each list behind an `Arc<[Station]>` and only ever replaces the
//! whole entry, so a resolver holding a list mid-computation keeps reading
//! the snapshot it started with.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{LineId, Station, TrainTypeId};

/// Cache key: the line, optionally narrowed to one train type's stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopologyKey {
    pub line: LineId,
    pub train_type: Option<TrainTypeId>,
}

impl TopologyKey {
    /// Key for the all-stations list of `line`.
    pub fn line(line: LineId) -> Self {
        Self {
            line,
            train_type: None,
        }
    }

    /// Key for the stations of `line` as served by `train_type`.
    pub fn with_train_type(line: LineId, train_type: TrainTypeId) -> Self {
        Self {
            line,
            train_type: Some(train_type),
        }
    }
}

/// Immutable station list shared between readers.
pub type StationList = Arc<[Station]>;

/// Configuration for the topology cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached station lists.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 256,
        }
    }
}

/// Cache of station lists keyed by line and train type.
#[derive(Clone)]
pub struct TopologyCache {
    lists: MokaCache<TopologyKey, StationList>,
}

impl TopologyCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let lists = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { lists }
    }

    /// Get the current station list for `key`.
    pub async fn get(&self, key: &TopologyKey) -> Option<StationList> {
        self.lists.get(key).await
    }

    /// Replace the station list for `key` wholesale.
    ///
    /// Returns the new shared list. Readers holding the previous list are
    /// unaffected.
    pub async fn replace(&self, key: TopologyKey, stations: Vec<Station>) -> StationList {
        let list: StationList = stations.into();
        debug!(line = %key.line, stations = list.len(), "replacing station list");
        self.lists.insert(key, Arc::clone(&list)).await;
        list
    }

    /// Drop the list for `key`.
    pub async fn invalidate(&self, key: &TopologyKey) {
        self.lists.invalidate(key).await;
    }
}
