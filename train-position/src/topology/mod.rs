//! Rail topology plumbing.
//!
//! Helpers over the immutable, ordered station lists delivered by the
//! station data provider, a copy-on-write cache for those lists and a JSON
//! snapshot format for replaying a ride.

mod adjacency;
mod cache;
mod snapshot;

pub use adjacency::{
    directional_sequence, drop_junction_station, find_group_index, find_station_index,
    is_junction, strip_parenthetical,
};
pub use cache::{CacheConfig, StationList, TopologyCache, TopologyKey};
pub use snapshot::{Frame, SnapshotError, TopologySnapshot};
