//! JSON topology snapshots for replaying a ride.
//!
//! A snapshot bundles one pre-fetched station list with the selections the
//! user made and a sequence of frames, each standing for one confirmed
//! position fix.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Direction, Line, ServiceDay, Station, StationId, TrainType};

/// Errors that can occur when loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Reading the snapshot file failed
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot is not valid JSON for the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot contains no stations
    #[error("snapshot has an empty station list")]
    EmptyTopology,
}

/// One position fix within a replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Station the geofence last confirmed
    pub station_id: StationId,
    #[serde(default)]
    pub arrived: bool,
    #[serde(default)]
    pub approaching: bool,
    /// Encoded header tag (`NEXT_EN`, ...), `CURRENT` when absent
    #[serde(default)]
    pub header_state: Option<String>,
}

/// A pre-fetched topology with user selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologySnapshot {
    pub stations: Vec<Station>,
    #[serde(default)]
    pub selected_line: Option<Line>,
    #[serde(default)]
    pub selected_bound_id: Option<StationId>,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default)]
    pub train_type: Option<TrainType>,
    #[serde(default)]
    pub service_day: ServiceDay,
    #[serde(default)]
    pub frames: Vec<Frame>,
}

impl TopologySnapshot {
    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: TopologySnapshot = serde_json::from_str(json)?;
        if snapshot.stations.is_empty() {
            return Err(SnapshotError::EmptyTopology);
        }
        Ok(snapshot)
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Look up a station record by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// The selected destination, if it is part of the topology.
    pub fn selected_bound(&self) -> Option<&Station> {
        self.selected_bound_id.and_then(|id| self.station(id))
    }
}
