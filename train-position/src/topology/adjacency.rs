//! Adjacency helpers over ordered station lists.
//!
//! Station lists arrive in the provider's natural order. These helpers
//! locate stations, reorder the list for a direction of travel and remove
//! the duplicate records that appear where two lines join.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::domain::{Direction, GroupId, LineId, Station};

/// Display-only parenthetical suffixes, ASCII or full-width.
static PARENTHESIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^()]*\)|（[^（）]*）").expect("valid regex"));

/// Remove display-only parenthetical parts from a line name.
///
/// # Examples
///
/// ```
/// use train_position::topology::strip_parenthetical;
///
/// assert_eq!(strip_parenthetical("副都心線(直通)"), "副都心線");
/// assert_eq!(strip_parenthetical("東横線（各停）"), "東横線");
/// assert_eq!(strip_parenthetical("山手線"), "山手線");
/// ```
pub fn strip_parenthetical(name: &str) -> String {
    PARENTHESIS.replace_all(name, "").trim().to_string()
}

/// Index of the first station in the group `group`.
pub fn find_group_index(stations: &[Station], group: GroupId) -> Option<usize> {
    stations.iter().position(|s| s.group_id == group)
}

/// Index of `station` within `stations`.
///
/// Matches the exact record first, then any record of the same group, so
/// a station fetched in the context of another line still resolves.
pub fn find_station_index(stations: &[Station], station: &Station) -> Option<usize> {
    stations
        .iter()
        .position(|s| s.id == station.id)
        .or_else(|| find_group_index(stations, station.group_id))
}

/// Returns true if the station at `index` shares its group with a
/// neighbour, i.e. it is one half of a junction duplicate.
pub fn is_junction(stations: &[Station], index: usize) -> bool {
    let Some(station) = stations.get(index) else {
        return false;
    };
    let prev = index.checked_sub(1).and_then(|i| stations.get(i));
    let next = stations.get(index + 1);
    prev.is_some_and(|p| p.same_group(station)) || next.is_some_and(|n| n.same_group(station))
}

/// Collapse junction duplicates to one record each.
///
/// Where consecutive records share a group, the record on `preferred_line`
/// is kept. Without a preferred record the last copy of the run wins: in a
/// list ordered for travel that is the record of the line being entered.
pub fn drop_junction_station(stations: &[Station], preferred_line: Option<LineId>) -> Vec<Station> {
    let mut result: Vec<Station> = Vec::with_capacity(stations.len());
    let mut run_start = 0;

    while run_start < stations.len() {
        let group = stations[run_start].group_id;
        let run_end = stations[run_start..]
            .iter()
            .position(|s| s.group_id != group)
            .map_or(stations.len(), |offset| run_start + offset);
        let run = &stations[run_start..run_end];

        let kept = preferred_line
            .and_then(|line| run.iter().find(|s| s.line_id() == Some(line)))
            .or_else(|| run.last());

        if run.len() > 1 {
            trace!(
                group = %group,
                copies = run.len(),
                "dropping junction duplicates"
            );
        }
        if let Some(kept) = kept {
            result.push(kept.clone());
        }

        run_start = run_end;
    }

    result
}

/// Reorder `stations` for travel in `direction` and drop junction
/// duplicates.
///
/// `Outbound` keeps the natural order, `Inbound` reverses it.
pub fn directional_sequence(
    stations: &[Station],
    direction: Direction,
    preferred_line: Option<LineId>,
) -> Vec<Station> {
    match direction {
        Direction::Outbound => drop_junction_station(stations, preferred_line),
        Direction::Inbound => {
            let reversed: Vec<Station> = stations.iter().rev().cloned().collect();
            drop_junction_station(&reversed, preferred_line)
        }
    }
}
