//! Current, next and previous station.
//!
//! Everything here works on the directional sequence: the station list
//! already reordered for travel and stripped of junction duplicates.

use tracing::{debug, trace};

use crate::domain::{Line, ServiceDay, Station, TrainType};
use crate::topology::{find_group_index, find_station_index};

/// Inputs to [`resolve_current`].
#[derive(Debug, Clone, Copy)]
pub struct TrackInput<'a> {
    /// Stations in travel order.
    pub directional: &'a [Station],
    /// The most recently confirmed station, from geofencing.
    pub confirmed: Option<&'a Station>,
    /// Whether the train is at `confirmed` rather than past it.
    pub arrived: bool,
    pub is_loop: bool,
    /// Whether `next` skips stations the train passes.
    pub ignore_pass: bool,
    pub service_day: ServiceDay,
}

/// Where the train is within the directional sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionFix {
    pub current: Option<Station>,
    pub next: Option<Station>,
    pub previous: Option<Station>,
    /// The last station the train stopped at or is stopped at.
    pub stopped_current: Option<Station>,
    /// The train is running through a station it does not stop at.
    pub is_passing: bool,
}

/// Index of the confirmed station within the directional sequence.
pub fn current_index(directional: &[Station], confirmed: Option<&Station>) -> Option<usize> {
    let confirmed = confirmed?;
    let index = find_station_index(directional, confirmed);
    if index.is_none() {
        debug!(
            station = %confirmed.id,
            group = %confirmed.group_id,
            "confirmed station not in directional sequence"
        );
    }
    index
}

/// Resolve current, next and previous stations.
pub fn resolve_current(input: &TrackInput<'_>) -> PositionFix {
    let Some(index) = current_index(input.directional, input.confirmed) else {
        return PositionFix::default();
    };
    let current = &input.directional[index];
    let day = input.service_day;

    let next = next_station(input.directional, index, input.is_loop, input.ignore_pass, day);
    let previous = previous_station(input.directional, index, day);
    let stopped = stopped_station(input.directional, index, day);
    let is_passing = input.arrived && current.is_pass(day);

    PositionFix {
        current: Some(current.clone()),
        next: next.cloned(),
        previous: previous.cloned(),
        stopped_current: stopped.cloned(),
        is_passing,
    }
}

/// The station after `index`.
///
/// Loop lines wrap around to the start of the sequence; other lines end at
/// the terminal. With `ignore_pass`, stations the train passes are skipped.
pub fn next_station(
    directional: &[Station],
    index: usize,
    is_loop: bool,
    ignore_pass: bool,
    day: ServiceDay,
) -> Option<&Station> {
    let len = directional.len();
    if index >= len {
        return None;
    }

    let steps = if is_loop { len - 1 } else { len - 1 - index };
    (1..=steps)
        .map(|k| &directional[(index + k) % len])
        .find(|s| !(ignore_pass && s.is_pass(day)))
}

/// The last stopping station strictly before `index`.
pub fn previous_station(
    directional: &[Station],
    index: usize,
    day: ServiceDay,
) -> Option<&Station> {
    directional
        .get(..index)?
        .iter()
        .rev()
        .find(|s| !s.is_pass(day))
}

/// The last stopping station at or before `index`.
///
/// Does not wrap: on a loop line the search stops at the start of the
/// sequence.
pub fn stopped_station(directional: &[Station], index: usize, day: ServiceDay) -> Option<&Station> {
    directional
        .get(..=index)?
        .iter()
        .rev()
        .find(|s| !s.is_pass(day))
}

/// The line the train is actually on.
///
/// When the route runs through other operators' tracks the selected line
/// can differ from the line of the station the train is at, so the line of
/// the first record in the directional sequence sharing the current
/// station's group wins. Without a selected line there is no current line.
pub fn current_line<'a>(
    directional: &'a [Station],
    current: Option<&Station>,
    selected_line: Option<&'a Line>,
) -> Option<&'a Line> {
    let selected = selected_line?;
    let Some(current) = current else {
        return Some(selected);
    };

    let matched = find_group_index(directional, current.group_id)
        .and_then(|i| directional[i].line.as_deref());
    match matched {
        Some(line) => {
            if line.id != selected.id {
                trace!(
                    selected = %selected.id,
                    actual = %line.id,
                    "current line differs from selected"
                );
            }
            Some(line)
        }
        None => Some(selected),
    }
}

/// The train type in effect at the current position.
///
/// When the stopped station belongs to another line than the current one,
/// the train type of the current line's anchor station applies. Falls back
/// to the selected train type.
pub fn effective_train_type<'a>(
    directional: &'a [Station],
    stopped_current: Option<&'a Station>,
    current_line: Option<&'a Line>,
    selected: Option<&'a TrainType>,
) -> Option<&'a TrainType> {
    let Some(stopped) = stopped_current else {
        return selected;
    };

    let from_station = match current_line {
        Some(line) if stopped.line_id() != Some(line.id) => line
            .station
            .as_deref()
            .and_then(|anchor| directional.iter().find(|s| s.id == anchor.id))
            .and_then(|s| s.train_type.as_deref()),
        _ => stopped.train_type.as_deref(),
    };

    from_station.or(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GroupId, LineId, StationId, StopCondition, TrainTypeId};

    fn station(id: u32) -> Station {
        Station {
            id: StationId(id),
            group_id: GroupId(id),
            name: format!("S{id}"),
            ..Default::default()
        }
    }

    fn on_line(mut station: Station, line: u32) -> Station {
        station.line = Some(Box::new(Line {
            id: LineId(line),
            ..Default::default()
        }));
        station
    }

    fn passed(mut station: Station) -> Station {
        station.stop_condition = StopCondition::Not;
        station
    }

    fn track(directional: &[Station], confirmed: usize, is_loop: bool) -> TrackInput<'_> {
        TrackInput {
            directional,
            confirmed: directional.get(confirmed),
            arrived: true,
            is_loop,
            ignore_pass: true,
            service_day: ServiceDay::Weekday,
        }
    }

    fn ids(station: Option<&Station>) -> Option<u32> {
        station.map(|s| s.id.0)
    }

    #[test]
    fn loop_wraps_to_first_station() {
        // A, B, C, D outbound, current D
        let stations: Vec<Station> = (1..=4).map(station).collect();
        let fix = resolve_current(&track(&stations, 3, true));

        assert_eq!(ids(fix.current.as_ref()), Some(4));
        assert_eq!(ids(fix.next.as_ref()), Some(1));
    }

    #[test]
    fn terminal_has_no_next() {
        let stations: Vec<Station> = (1..=4).map(station).collect();
        let fix = resolve_current(&track(&stations, 3, false));

        assert_eq!(ids(fix.current.as_ref()), Some(4));
        assert_eq!(fix.next, None);
        assert_eq!(ids(fix.previous.as_ref()), Some(3));
    }

    #[test]
    fn next_skips_pass_stations() {
        let stations = vec![station(1), passed(station(2)), passed(station(3)), station(4)];
        let fix = resolve_current(&track(&stations, 0, false));
        assert_eq!(ids(fix.next.as_ref()), Some(4));

        let input = TrackInput {
            ignore_pass: false,
            ..track(&stations, 0, false)
        };
        assert_eq!(ids(resolve_current(&input).next.as_ref()), Some(2));
    }

    #[test]
    fn holiday_only_station_is_passed_on_weekdays() {
        let mut holiday = station(2);
        holiday.stop_condition = StopCondition::Holiday;
        let stations = vec![station(1), holiday, station(3)];

        assert_eq!(
            ids(next_station(&stations, 0, false, true, ServiceDay::Weekday)),
            Some(3)
        );
        assert_eq!(
            ids(next_station(&stations, 0, false, true, ServiceDay::Holiday)),
            Some(2)
        );
    }

    #[test]
    fn passing_through_keeps_last_stop() {
        let stations = vec![station(1), station(2), passed(station(3)), station(4)];
        let fix = resolve_current(&track(&stations, 2, false));

        assert!(fix.is_passing);
        assert_eq!(ids(fix.current.as_ref()), Some(3));
        assert_eq!(ids(fix.stopped_current.as_ref()), Some(2));
        assert_eq!(ids(fix.previous.as_ref()), Some(2));
        assert_eq!(ids(fix.next.as_ref()), Some(4));
    }

    #[test]
    fn not_arrived_is_not_passing() {
        let stations = vec![station(1), passed(station(2)), station(3)];
        let input = TrackInput {
            arrived: false,
            ..track(&stations, 1, false)
        };
        assert!(!resolve_current(&input).is_passing);
    }

    #[test]
    fn first_station_has_no_previous() {
        let stations: Vec<Station> = (1..=3).map(station).collect();
        let fix = resolve_current(&track(&stations, 0, true));
        assert_eq!(fix.previous, None);
        assert_eq!(ids(fix.next.as_ref()), Some(2));
    }

    #[test]
    fn unknown_station_resolves_nothing() {
        let stations: Vec<Station> = (1..=3).map(station).collect();
        let stranger = station(99);
        let input = TrackInput {
            confirmed: Some(&stranger),
            ..track(&stations, 0, false)
        };
        assert_eq!(resolve_current(&input), PositionFix::default());
    }

    #[test]
    fn confirmed_station_matches_by_group() {
        let stations: Vec<Station> = (1..=3).map(station).collect();
        let mut other_platform = station(2);
        other_platform.id = StationId(200);
        let input = TrackInput {
            confirmed: Some(&other_platform),
            ..track(&stations, 0, false)
        };
        assert_eq!(ids(resolve_current(&input).current.as_ref()), Some(2));
    }

    #[test]
    fn out_of_range_index() {
        let stations: Vec<Station> = (1..=3).map(station).collect();
        assert_eq!(next_station(&stations, 5, true, true, ServiceDay::Weekday), None);
        assert_eq!(stopped_station(&stations, 5, ServiceDay::Weekday), None);
        assert_eq!(previous_station(&stations, 5, ServiceDay::Weekday), None);
    }

    #[test]
    fn current_line_prefers_matching_station_line() {
        let stations = vec![on_line(station(1), 10), on_line(station(2), 20)];
        let selected = Line {
            id: LineId(10),
            ..Default::default()
        };

        let line = current_line(&stations, Some(&stations[1]), Some(&selected));
        assert_eq!(line.map(|l| l.id), Some(LineId(20)));

        let elsewhere = station(9);
        let line = current_line(&stations, Some(&elsewhere), Some(&selected));
        assert_eq!(line.map(|l| l.id), Some(LineId(10)));

        assert_eq!(current_line(&stations, Some(&stations[1]), None), None);
    }

    #[test]
    fn effective_train_type_from_anchor_station() {
        let rapid = TrainType {
            id: TrainTypeId(1),
            ..Default::default()
        };
        let local = TrainType {
            id: TrainTypeId(2),
            ..Default::default()
        };
        let selected = TrainType {
            id: TrainTypeId(3),
            ..Default::default()
        };

        let mut anchor = on_line(station(5), 20);
        anchor.train_type = Some(Box::new(rapid.clone()));
        let mut stopped = on_line(station(4), 10);
        stopped.train_type = Some(Box::new(local.clone()));
        let stations = vec![stopped.clone(), anchor.clone()];

        let line_b = Line {
            id: LineId(20),
            station: Some(Box::new(anchor)),
            ..Default::default()
        };
        let line_a = Line {
            id: LineId(10),
            ..Default::default()
        };

        let tt =
            effective_train_type(&stations, Some(&stations[0]), Some(&line_b), Some(&selected));
        assert_eq!(tt.map(|t| t.id), Some(TrainTypeId(1)));

        let tt =
            effective_train_type(&stations, Some(&stations[0]), Some(&line_a), Some(&selected));
        assert_eq!(tt.map(|t| t.id), Some(TrainTypeId(2)));

        let bare = station(7);
        let tt = effective_train_type(&stations, Some(&bare), None, Some(&selected));
        assert_eq!(tt.map(|t| t.id), Some(TrainTypeId(3)));

        assert_eq!(effective_train_type(&stations, None, None, None), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{GroupId, StationId, StopCondition};
    use proptest::prelude::*;

    fn stations(stops: &[bool]) -> Vec<Station> {
        stops
            .iter()
            .enumerate()
            .map(|(i, &stops)| Station {
                id: StationId(i as u32 + 1),
                group_id: GroupId(i as u32 + 1),
                stop_condition: if stops { StopCondition::All } else { StopCondition::Not },
                ..Default::default()
            })
            .collect()
    }

    proptest! {
        /// Loop lines have no end
        #[test]
        fn loop_next_always_defined(len in 2usize..20, index in 0usize..20) {
            let index = index % len;
            let stations = stations(&vec![true; len]);
            let next = next_station(&stations, index, true, true, ServiceDay::Weekday);
            prop_assert!(next.is_some());
            prop_assert_eq!(next.map(|s| s.id.0 as usize), Some((index + 1) % len + 1));
        }

        /// Walking next from the first station reaches the terminal, then ends once
        #[test]
        fn non_loop_walk_terminates(len in 1usize..20) {
            let stations = stations(&vec![true; len]);
            let mut index = 0;
            let mut steps = 0;
            while let Some(next) =
                next_station(&stations, index, false, true, ServiceDay::Weekday)
            {
                index = find_station_index(&stations, next).unwrap();
                steps += 1;
                prop_assert!(steps < len);
            }
            prop_assert_eq!(index, len - 1);
            prop_assert_eq!(steps, len - 1);
        }

        /// Skipping never returns a passed station
        #[test]
        fn next_is_never_a_pass_station(
            stops in prop::collection::vec(any::<bool>(), 1..20),
            index in 0usize..20,
            is_loop in any::<bool>(),
        ) {
            let index = index % stops.len();
            let stations = stations(&stops);
            if let Some(next) = next_station(&stations, index, is_loop, true, ServiceDay::Weekday) {
                prop_assert!(!next.is_pass(ServiceDay::Weekday));
            }
        }

        /// Same input, same output
        #[test]
        fn resolve_is_idempotent(
            stops in prop::collection::vec(any::<bool>(), 1..20),
            index in 0usize..20,
            is_loop in any::<bool>(),
            arrived in any::<bool>(),
        ) {
            let stations = stations(&stops);
            let input = TrackInput {
                directional: &stations,
                confirmed: stations.get(index % stops.len()),
                arrived,
                is_loop,
                ignore_pass: true,
                service_day: ServiceDay::Weekday,
            };
            prop_assert_eq!(resolve_current(&input), resolve_current(&input));
        }
    }
}
