//! The train position context and its resolution.

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::{Direction, Line, ServiceDay, Station, TrainType};
use crate::topology::{
    Frame, StationList, TopologySnapshot, directional_sequence, drop_junction_station,
};

use super::bound::{BoundInput, BoundTexts, bound_text_for_direction, bound_texts};
use super::config::ResolverConfig;
use super::header::HeaderTag;
use super::loop_line::{is_partial_loop_line, loop_line_of};
use super::numbering::{Numbering, NumberingInput, numbering};
use super::position::{
    TrackInput, current_index, current_line, effective_train_type, resolve_current, stopped_station,
};
use super::through_service::{ThroughServiceInput, connected_lines};

/// Everything known about the ride at one moment.
///
/// Replaced as a whole whenever an input changes; [`resolve`](Self::resolve)
/// derives every displayed value from it.
#[derive(Debug, Clone)]
pub struct TrainPositionContext {
    /// Station list of the selected route, in natural order.
    pub stations: StationList,
    /// The most recently confirmed station.
    pub station: Option<Station>,
    pub selected_line: Option<Line>,
    pub selected_bound: Option<Station>,
    pub direction: Option<Direction>,
    pub train_type: Option<TrainType>,
    pub arrived: bool,
    pub approaching: bool,
    pub header: HeaderTag,
    pub service_day: ServiceDay,
}

impl TrainPositionContext {
    /// A context with nothing selected yet.
    pub fn new(stations: StationList) -> Self {
        Self {
            stations,
            station: None,
            selected_line: None,
            selected_bound: None,
            direction: None,
            train_type: None,
            arrived: false,
            approaching: false,
            header: HeaderTag::default(),
            service_day: ServiceDay::default(),
        }
    }

    /// The context for one frame of a replayed snapshot.
    pub fn from_snapshot(
        snapshot: &TopologySnapshot,
        stations: StationList,
        frame: &Frame,
    ) -> Self {
        let station = snapshot.station(frame.station_id).cloned();
        if station.is_none() {
            debug!(station = %frame.station_id, "frame station not in snapshot");
        }

        Self {
            stations,
            station,
            selected_line: snapshot.selected_line.clone(),
            selected_bound: snapshot.selected_bound().cloned(),
            direction: snapshot.direction,
            train_type: snapshot.train_type.clone(),
            arrived: frame.arrived,
            approaching: frame.approaching,
            header: frame
                .header_state
                .as_deref()
                .map(HeaderTag::decode)
                .unwrap_or_default(),
            service_day: snapshot.service_day,
        }
    }

    /// The selected train type, if it runs in the selected direction.
    fn running_train_type(&self) -> Option<&TrainType> {
        let train_type = self.train_type.as_ref()?;
        match self.direction {
            Some(direction) if !train_type.direction.runs(direction) => {
                trace!(train_type = %train_type.id, %direction, "train type does not run this way");
                None
            }
            _ => Some(train_type),
        }
    }

    /// Derive every displayed value.
    pub fn resolve(&self, config: &ResolverConfig) -> Resolution {
        let preferred_line = self.selected_line.as_ref().map(|l| l.id);
        let directional = match self.direction {
            Some(direction) => directional_sequence(&self.stations, direction, preferred_line),
            None => drop_junction_station(&self.stations, preferred_line),
        };
        let day = self.service_day;

        let index = current_index(&directional, self.station.as_ref());
        let current = index.map(|i| &directional[i]);
        let line = current_line(&directional, current, self.selected_line.as_ref());

        let stopped = index.and_then(|i| stopped_station(&directional, i, day));
        let selected_type = self.running_train_type();
        let train_type = effective_train_type(&directional, stopped, line, selected_type);
        let loop_line = loop_line_of(line, &self.stations, train_type, config);

        let mut fix = resolve_current(&TrackInput {
            directional: &directional,
            confirmed: self.station.as_ref(),
            arrived: self.arrived,
            is_loop: loop_line.is_some(),
            ignore_pass: config.ignore_pass,
            service_day: day,
        });
        if self.direction.is_none() {
            fix.next = None;
        }

        let connected = connected_lines(
            &ThroughServiceInput {
                stations: &self.stations,
                train_type: selected_type,
                current_line: line,
                direction: self.direction,
                selected_bound: self.selected_bound.as_ref(),
            },
            true,
        );

        let numbering = numbering(
            &NumberingInput {
                directional: &directional,
                current_index: index,
                is_loop: loop_line.is_some(),
                direction: self.direction,
                arrived: self.arrived,
                service_day: day,
                current_line: line,
                selected_bound: self.selected_bound.as_ref(),
            },
            true,
            false,
        );

        let bound_input = BoundInput {
            directional: &directional,
            current_index: index,
            line,
            loop_line,
            partial_loop: is_partial_loop_line(line, &self.stations, config),
            direction: self.direction,
        };

        Resolution {
            current: fix.current,
            next: fix.next,
            previous: fix.previous,
            stopped_current: fix.stopped_current,
            is_passing: fix.is_passing,
            current_line: line.cloned(),
            train_type: train_type.cloned(),
            is_loop_line: loop_line.is_some(),
            next_line: connected.first().cloned(),
            connected_lines: connected,
            numbering,
            bound_text: bound_text_for_direction(&bound_input, self.header.lang, config),
            bound_texts: bound_texts(&bound_input, self.selected_bound.as_ref(), config),
            header: self.header,
        }
    }
}

/// Values derived from a [`TrainPositionContext`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub current: Option<Station>,
    pub next: Option<Station>,
    pub previous: Option<Station>,
    pub stopped_current: Option<Station>,
    pub is_passing: bool,
    pub current_line: Option<Line>,
    pub train_type: Option<TrainType>,
    pub is_loop_line: bool,
    pub connected_lines: Vec<Line>,
    pub next_line: Option<Line>,
    pub numbering: Numbering,
    /// Bound text in the header language
    pub bound_text: String,
    pub bound_texts: Option<BoundTexts>,
    pub header: HeaderTag,
}
