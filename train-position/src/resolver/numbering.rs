//! Station numbering to display.

use serde::Serialize;

use crate::domain::{Direction, Line, ServiceDay, Station, StationNumber};

use super::position::next_station;

/// Station number and three-letter code, both optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Numbering {
    pub station_number: Option<StationNumber>,
    pub three_letter_code: Option<String>,
}

impl Numbering {
    fn of(station: &Station, fallback_line: Option<&Line>) -> Self {
        let line = station.line.as_deref().or(fallback_line);
        match station.number_for_line(line) {
            Some(number) => Self {
                station_number: Some(number.clone()),
                three_letter_code: station.three_letter_code.clone(),
            },
            None => Self::default(),
        }
    }
}

/// What the numbering is chosen from.
#[derive(Debug, Clone, Copy)]
pub struct NumberingInput<'a> {
    /// Stations in travel order.
    pub directional: &'a [Station],
    /// Index of the current station in `directional`.
    pub current_index: Option<usize>,
    pub is_loop: bool,
    /// Without a direction there is no next station to number.
    pub direction: Option<Direction>,
    pub arrived: bool,
    pub service_day: ServiceDay,
    pub current_line: Option<&'a Line>,
    pub selected_bound: Option<&'a Station>,
}

/// Choose the numbering to surface.
///
/// `first_stop` shows the selected bound; `prior_current` shows the current
/// station while the train is stopped there. Otherwise the next stopping
/// station is shown, never a station the train passes. Stations without
/// numbering yield an empty [`Numbering`].
pub fn numbering(input: &NumberingInput<'_>, prior_current: bool, first_stop: bool) -> Numbering {
    let Some(bound) = input.selected_bound else {
        return Numbering::default();
    };

    if first_stop {
        return Numbering::of(bound, bound.line.as_deref());
    }

    let Some(index) = input.current_index else {
        return Numbering::default();
    };
    let day = input.service_day;

    if let Some(current) = input.directional.get(index)
        && prior_current
        && input.arrived
        && !current.is_pass(day)
    {
        return Numbering::of(current, input.current_line);
    }

    if input.direction.is_none() {
        return Numbering::default();
    }

    next_station(input.directional, index, input.is_loop, true, day)
        .map(|next| Numbering::of(next, input.current_line))
        .unwrap_or_default()
}
