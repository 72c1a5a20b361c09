//! Connected lines of a through service.
//!
//! A train type's `lines` list the through-service chain in running order.
//! From the current line's position in that chain we derive the lines the
//! train still continues onto.

use tracing::trace;

use crate::domain::{Direction, Line, LineId, Station, TrainType};
use crate::topology::strip_parenthetical;

/// What the connected lines are computed from.
#[derive(Debug, Clone, Copy)]
pub struct ThroughServiceInput<'a> {
    /// The full station list of the selected route.
    pub stations: &'a [Station],
    pub train_type: Option<&'a TrainType>,
    pub current_line: Option<&'a Line>,
    pub direction: Option<Direction>,
    pub selected_bound: Option<&'a Station>,
}

/// Lines the train continues onto.
///
/// Empty until a bound and a train type are selected. With
/// `exclude_passed` false the whole chain is returned as is; otherwise only
/// the lines still ahead are returned, in announcement order, with display
/// suffixes stripped and consecutive lines of one operator merged under
/// the operator's name.
pub fn connected_lines(input: &ThroughServiceInput<'_>, exclude_passed: bool) -> Vec<Line> {
    let (Some(_), Some(train_type)) = (input.selected_bound, input.train_type) else {
        return Vec::new();
    };

    if !exclude_passed {
        return train_type.lines.clone();
    }

    let (Some(direction), Some(current)) = (input.direction, input.current_line) else {
        return Vec::new();
    };
    let Some(index) = train_type.line_index(current.id) else {
        trace!(
            line = %current.id,
            train_type = %train_type.id,
            "current line not in through-service chain"
        );
        return Vec::new();
    };

    let ahead: Vec<&Line> = match direction {
        Direction::Inbound => train_type.lines[index + 1..].iter().collect(),
        Direction::Outbound => train_type.lines[..index].iter().rev().collect(),
    };

    let stripped: Vec<Line> = ahead.into_iter().map(strip_line_name).collect();
    let merged = merge_same_operator(stripped);

    let current_name = strip_parenthetical(&current.name_short);
    let terminal_line = junction_terminal_line(input.stations, input.selected_bound);

    let mut seen: Vec<String> = Vec::new();
    merged
        .into_iter()
        .filter(|line| line.name_short != current_name)
        .filter(|line| Some(line.id) != terminal_line)
        .filter(|line| {
            if seen.contains(&line.name_short) {
                false
            } else {
                seen.push(line.name_short.clone());
                true
            }
        })
        .collect()
}

/// The first line the train continues onto.
pub fn next_line(input: &ThroughServiceInput<'_>) -> Option<Line> {
    connected_lines(input, true).into_iter().next()
}

fn strip_line_name(line: &Line) -> Line {
    Line {
        name_short: strip_parenthetical(&line.name_short),
        name_roman: line.name_roman.as_deref().map(strip_parenthetical),
        ..line.clone()
    }
}

/// Relabel runs of same-operator lines with the operator's name.
fn merge_same_operator(lines: Vec<Line>) -> Vec<Line> {
    let shared: Vec<bool> = (0..lines.len())
        .map(|i| {
            let prev = i.checked_sub(1).map(|p| &lines[p]);
            let next = lines.get(i + 1);
            prev.is_some_and(|p| p.same_operator(&lines[i]))
                || next.is_some_and(|n| n.same_operator(&lines[i]))
        })
        .collect();

    lines
        .into_iter()
        .zip(shared)
        .map(|(mut line, shared)| {
            if shared && let Some(company) = &line.company {
                let name_short = format!("{}線", company.name_short);
                let name_roman = company
                    .name_english_short
                    .as_ref()
                    .map(|en| format!("{en} Line"));
                line.name_short = name_short;
                line.name_roman = name_roman;
            }
            line
        })
        .collect()
}

/// The bound's line, when the bound is that line's only station in the
/// route. Such a line is only touched at the junction and is not announced.
fn junction_terminal_line(stations: &[Station], bound: Option<&Station>) -> Option<LineId> {
    let line = bound?.line_id()?;
    let count = stations.iter().filter(|s| s.line_id() == Some(line)).count();
    (count == 1).then_some(line)
}
