//! Loop-line detection.
//!
//! A loop line has no terminus; trains circulate in one of two rotational
//! directions. Only all-stations services circulate: a rapid or branch
//! service on the same tracks leaves the loop somewhere and is treated as
//! an ordinary line.

use serde::{Deserialize, Serialize};

use crate::domain::{Direction, GroupId, HeaderLang, Line, Station, TrainType};

use super::config::ResolverConfig;

/// The physically circular lines the resolver knows how to announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoopLine {
    Yamanote,
    OsakaLoop,
    Meijo,
}

impl LoopLine {
    /// Returns true if the line is always announced by its rotation rather
    /// than by the stations ahead.
    pub fn always_rotational(self) -> bool {
        match self {
            LoopLine::Meijo => true,
            LoopLine::Yamanote | LoopLine::OsakaLoop => false,
        }
    }

    /// Rotation wording for `direction` in `lang`.
    ///
    /// Katakana headers use the Japanese wording.
    pub fn rotation_text(self, direction: Direction, lang: HeaderLang) -> &'static str {
        use Direction::{Inbound, Outbound};
        use HeaderLang::{En, Ja, Kana, Ko, Zh};

        match (self, direction, lang) {
            (LoopLine::Meijo, Inbound, Ja | Kana) => "名城線 右回り",
            (LoopLine::Meijo, Inbound, En) => "Meijo Line Clockwise",
            (LoopLine::Meijo, Inbound, Zh) => "名城线 右环",
            (LoopLine::Meijo, Inbound, Ko) => "메이조선 우회전",
            (LoopLine::Meijo, Outbound, Ja | Kana) => "名城線 左回り",
            (LoopLine::Meijo, Outbound, En) => "Meijo Line Counterclockwise",
            (LoopLine::Meijo, Outbound, Zh) => "名城线 左环",
            (LoopLine::Meijo, Outbound, Ko) => "메이조선 좌회전",

            (LoopLine::Yamanote, Inbound, Ja | Kana) => "山手線 内回り",
            (LoopLine::Yamanote, Inbound, En) => "Yamanote Line Counterclockwise",
            (LoopLine::Yamanote, Inbound, Zh) => "山手线 内环",
            (LoopLine::Yamanote, Inbound, Ko) => "야마노테선 내선순환",
            (LoopLine::Yamanote, Outbound, Ja | Kana) => "山手線 外回り",
            (LoopLine::Yamanote, Outbound, En) => "Yamanote Line Clockwise",
            (LoopLine::Yamanote, Outbound, Zh) => "山手线 外环",
            (LoopLine::Yamanote, Outbound, Ko) => "야마노테선 외선순환",

            (LoopLine::OsakaLoop, Inbound, Ja | Kana) => "大阪環状線 内回り",
            (LoopLine::OsakaLoop, Inbound, En) => "Osaka Loop Line Counterclockwise",
            (LoopLine::OsakaLoop, Inbound, Zh) => "大阪环状线 内环",
            (LoopLine::OsakaLoop, Inbound, Ko) => "오사카 순환선 내선순환",
            (LoopLine::OsakaLoop, Outbound, Ja | Kana) => "大阪環状線 外回り",
            (LoopLine::OsakaLoop, Outbound, En) => "Osaka Loop Line Clockwise",
            (LoopLine::OsakaLoop, Outbound, Zh) => "大阪环状线 外环",
            (LoopLine::OsakaLoop, Outbound, Ko) => "오사카 순환선 외선순환",
        }
    }
}

/// Returns true if `train_type` keeps circulating on a loop line.
fn circulates(train_type: Option<&TrainType>) -> bool {
    train_type.is_none_or(TrainType::is_local)
}

/// Returns true if `line` is a loop line for `train_type`.
///
/// # Examples
///
/// ```
/// use train_position::domain::{Line, LineId, TrainType, TrainTypeKind};
/// use train_position::resolver::{ResolverConfig, YAMANOTE_LINE_ID, is_loop_line};
///
/// let config = ResolverConfig::default();
/// let yamanote = Line { id: YAMANOTE_LINE_ID, ..Default::default() };
/// assert!(is_loop_line(&yamanote, None, &config));
///
/// let rapid = TrainType { kind: TrainTypeKind::Rapid, ..Default::default() };
/// assert!(!is_loop_line(&yamanote, Some(&rapid), &config));
///
/// let other = Line { id: LineId(1), ..Default::default() };
/// assert!(!is_loop_line(&other, None, &config));
/// ```
pub fn is_loop_line(line: &Line, train_type: Option<&TrainType>, config: &ResolverConfig) -> bool {
    config.loop_line(line.id).is_some() && circulates(train_type)
}

/// Which loop line the train is running on, if it circulates.
///
/// Without a resolved line the station list decides: it is a loop only if
/// every station belongs to the same loop line.
pub fn loop_line_of(
    line: Option<&Line>,
    stations: &[Station],
    train_type: Option<&TrainType>,
    config: &ResolverConfig,
) -> Option<LoopLine> {
    if !circulates(train_type) {
        return None;
    }

    match line {
        Some(line) => config.loop_line(line.id),
        None => {
            let first = stations.first()?.line_id()?;
            let kind = config.loop_line(first)?;
            stations
                .iter()
                .all(|s| s.line_id() == Some(first))
                .then_some(kind)
        }
    }
}

/// Returns true if the line loops over part of its length only.
pub fn is_partial_loop_line(
    line: Option<&Line>,
    stations: &[Station],
    config: &ResolverConfig,
) -> bool {
    match line {
        Some(line) => config.is_partial_loop(line.id),
        None => {
            !stations.is_empty()
                && stations
                    .iter()
                    .all(|s| s.line_id().is_some_and(|id| config.is_partial_loop(id)))
        }
    }
}

/// Major stations ahead of `current_index`, wrapping around the loop.
///
/// Skips the current station's own group and lists each group once.
pub fn loop_bound_stations<'a>(
    directional: &'a [Station],
    current_index: usize,
    majors: &[GroupId],
    max: usize,
) -> Vec<&'a Station> {
    let len = directional.len();
    let Some(current) = directional.get(current_index) else {
        return Vec::new();
    };
    let ahead = (1..len).map(|k| &directional[(current_index + k) % len]);
    collect_majors(ahead, current, majors, max)
}

/// Major stations between `current_index` and the terminal, without
/// wrapping. These are the "via" stations of a partial loop line; the
/// terminal itself is never one of them.
pub fn via_stations<'a>(
    directional: &'a [Station],
    current_index: usize,
    majors: &[GroupId],
    max: usize,
) -> Vec<&'a Station> {
    let Some(current) = directional.get(current_index) else {
        return Vec::new();
    };
    let Some((terminal, _)) = directional.split_last() else {
        return Vec::new();
    };
    let ahead = directional[current_index + 1..]
        .iter()
        .filter(|s| !s.same_group(terminal));
    collect_majors(ahead, current, majors, max)
}

fn collect_majors<'a>(
    candidates: impl Iterator<Item = &'a Station>,
    current: &Station,
    majors: &[GroupId],
    max: usize,
) -> Vec<&'a Station> {
    let mut seen: Vec<GroupId> = Vec::new();
    let mut found = Vec::new();
    for station in candidates {
        if found.len() >= max {
            break;
        }
        if !majors.contains(&station.group_id)
            || station.same_group(current)
            || seen.contains(&station.group_id)
        {
            continue;
        }
        seen.push(station.group_id);
        found.push(station);
    }
    found
}
