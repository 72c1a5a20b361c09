//! Bound ("for X") text.

use serde::Serialize;

use crate::domain::{Direction, HeaderLang, Line, LocalizedName, Station};

use super::config::ResolverConfig;
use super::loop_line::{LoopLine, loop_bound_stations, via_stations};

/// What the bound text is computed from.
#[derive(Debug, Clone, Copy)]
pub struct BoundInput<'a> {
    /// Stations in travel order.
    pub directional: &'a [Station],
    /// Index of the current station in `directional`.
    pub current_index: Option<usize>,
    /// The resolved current line.
    pub line: Option<&'a Line>,
    /// The loop line the train circulates on, already filtered by train type.
    pub loop_line: Option<LoopLine>,
    /// The current line loops over part of its length only.
    pub partial_loop: bool,
    pub direction: Option<Direction>,
}

enum LoopBound<'a> {
    Stations(Vec<&'a Station>),
    Rotation(LoopLine, Direction),
}

fn loop_bound<'a>(input: &BoundInput<'a>, config: &ResolverConfig) -> Option<LoopBound<'a>> {
    let kind = input.loop_line?;
    let direction = input.direction?;

    if !kind.always_rotational() {
        let majors = input
            .line
            .map(|line| config.major_stations(line.id))
            .unwrap_or(&[]);
        if let Some(index) = input.current_index
            && !majors.is_empty()
        {
            let max = config.max_bound_stations;
            let stations = loop_bound_stations(input.directional, index, majors, max);
            if !stations.is_empty() {
                return Some(LoopBound::Stations(stations));
            }
        }
    }

    Some(LoopBound::Rotation(kind, direction))
}

fn join_names(stations: &[&Station], lang: HeaderLang) -> String {
    stations
        .iter()
        .map(|s| s.name_for(lang))
        .collect::<Vec<_>>()
        .join(lang.list_separator())
}

/// Bound description for the header in `lang`.
///
/// Loop lines are described by the major stations ahead, or by their
/// rotation when no major stations are configured. Other lines are
/// described by the terminal of the directional sequence. Returns an empty
/// string when there is nothing to describe.
pub fn bound_text_for_direction(
    input: &BoundInput<'_>,
    lang: HeaderLang,
    config: &ResolverConfig,
) -> String {
    if input.loop_line.is_some() {
        return match loop_bound(input, config) {
            Some(LoopBound::Stations(stations)) => join_names(&stations, lang),
            Some(LoopBound::Rotation(kind, direction)) => {
                kind.rotation_text(direction, lang).to_string()
            }
            None => String::new(),
        };
    }

    input
        .directional
        .last()
        .map(|s| s.name_for(lang).to_string())
        .unwrap_or_default()
}

/// Bound captions in every header language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundTexts {
    pub ja: String,
    pub en: String,
    pub kana: String,
    pub zh: String,
    pub ko: String,
}

impl BoundTexts {
    /// Caption for `lang`.
    pub fn get(&self, lang: HeaderLang) -> &str {
        match lang {
            HeaderLang::Ja => &self.ja,
            HeaderLang::En => &self.en,
            HeaderLang::Kana => &self.kana,
            HeaderLang::Zh => &self.zh,
            HeaderLang::Ko => &self.ko,
        }
    }

    fn captions(stations: &[&Station], is_loop: bool) -> Self {
        let ja = format!(
            "{} {}",
            join_names(stations, HeaderLang::Ja),
            if is_loop { "方面" } else { "ゆき" }
        );
        Self {
            en: format!("for {}", join_names(stations, HeaderLang::En)),
            zh: format!("开往 {}", join_names(stations, HeaderLang::Zh)),
            ko: format!("{} 행", join_names(stations, HeaderLang::Ko)),
            kana: ja.clone(),
            ja,
        }
    }

    fn via(via: &[&Station], destination: &Station) -> Self {
        let ja = format!(
            "{}経由 {}ゆき",
            join_names(via, HeaderLang::Ja),
            destination.name_for(HeaderLang::Ja)
        );
        Self {
            en: format!(
                "for {} via {}",
                destination.name_for(HeaderLang::En),
                join_names(via, HeaderLang::En)
            ),
            zh: format!(
                "经由{} 开往{}",
                join_names(via, HeaderLang::Zh),
                destination.name_for(HeaderLang::Zh)
            ),
            ko: format!(
                "{} 경유 {} 행",
                join_names(via, HeaderLang::Ko),
                destination.name_for(HeaderLang::Ko)
            ),
            kana: ja.clone(),
            ja,
        }
    }

    fn rotation(kind: LoopLine, direction: Direction) -> Self {
        Self {
            ja: kind.rotation_text(direction, HeaderLang::Ja).to_string(),
            en: kind.rotation_text(direction, HeaderLang::En).to_string(),
            kana: kind.rotation_text(direction, HeaderLang::Kana).to_string(),
            zh: kind.rotation_text(direction, HeaderLang::Zh).to_string(),
            ko: kind.rotation_text(direction, HeaderLang::Ko).to_string(),
        }
    }
}

/// Captions for the selected bound, or `None` when no bound is selected.
///
/// Outside loop lines the caption names the same station as
/// [`bound_text_for_direction`]: the terminal of the directional sequence.
/// On a partial loop line the configured major stations ahead are named as
/// the stations the train runs via.
pub fn bound_texts(
    input: &BoundInput<'_>,
    selected_bound: Option<&Station>,
    config: &ResolverConfig,
) -> Option<BoundTexts> {
    let bound = selected_bound?;

    let texts = match loop_bound(input, config) {
        Some(LoopBound::Stations(stations)) => BoundTexts::captions(&stations, true),
        Some(LoopBound::Rotation(kind, direction)) => BoundTexts::rotation(kind, direction),
        None if input.loop_line.is_some() => BoundTexts::captions(&[bound], true),
        None => {
            let destination = input.directional.last().unwrap_or(bound);
            let via = partial_loop_via(input, config);
            if via.is_empty() {
                BoundTexts::captions(&[destination], false)
            } else {
                BoundTexts::via(&via, destination)
            }
        }
    };
    Some(texts)
}

fn partial_loop_via<'a>(input: &BoundInput<'a>, config: &ResolverConfig) -> Vec<&'a Station> {
    match (input.partial_loop, input.line, input.current_index) {
        (true, Some(line), Some(index)) => via_stations(
            input.directional,
            index,
            config.major_stations(line.id),
            config.max_bound_stations,
        ),
        _ => Vec::new(),
    }
}
