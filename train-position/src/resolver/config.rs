//! Resolver configuration.

use crate::domain::{GroupId, LineId};

use super::loop_line::LoopLine;

/// Yamanote Line.
pub const YAMANOTE_LINE_ID: LineId = LineId(11302);
/// Osaka Loop Line.
pub const OSAKA_LOOP_LINE_ID: LineId = LineId(11623);
/// Nagoya Municipal Subway Meijo Line.
pub const MEIJO_LINE_ID: LineId = LineId(99513);
/// Toei Oedo Line, circular over part of its length.
pub const TOEI_OEDO_LINE_ID: LineId = LineId(99301);

/// Configuration parameters for position resolution.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Physically circular lines.
    pub loop_lines: Vec<(LineId, LoopLine)>,

    /// Lines that loop over part of their length only.
    /// These are never treated as loop lines.
    pub partial_loop_lines: Vec<LineId>,

    /// Stations announced as bound points on loop lines, per line.
    pub major_stations: Vec<(LineId, Vec<GroupId>)>,

    /// Whether the next station skips stations the train passes.
    pub ignore_pass: bool,

    /// Maximum number of stations listed in a loop-line bound.
    pub max_bound_stations: usize,
}

impl ResolverConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        loop_lines: Vec<(LineId, LoopLine)>,
        partial_loop_lines: Vec<LineId>,
        major_stations: Vec<(LineId, Vec<GroupId>)>,
        ignore_pass: bool,
        max_bound_stations: usize,
    ) -> Self {
        Self {
            loop_lines,
            partial_loop_lines,
            major_stations,
            ignore_pass,
            max_bound_stations,
        }
    }

    /// Add announced bound stations for a loop line.
    pub fn with_major_stations(mut self, line: LineId, stations: Vec<GroupId>) -> Self {
        self.major_stations.retain(|(id, _)| *id != line);
        self.major_stations.push((line, stations));
        self
    }

    /// Which loop line `line` is, if any.
    pub fn loop_line(&self, line: LineId) -> Option<LoopLine> {
        self.loop_lines
            .iter()
            .find(|(id, _)| *id == line)
            .map(|(_, kind)| *kind)
    }

    /// Returns true if `line` loops over part of its length only.
    pub fn is_partial_loop(&self, line: LineId) -> bool {
        self.partial_loop_lines.contains(&line)
    }

    /// Announced bound stations for `line` (empty when none are configured).
    pub fn major_stations(&self, line: LineId) -> &[GroupId] {
        self.major_stations
            .iter()
            .find(|(id, _)| *id == line)
            .map(|(_, groups)| groups.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            loop_lines: vec![
                (YAMANOTE_LINE_ID, LoopLine::Yamanote),
                (OSAKA_LOOP_LINE_ID, LoopLine::OsakaLoop),
                (MEIJO_LINE_ID, LoopLine::Meijo),
            ],
            partial_loop_lines: vec![TOEI_OEDO_LINE_ID],
            major_stations: Vec::new(),
            ignore_pass: true,
            max_bound_stations: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ResolverConfig::default();

        assert_eq!(config.loop_line(YAMANOTE_LINE_ID), Some(LoopLine::Yamanote));
        assert_eq!(config.loop_line(OSAKA_LOOP_LINE_ID), Some(LoopLine::OsakaLoop));
        assert_eq!(config.loop_line(MEIJO_LINE_ID), Some(LoopLine::Meijo));
        assert_eq!(config.loop_line(TOEI_OEDO_LINE_ID), None);
        assert!(config.is_partial_loop(TOEI_OEDO_LINE_ID));
        assert!(config.major_stations(YAMANOTE_LINE_ID).is_empty());
        assert!(config.ignore_pass);
        assert_eq!(config.max_bound_stations, 2);
    }

    #[test]
    fn custom_config() {
        let config = ResolverConfig::new(
            vec![(LineId(1), LoopLine::Meijo)],
            vec![],
            vec![(LineId(1), vec![GroupId(10), GroupId(20)])],
            false,
            1,
        );

        assert_eq!(config.loop_line(LineId(1)), Some(LoopLine::Meijo));
        assert_eq!(config.loop_line(YAMANOTE_LINE_ID), None);
        assert_eq!(config.major_stations(LineId(1)), &[GroupId(10), GroupId(20)]);
        assert!(!config.ignore_pass);
        assert_eq!(config.max_bound_stations, 1);
    }

    #[test]
    fn with_major_stations_replaces_existing() {
        let config = ResolverConfig::default()
            .with_major_stations(YAMANOTE_LINE_ID, vec![GroupId(1)])
            .with_major_stations(YAMANOTE_LINE_ID, vec![GroupId(2), GroupId(3)]);

        assert_eq!(config.major_stations(YAMANOTE_LINE_ID), &[GroupId(2), GroupId(3)]);
        assert_eq!(config.major_stations.len(), 1);
    }
}
