//! Station types.

use serde::{Deserialize, Serialize};

use super::{GroupId, Line, LineId, LocalizedName, ServiceDay, StationId, TrainType};

/// Whether a train type stops at a station.
///
/// `Not` marks a pass station: the train runs through without stopping.
/// `Weekday` and `Holiday` stops only happen on that kind of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StopCondition {
    #[default]
    All,
    Not,
    Partial,
    PartialStop,
    Weekday,
    Holiday,
}

impl StopCondition {
    /// Returns true if a train passes through without stopping on `day`.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_position::domain::{ServiceDay, StopCondition};
    ///
    /// assert!(StopCondition::Not.is_pass_on(ServiceDay::Weekday));
    /// assert!(!StopCondition::All.is_pass_on(ServiceDay::Holiday));
    ///
    /// // Weekday-only stops are passed on holidays
    /// assert!(StopCondition::Weekday.is_pass_on(ServiceDay::Holiday));
    /// assert!(!StopCondition::Weekday.is_pass_on(ServiceDay::Weekday));
    /// ```
    pub fn is_pass_on(self, day: ServiceDay) -> bool {
        match self {
            StopCondition::All | StopCondition::Partial | StopCondition::PartialStop => false,
            StopCondition::Not => true,
            StopCondition::Weekday => day == ServiceDay::Holiday,
            StopCondition::Holiday => day == ServiceDay::Weekday,
        }
    }
}

/// A station number such as `JY-17`, one per line serving the station.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StationNumber {
    /// Line symbol part (e.g. "JY")
    pub line_symbol: String,
    /// Full number as displayed (e.g. "JY-17")
    pub station_number: String,
    /// Symbol colour as a hex string
    pub line_symbol_color: Option<String>,
    /// Symbol badge shape
    pub line_symbol_shape: Option<String>,
}

/// A station record.
///
/// A record is scoped to one line (`line`) and optionally one train type
/// (`train_type`). The same physical station appears once per line it
/// serves; those records share a `group_id`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Station {
    pub id: StationId,
    pub group_id: GroupId,
    pub name: String,
    pub name_katakana: Option<String>,
    pub name_roman: Option<String>,
    pub name_chinese: Option<String>,
    pub name_korean: Option<String>,
    /// Numbering, one entry per line passing through
    pub station_numbers: Vec<StationNumber>,
    pub stop_condition: StopCondition,
    /// Line this record is scoped to
    pub line: Option<Box<Line>>,
    /// All lines serving this station group
    pub lines: Vec<Line>,
    /// Train type stopping here, if the record is scoped to one
    pub train_type: Option<Box<TrainType>>,
    pub three_letter_code: Option<String>,
}

impl Station {
    /// Returns true if both records describe the same physical station.
    pub fn same_group(&self, other: &Station) -> bool {
        self.group_id == other.group_id
    }

    /// Id of the line this record is scoped to.
    pub fn line_id(&self) -> Option<LineId> {
        self.line.as_ref().map(|l| l.id)
    }

    /// Returns true if the train passes this station without stopping.
    pub fn is_pass(&self, day: ServiceDay) -> bool {
        self.stop_condition.is_pass_on(day)
    }

    /// Pick the station number to display for `line`.
    ///
    /// Prefers the entry whose symbol belongs to `line`, falling back to the
    /// first entry. Returns `None` when the station carries no numbering.
    pub fn number_for_line(&self, line: Option<&Line>) -> Option<&StationNumber> {
        let by_symbol = line.and_then(|line| {
            self.station_numbers.iter().find(|num| {
                line.line_symbols
                    .iter()
                    .any(|sym| sym.symbol == num.line_symbol)
            })
        });
        by_symbol.or_else(|| self.station_numbers.first())
    }
}

impl LocalizedName for Station {
    fn name_ja(&self) -> &str {
        &self.name
    }
    fn name_katakana(&self) -> Option<&str> {
        self.name_katakana.as_deref()
    }
    fn name_roman(&self) -> Option<&str> {
        self.name_roman.as_deref()
    }
    fn name_chinese(&self) -> Option<&str> {
        self.name_chinese.as_deref()
    }
    fn name_korean(&self) -> Option<&str> {
        self.name_korean.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HeaderLang, LineSymbol};

    fn number(symbol: &str, n: &str) -> StationNumber {
        StationNumber {
            line_symbol: symbol.to_string(),
            station_number: n.to_string(),
            ..Default::default()
        }
    }

    fn line_with_symbol(id: u32, symbol: &str) -> Line {
        Line {
            id: LineId(id),
            line_symbols: vec![LineSymbol {
                symbol: symbol.to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn stop_condition_pass_table() {
        use ServiceDay::{Holiday, Weekday};

        assert!(!StopCondition::All.is_pass_on(Weekday));
        assert!(!StopCondition::All.is_pass_on(Holiday));
        assert!(StopCondition::Not.is_pass_on(Weekday));
        assert!(StopCondition::Not.is_pass_on(Holiday));
        assert!(!StopCondition::Partial.is_pass_on(Weekday));
        assert!(!StopCondition::PartialStop.is_pass_on(Holiday));
        assert!(!StopCondition::Weekday.is_pass_on(Weekday));
        assert!(StopCondition::Weekday.is_pass_on(Holiday));
        assert!(StopCondition::Holiday.is_pass_on(Weekday));
        assert!(!StopCondition::Holiday.is_pass_on(Holiday));
    }

    #[test]
    fn stop_condition_wire_names() {
        let cond: StopCondition = serde_json::from_str("\"PARTIAL_STOP\"").unwrap();
        assert_eq!(cond, StopCondition::PartialStop);
        assert_eq!(serde_json::to_string(&StopCondition::Not).unwrap(), "\"NOT\"");
    }

    #[test]
    fn same_group_ignores_line_context() {
        let a = Station {
            id: StationId(1),
            group_id: GroupId(100),
            line: Some(Box::new(line_with_symbol(1, "A"))),
            ..Default::default()
        };
        let b = Station {
            id: StationId(2),
            group_id: GroupId(100),
            line: Some(Box::new(line_with_symbol(2, "B"))),
            ..Default::default()
        };
        let c = Station {
            id: StationId(3),
            group_id: GroupId(101),
            ..Default::default()
        };
        assert!(a.same_group(&b));
        assert!(!a.same_group(&c));
    }

    #[test]
    fn number_prefers_line_symbol() {
        let station = Station {
            station_numbers: vec![number("JY", "JY-17"), number("JC", "JC-05")],
            ..Default::default()
        };
        let chuo = line_with_symbol(11312, "JC");
        assert_eq!(
            station.number_for_line(Some(&chuo)).map(|n| n.station_number.as_str()),
            Some("JC-05")
        );
    }

    #[test]
    fn number_falls_back_to_first() {
        let station = Station {
            station_numbers: vec![number("JY", "JY-17"), number("JC", "JC-05")],
            ..Default::default()
        };
        let other = line_with_symbol(1, "M");
        assert_eq!(
            station.number_for_line(Some(&other)).map(|n| n.station_number.as_str()),
            Some("JY-17")
        );
        assert_eq!(
            station.number_for_line(None).map(|n| n.station_number.as_str()),
            Some("JY-17")
        );
    }

    #[test]
    fn number_absent_without_numbering() {
        let station = Station::default();
        assert!(station.number_for_line(None).is_none());
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{
            "id": 1130201,
            "groupId": 1130201,
            "name": "大崎",
            "nameRoman": "Osaki",
            "stationNumbers": [{"lineSymbol": "JY", "stationNumber": "JY-24"}],
            "stopCondition": "ALL",
            "threeLetterCode": "OSK"
        }"#;
        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.id, StationId(1130201));
        assert_eq!(station.name_for(HeaderLang::En), "Osaki");
        assert_eq!(station.station_numbers[0].station_number, "JY-24");
        assert_eq!(station.three_letter_code.as_deref(), Some("OSK"));
        assert!(station.line.is_none());
    }
}
