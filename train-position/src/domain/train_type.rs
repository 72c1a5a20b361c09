//! Train type (service pattern) types.

use serde::{Deserialize, Serialize};

use super::{Direction, Line, LineId, LocalizedName, TrainTypeId};

/// Broad category of a train type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainTypeKind {
    /// Local service stopping everywhere
    #[default]
    Default,
    Rapid,
    Express,
    LimitedExpress,
    /// Branch service leaving the main line
    Branch,
    HighSpeedRapid,
}

impl TrainTypeKind {
    /// Returns true for all-stations services.
    pub fn is_local(self) -> bool {
        self == TrainTypeKind::Default
    }
}

/// Which directions a train type runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainDirection {
    #[default]
    Both,
    Inbound,
    Outbound,
}

impl TrainDirection {
    /// Returns true if the type runs in `direction`.
    pub fn runs(self, direction: Direction) -> bool {
        match self {
            TrainDirection::Both => true,
            TrainDirection::Inbound => direction == Direction::Inbound,
            TrainDirection::Outbound => direction == Direction::Outbound,
        }
    }
}

/// A train type.
///
/// `lines` is the through-service chain: the lines a train of this type
/// runs over, in physical running order from the originating line outward.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainType {
    pub id: TrainTypeId,
    /// Identifies the logical service across every participating line
    pub group_id: TrainTypeId,
    pub name: String,
    pub name_katakana: Option<String>,
    pub name_roman: Option<String>,
    pub name_chinese: Option<String>,
    pub name_korean: Option<String>,
    pub kind: TrainTypeKind,
    pub direction: TrainDirection,
    pub lines: Vec<Line>,
}

impl TrainType {
    /// Returns true for all-stations services.
    pub fn is_local(&self) -> bool {
        self.kind.is_local()
    }

    /// Position of `line` within the through-service chain.
    pub fn line_index(&self, line: LineId) -> Option<usize> {
        self.lines.iter().position(|l| l.id == line)
    }
}

impl LocalizedName for TrainType {
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
