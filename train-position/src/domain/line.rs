//! Line and operator types.

use serde::{Deserialize, Serialize};

use super::{CompanyId, LineId, LocalizedName, Station, TrainType};

/// An operating company.
///
/// Only used to decide whether consecutive lines of a through-service chain
/// belong to the same operator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    pub id: CompanyId,
    /// Short Japanese name (e.g. "東急")
    pub name_short: String,
    /// Short English name (e.g. "Tokyu")
    pub name_english_short: Option<String>,
}

/// A line symbol badge (e.g. "JY" on a green square).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineSymbol {
    pub symbol: String,
    pub color: Option<String>,
    pub shape: Option<String>,
}

/// A line.
///
/// `train_type` describes how this line's trains run within a joint
/// operation; `station` is the anchor station the record was fetched for.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Line {
    pub id: LineId,
    pub name_short: String,
    pub name_katakana: Option<String>,
    pub name_roman: Option<String>,
    pub name_chinese: Option<String>,
    pub name_korean: Option<String>,
    pub name_full: Option<String>,
    pub color: Option<String>,
    pub line_symbols: Vec<LineSymbol>,
    pub company: Option<Company>,
    pub train_type: Option<Box<TrainType>>,
    pub station: Option<Box<Station>>,
}

impl Line {
    /// Company id, if the operator is known.
    pub fn company_id(&self) -> Option<CompanyId> {
        self.company.as_ref().map(|c| c.id)
    }

    /// Returns true if both lines are known to be run by the same operator.
    ///
    /// Lines without company data never match, not even each other.
    pub fn same_operator(&self, other: &Line) -> bool {
        matches!(
            (self.company_id(), other.company_id()),
            (Some(a), Some(b)) if a == b
        )
    }
}

impl LocalizedName for Line {
    fn name_ja(&self) -> &str {
        &self.name_short
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
