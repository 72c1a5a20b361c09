//! Travel direction along a line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Direction of travel along the topology's station order.
///
/// `Outbound` follows the natural order of the station list; `Inbound`
/// runs it in reverse.
///
/// # Examples
///
/// ```
/// use train_position::domain::Direction;
///
/// let dir = Direction::parse("INBOUND").unwrap();
/// assert_eq!(dir, Direction::Inbound);
/// assert_eq!(dir.reversed(), Direction::Outbound);
///
/// assert!(Direction::parse("inbound").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    /// Parse the wire form (`INBOUND` or `OUTBOUND`).
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "INBOUND" => Ok(Direction::Inbound),
            "OUTBOUND" => Ok(Direction::Outbound),
            other => Err(DomainError::InvalidDirection(other.to_string())),
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Inbound => Direction::Outbound,
            Direction::Outbound => Direction::Inbound,
        }
    }

    /// Wire form of the direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Inbound => "INBOUND",
            Direction::Outbound => "OUTBOUND",
        }
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::parse(s)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
