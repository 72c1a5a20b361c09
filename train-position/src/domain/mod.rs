//! Domain types for the train position resolver.
//!
//! These types mirror the rail topology delivered by the station data
//! provider: stations, lines, operators and train types. They are read-only
//! snapshots; a new selection replaces them wholesale.

mod direction;
mod error;
mod ids;
mod lang;
mod line;
mod service_day;
mod station;
mod train_type;

pub use direction::Direction;
pub use error::DomainError;
pub use ids::{CompanyId, GroupId, LineId, StationId, TrainTypeId};
pub use lang::{HeaderLang, LocalizedName};
pub use line::{Company, Line, LineSymbol};
pub use service_day::ServiceDay;
pub use station::{Station, StationNumber, StopCondition};
pub use train_type::{TrainDirection, TrainType, TrainTypeKind};
