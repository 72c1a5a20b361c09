//! Numeric identifier newtypes.
//!
//! The topology provider identifies every entity by an integer. Wrapping
//! each kind in its own type keeps a station id from being compared against
//! a group id, which is the most common mistake when matching platforms.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Returns the raw integer value.
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                $name(value)
            }
        }
    };
}

id_type!(
    /// Identifies one station record (a platform scoped to one line).
    StationId
);
id_type!(
    /// Identifies a physical station across all of its lines and platforms.
    ///
    /// Two station records with the same `GroupId` are the same place.
    GroupId
);
id_type!(
    /// Identifies a line.
    LineId
);
id_type!(
    /// Identifies an operating company.
    CompanyId
);
id_type!(
    /// Identifies a train type record.
    TrainTypeId
);
