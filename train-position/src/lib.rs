//! Train position resolution.
//!
//! Given a pre-fetched rail topology, the user's selections and the latest
//! geofence fix, works out where the train is, where it goes next, which
//! lines it runs through onto and what the header should show.

pub mod domain;
pub mod resolver;
pub mod topology;
