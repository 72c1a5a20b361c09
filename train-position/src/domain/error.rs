//! Domain error types.
//!
//! These errors represent malformed values arriving from the topology
//! provider or the display layer. Resolution itself never fails; see the
//! `resolver` module.

/// Domain-level parse errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Direction string is neither `INBOUND` nor `OUTBOUND`
    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    /// Header tag does not start with a known state
    #[error("invalid header state: {0}")]
    InvalidHeaderState(String),
}
