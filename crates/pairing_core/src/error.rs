//! Error kinds shared by every pairing operation

use thiserror::Error;

/// Failure of a pairing, seeding or round inference call.
///
/// None of these are retryable: they describe inputs that can never produce
/// a valid round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    /// A sequence has a length the operation cannot work with.
    #[error("invalid size {size}: {reason}")]
    InvalidSize { size: usize, reason: &'static str },

    /// The number of played matches does not correspond to any round.
    #[error("{matches} matches cannot be played by {teams} teams in this format")]
    InvalidMatchCount { teams: usize, matches: usize },

    /// An explicitly requested round lies outside the format.
    #[error("round {round} is out of range (format has {total} rounds)")]
    InvalidRound { round: usize, total: usize },

    /// A pair with a bye on both sides was about to be turned into a match.
    #[error("match has no team on either side")]
    IncompleteMatch,

    /// The result of a match is needed to continue but the host has none.
    #[error("match for round {round} has no recorded winner")]
    MissingResult { round: usize },
}

impl PairingError {
    pub(crate) fn invalid_size(size: usize, reason: &'static str) -> Self {
        PairingError::InvalidSize { size, reason }
    }
}

pub type Result<T> = std::result::Result<T, PairingError>;
