//! Domain-level error type used across the scoring core.
//!
//! This error type is transport- and storage-agnostic. Every variant signals
//! either a rejected record or a caller bug; all of them are raised
//! synchronously at the point of detection and nothing inside the core
//! catches or retries them.

use thiserror::Error;

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DomainError {
    /// A value has the right type but lies outside its domain.
    #[error("`{field}` out of range: {constraint}")]
    OutOfRange {
        field: &'static str,
        constraint: &'static str,
    },
    /// The round already has a winner.
    #[error("decided round cannot be won again")]
    RoundDecided,
    /// The game already has a winner; no further round actions are possible.
    #[error("finished game cannot accept round actions")]
    GameFinished,
    /// A session action that needs a game in progress found none.
    #[error("no game in progress")]
    NoCurrentGame,
    /// Both teams reached the goal in the same walk of the round history.
    #[error("game with multiple winners")]
    MultipleWinners,
    /// A record of an ongoing game carried no current round.
    #[error("record of ongoing game must contain a current round")]
    MissingCurrentRound,
    /// A record of a finished game carried a live round.
    #[error("record of finished game must not contain a current round")]
    UnexpectedCurrentRound,
    /// A session record listed an unfinished game in its history.
    #[error("past games must be finished")]
    UnfinishedPastGame,
    /// A session record's current game was already finished.
    #[error("current game in record must not be finished")]
    FinishedCurrentGame,
}

impl DomainError {
    pub fn out_of_range(field: &'static str, constraint: &'static str) -> Self {
        Self::OutOfRange { field, constraint }
    }
}
