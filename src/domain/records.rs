//! Structural records: the stable export/restore schema for every entity.
//!
//! Records are plain serde values; `serde_json` is the reference encoding.
//! The schema only ever evolves additively: every field added after version
//! 1 is optional with a defined default, so records written by older code
//! keep loading. Wrong primitive shapes fail at the serde boundary naming
//! the offending field; range and cross-field checks happen in the
//! entities' `from_record` constructors.
//!
//! Version history:
//! - v1: all fields below except `SessionRecord::id`.
//! - v2: `SessionRecord::id` (optional, defaults to `None`).

use serde::{Deserialize, Serialize};

use crate::domain::team::Team;

/// Exported state of a live [`Round`](crate::domain::round::Round).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub points: u32,
    pub raised_last: Option<Team>,
    pub winner: Option<Team>,
    pub us_limit: u32,
    pub them_limit: u32,
}

/// Exported state of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResultRecord {
    pub points: u32,
    pub winner: Team,
}

/// Exported state of a [`Game`](crate::domain::game::Game).
///
/// An undecided game carries a `current_round`; a finished one must not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub goal: u32,
    pub rounds: Vec<RoundResultRecord>,
    pub current_round: Option<RoundRecord>,
}

/// Exported state of a [`Session`](crate::domain::session::Session).
///
/// Every entry of `games` must restore to a decided game; `current_game`,
/// if present, must restore to an undecided one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Store-assigned identity; absent until first persisted (added in v2).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub goal: u32,
    pub us_team: String,
    pub them_team: String,
    pub games: Vec<GameRecord>,
    pub current_game: Option<GameRecord>,
}
