//! Domain layer: pure scoring logic for rounds, games, and sessions.

pub mod events;
pub mod game;
pub mod records;
pub mod round;
pub mod round_result;
pub mod session;
pub mod team;

#[cfg(test)]
mod tests_props_raising;
#[cfg(test)]
mod tests_records;

// Re-exports for ergonomics
pub use events::{ObserverId, ScoreEvent};
pub use game::{Game, GameResult};
pub use round::Round;
pub use round_result::RoundResult;
pub use session::{Session, SessionResult};
pub use team::Team;
