use crate::domain::records::RoundResultRecord;
use crate::domain::round::BASE_POINTS;
use crate::domain::team::Team;
use crate::errors::domain::DomainError;

/// Immutable record of a finished round: what it was worth and who took it.
///
/// Created only when a [`Round`](crate::domain::round::Round) concludes and
/// held in the owning game's append-only history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    points: u32,
    winner: Team,
}

impl RoundResult {
    /// Record a finished round. Points can never be below the round floor.
    pub fn new(points: u32, winner: Team) -> Result<Self, DomainError> {
        if points < BASE_POINTS {
            return Err(DomainError::out_of_range("points", "must be at least 2"));
        }
        Ok(Self { points, winner })
    }

    /// Restore a result from a previously exported record.
    pub fn from_record(record: RoundResultRecord) -> Result<Self, DomainError> {
        Self::new(record.points, record.winner)
    }

    /// Export this result as a structural record.
    pub fn to_record(&self) -> RoundResultRecord {
        RoundResultRecord {
            points: self.points,
            winner: self.winner,
        }
    }

    /// How many points the round was worth.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// The team that won the round.
    pub fn winner(&self) -> Team {
        self.winner
    }
}
