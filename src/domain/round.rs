//! The escalation state machine for the round currently being played.

use crate::domain::records::RoundRecord;
use crate::domain::team::Team;
use crate::errors::domain::DomainError;

/// Points every round starts at, and the floor for raise limits.
pub const BASE_POINTS: u32 = 2;

/// A single round of Watten.
///
/// A game consists of multiple rounds, each worth a number of points that
/// both teams can escalate by raising. Only the raising mechanics are
/// modeled here; the actual card play happens at the table, outside the
/// score keeper.
///
/// This type represents the round currently in progress. Finished rounds
/// are kept as [`RoundResult`](crate::domain::round_result::RoundResult)s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    points: u32,
    raised_last: Option<Team>,
    winner: Option<Team>,
    us_limit: u32,
    them_limit: u32,
}

impl Round {
    /// Start a round worth [`BASE_POINTS`] with per-team raise caps.
    ///
    /// Each cap must be at least the starting points; a round that could
    /// never be raised to its own cap is a contract violation.
    pub fn fresh(us_limit: u32, them_limit: u32) -> Result<Self, DomainError> {
        if us_limit < BASE_POINTS {
            return Err(DomainError::out_of_range(
                "us_limit",
                "must be at least the starting points (2)",
            ));
        }
        if them_limit < BASE_POINTS {
            return Err(DomainError::out_of_range(
                "them_limit",
                "must be at least the starting points (2)",
            ));
        }
        Ok(Self {
            points: BASE_POINTS,
            raised_last: None,
            winner: None,
            us_limit,
            them_limit,
        })
    }

    /// Restore a round from a previously exported record.
    pub fn from_record(record: RoundRecord) -> Result<Self, DomainError> {
        if record.points < BASE_POINTS {
            return Err(DomainError::out_of_range("points", "must be at least 2"));
        }
        if record.us_limit < BASE_POINTS {
            return Err(DomainError::out_of_range("us_limit", "must be at least 2"));
        }
        if record.them_limit < BASE_POINTS {
            return Err(DomainError::out_of_range(
                "them_limit",
                "must be at least 2",
            ));
        }
        Ok(Self {
            points: record.points,
            raised_last: record.raised_last,
            winner: record.winner,
            us_limit: record.us_limit,
            them_limit: record.them_limit,
        })
    }

    /// Export this round as a structural record.
    ///
    /// Feeding the record back into [`Round::from_record`] yields a
    /// behaviorally identical round, across schema versions.
    pub fn to_record(&self) -> RoundRecord {
        RoundRecord {
            points: self.points,
            raised_last: self.raised_last,
            winner: self.winner,
            us_limit: self.us_limit,
            them_limit: self.them_limit,
        }
    }

    /// How many points this round is currently worth.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// The winning team, or `None` while the round is undecided.
    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    /// Whether the round has been decided.
    pub fn decided(&self) -> bool {
        self.winner.is_some()
    }

    /// The cap up to which `team` may raise.
    pub fn limit(&self, team: Team) -> u32 {
        match team {
            Team::Us => self.us_limit,
            Team::Them => self.them_limit,
        }
    }

    /// Whether `team` is currently allowed to raise.
    ///
    /// A team may not raise twice in succession; before the first raise
    /// either team is eligible.
    pub fn can_raise(&self, team: Team) -> bool {
        !self.decided() && self.raised_last != Some(team)
    }

    /// `team` raises the stake.
    ///
    /// Does nothing if the team cannot raise. A team raising while the
    /// points already meet its own cap forfeits: the opposing team wins on
    /// the spot and the points stay unchanged. Otherwise the points go up
    /// by one and the raise turn passes to the opponent.
    pub fn raise(&mut self, team: Team) {
        if !self.can_raise(team) {
            return;
        }

        if self.points >= self.limit(team) {
            self.winner = Some(team.other());
            tracing::debug!(
                forfeited = ?team,
                winner = ?team.other(),
                points = self.points,
                "raise past own cap ends the round"
            );
            return;
        }

        self.points += 1;
        self.raised_last = Some(team);
    }

    /// Declare `team` the winner of this round.
    ///
    /// Fails if the round is already decided; the transition from undecided
    /// to decided happens exactly once.
    pub fn declare_winner(&mut self, team: Team) -> Result<(), DomainError> {
        if self.decided() {
            return Err(DomainError::RoundDecided);
        }
        self.winner = Some(team);
        Ok(())
    }
}
