//! Round sequencing and bonus computation for a single game.

use crate::domain::events::ScoreEvent;
use crate::domain::records::GameRecord;
use crate::domain::round::{Round, BASE_POINTS};
use crate::domain::round_result::RoundResult;
use crate::domain::team::Team;
use crate::errors::domain::DomainError;

/// Goal used when none is configured.
pub const DEFAULT_GOAL: u32 = 11;

/// Aggregate outcome of a game, recomputed from the full round history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// Winner once either side reached the goal; `None` while undecided.
    pub winner: Option<Team>,
    /// Bonus value of the win: 1 regular, 2 tailor, 4 reverse tailor.
    /// 0 while undecided.
    pub points: u32,
    pub us_points: u32,
    pub them_points: u32,
}

/// A single game of Watten.
///
/// Rounds are played until one side's accumulated points reach the goal.
/// The game files each finished round, deals the next one with raise caps
/// shrunk to the remaining distance, and computes the win bonus (regular,
/// tailor, or reverse tailor) from the ordered round history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    goal: u32,
    rounds: Vec<RoundResult>,
    current_round: Option<Round>,
}

impl Game {
    /// Start a game; the first round's caps are the full goal for both sides.
    pub fn fresh(goal: u32) -> Result<Self, DomainError> {
        if goal < 1 {
            return Err(DomainError::out_of_range("goal", "must be at least 1"));
        }
        Ok(Self {
            goal,
            rounds: Vec::new(),
            current_round: Some(Round::fresh(goal, goal)?),
        })
    }

    /// Restore a game from a previously exported record.
    ///
    /// Per-field checks run first; the cross-field invariant that exactly
    /// the undecided game carries a current round is checked last.
    pub fn from_record(record: GameRecord) -> Result<Self, DomainError> {
        if record.goal < 1 {
            return Err(DomainError::out_of_range("goal", "must be at least 1"));
        }
        let rounds = record
            .rounds
            .into_iter()
            .map(RoundResult::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        let mut game = Self {
            goal: record.goal,
            rounds,
            current_round: None,
        };

        match (game.result()?.winner, record.current_round) {
            (None, Some(round)) => game.current_round = Some(Round::from_record(round)?),
            (None, None) => return Err(DomainError::MissingCurrentRound),
            (Some(_), None) => {}
            (Some(_), Some(_)) => return Err(DomainError::UnexpectedCurrentRound),
        }

        Ok(game)
    }

    /// Export this game as a structural record.
    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            goal: self.goal,
            rounds: self.rounds.iter().map(RoundResult::to_record).collect(),
            current_round: self.current_round.as_ref().map(Round::to_record),
        }
    }

    /// The points a team needs to win this game.
    pub fn goal(&self) -> u32 {
        self.goal
    }

    /// The finished rounds, in play order.
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// The round currently in progress, if any.
    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    /// Whether the game has been decided. A finished game never has a live
    /// round, and an unfinished game always has one.
    pub fn finished(&self) -> bool {
        self.current_round.is_none()
    }

    /// Whether `team` may raise the current round.
    pub fn can_raise(&self, team: Team) -> bool {
        self.current_round
            .as_ref()
            .is_some_and(|round| round.can_raise(team))
    }

    /// Aggregate result, recomputed from the full round history.
    ///
    /// Walks the rounds in play order accumulating both sides' points. The
    /// tailor team is the first round winner whose side reaches
    /// `goal - 2` while the opponent is still at zero. Both sides reaching
    /// the goal in one walk signals corrupted history and is fatal.
    pub fn result(&self) -> Result<GameResult, DomainError> {
        let mut us_points = 0;
        let mut them_points = 0;
        let mut tailor: Option<Team> = None;
        let tailor_goal = self.goal.saturating_sub(2);

        for round in &self.rounds {
            match round.winner() {
                Team::Us => us_points += round.points(),
                Team::Them => them_points += round.points(),
            }

            if tailor.is_none()
                && ((us_points >= tailor_goal && them_points == 0)
                    || (them_points >= tailor_goal && us_points == 0))
            {
                tailor = Some(round.winner());
            }
        }

        let winner = match (us_points >= self.goal, them_points >= self.goal) {
            (false, false) => {
                return Ok(GameResult {
                    winner: None,
                    points: 0,
                    us_points,
                    them_points,
                })
            }
            (true, true) => return Err(DomainError::MultipleWinners),
            (true, false) => Team::Us,
            (false, true) => Team::Them,
        };

        let points = match tailor {
            Some(team) if team != winner => 4,
            Some(_) => 2,
            None => 1,
        };

        Ok(GameResult {
            winner: Some(winner),
            points,
            us_points,
            them_points,
        })
    }

    /// `team` raises the current round's stake.
    ///
    /// Fails once the game is finished. If the raise decides the round
    /// (forfeit past the cap), the round is settled before returning; the
    /// returned events describe everything that happened.
    pub fn raise(&mut self, team: Team) -> Result<Vec<ScoreEvent>, DomainError> {
        let round = self
            .current_round
            .as_mut()
            .ok_or(DomainError::GameFinished)?;
        round.raise(team);

        match round.winner() {
            Some(winner) => {
                let points = round.points();
                self.current_round = None;
                self.file_round(RoundResult::new(points, winner)?)
            }
            None => Ok(Vec::new()),
        }
    }

    /// Declare `team` the winner of the current round and settle it.
    pub fn declare_winner(&mut self, team: Team) -> Result<Vec<ScoreEvent>, DomainError> {
        let round = self
            .current_round
            .as_mut()
            .ok_or(DomainError::GameFinished)?;
        round.declare_winner(team)?;

        let points = round.points();
        self.current_round = None;
        self.file_round(RoundResult::new(points, team)?)
    }

    /// File a finished round's result, then deal the next round or finish.
    ///
    /// The next round's caps are each side's remaining distance to the
    /// goal, floored at [`BASE_POINTS`] so every round stays worth playing.
    fn file_round(&mut self, result: RoundResult) -> Result<Vec<ScoreEvent>, DomainError> {
        let mut events = vec![ScoreEvent::RoundWon {
            winner: result.winner(),
            points: result.points(),
        }];
        self.rounds.push(result);

        let aggregate = self.result()?;
        match aggregate.winner {
            None => {
                let us_limit = self.goal.saturating_sub(aggregate.us_points).max(BASE_POINTS);
                let them_limit = self
                    .goal
                    .saturating_sub(aggregate.them_points)
                    .max(BASE_POINTS);
                self.current_round = Some(Round::fresh(us_limit, them_limit)?);
                tracing::debug!(us_limit, them_limit, "dealing next round");
            }
            Some(winner) => {
                tracing::info!(winner = ?winner, points = aggregate.points, "game finished");
                events.push(ScoreEvent::GameFinished {
                    winner,
                    points: aggregate.points,
                });
            }
        }

        Ok(events)
    }
}
