//! Game sequencing and cumulative punitive scoring for a play session.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::domain::events::{ObserverId, Observers, ScoreEvent};
use crate::domain::game::{Game, DEFAULT_GOAL};
use crate::domain::records::SessionRecord;
use crate::domain::team::Team;
use crate::errors::domain::DomainError;

/// Cumulative punitive totals: a game's bonus is charged to its loser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionResult {
    pub us_points: u32,
    pub them_points: u32,
}

/// A session of Watten.
///
/// A session consists of as many games as the players want, keeps the
/// running punitive totals, and is the registration point for external
/// observers (storage, rendering). Sessions are self contained; there is
/// no higher construct they belong to.
pub struct Session {
    id: Option<i64>,
    goal: u32,
    us_team: String,
    them_team: String,
    games: Vec<Game>,
    current_game: Option<Game>,
    observers: Observers,
}

impl Session {
    /// Start an empty session with the default goal and unnamed teams.
    pub fn fresh() -> Self {
        Self {
            id: None,
            goal: DEFAULT_GOAL,
            us_team: String::new(),
            them_team: String::new(),
            games: Vec::new(),
            current_game: None,
            observers: Observers::new(),
        }
    }

    /// Restore a session from a previously exported record.
    ///
    /// Every game in the history must restore to a decided game, and the
    /// current game, if present, to an undecided one. Observers do not
    /// survive a round trip; collaborators re-register after loading.
    pub fn from_record(record: SessionRecord) -> Result<Self, DomainError> {
        if record.goal < 1 {
            return Err(DomainError::out_of_range("goal", "must be at least 1"));
        }

        let games = record
            .games
            .into_iter()
            .map(Game::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        if games.iter().any(|game| !game.finished()) {
            return Err(DomainError::UnfinishedPastGame);
        }

        let current_game = match record.current_game {
            Some(game_record) => {
                let game = Game::from_record(game_record)?;
                if game.finished() {
                    return Err(DomainError::FinishedCurrentGame);
                }
                Some(game)
            }
            None => None,
        };

        Ok(Self {
            id: record.id,
            goal: record.goal,
            us_team: record.us_team,
            them_team: record.them_team,
            games,
            current_game,
            observers: Observers::new(),
        })
    }

    /// Export this session as a structural record.
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            id: self.id,
            goal: self.goal,
            us_team: self.us_team.clone(),
            them_team: self.them_team.clone(),
            games: self.games.iter().map(Game::to_record).collect(),
            current_game: self.current_game.as_ref().map(Game::to_record),
        }
    }

    /// Store-assigned identity, if this session has been persisted.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Attach the identity assigned by the store.
    pub fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    /// The goal applied to games started from now on.
    pub fn goal(&self) -> u32 {
        self.goal
    }

    /// Change the goal for future games; the current game keeps its own.
    pub fn set_goal(&mut self, goal: u32) -> Result<(), DomainError> {
        if goal < 1 {
            return Err(DomainError::out_of_range("goal", "must be at least 1"));
        }
        self.goal = goal;
        Ok(())
    }

    /// Name or members of the "us" team.
    pub fn us_team(&self) -> &str {
        &self.us_team
    }

    pub fn set_us_team(&mut self, name: impl Into<String>) {
        self.us_team = name.into();
    }

    /// Name or members of the "them" team.
    pub fn them_team(&self) -> &str {
        &self.them_team
    }

    pub fn set_them_team(&mut self, name: impl Into<String>) {
        self.them_team = name.into();
    }

    /// The finished games, in play order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// The game currently in progress, if any.
    pub fn current_game(&self) -> Option<&Game> {
        self.current_game.as_ref()
    }

    /// Start another game if none is in progress; no-op otherwise.
    pub fn another_game(&mut self) -> Result<(), DomainError> {
        if self.current_game.is_none() {
            self.current_game = Some(Game::fresh(self.goal)?);
            tracing::debug!(goal = self.goal, "starting another game");
        }
        Ok(())
    }

    /// Whether `team` may raise the current round of the current game.
    pub fn can_raise(&self, team: Team) -> bool {
        self.current_game
            .as_ref()
            .is_some_and(|game| game.can_raise(team))
    }

    /// `team` raises the stake of the current round.
    pub fn raise(&mut self, team: Team) -> Result<(), DomainError> {
        let game = self
            .current_game
            .as_mut()
            .ok_or(DomainError::NoCurrentGame)?;
        let events = game.raise(team)?;
        self.commit(&events);
        Ok(())
    }

    /// Declare `team` the winner of the current round.
    pub fn declare_winner(&mut self, team: Team) -> Result<(), DomainError> {
        let game = self
            .current_game
            .as_mut()
            .ok_or(DomainError::NoCurrentGame)?;
        let events = game.declare_winner(team)?;
        self.commit(&events);
        Ok(())
    }

    /// Cumulative punitive totals over the finished games.
    ///
    /// Each game's bonus points are credited to the side that lost it;
    /// players want to avoid earning points at this level.
    pub fn result(&self) -> Result<SessionResult, DomainError> {
        let mut totals = SessionResult::default();
        for game in &self.games {
            let result = game.result()?;
            match result.winner {
                Some(Team::Us) => totals.them_points += result.points,
                Some(Team::Them) => totals.us_points += result.points,
                None => return Err(DomainError::UnfinishedPastGame),
            }
        }
        Ok(totals)
    }

    /// Register a synchronous observer, notified after each committed
    /// state change. Returns a handle for [`Session::unsubscribe`].
    pub fn subscribe(&mut self, observer: impl FnMut(&ScoreEvent) + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Remove an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// File a finished current game, then notify observers.
    fn commit(&mut self, events: &[ScoreEvent]) {
        if self.current_game.as_ref().is_some_and(Game::finished) {
            if let Some(game) = self.current_game.take() {
                self.games.push(game);
                tracing::info!(games = self.games.len(), "filed finished game");
            }
        }
        self.observers.notify(events);
    }
}

impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("goal", &self.goal)
            .field("us_team", &self.us_team)
            .field("them_team", &self.them_team)
            .field("games", &self.games)
            .field("current_game", &self.current_game)
            .field("observers", &self.observers)
            .finish()
    }
}
