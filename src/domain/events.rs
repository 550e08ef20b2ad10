//! State-change notifications emitted by the scoring core.
//!
//! Dispatch is synchronous: observers run inside the mutating call, after
//! the state change has been committed. External subscribers (a store, a
//! renderer) register on [`Session`](crate::domain::session::Session); a
//! standalone [`Game`](crate::domain::game::Game) reports the events it
//! produced through its return values instead. No ordering is guaranteed
//! between subscribers.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::domain::team::Team;

/// Edge-triggered scoring transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    /// The current round was decided and filed as a result.
    RoundWon { winner: Team, points: u32 },
    /// The current game reached its goal and was filed into the history.
    GameFinished { winner: Team, points: u32 },
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Registry of synchronous observers.
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn FnMut(&ScoreEvent)>)>,
}

impl Observers {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, observer: Box<dyn FnMut(&ScoreEvent)>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Remove an observer. Returns whether it was registered.
    pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, events: &[ScoreEvent]) {
        for event in events {
            for (_, observer) in &mut self.entries {
                observer(event);
            }
        }
    }
}

impl Debug for Observers {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
