use serde::{Deserialize, Serialize};

/// One of the two sides score is kept for, seen from the score keeper's
/// perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// The score keeper's own side.
    Us,
    /// The opposing side.
    Them,
}

impl Team {
    /// The opposing team.
    pub const fn other(self) -> Self {
        match self {
            Team::Us => Team::Them,
            Team::Them => Team::Us,
        }
    }
}
