#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;
pub mod store;


// Re-exports for public API
pub use domain::events::{ObserverId, ScoreEvent};
pub use domain::game::{Game, GameResult};
pub use domain::records::{GameRecord, RoundRecord, RoundResultRecord, SessionRecord};
pub use domain::round::Round;
pub use domain::round_result::RoundResult;
pub use domain::session::{Session, SessionResult};
pub use domain::team::Team;
pub use errors::domain::DomainError;
pub use errors::store::StoreError;
pub use store::sessions::{InMemorySessionStore, SessionStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
