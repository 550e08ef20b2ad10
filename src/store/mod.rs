//! Storage boundary for persisted sessions.

pub mod sessions;

pub use sessions::{InMemorySessionStore, SessionStore};
