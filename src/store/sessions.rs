//! Session persistence boundary.
//!
//! The core only moves [`SessionRecord`]s in and out of a store.
//! Transaction boundaries, connection lifecycle, and schema migration all
//! belong to the engine behind the trait.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::records::SessionRecord;
use crate::errors::store::StoreError;

/// Object store for session records.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist or update one session record, returning its identity.
    ///
    /// A record without an id is inserted and assigned a fresh one; a
    /// record with an id replaces the stored version. Callers are expected
    /// to write the returned id back into a freshly persisted session.
    async fn put(&self, record: &SessionRecord) -> Result<i64, StoreError>;

    /// Fetch a single session record by id.
    async fn get(&self, id: i64) -> Result<Option<SessionRecord>, StoreError>;

    /// Fetch all stored session records.
    async fn get_all(&self) -> Result<Vec<SessionRecord>, StoreError>;

    /// Remove a session record. Returns whether it existed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}

/// In-memory [`SessionStore`] used by tests and demos.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    records: BTreeMap<i64, SessionRecord>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, record: &SessionRecord) -> Result<i64, StoreError> {
        let mut inner = self.inner.lock();
        let id = match record.id {
            Some(id) => id,
            None => inner.next_id + 1,
        };
        inner.next_id = inner.next_id.max(id);

        let mut stored = record.clone();
        stored.id = Some(id);
        inner.records.insert(id, stored);
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<SessionRecord>, StoreError> {
        Ok(self.inner.lock().records.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<SessionRecord>, StoreError> {
        Ok(self.inner.lock().records.values().cloned().collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.lock().records.remove(&id).is_some())
    }
}
