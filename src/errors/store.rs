//! Errors surfaced by [`SessionStore`](crate::store::sessions::SessionStore)
//! implementations.

use thiserror::Error;

use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The underlying engine failed (connection, transaction, quota, ...).
    #[error("store backend error: {detail}")]
    Backend { detail: String },
    /// A stored record no longer satisfies the domain contract.
    #[error("corrupt session record: {0}")]
    Corrupt(#[from] DomainError),
    /// No record with the requested identity exists.
    #[error("no session with id {id}")]
    NotFound { id: i64 },
}

impl StoreError {
    pub fn backend(detail: impl Into<String>) -> Self {
        Self::Backend {
            detail: detail.into(),
        }
    }
}
