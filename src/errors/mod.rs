//! Error handling for the scoring core.

pub mod domain;
pub mod store;

pub use domain::DomainError;
pub use store::StoreError;
