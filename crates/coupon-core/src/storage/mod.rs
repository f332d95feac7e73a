//! Session storage port
//!
//! The client never talks to a concrete store; adapters live in
//! `coupon-infrastructure`.

pub mod session_store;

pub use session_store::SessionStore;

use crate::error::DomainError;

/// String key/value store with the semantics of browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), DomainError>;
}
