//! # Coupon Core
//! 
//! Domain entities, client-side filters, and the session storage port for the
//! coupon marketplace client.

pub mod domain;
pub mod filters;
pub mod storage;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use filters::CouponFilter;
pub use storage::{KeyValueStore, SessionStore};
