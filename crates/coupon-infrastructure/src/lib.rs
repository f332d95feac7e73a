//! # Coupon Infrastructure
//! 
//! Key/value store implementations (adapters) for session persistence.

pub mod storage;

pub use storage::{FileStore, MemoryStore};
