//! Storage module (session persistence adapters)

pub mod memory;
pub mod file;

pub use memory::MemoryStore;
pub use file::FileStore;
