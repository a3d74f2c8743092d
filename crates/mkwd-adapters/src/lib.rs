//! Infrastructure adapters for mkwd.
//!
//! This crate implements the ports defined in `mkwd-core::application::ports`.
//! It holds every `std::fs` call and the built-in template catalog.

pub mod builtin_templates;
pub mod catalog;
pub mod filesystem;

// Re-export commonly used adapters
pub use catalog::InMemoryCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
