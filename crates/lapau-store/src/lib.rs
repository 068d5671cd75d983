//! # lapau-store
//!
//! Storage layer implementing the repository traits over persisted
//! key-value state slices.
//!
//! ## Overview
//!
//! The original app mirrored its in-memory collections into a key-value
//! store, one named slice per collection. This crate reproduces that
//! contract:
//!
//! - `KvBackend` port with JSON-file and in-memory implementations
//! - Persisted slice models keeping the original on-disk JSON shape
//! - Entity ↔ model mappers
//! - `SliceStore` holding the loaded collections behind a lock
//! - Repository implementations persisting the affected slice on every
//!   mutation

pub mod kv;
pub mod mappers;
pub mod models;
pub mod repositories;
mod store;

// Re-export commonly used types
pub use kv::{keys, JsonFileBackend, KvBackend, MemoryBackend};
pub use repositories::{
    KvAdRepository, KvCommentRepository, KvReportRepository, KvSessionRepository,
    KvThreadRepository, KvUserRepository,
};
pub use store::SliceStore;
