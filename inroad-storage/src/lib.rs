//! # inroad-storage
//!
//! Key-value collaborators backing the engine's snapshot persistence and
//! strategy cache: [`MemoryStore`] for tests and single-run usage,
//! [`SqliteStore`] for durable local storage. Both are opaque string →
//! string maps; the engine owns what is stored under which key.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
