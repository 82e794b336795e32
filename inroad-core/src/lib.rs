//! # inroad-core
//!
//! Core types, traits, errors, config, and constants for the Inroad
//! connection engine.
//!
//! Inroad answers one question: given a source actor and a target actor in a
//! sparse, locally accumulated acquaintance graph, how should the source
//! reach the target? The answer is always a [`models::ConnectionStrategy`] —
//! a weighted route through the graph when one exists, otherwise an
//! intermediary or similarity-based candidate suggestion. The empty answer is
//! unrepresentable by construction.
//!
//! This crate holds everything the engine crates share:
//!
//! - `models` — actors, connections, routes, strategies, cache entries,
//!   and the serialized graph snapshot shape
//! - `profile` — the lean [`profile::ActorProfile`] the search core depends
//!   on, plus the [`profile::ProfileView`] conversion seam for upstream
//!   profile formats
//! - `traits` — the [`traits::KeyValueStore`] collaborator interface backing
//!   both snapshot persistence and the strategy cache
//! - `errors` — per-subsystem error enums aggregated into [`InroadError`]
//! - `config` — [`config::EngineConfig`] with a single source of defaults
//! - `tracing` — idempotent subscriber setup driven by `INROAD_LOG`

pub mod config;
pub mod errors;
pub mod models;
pub mod profile;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::EngineConfig;
pub use errors::{GraphError, InroadError, InroadResult, StorageError, StrategyError};
pub use traits::KeyValueStore;
pub use types::ids::ActorId;
