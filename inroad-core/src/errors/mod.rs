//! Error taxonomy for the Inroad engine.
//!
//! Per-subsystem enums ([`GraphError`], [`StrategyError`], [`StorageError`])
//! aggregate into [`InroadError`]. Cache misses and hop-cap exhaustion are
//! normal control flow, never errors; the only failures surfaced to callers
//! are the two fail-fast strategy errors, the source-resolution precondition,
//! and the internal-invariant guard.

mod graph_error;
mod storage_error;
mod strategy_error;

pub use graph_error::GraphError;
pub use storage_error::StorageError;
pub use strategy_error::StrategyError;

/// Aggregate error for all Inroad subsystems.
#[derive(Debug, thiserror::Error)]
pub enum InroadError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used across all Inroad crates.
pub type InroadResult<T> = Result<T, InroadError>;
