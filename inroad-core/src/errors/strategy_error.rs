//! Strategy selection errors.

use crate::types::ids::ActorId;

/// Errors raised by the strategy selection layer.
///
/// `SelfTarget` and `EmptyGraph` are the two fail-fast rejections a caller
/// can trigger. `InvalidCacheEntry` never surfaces to callers — the cache
/// purges the entry, logs it, and reports a miss. `InternalInvariant` marks
/// a logic defect (the selector about to produce an empty result) and must
/// be reported as an internal error, never as a "no match".
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("cannot compute a connection strategy from {id} to themselves")]
    SelfTarget { id: ActorId },

    #[error(
        "acquaintance graph holds only {actor_count} actor(s); browse more profiles to \
         accumulate graph data before requesting a strategy"
    )]
    EmptyGraph { actor_count: usize },

    #[error("source actor could not be resolved: {reason}")]
    SourceUnresolved { reason: String },

    #[error("cached strategy for {target} is invalid: {reason}")]
    InvalidCacheEntry { target: String, reason: String },

    #[error("internal invariant violated: {message}")]
    InternalInvariant { message: String },
}
