//! Graph store and snapshot errors.

use crate::types::ids::ActorId;

/// Errors raised by the graph store and its snapshot codec.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("failed to decode graph snapshot: {reason}")]
    SnapshotDecode { reason: String },

    #[error("actor {id} is not present in the graph")]
    UnknownActor { id: ActorId },
}
