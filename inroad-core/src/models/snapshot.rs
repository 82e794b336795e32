//! Serialized graph snapshot — the persistence round-trip shape.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use crate::types::ids::ActorId;

/// One directed, weighted edge in serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: ActorId,
    pub to: ActorId,
    pub weight: f64,
}

/// The full node+edge set, as persisted by the key-value collaborator.
///
/// Importing a snapshot always replaces prior graph state (full replace,
/// never merge). Any persistence backend must round-trip this shape
/// losslessly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<Actor>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphSnapshot {
    /// True when the snapshot carries no actors at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ActorProfile;

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = GraphSnapshot {
            nodes: vec![
                Actor::from_profile(ActorProfile::bare("a")),
                Actor::from_profile(ActorProfile::bare("b")),
            ],
            edges: vec![EdgeRecord {
                from: "a".into(),
                to: "b".into(),
                weight: 0.3,
            }],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GraphSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn missing_fields_decode_as_empty() {
        let snapshot: GraphSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.edges.is_empty());
    }
}
