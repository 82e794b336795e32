//! Snapshot export/import for persistence round-trips.

use inroad_core::models::{EdgeRecord, GraphSnapshot};
use inroad_core::{GraphError, InroadResult};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::store::SocialGraph;

impl SocialGraph {
    /// Serialize the full node+edge set.
    pub fn export(&self) -> GraphSnapshot {
        let nodes = self.actors().cloned().collect();
        let edges = self
            .graph
            .edge_references()
            .filter_map(|e| {
                let from = self.graph.node_weight(e.source())?;
                let to = self.graph.node_weight(e.target())?;
                Some(EdgeRecord {
                    from: from.id().clone(),
                    to: to.id().clone(),
                    weight: e.weight().weight,
                })
            })
            .collect();
        GraphSnapshot { nodes, edges }
    }

    /// Replace all graph state with the snapshot's contents. Prior state is
    /// cleared first — import is a full replace, never a merge.
    pub fn import(&mut self, snapshot: GraphSnapshot) {
        *self = SocialGraph::new();
        for actor in snapshot.nodes {
            self.upsert_actor(actor);
        }
        for edge in snapshot.edges {
            self.add_connection(&edge.from, &edge.to, edge.weight);
        }
    }

    /// Build a graph directly from a snapshot.
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Self {
        let mut graph = Self::new();
        graph.import(snapshot);
        graph
    }

    /// Decode a JSON snapshot and build a graph from it.
    pub fn from_json(raw: &str) -> InroadResult<Self> {
        let snapshot: GraphSnapshot =
            serde_json::from_str(raw).map_err(|e| GraphError::SnapshotDecode {
                reason: e.to_string(),
            })?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Encode the current state as a JSON snapshot.
    pub fn to_json(&self) -> InroadResult<String> {
        Ok(serde_json::to_string(&self.export())?)
    }
}
