//! The acquaintance graph store.

use inroad_core::models::{Actor, ActorStatus};
use inroad_core::types::collections::{FxHashMap, FxHashSet};
use inroad_core::ActorId;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::{Directed, Direction};

/// Edge weight bounds. Lower weight = stronger tie.
pub const MIN_EDGE_WEIGHT: f64 = 0.1;
pub const MAX_EDGE_WEIGHT: f64 = 1.0;

/// Payload of one directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub weight: f64,
}

impl Connection {
    /// Build a connection, clamping the weight into `[0.1, 1.0]`.
    pub fn new(weight: f64) -> Self {
        Self {
            weight: weight.clamp(MIN_EDGE_WEIGHT, MAX_EDGE_WEIGHT),
        }
    }
}

/// The acquaintance graph: a directed graph of actors with weighted ties.
#[derive(Debug)]
pub struct SocialGraph {
    pub(crate) graph: StableGraph<Actor, Connection, Directed>,
    /// Map from actor id → NodeIndex for O(1) lookup.
    node_index: FxHashMap<ActorId, NodeIndex>,
}

impl SocialGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: FxHashMap::default(),
        }
    }

    /// Number of actors in the graph.
    pub fn actor_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed connections in the graph.
    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up an actor's node index.
    pub(crate) fn index_of(&self, id: &ActorId) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Fetch an actor by id.
    pub fn get(&self, id: &ActorId) -> Option<&Actor> {
        self.index_of(id).and_then(|idx| self.graph.node_weight(idx))
    }

    /// Upsert an actor by id: insert if new, otherwise replace every
    /// attribute (last write wins). Never creates duplicates; existing
    /// connections are untouched.
    pub fn upsert_actor(&mut self, actor: Actor) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(actor.id()) {
            if let Some(existing) = self.graph.node_weight_mut(idx) {
                *existing = actor;
            }
            return idx;
        }
        let id = actor.id().clone();
        let idx = self.graph.add_node(actor);
        self.node_index.insert(id, idx);
        idx
    }

    /// Add a directed connection. First write wins: if the ordered pair
    /// already has an edge, this is a no-op (callers that need a refreshed
    /// weight must `remove_connection` first). Returns whether an edge was
    /// inserted.
    pub fn add_connection(&mut self, from: &ActorId, to: &ActorId, weight: f64) -> bool {
        let (Some(a), Some(b)) = (self.index_of(from), self.index_of(to)) else {
            return false;
        };
        if a == b || self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, Connection::new(weight));
        true
    }

    /// Remove the directed connection for an ordered pair, if present.
    pub fn remove_connection(&mut self, from: &ActorId, to: &ActorId) -> bool {
        let (Some(a), Some(b)) = (self.index_of(from), self.index_of(to)) else {
            return false;
        };
        match self.graph.find_edge(a, b) {
            Some(edge) => {
                self.graph.remove_edge(edge);
                true
            }
            None => false,
        }
    }

    /// Stored weight of the directed connection, if present.
    pub fn connection_weight(&self, from: &ActorId, to: &ActorId) -> Option<f64> {
        let (a, b) = (self.index_of(from)?, self.index_of(to)?);
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
            .map(|c| c.weight)
    }

    /// Out-neighbors of an actor, i.e. the people they are observed to know.
    pub fn connections_of(&self, id: &ActorId) -> Vec<ActorId> {
        let Some(idx) = self.index_of(id) else {
            return Vec::new();
        };
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .filter_map(|n| self.graph.node_weight(n))
            .map(|a| a.id().clone())
            .collect()
    }

    /// Mutual connections: the set intersection of both actors'
    /// out-neighbor id sets. Symmetric in its arguments; sorted for
    /// deterministic output.
    pub fn mutual_connections(&self, a: &ActorId, b: &ActorId) -> Vec<ActorId> {
        let of_a: FxHashSet<ActorId> = self.connections_of(a).into_iter().collect();
        let of_b: FxHashSet<ActorId> = self.connections_of(b).into_iter().collect();
        let mut mutual: Vec<ActorId> = of_a.intersection(&of_b).cloned().collect();
        mutual.sort();
        mutual
    }

    /// Update an actor's relationship status. Returns false for unknown ids.
    pub fn set_status(&mut self, id: &ActorId, status: ActorStatus) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        match self.graph.node_weight_mut(idx) {
            Some(actor) => {
                actor.status = status;
                true
            }
            None => false,
        }
    }

    /// Refresh every actor's `degree` as the hop distance from `source`
    /// (0 for self). Actors the source cannot reach keep `degree = None`.
    pub fn recompute_degrees(&mut self, source: &ActorId) {
        let distances = crate::traversal::bfs::hop_distances(self, source);
        let indices: Vec<NodeIndex> = self.graph.node_indices().collect();
        for idx in indices {
            if let Some(actor) = self.graph.node_weight_mut(idx) {
                actor.degree = distances.get(actor.id()).copied();
            }
        }
    }

    /// Iterate all actors.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.graph.node_weights()
    }

    /// Record an observed tie `from → to` with a model-derived weight:
    /// mutual count from the graph, match score from the profiles, weight
    /// from the edge-weight model. First-write-wins like `add_connection`.
    /// Returns the weight that is now stored for the pair.
    pub fn connect_scored(&mut self, from: &ActorId, to: &ActorId) -> Option<f64> {
        let a = self.get(from)?.profile.clone();
        let b = self.get(to)?.profile.clone();
        let mutuals = self.mutual_connections(from, to).len();
        let score = crate::scoring::match_score(&a, &b, mutuals);
        let weight = crate::scoring::edge_weight(&a, &b, score);
        self.add_connection(from, to, weight);
        self.connection_weight(from, to)
    }

    /// Summary statistics.
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            actors: self.actor_count(),
            connections: self.connection_count(),
            ..GraphStats::default()
        };
        for actor in self.actors() {
            match actor.status {
                ActorStatus::NotContacted => stats.not_contacted += 1,
                ActorStatus::Contacted => stats.contacted += 1,
                ActorStatus::Connected => stats.connected += 1,
            }
        }
        stats
    }
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics from a graph snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub actors: usize,
    pub connections: usize,
    pub not_contacted: usize,
    pub contacted: usize,
    pub connected: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use inroad_core::profile::ActorProfile;

    fn actor(id: &str) -> Actor {
        Actor::from_profile(ActorProfile::bare(id))
    }

    fn named(id: &str, name: &str) -> Actor {
        let mut profile = ActorProfile::bare(id);
        profile.name = name.to_string();
        Actor::from_profile(profile)
    }

    #[test]
    fn upsert_replaces_without_duplicating() {
        // Scenario: re-adding id "x" with new attributes keeps one node and
        // the latest data.
        let mut g = SocialGraph::new();
        g.upsert_actor(named("x", "Alice"));
        g.upsert_actor(named("x", "Alicia"));
        assert_eq!(g.actor_count(), 1);
        assert_eq!(g.get(&"x".into()).unwrap().profile.name, "Alicia");
    }

    #[test]
    fn upsert_preserves_existing_connections() {
        let mut g = SocialGraph::new();
        g.upsert_actor(actor("a"));
        g.upsert_actor(actor("b"));
        assert!(g.add_connection(&"a".into(), &"b".into(), 0.3));
        g.upsert_actor(named("a", "Ann"));
        assert_eq!(g.connection_weight(&"a".into(), &"b".into()), Some(0.3));
    }

    #[test]
    fn first_write_wins_for_edges() {
        let mut g = SocialGraph::new();
        g.upsert_actor(actor("a"));
        g.upsert_actor(actor("b"));
        assert!(g.add_connection(&"a".into(), &"b".into(), 0.3));
        // Re-adding with a different weight is a no-op.
        assert!(!g.add_connection(&"a".into(), &"b".into(), 0.9));
        assert_eq!(g.connection_weight(&"a".into(), &"b".into()), Some(0.3));
        assert_eq!(g.connection_count(), 1);

        // Remove-then-add is the explicit refresh path.
        assert!(g.remove_connection(&"a".into(), &"b".into()));
        assert!(g.add_connection(&"a".into(), &"b".into(), 0.9));
        assert_eq!(g.connection_weight(&"a".into(), &"b".into()), Some(0.9));
    }

    #[test]
    fn edge_weight_is_clamped_into_bounds() {
        let mut g = SocialGraph::new();
        g.upsert_actor(actor("a"));
        g.upsert_actor(actor("b"));
        g.upsert_actor(actor("c"));
        g.add_connection(&"a".into(), &"b".into(), 0.0);
        g.add_connection(&"a".into(), &"c".into(), 7.5);
        assert_eq!(g.connection_weight(&"a".into(), &"b".into()), Some(0.1));
        assert_eq!(g.connection_weight(&"a".into(), &"c".into()), Some(1.0));
    }

    #[test]
    fn mutual_connections_are_symmetric() {
        let mut g = SocialGraph::new();
        for id in ["a", "b", "m1", "m2", "other"] {
            g.upsert_actor(actor(id));
        }
        for (from, to) in [("a", "m1"), ("a", "m2"), ("a", "other"), ("b", "m1"), ("b", "m2")] {
            g.add_connection(&from.into(), &to.into(), 0.5);
        }
        let ab = g.mutual_connections(&"a".into(), &"b".into());
        let ba = g.mutual_connections(&"b".into(), &"a".into());
        assert_eq!(ab, ba);
        assert_eq!(ab, vec![ActorId::new("m1"), ActorId::new("m2")]);
    }

    #[test]
    fn set_status_and_stats() {
        let mut g = SocialGraph::new();
        g.upsert_actor(actor("a"));
        g.upsert_actor(actor("b"));
        assert!(g.set_status(&"b".into(), ActorStatus::Contacted));
        assert!(!g.set_status(&"ghost".into(), ActorStatus::Connected));
        let stats = g.stats();
        assert_eq!(stats.actors, 2);
        assert_eq!(stats.not_contacted, 1);
        assert_eq!(stats.contacted, 1);
    }

    #[test]
    fn connect_scored_derives_weight_from_the_model() {
        let mut g = SocialGraph::new();
        let mut a = ActorProfile::bare("a");
        a.employers = vec!["Acme".into()];
        a.schools = vec!["MIT".into()];
        let mut b = ActorProfile::bare("b");
        b.employers = vec!["Acme".into()];
        b.schools = vec!["MIT".into()];
        g.upsert_actor(Actor::from_profile(a));
        g.upsert_actor(Actor::from_profile(b));

        let weight = g.connect_scored(&"a".into(), &"b".into()).unwrap();
        // Shared recent employer and school pull the weight well below base.
        assert!(weight < 1.0);
        assert!(weight >= 0.1);
        assert_eq!(g.connection_weight(&"a".into(), &"b".into()), Some(weight));

        // First-write-wins still applies on repeat observation.
        let again = g.connect_scored(&"a".into(), &"b".into()).unwrap();
        assert_eq!(again, weight);
        assert_eq!(g.connection_count(), 1);
    }

    #[test]
    fn recompute_degrees_assigns_hop_distances() {
        let mut g = SocialGraph::new();
        for id in ["me", "x", "y", "island"] {
            g.upsert_actor(actor(id));
        }
        g.add_connection(&"me".into(), &"x".into(), 0.5);
        g.add_connection(&"x".into(), &"y".into(), 0.5);
        g.recompute_degrees(&"me".into());
        assert_eq!(g.get(&"me".into()).unwrap().degree, Some(0));
        assert_eq!(g.get(&"x".into()).unwrap().degree, Some(1));
        assert_eq!(g.get(&"y".into()).unwrap().degree, Some(2));
        assert_eq!(g.get(&"island".into()).unwrap().degree, None);
    }
}
