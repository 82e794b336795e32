//! Unweighted traversal — bidirectional BFS existence probe + hop distances.
//!
//! The bidirectional probe expands the smaller frontier first and answers
//! only "is there a path, and through whom"; it computes no weights and no
//! probabilities. The weighted search in [`super::dijkstra`] is the
//! expensive sibling that callers should gate behind this probe.

use std::collections::VecDeque;

use inroad_core::types::collections::FxHashMap;
use inroad_core::ActorId;
use petgraph::graph::NodeIndex;
use petgraph::Direction;

use crate::store::SocialGraph;

/// Find any directed path from `from` to `to`, expanding from both ends
/// simultaneously. Returns the ordered id path (source…target inclusive)
/// or `None`. Unknown endpoints are simply unreachable.
pub fn find_path(graph: &SocialGraph, from: &ActorId, to: &ActorId) -> Option<Vec<ActorId>> {
    let start = graph.index_of(from)?;
    let goal = graph.index_of(to)?;
    if start == goal {
        return Some(vec![from.clone()]);
    }

    // parent maps double as visited sets; roots point at themselves.
    let mut fwd_parent: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
    let mut back_parent: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
    fwd_parent.insert(start, start);
    back_parent.insert(goal, goal);

    let mut fwd_frontier: VecDeque<NodeIndex> = VecDeque::from([start]);
    let mut back_frontier: VecDeque<NodeIndex> = VecDeque::from([goal]);

    while !fwd_frontier.is_empty() && !back_frontier.is_empty() {
        let meet = if fwd_frontier.len() <= back_frontier.len() {
            expand_level(
                graph,
                &mut fwd_frontier,
                &mut fwd_parent,
                &back_parent,
                Direction::Outgoing,
            )
        } else {
            expand_level(
                graph,
                &mut back_frontier,
                &mut back_parent,
                &fwd_parent,
                Direction::Incoming,
            )
        };

        if let Some(meet) = meet {
            return Some(stitch(graph, start, goal, meet, &fwd_parent, &back_parent));
        }
    }

    None
}

/// True when any directed path from `from` to `to` exists.
pub fn is_reachable(graph: &SocialGraph, from: &ActorId, to: &ActorId) -> bool {
    find_path(graph, from, to).is_some()
}

/// Hop distance from `source` to every reachable actor (0 for the source
/// itself), following outgoing edges. Backs degree recomputation.
pub fn hop_distances(graph: &SocialGraph, source: &ActorId) -> FxHashMap<ActorId, u32> {
    let mut distances = FxHashMap::default();
    let Some(start) = graph.index_of(source) else {
        return distances;
    };

    let mut visited: FxHashMap<NodeIndex, u32> = FxHashMap::default();
    let mut queue = VecDeque::new();
    visited.insert(start, 0);
    queue.push_back((start, 0u32));

    while let Some((node, depth)) = queue.pop_front() {
        for neighbor in graph.graph.neighbors_directed(node, Direction::Outgoing) {
            if !visited.contains_key(&neighbor) {
                visited.insert(neighbor, depth + 1);
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    for (idx, depth) in visited {
        if let Some(actor) = graph.graph.node_weight(idx) {
            distances.insert(actor.id().clone(), depth);
        }
    }
    distances
}

/// Expand one full BFS level of `frontier`. Returns the meeting node as soon
/// as a newly discovered neighbor is already known to the opposite search.
fn expand_level(
    graph: &SocialGraph,
    frontier: &mut VecDeque<NodeIndex>,
    parent: &mut FxHashMap<NodeIndex, NodeIndex>,
    other_parent: &FxHashMap<NodeIndex, NodeIndex>,
    direction: Direction,
) -> Option<NodeIndex> {
    for _ in 0..frontier.len() {
        let node = frontier.pop_front()?;
        for neighbor in graph.graph.neighbors_directed(node, direction) {
            if parent.contains_key(&neighbor) {
                continue;
            }
            parent.insert(neighbor, node);
            if other_parent.contains_key(&neighbor) {
                return Some(neighbor);
            }
            frontier.push_back(neighbor);
        }
    }
    None
}

/// Join the two half-paths at the meeting node into one ordered id path.
fn stitch(
    graph: &SocialGraph,
    start: NodeIndex,
    goal: NodeIndex,
    meet: NodeIndex,
    fwd_parent: &FxHashMap<NodeIndex, NodeIndex>,
    back_parent: &FxHashMap<NodeIndex, NodeIndex>,
) -> Vec<ActorId> {
    let mut indices = Vec::new();

    // start…meet, walking forward parents backwards.
    let mut current = meet;
    while current != start {
        indices.push(current);
        current = fwd_parent[&current];
    }
    indices.push(start);
    indices.reverse();

    // meet…goal, walking backward parents forwards.
    let mut current = meet;
    while current != goal {
        current = back_parent[&current];
        indices.push(current);
    }

    indices
        .into_iter()
        .filter_map(|idx| graph.graph.node_weight(idx))
        .map(|a| a.id().clone())
        .collect()
}
