//! Hop-capped weighted shortest path + success-probability calibration.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use chrono::Utc;
use inroad_core::models::{EdgeRecord, Route};
use inroad_core::types::collections::FxHashMap;
use inroad_core::ActorId;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use tracing::warn;

use crate::store::SocialGraph;

/// Hop-tiered success probabilities, calibrated against observed
/// request-acceptance rates. Not derived from path weight.
pub const ONE_HOP_PROBABILITY: f64 = 85.0;
pub const TWO_HOP_PROBABILITY: f64 = 65.0;
pub const THREE_HOP_PROBABILITY: f64 = 45.0;

/// Bounds of the defensive weight-derived estimate for paths longer than the
/// tiers cover. The hop cap makes such paths structurally impossible.
const FALLBACK_PROBABILITY_MIN: f64 = 20.0;
const FALLBACK_PROBABILITY_MAX: f64 = 30.0;

/// Find the minimum-weight path from `from` to `to` using Dijkstra's
/// algorithm, bounded by `max_hops`.
///
/// Every relaxation tracks cumulative weight and hop count; a neighbor is
/// enqueued only if its hop count would stay within `max_hops`, even when
/// the longer path would be cheaper — the cap prunes the search space, it is
/// not a post-filter. Distance ties keep the first-discovered predecessor
/// (relaxation requires strictly less cost).
///
/// Returns `None` when no path exists within the cap; that is normal control
/// flow, not an error.
pub fn find_weighted_path(
    graph: &SocialGraph,
    from: &ActorId,
    to: &ActorId,
    max_hops: u32,
) -> Option<Route> {
    let start = graph.index_of(from)?;
    let goal = graph.index_of(to)?;
    if start == goal || max_hops == 0 {
        return None;
    }

    let mut dist: FxHashMap<NodeIndex, f64> = FxHashMap::default();
    let mut prev: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
    let mut heap = BinaryHeap::new();

    dist.insert(start, 0.0);
    heap.push(SearchState {
        cost: 0.0,
        hops: 0,
        node: start,
    });

    while let Some(SearchState { cost, hops, node }) = heap.pop() {
        if node == goal {
            return Some(build_route(graph, start, goal, cost, &prev));
        }

        if let Some(&best) = dist.get(&node) {
            if cost > best {
                continue;
            }
        }

        // The hop budget is spent here: neighbors beyond it are never
        // enqueued, whatever their weighted distance would be.
        if hops >= max_hops {
            continue;
        }

        for edge in graph.graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().weight;

            let is_better = dist.get(&next).map(|&d| next_cost < d).unwrap_or(true);
            if is_better {
                dist.insert(next, next_cost);
                prev.insert(next, node);
                heap.push(SearchState {
                    cost: next_cost,
                    hops: hops + 1,
                    node: next,
                });
            }
        }
    }

    None
}

/// Hop-tiered success probability for a completed route.
///
/// Strictly decreasing in hop count. The `>3` branch is defensive only: the
/// hop cap makes it unreachable, so its constants are deliberately
/// uncalibrated and hitting it is logged as an anomaly.
pub fn success_probability(hops: usize, total_weight: f64) -> f64 {
    match hops {
        0 | 1 => ONE_HOP_PROBABILITY,
        2 => TWO_HOP_PROBABILITY,
        3 => THREE_HOP_PROBABILITY,
        _ => {
            warn!(
                hops,
                total_weight, "route exceeded the hop tiers; using weight-derived estimate"
            );
            (100.0 - total_weight * 20.0)
                .clamp(FALLBACK_PROBABILITY_MIN, FALLBACK_PROBABILITY_MAX)
        }
    }
}

/// Reconstruct the route from the predecessor map and attach probability.
fn build_route(
    graph: &SocialGraph,
    start: NodeIndex,
    goal: NodeIndex,
    total_weight: f64,
    prev: &FxHashMap<NodeIndex, NodeIndex>,
) -> Route {
    let mut indices = vec![goal];
    let mut current = goal;
    while current != start {
        current = prev[&current];
        indices.push(current);
    }
    indices.reverse();

    let actors: Vec<_> = indices
        .iter()
        .filter_map(|idx| graph.graph.node_weight(*idx))
        .cloned()
        .collect();

    let edges: Vec<EdgeRecord> = indices
        .windows(2)
        .filter_map(|pair| {
            let edge = graph
                .graph
                .edges(pair[0])
                .find(|e| e.target() == pair[1])?;
            let from = graph.graph.node_weight(pair[0])?;
            let to = graph.graph.node_weight(pair[1])?;
            Some(EdgeRecord {
                from: from.id().clone(),
                to: to.id().clone(),
                weight: edge.weight().weight,
            })
        })
        .collect();

    let hops = edges.len();
    Route {
        actors,
        edges,
        total_weight,
        success_probability: success_probability(hops, total_weight),
        computed_at: Utc::now(),
    }
}

/// State for Dijkstra's priority queue.
#[derive(Debug, Clone, Copy)]
struct SearchState {
    cost: f64,
    hops: u32,
    node: NodeIndex,
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl Eq for SearchState {}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other.cost.partial_cmp(&self.cost).unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inroad_core::models::Actor;
    use inroad_core::profile::ActorProfile;

    fn graph(edges: &[(&str, &str, f64)]) -> SocialGraph {
        let mut g = SocialGraph::new();
        for (from, to, weight) in edges {
            g.upsert_actor(Actor::from_profile(ActorProfile::bare(*from)));
            g.upsert_actor(Actor::from_profile(ActorProfile::bare(*to)));
            g.add_connection(&(*from).into(), &(*to).into(), *weight);
        }
        g
    }

    fn route_ids(route: &Route) -> Vec<&str> {
        route.actors.iter().map(|a| a.id().as_str()).collect()
    }

    #[test]
    fn one_hop_route_gets_the_top_tier() {
        // Scenario: {A→B weight 0.3}.
        let g = graph(&[("a", "b", 0.3)]);
        let route = find_weighted_path(&g, &"a".into(), &"b".into(), 3).unwrap();
        assert_eq!(route_ids(&route), ["a", "b"]);
        assert_eq!(route.hops(), 1);
        assert!((route.total_weight - 0.3).abs() < 1e-12);
        assert_eq!(route.success_probability, 85.0);
    }

    #[test]
    fn two_hop_route_is_ordered_and_tiered() {
        // Scenario: {A→C 0.4, C→B 0.5}, no direct A→B edge.
        let g = graph(&[("a", "c", 0.4), ("c", "b", 0.5)]);
        let route = find_weighted_path(&g, &"a".into(), &"b".into(), 3).unwrap();
        assert_eq!(route_ids(&route), ["a", "c", "b"]);
        assert_eq!(route.success_probability, 65.0);
        assert!((route.total_weight - 0.9).abs() < 1e-12);
    }

    #[test]
    fn prefers_the_cheaper_route() {
        let g = graph(&[
            ("a", "b", 0.9),
            ("a", "c", 0.1),
            ("c", "b", 0.1),
        ]);
        let route = find_weighted_path(&g, &"a".into(), &"b".into(), 3).unwrap();
        assert_eq!(route_ids(&route), ["a", "c", "b"]);
    }

    #[test]
    fn hop_cap_prunes_cheaper_but_longer_routes() {
        // Direct edge costs 1.0; the 4-hop chain would cost 0.4 but exceeds
        // the cap, so the expensive direct edge must win.
        let g = graph(&[
            ("a", "b", 1.0),
            ("a", "w", 0.1),
            ("w", "x", 0.1),
            ("x", "y", 0.1),
            ("y", "b", 0.1),
        ]);
        let route = find_weighted_path(&g, &"a".into(), &"b".into(), 3).unwrap();
        assert_eq!(route_ids(&route), ["a", "b"]);
        assert_eq!(route.hops(), 1);
    }

    #[test]
    fn no_route_within_cap_is_none_not_error() {
        let g = graph(&[
            ("a", "w", 0.1),
            ("w", "x", 0.1),
            ("x", "y", 0.1),
            ("y", "b", 0.1),
        ]);
        assert!(find_weighted_path(&g, &"a".into(), &"b".into(), 3).is_none());
        // A wider cap finds it.
        let route = find_weighted_path(&g, &"a".into(), &"b".into(), 4).unwrap();
        assert_eq!(route.hops(), 4);
    }

    #[test]
    fn self_search_finds_nothing() {
        let g = graph(&[("a", "b", 0.5)]);
        assert!(find_weighted_path(&g, &"a".into(), &"a".into(), 3).is_none());
    }

    #[test]
    fn probability_tiers_are_strictly_decreasing() {
        let one = success_probability(1, 0.3);
        let two = success_probability(2, 0.6);
        let three = success_probability(3, 0.9);
        assert_eq!((one, two, three), (85.0, 65.0, 45.0));
        assert!(one > two && two > three);
    }

    #[test]
    fn beyond_tier_probability_stays_in_defensive_bounds() {
        for weight in [0.0, 0.4, 2.0, 10.0] {
            let p = success_probability(4, weight);
            assert!((20.0..=30.0).contains(&p), "p={p} for weight={weight}");
        }
    }
}
