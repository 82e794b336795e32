//! Weighted routes through the acquaintance graph.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::snapshot::EdgeRecord;

/// A concrete route from source to target, produced by the weighted search.
///
/// `actors` runs source…target inclusive; `edges` is the parallel directed
/// edge sequence (`edges.len() == actors.len() - 1`). `success_probability`
/// is the hop-tiered 0–100 calibration, not a function of `total_weight`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub actors: Vec<Actor>,
    pub edges: Vec<EdgeRecord>,
    pub total_weight: f64,
    pub success_probability: f64,
    pub computed_at: DateTime<Utc>,
}

impl Route {
    /// Number of directed edge traversals in this route.
    pub fn hops(&self) -> usize {
        self.edges.len()
    }

    /// Actors strictly between source and target, in traversal order.
    pub fn intermediaries(&self) -> &[Actor] {
        if self.actors.len() <= 2 {
            &[]
        } else {
            &self.actors[1..self.actors.len() - 1]
        }
    }

    /// Mean edge weight along the route; lower means stronger ties.
    pub fn mean_edge_weight(&self) -> f64 {
        if self.edges.is_empty() {
            0.0
        } else {
            self.total_weight / self.edges.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ActorProfile;

    fn route_of(ids: &[&str], weights: &[f64]) -> Route {
        Route {
            actors: ids
                .iter()
                .map(|id| Actor::from_profile(ActorProfile::bare(*id)))
                .collect(),
            edges: ids
                .windows(2)
                .zip(weights)
                .map(|(pair, w)| EdgeRecord {
                    from: pair[0].into(),
                    to: pair[1].into(),
                    weight: *w,
                })
                .collect(),
            total_weight: weights.iter().sum(),
            success_probability: 65.0,
            computed_at: Utc::now(),
        }
    }

    #[test]
    fn hops_and_intermediaries() {
        let direct = route_of(&["a", "b"], &[0.3]);
        assert_eq!(direct.hops(), 1);
        assert!(direct.intermediaries().is_empty());

        let two_hop = route_of(&["a", "c", "b"], &[0.4, 0.5]);
        assert_eq!(two_hop.hops(), 2);
        assert_eq!(two_hop.intermediaries().len(), 1);
        assert_eq!(two_hop.intermediaries()[0].id().as_str(), "c");
    }

    #[test]
    fn mean_edge_weight_is_total_over_hops() {
        let r = route_of(&["a", "c", "b"], &[0.4, 0.6]);
        assert!((r.mean_edge_weight() - 0.5).abs() < 1e-12);
    }
}
