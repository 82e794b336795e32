//! Strategy selection and per-request orchestration.
//!
//! [`select_strategy`] is the pure selection core over an already-built
//! graph. [`StrategyEngine`] wraps it with the per-request lifecycle:
//! import a fresh snapshot from the key-value collaborator, defensively
//! upsert both actors, persist the snapshot back, consult the cache, search,
//! cache the result. Each request operates on its own imported graph, so
//! concurrent requests can never corrupt each other's view.

use inroad_core::models::{Actor, ConnectionStrategy, PathStrategy, Route};
use inroad_core::profile::ProfileView;
use inroad_core::{
    ActorId, EngineConfig, GraphError, InroadResult, KeyValueStore, StrategyError,
};
use inroad_graph::scoring::match_score;
use inroad_graph::traversal::find_weighted_path;
use inroad_graph::SocialGraph;
use tracing::{debug, info};

use crate::cache::StrategyCache;
use crate::fallback::build_fallback;
use crate::request::{RequestToken, TokenIssuer};
use crate::steps;

/// A 3-hop route's tier sits below 50%; flag it so the UI can temper copy.
const LOW_CONFIDENCE_ACCEPTANCE: f64 = 0.5;

/// One engine answer: the strategy plus the token that scopes it.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub token: RequestToken,
    pub strategy: ConnectionStrategy,
    pub from_cache: bool,
}

/// Select a strategy for `source → target` over an already-built graph.
///
/// Both actors must already be present (the engine's upsert step guarantees
/// this). Never produces an empty result: a found route classifies as
/// `direct-path`/`mutual-path`, anything else degrades through the fallback
/// ranking. The only errors are the self-target rejection and missing
/// endpoints.
pub fn select_strategy(
    graph: &SocialGraph,
    source_id: &ActorId,
    target_id: &ActorId,
    config: &EngineConfig,
) -> InroadResult<ConnectionStrategy> {
    if source_id == target_id {
        return Err(StrategyError::SelfTarget {
            id: source_id.clone(),
        }
        .into());
    }
    for id in [source_id, target_id] {
        if graph.get(id).is_none() {
            return Err(GraphError::UnknownActor { id: id.clone() }.into());
        }
    }

    match find_weighted_path(graph, source_id, target_id, config.max_hops) {
        Some(route) => {
            debug!(
                hops = route.hops(),
                probability = route.success_probability,
                "weighted search found a route"
            );
            Ok(classify_route(route))
        }
        None => {
            debug!(max_hops = config.max_hops, "no route within the hop budget");
            build_fallback(graph, source_id, target_id, config)
        }
    }
}

/// Wrap a found route into its strategy variant.
fn classify_route(route: Route) -> ConnectionStrategy {
    let estimated_acceptance_rate = route.success_probability / 100.0;
    // Strong ties (low mean weight) mean high engine confidence.
    let confidence = (1.0 - route.mean_edge_weight()).clamp(0.0, 1.0);
    let strategy = PathStrategy {
        next_steps: steps::route_steps(&route),
        low_confidence: estimated_acceptance_rate < LOW_CONFIDENCE_ACCEPTANCE,
        estimated_acceptance_rate,
        confidence,
        route,
    };
    if strategy.route.hops() <= 1 {
        ConnectionStrategy::DirectPath(strategy)
    } else {
        ConnectionStrategy::MutualPath(strategy)
    }
}

/// The orchestrating engine over a key-value storage collaborator.
pub struct StrategyEngine<S: KeyValueStore> {
    store: S,
    cache: StrategyCache,
    config: EngineConfig,
    tokens: TokenIssuer,
}

impl<S: KeyValueStore> StrategyEngine<S> {
    /// Engine with default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        let cache = StrategyCache::new(&config);
        Self {
            store,
            cache,
            config,
            tokens: TokenIssuer::new(),
        }
    }

    /// The token issuer, for callers that discard stale results.
    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    /// Cache statistics handle.
    pub fn cache(&self) -> &StrategyCache {
        &self.cache
    }

    /// Compute (or re-serve) the connection strategy for `source → target`.
    ///
    /// Fail-fast rejections: an unresolvable source view, a self target,
    /// and a graph that still holds fewer than two actors after the
    /// defensive upserts. Everything else resolves to a strategy.
    pub fn recommend(
        &self,
        source: &dyn ProfileView,
        target: &dyn ProfileView,
    ) -> InroadResult<Recommendation> {
        let token = self.tokens.issue();

        let source_profile = source.profile();
        let target_profile = target.profile();
        if source_profile.id.is_empty() {
            return Err(StrategyError::SourceUnresolved {
                reason: "source profile carries no id".into(),
            }
            .into());
        }
        let source_id = source_profile.id.clone();
        let target_id = target_profile.id.clone();
        if source_id == target_id {
            return Err(StrategyError::SelfTarget { id: source_id }.into());
        }

        debug!(%token, %source_id, %target_id, "resolving actors");
        let mut graph = self.load_graph()?;

        // Defensive upserts: replace profile data wholesale, but carry over
        // previously observed status/degree so a refresh does not reset the
        // relationship.
        for profile in [source_profile, target_profile] {
            let mut actor = Actor::from_profile(profile);
            if let Some(existing) = graph.get(actor.id()) {
                actor.status = existing.status;
                actor.degree = existing.degree;
                actor.match_score = existing.match_score;
            }
            graph.upsert_actor(actor);
        }

        // Refresh the target's cached similarity against the viewing user.
        let mutuals = graph.mutual_connections(&source_id, &target_id).len();
        let score = {
            let source_actor = graph.get(&source_id).cloned();
            let target_actor = graph.get(&target_id).cloned();
            match (source_actor, target_actor) {
                (Some(s), Some(t)) => match_score(&s.profile, &t.profile, mutuals),
                _ => 0,
            }
        };
        if let Some(mut target_actor) = graph.get(&target_id).cloned() {
            target_actor.match_score = score;
            graph.upsert_actor(target_actor);
        }
        graph.recompute_degrees(&source_id);
        self.persist_graph(&graph)?;

        if graph.actor_count() < 2 {
            return Err(StrategyError::EmptyGraph {
                actor_count: graph.actor_count(),
            }
            .into());
        }

        debug!(%token, actors = graph.actor_count(), "graph ready");
        if let Some(strategy) = self.cache.get(&self.store, &target_id)? {
            info!(%token, kind = strategy.kind(), "serving cached strategy");
            return Ok(Recommendation {
                token,
                strategy,
                from_cache: true,
            });
        }

        debug!(%token, "searching");
        let strategy = select_strategy(&graph, &source_id, &target_id, &self.config)?;
        self.cache.set(&self.store, &target_id, &strategy)?;

        info!(%token, kind = strategy.kind(), "strategy ready");
        Ok(Recommendation {
            token,
            strategy,
            from_cache: false,
        })
    }

    /// Import this request's own graph snapshot from storage.
    fn load_graph(&self) -> InroadResult<SocialGraph> {
        match self.store.get(&self.config.graph_key)? {
            Some(raw) => SocialGraph::from_json(&raw),
            None => Ok(SocialGraph::new()),
        }
    }

    /// Persist the refreshed snapshot after upserts.
    fn persist_graph(&self, graph: &SocialGraph) -> InroadResult<()> {
        self.store.set(&self.config.graph_key, &graph.to_json()?)
    }
}
