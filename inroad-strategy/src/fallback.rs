//! Graceful degradation when no route exists.
//!
//! Ranks every known actor by similarity to the target. The top-ranked
//! actor becomes an intermediary suggestion when it clears the configured
//! score floor and is observed (even indirectly) to reach the target;
//! otherwise the engine degrades once more to a candidate suggestion scored
//! against the target alone. There is no further degradation level — a
//! candidate is always constructible.

use inroad_core::models::{Actor, ConnectionStrategy, SuggestionStrategy};
use inroad_core::{ActorId, EngineConfig, InroadResult, StrategyError};
use inroad_graph::scoring::match_score;
use inroad_graph::traversal::is_reachable;
use inroad_graph::SocialGraph;
use tracing::{debug, error};

use crate::steps;

/// Build the fallback suggestion for a pair with no route.
pub fn build_fallback(
    graph: &SocialGraph,
    source_id: &ActorId,
    target_id: &ActorId,
    config: &EngineConfig,
) -> InroadResult<ConnectionStrategy> {
    // The selector upserts both endpoints before searching, so a missing
    // target here is a logic defect, not a caller mistake.
    let target = graph.get(target_id).cloned().ok_or_else(|| {
        let err = StrategyError::InternalInvariant {
            message: format!("fallback invoked for unknown target {target_id}"),
        };
        error!(%target_id, "strategy selector internal invariant violated");
        err
    })?;

    if let Some((intermediary, score)) = best_intermediary(graph, source_id, target_id, config) {
        debug!(
            intermediary = %intermediary.id(),
            score,
            "no route found; proposing ranked intermediary"
        );
        let next_steps = steps::intermediary_steps(&intermediary, &target);
        let reasoning = intermediary_reasoning(graph, &intermediary, &target, score);
        return Ok(ConnectionStrategy::Intermediary(SuggestionStrategy {
            suggested: intermediary,
            reasoning,
            estimated_acceptance_rate: config.intermediary_acceptance,
            confidence: f64::from(score) / 100.0,
            low_confidence: false,
            next_steps,
        }));
    }

    // Last level: suggest approaching the target directly, scored against
    // the target alone. Deliberately conservative and flagged low-confidence.
    let source_profile = graph.get(source_id).map(|a| a.profile.clone());
    let mutuals = graph.mutual_connections(source_id, target_id).len();
    let score = source_profile
        .map(|p| match_score(&p, &target.profile, mutuals))
        .unwrap_or(0);

    debug!(%target_id, score, "no intermediary cleared the floor; degrading to candidate");
    let next_steps = steps::candidate_steps(&target);
    let reasoning = format!(
        "No existing route through the graph reaches {}; suggesting a direct approach based on \
         profile similarity (match score {score})",
        target.display_name()
    );
    Ok(ConnectionStrategy::Candidate(SuggestionStrategy {
        suggested: target,
        reasoning,
        estimated_acceptance_rate: config.candidate_acceptance,
        confidence: f64::from(score) / 100.0,
        low_confidence: true,
        next_steps,
    }))
}

/// The highest-scoring known actor that clears the floor and can reach the
/// target. Ties rank by id for determinism.
fn best_intermediary(
    graph: &SocialGraph,
    source_id: &ActorId,
    target_id: &ActorId,
    config: &EngineConfig,
) -> Option<(Actor, u8)> {
    let target_profile = graph.get(target_id)?.profile.clone();

    let mut ranked: Vec<(Actor, u8)> = graph
        .actors()
        .filter(|a| a.id() != source_id && a.id() != target_id)
        .map(|a| {
            let mutuals = graph.mutual_connections(a.id(), target_id).len();
            let score = match_score(&a.profile, &target_profile, mutuals);
            (a.clone(), score)
        })
        .collect();
    ranked.sort_by(|(a, sa), (b, sb)| sb.cmp(sa).then_with(|| a.id().cmp(b.id())));

    ranked
        .into_iter()
        .filter(|(_, score)| *score >= config.min_intermediary_score)
        .find(|(actor, _)| is_reachable(graph, actor.id(), target_id))
}

fn intermediary_reasoning(
    graph: &SocialGraph,
    intermediary: &Actor,
    target: &Actor,
    score: u8,
) -> String {
    let mutuals = graph
        .mutual_connections(intermediary.id(), target.id())
        .len();
    if mutuals > 0 {
        format!(
            "{} matches {} at score {score} and shares {mutuals} mutual connection(s) with them",
            intermediary.display_name(),
            target.display_name()
        )
    } else {
        format!(
            "{} matches {} at score {score} and is observed to reach them through the graph",
            intermediary.display_name(),
            target.display_name()
        )
    }
}
