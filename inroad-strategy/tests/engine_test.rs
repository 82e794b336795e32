//! End-to-end engine scenarios over the in-memory key-value collaborator.

use chrono::{Duration, Utc};
use inroad_core::models::{Actor, ConnectionStrategy, EdgeRecord, GraphSnapshot};
use inroad_core::profile::ActorProfile;
use inroad_core::{ActorId, EngineConfig, InroadError, KeyValueStore, StrategyError};
use inroad_storage::MemoryStore;
use inroad_strategy::{StrategyCache, StrategyEngine};

fn profile(id: &str, name: &str) -> ActorProfile {
    let mut p = ActorProfile::bare(id);
    p.name = name.to_string();
    p
}

fn seed_snapshot(store: &MemoryStore, nodes: &[&str], edges: &[(&str, &str, f64)]) {
    let snapshot = GraphSnapshot {
        nodes: nodes
            .iter()
            .map(|id| Actor::from_profile(ActorProfile::bare(*id)))
            .collect(),
        edges: edges
            .iter()
            .map(|(from, to, weight)| EdgeRecord {
                from: (*from).into(),
                to: (*to).into(),
                weight: *weight,
            })
            .collect(),
    };
    store
        .set(
            &EngineConfig::default().graph_key,
            &serde_json::to_string(&snapshot).unwrap(),
        )
        .unwrap();
}

#[test]
fn direct_edge_yields_direct_path() {
    inroad_core::tracing::init_tracing();
    let store = MemoryStore::new();
    seed_snapshot(&store, &["a", "b"], &[("a", "b", 0.3)]);
    let engine = StrategyEngine::new(store);

    let rec = engine
        .recommend(&profile("a", "Me"), &profile("b", "Tara"))
        .unwrap();
    assert_eq!(rec.strategy.kind(), "direct-path");
    assert!(!rec.from_cache);
    let route = rec.strategy.route().unwrap();
    assert_eq!(route.hops(), 1);
    assert_eq!(route.success_probability, 85.0);
}

#[test]
fn second_request_is_served_from_cache() {
    let store = MemoryStore::new();
    seed_snapshot(&store, &["a", "b"], &[("a", "b", 0.3)]);
    let engine = StrategyEngine::new(store);

    let first = engine
        .recommend(&profile("a", "Me"), &profile("b", "Tara"))
        .unwrap();
    let second = engine
        .recommend(&profile("a", "Me"), &profile("b", "Tara"))
        .unwrap();
    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert_eq!(second.strategy, first.strategy);
    // Tokens keep increasing across requests, cached or not.
    assert!(second.token > first.token);
    assert_eq!(engine.cache().hits(), 1);
}

#[test]
fn self_target_fails_fast() {
    let engine = StrategyEngine::new(MemoryStore::new());
    let err = engine
        .recommend(&profile("a", "Me"), &profile("a", "Me"))
        .unwrap_err();
    assert!(matches!(
        err,
        InroadError::Strategy(StrategyError::SelfTarget { .. })
    ));
}

#[test]
fn unresolved_source_fails_fast() {
    let engine = StrategyEngine::new(MemoryStore::new());
    let err = engine
        .recommend(&profile("", ""), &profile("b", "Tara"))
        .unwrap_err();
    assert!(matches!(
        err,
        InroadError::Strategy(StrategyError::SourceUnresolved { .. })
    ));
}

#[test]
fn lone_source_and_unknown_target_degrade_to_candidate() {
    // Scenario: the graph knows only the source; the target has never been
    // observed. The engine still answers, with a low-confidence candidate
    // referencing the target alone.
    let store = MemoryStore::new();
    seed_snapshot(&store, &["a"], &[]);
    let engine = StrategyEngine::new(store);

    let rec = engine
        .recommend(&profile("a", "Me"), &profile("b", "Tara"))
        .unwrap();
    assert_eq!(rec.strategy.kind(), "candidate");
    assert!(rec.strategy.low_confidence());
    assert_eq!(rec.strategy.suggested().unwrap().id().as_str(), "b");
    assert!(rec.strategy.estimated_acceptance_rate() < 0.85);
}

#[test]
fn upserts_are_persisted_back_to_storage() {
    let store = std::sync::Arc::new(MemoryStore::new());
    seed_snapshot(&store, &["a"], &[]);
    let engine = StrategyEngine::new(store.clone());
    engine
        .recommend(&profile("a", "Me"), &profile("b", "Tara"))
        .unwrap();

    let raw = store
        .get(&EngineConfig::default().graph_key)
        .unwrap()
        .unwrap();
    let snapshot: GraphSnapshot = serde_json::from_str(&raw).unwrap();
    let ids: Vec<&str> = snapshot.nodes.iter().map(|a| a.id().as_str()).collect();
    assert!(ids.contains(&"a") && ids.contains(&"b"));

    // The viewing user's degree was refreshed during the request.
    let me = snapshot.nodes.iter().find(|a| a.id().as_str() == "a").unwrap();
    assert_eq!(me.degree, Some(0));
    // Profile data written by the upsert survives the round trip.
    assert_eq!(me.profile.name, "Me");
}

#[test]
fn never_none_over_small_graph_sweep() {
    // Every distinct pair over assorted graphs must resolve to one of the
    // four variants (or a declared fail-fast error) — never an empty result.
    let shapes: &[(&[&str], &[(&str, &str, f64)])] = &[
        (&["a", "b"], &[]),
        (&["a", "b"], &[("a", "b", 0.2)]),
        (&["a", "b", "c"], &[("a", "c", 0.4), ("c", "b", 0.5)]),
        (&["a", "b", "c", "d"], &[("a", "c", 0.9), ("d", "b", 0.3)]),
        (
            &["a", "b", "c", "d", "e"],
            &[
                ("a", "c", 0.5),
                ("c", "d", 0.5),
                ("d", "e", 0.5),
                ("e", "b", 0.5),
            ],
        ),
    ];

    for (nodes, edges) in shapes {
        let store = MemoryStore::new();
        seed_snapshot(&store, nodes, edges);
        let engine = StrategyEngine::new(store);
        let rec = engine
            .recommend(&profile("a", "Me"), &profile("b", "Tara"))
            .unwrap();
        assert!(
            matches!(
                rec.strategy,
                ConnectionStrategy::DirectPath(_)
                    | ConnectionStrategy::MutualPath(_)
                    | ConnectionStrategy::Intermediary(_)
                    | ConnectionStrategy::Candidate(_)
            ),
            "graph {nodes:?}/{edges:?} produced no strategy"
        );
    }
}

// --- cache behavior over the shared map key ---

fn cached_candidate(target: &str) -> ConnectionStrategy {
    ConnectionStrategy::Candidate(inroad_core::models::SuggestionStrategy {
        suggested: Actor::from_profile(ActorProfile::bare(target)),
        reasoning: "seeded".into(),
        estimated_acceptance_rate: 0.25,
        confidence: 0.2,
        low_confidence: true,
        next_steps: vec![],
    })
}

#[test]
fn entries_older_than_ttl_are_never_returned() {
    let store = MemoryStore::new();
    let config = EngineConfig::default();
    let cache = StrategyCache::new(&config);
    let target = ActorId::new("b");
    let now = Utc::now();

    // Fresh: hit.
    cache
        .set_at(&store, &target, &cached_candidate("b"), now)
        .unwrap();
    assert!(cache.get_at(&store, &target, now).unwrap().is_some());

    // Exactly 24h old: already expired.
    cache
        .set_at(&store, &target, &cached_candidate("b"), now - Duration::hours(24))
        .unwrap();
    assert!(cache.get_at(&store, &target, now).unwrap().is_none());

    // 24h + 1ms: expired.
    cache
        .set_at(
            &store,
            &target,
            &cached_candidate("b"),
            now - Duration::hours(24) - Duration::milliseconds(1),
        )
        .unwrap();
    assert!(cache.get_at(&store, &target, now).unwrap().is_none());

    // 1ms short of 24h: still live.
    cache
        .set_at(
            &store,
            &target,
            &cached_candidate("b"),
            now - Duration::hours(24) + Duration::milliseconds(1),
        )
        .unwrap();
    assert!(cache.get_at(&store, &target, now).unwrap().is_some());
}

#[test]
fn setting_one_target_preserves_siblings() {
    let store = MemoryStore::new();
    let config = EngineConfig::default();
    let cache = StrategyCache::new(&config);
    let now = Utc::now();

    cache
        .set_at(&store, &ActorId::new("b"), &cached_candidate("b"), now)
        .unwrap();
    cache
        .set_at(&store, &ActorId::new("c"), &cached_candidate("c"), now)
        .unwrap();
    // Overwrite one; the sibling must survive the read-modify-write.
    cache
        .set_at(&store, &ActorId::new("b"), &cached_candidate("b"), now)
        .unwrap();

    assert!(cache.get_at(&store, &ActorId::new("c"), now).unwrap().is_some());
    assert!(cache.get_at(&store, &ActorId::new("b"), now).unwrap().is_some());
}

#[test]
fn corrupt_none_entries_are_purged_without_touching_siblings() {
    let store = MemoryStore::new();
    let config = EngineConfig::default();
    let cache = StrategyCache::new(&config);
    let now = Utc::now();

    cache
        .set_at(&store, &ActorId::new("c"), &cached_candidate("c"), now)
        .unwrap();

    // Hand-write a forbidden legacy entry next to the valid one.
    let raw = store.get(&config.cache_key).unwrap().unwrap();
    let mut map: serde_json::Value = serde_json::from_str(&raw).unwrap();
    map.as_object_mut().unwrap().insert(
        "b".into(),
        serde_json::json!({
            "strategy": {"type": "none"},
            "timestamp": now.to_rfc3339(),
        }),
    );
    store.set(&config.cache_key, &map.to_string()).unwrap();

    // The corrupt entry reads as a miss and disappears.
    assert!(cache.get_at(&store, &ActorId::new("b"), now).unwrap().is_none());
    let raw = store.get(&config.cache_key).unwrap().unwrap();
    assert!(!raw.contains("\"none\""));
    // The sibling is untouched.
    assert!(cache.get_at(&store, &ActorId::new("c"), now).unwrap().is_some());
}
