//! Engine configuration.

pub mod defaults;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Tunables for the pathfinding and strategy-selection engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hard hop budget for the weighted search.
    pub max_hops: u32,
    /// Strategy cache time-to-live, in hours.
    pub cache_ttl_hours: i64,
    /// Minimum match score (0–100) a ranked actor needs to be proposed as an
    /// intermediary; below it the engine degrades to a candidate suggestion.
    pub min_intermediary_score: u8,
    /// Acceptance rate attached to intermediary suggestions.
    pub intermediary_acceptance: f64,
    /// Acceptance rate attached to candidate suggestions.
    pub candidate_acceptance: f64,
    /// Storage key for the persisted graph snapshot.
    pub graph_key: String,
    /// Storage key for the strategy cache map.
    pub cache_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_hops: defaults::DEFAULT_MAX_HOPS,
            cache_ttl_hours: defaults::DEFAULT_CACHE_TTL_HOURS,
            min_intermediary_score: defaults::DEFAULT_MIN_INTERMEDIARY_SCORE,
            intermediary_acceptance: defaults::DEFAULT_INTERMEDIARY_ACCEPTANCE,
            candidate_acceptance: defaults::DEFAULT_CANDIDATE_ACCEPTANCE,
            graph_key: defaults::GRAPH_SNAPSHOT_KEY.to_string(),
            cache_key: defaults::STRATEGY_CACHE_KEY.to_string(),
        }
    }
}

impl EngineConfig {
    /// Cache TTL as a duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::hours(self.cache_ttl_hours)
    }
}
