//! Cached strategy entries.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::strategy::ConnectionStrategy;

/// One cached strategy, keyed externally by target id.
///
/// An entry is live while `now - timestamp < ttl`; at exactly the TTL
/// boundary it is already expired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub strategy: ConnectionStrategy,
    pub timestamp: DateTime<Utc>,
}

impl CacheEntry {
    /// Stamp a freshly computed strategy.
    pub fn new(strategy: ConnectionStrategy, timestamp: DateTime<Utc>) -> Self {
        Self {
            strategy,
            timestamp,
        }
    }

    /// True when the entry has outlived `ttl` as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.timestamp >= ttl
    }
}
