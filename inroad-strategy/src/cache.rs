//! The TTL strategy cache.
//!
//! Physical storage belongs to the key-value collaborator; this component
//! owns only validation and eviction. All entries live in one JSON map under
//! a single storage key, so every mutation is an explicit read-modify-write
//! transaction: re-read the map, merge one key, write back. A blind
//! whole-map overwrite would silently drop sibling entries written by
//! concurrent requests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use inroad_core::models::{CacheEntry, ConnectionStrategy};
use inroad_core::{ActorId, EngineConfig, InroadResult, KeyValueStore, StrategyError};
use tracing::warn;

/// TTL cache of computed strategies, keyed by target id.
pub struct StrategyCache {
    storage_key: String,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl StrategyCache {
    /// Cache configured from the engine config (key + TTL).
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            storage_key: config.cache_key.clone(),
            ttl: config.cache_ttl(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Fetch a live cached strategy for `target`, purging the entry when it
    /// is expired or corrupt (both count as misses).
    pub fn get(
        &self,
        store: &dyn KeyValueStore,
        target: &ActorId,
    ) -> InroadResult<Option<ConnectionStrategy>> {
        self.get_at(store, target, Utc::now())
    }

    /// Unconditionally record a freshly computed strategy for `target`.
    pub fn set(
        &self,
        store: &dyn KeyValueStore,
        target: &ActorId,
        strategy: &ConnectionStrategy,
    ) -> InroadResult<()> {
        self.set_at(store, target, strategy, Utc::now())
    }

    /// Clock-injectable `get`, used directly by the TTL boundary tests.
    pub fn get_at(
        &self,
        store: &dyn KeyValueStore,
        target: &ActorId,
        now: DateTime<Utc>,
    ) -> InroadResult<Option<ConnectionStrategy>> {
        let mut map = self.read_map(store)?;
        let Some(raw_entry) = map.get(target.as_str()).cloned() else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            return Ok(None);
        };

        match serde_json::from_value::<CacheEntry>(raw_entry) {
            Ok(entry) if !entry.is_expired(now, self.ttl) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(entry.strategy))
            }
            Ok(_) => {
                // Expired: evict lazily, on read.
                map.remove(target.as_str());
                self.write_map(store, &map)?;
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
            Err(decode_err) => {
                // Corrupt (e.g. a legacy `"type": "none"` entry): purge it
                // and report a miss, without touching siblings.
                let err = StrategyError::InvalidCacheEntry {
                    target: target.to_string(),
                    reason: decode_err.to_string(),
                };
                warn!(%target, error = %err, "purging invalid cache entry");
                map.remove(target.as_str());
                self.write_map(store, &map)?;
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    /// Clock-injectable `set`.
    pub fn set_at(
        &self,
        store: &dyn KeyValueStore,
        target: &ActorId,
        strategy: &ConnectionStrategy,
        now: DateTime<Utc>,
    ) -> InroadResult<()> {
        // Read-modify-write: merge this one entry into the freshly re-read
        // map so sibling entries survive.
        let mut map = self.read_map(store)?;
        let entry = CacheEntry::new(strategy.clone(), now);
        map.insert(target.as_str().to_string(), serde_json::to_value(&entry)?);
        self.write_map(store, &map)
    }

    /// Total cache hits.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Total cache misses.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Cache hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let h = self.hits() as f64;
        let m = self.misses() as f64;
        let total = h + m;
        if total == 0.0 {
            0.0
        } else {
            h / total
        }
    }

    /// Entries are kept as raw JSON values so one undecodable sibling never
    /// poisons the whole map; each entry is validated at its own read.
    fn read_map(
        &self,
        store: &dyn KeyValueStore,
    ) -> InroadResult<BTreeMap<String, serde_json::Value>> {
        let Some(raw) = store.get(&self.storage_key)? else {
            return Ok(BTreeMap::new());
        };
        match serde_json::from_str(&raw) {
            Ok(map) => Ok(map),
            Err(err) => {
                warn!(error = %err, "strategy cache map unreadable; resetting");
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_map(
        &self,
        store: &dyn KeyValueStore,
        map: &BTreeMap<String, serde_json::Value>,
    ) -> InroadResult<()> {
        store.set(&self.storage_key, &serde_json::to_string(map)?)
    }
}
