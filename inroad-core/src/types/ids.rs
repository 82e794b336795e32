//! Actor identifiers.
//!
//! An [`ActorId`] is the canonical identity of a node in the acquaintance
//! graph — typically the canonical profile URL or handle produced by the
//! upstream scraper. Identity is the id; all other actor attributes are
//! mutable and replaced wholesale on re-upsert.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique actor identifier (canonical profile URL or handle).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    /// Create an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id carries no identity at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ActorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_through_serde() {
        let id = ActorId::new("https://example.com/in/alice");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"https://example.com/in/alice\"");
        let back: ActorId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn empty_id_is_detectable() {
        assert!(ActorId::new("").is_empty());
        assert!(!ActorId::new("x").is_empty());
    }
}
