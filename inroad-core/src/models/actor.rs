//! Actor nodes and relationship status.

use serde::{Deserialize, Serialize};

use crate::profile::ActorProfile;
use crate::types::ids::ActorId;

/// Relationship status between the viewing user and an actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActorStatus {
    #[default]
    NotContacted,
    Contacted,
    Connected,
}

impl ActorStatus {
    /// Wire/display name of the status.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotContacted => "not-contacted",
            Self::Contacted => "contacted",
            Self::Connected => "connected",
        }
    }
}

impl std::fmt::Display for ActorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A node in the acquaintance graph.
///
/// Identity is `profile.id`; every other attribute is replaced wholesale on
/// re-upsert (last write wins). `degree` is the hop distance from the
/// viewing user (0 for self, `None` until computed or unreachable);
/// `match_score` caches the 0–100 similarity against the viewing user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub profile: ActorProfile,
    #[serde(default)]
    pub status: ActorStatus,
    #[serde(default)]
    pub degree: Option<u32>,
    #[serde(default)]
    pub match_score: u8,
}

impl Actor {
    /// Wrap a lean profile into a fresh, not-yet-contacted actor.
    pub fn from_profile(profile: ActorProfile) -> Self {
        Self {
            profile,
            status: ActorStatus::NotContacted,
            degree: None,
            match_score: 0,
        }
    }

    /// The actor's identity.
    pub fn id(&self) -> &ActorId {
        &self.profile.id
    }

    /// Display name, falling back to the id for never-scraped actors.
    pub fn display_name(&self) -> &str {
        if self.profile.name.is_empty() {
            self.profile.id.as_str()
        } else {
            &self.profile.name
        }
    }
}
