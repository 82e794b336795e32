//! Actor profiles and the upstream-format conversion seam.
//!
//! The graph and search core depend only on the lean [`ActorProfile`] shape.
//! Every upstream producer of profile data implements [`ProfileView`] once
//! for its own format; [`ScrapedProfile`] is the implementation for the
//! page-scraper collaborator's full shape.

mod scraped;

pub use scraped::{ScrapedPosition, ScrapedProfile, ScrapedSchool};

use serde::{Deserialize, Serialize};

use crate::types::ids::ActorId;

/// Lean actor profile — the only profile shape the engine operates on.
///
/// Field conventions: `employers` is ordered most recent first; `location`
/// is free-text as scraped; empty collections are valid and score zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorProfile {
    pub id: ActorId,
    pub name: String,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    /// Employers, most recent first.
    pub employers: Vec<String>,
    pub schools: Vec<String>,
    pub avatar_url: Option<String>,
    /// Target-side signal: visible activity within the recency window.
    pub has_recent_activity: bool,
}

impl ActorProfile {
    /// Minimal profile carrying only an identity, for actors observed in the
    /// graph but never scraped in full.
    pub fn bare(id: impl Into<ActorId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Most recent employer, if any.
    pub fn current_employer(&self) -> Option<&str> {
        self.employers.first().map(String::as_str)
    }
}

/// Conversion seam between upstream profile formats and the lean shape.
///
/// Implemented once per source format; the engine accepts any `ProfileView`
/// and immediately lowers it, so no other component ever sees an upstream
/// shape.
pub trait ProfileView {
    /// Lower this view into the lean profile shape.
    fn profile(&self) -> ActorProfile;

    /// The actor identity this view describes.
    fn actor_id(&self) -> ActorId {
        self.profile().id
    }
}

/// The lean shape trivially views itself.
impl ProfileView for ActorProfile {
    fn profile(&self) -> ActorProfile {
        self.clone()
    }

    fn actor_id(&self) -> ActorId {
        self.id.clone()
    }
}
