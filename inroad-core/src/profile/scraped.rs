//! Full scraped-profile shape produced by the page-scraping collaborator.
//!
//! The scraper hands the engine considerably more than the search core needs
//! (position histories, education records, activity timestamps). The
//! [`ProfileView`] impl is the single place that shape is lowered to the
//! lean [`ActorProfile`].

use serde::{Deserialize, Serialize};

use super::{ActorProfile, ProfileView};
use crate::types::ids::ActorId;

/// Activity within this many days counts as "recent visible activity".
const RECENT_ACTIVITY_WINDOW_DAYS: u32 = 30;

/// One entry of a scraped position history, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedPosition {
    pub title: String,
    pub company: String,
    pub is_current: bool,
}

/// One entry of a scraped education history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedSchool {
    pub school: String,
    pub field_of_study: Option<String>,
}

/// The page scraper's full profile record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapedProfile {
    pub profile_url: String,
    pub full_name: String,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub about: Option<String>,
    #[serde(default)]
    pub positions: Vec<ScrapedPosition>,
    #[serde(default)]
    pub education: Vec<ScrapedSchool>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub avatar_url: Option<String>,
    /// Days since the last visible post or reaction, when the scraper saw one.
    pub last_active_days_ago: Option<u32>,
}

impl ProfileView for ScrapedProfile {
    fn profile(&self) -> ActorProfile {
        ActorProfile {
            id: ActorId::new(self.profile_url.clone()),
            name: self.full_name.clone(),
            headline: self.headline.clone(),
            location: self.location.clone(),
            skills: self.skills.clone(),
            employers: self.positions.iter().map(|p| p.company.clone()).collect(),
            schools: self.education.iter().map(|s| s.school.clone()).collect(),
            avatar_url: self.avatar_url.clone(),
            has_recent_activity: self
                .last_active_days_ago
                .is_some_and(|days| days <= RECENT_ACTIVITY_WINDOW_DAYS),
        }
    }

    fn actor_id(&self) -> ActorId {
        ActorId::new(self.profile_url.clone())
    }
}
