//! Match score → traversal weight conversion.

use inroad_core::profile::ActorProfile;

use crate::store::{MAX_EDGE_WEIGHT, MIN_EDGE_WEIGHT};

/// Weight of an edge with no similarity signal at all.
pub const BASE_WEIGHT: f64 = 1.0;

/// Portion of the weight the match score can pull down.
const MATCH_SCORE_PULL: f64 = 0.3;

// Categorical boosts. Each is a discrete signal strong enough to shortcut
// past the similarity blend.
const SAME_RECENT_EMPLOYER_BOOST: f64 = 0.2;
const SHARED_SCHOOL_BOOST: f64 = 0.15;
const RECENT_ACTIVITY_BOOST: f64 = 0.1;

/// Convert a 0–100 match score plus categorical boosts into the traversal
/// weight of the directed edge `a → b`.
///
/// Starts at [`BASE_WEIGHT`] and subtracts `(score/100) * 0.3`, then 0.2 for
/// a shared most-recent employer, 0.15 for any shared school, and 0.1 when
/// the target side has recent visible activity. Clamped into `[0.1, 1.0]`.
/// Lower weight always means a stronger, more traversable tie — the search
/// minimizes weight, so this inversion must hold exactly.
pub fn edge_weight(a: &ActorProfile, b: &ActorProfile, match_score: u8) -> f64 {
    let mut weight = BASE_WEIGHT;
    weight -= (match_score as f64 / 100.0) * MATCH_SCORE_PULL;

    if same_recent_employer(a, b) {
        weight -= SAME_RECENT_EMPLOYER_BOOST;
    }
    if shares_school(a, b) {
        weight -= SHARED_SCHOOL_BOOST;
    }
    if b.has_recent_activity {
        weight -= RECENT_ACTIVITY_BOOST;
    }

    weight.clamp(MIN_EDGE_WEIGHT, MAX_EDGE_WEIGHT)
}

fn same_recent_employer(a: &ActorProfile, b: &ActorProfile) -> bool {
    match (a.current_employer(), b.current_employer()) {
        (Some(x), Some(y)) => {
            let x = x.trim().to_lowercase();
            !x.is_empty() && x == y.trim().to_lowercase()
        }
        _ => false,
    }
}

fn shares_school(a: &ActorProfile, b: &ActorProfile) -> bool {
    a.schools.iter().any(|s| {
        let s = s.trim().to_lowercase();
        !s.is_empty()
            && b.schools
                .iter()
                .any(|t| t.trim().to_lowercase() == s)
    })
}
