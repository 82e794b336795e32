//! Profile similarity scoring.

use inroad_core::profile::ActorProfile;

// Component caps. They sum to the theoretical maximum of 100, so the total
// is already a percentage.
const MUTUAL_CAP: u32 = 40;
const SCHOOL_CAP: u32 = 20;
const EMPLOYER_CAP: u32 = 20;
const SKILL_CAP: u32 = 10;

const POINTS_PER_MUTUAL: u32 = 4;
/// Overlap points are counted once per endpoint of the pair, so a single
/// shared school or employer already contributes from both sides.
const POINTS_PER_SCHOOL: u32 = 10;
const POINTS_PER_EMPLOYER: u32 = 10;
const POINTS_PER_SKILL: u32 = 2;

const LOCATION_EXACT: u32 = 10;
const LOCATION_PARTIAL: u32 = 5;

/// Similarity between two profiles as a 0–100 percentage.
///
/// Five independently capped components: mutual connections (≤40), shared
/// schools (≤20), shared employers (≤20), shared skills (≤10), and location
/// match (≤10). `mutuals` is the mutual-connection count observed in the
/// graph, supplied by the caller so this model stays graph-agnostic.
pub fn match_score(a: &ActorProfile, b: &ActorProfile, mutuals: usize) -> u8 {
    let mutual_points = (mutuals as u32 * POINTS_PER_MUTUAL).min(MUTUAL_CAP);

    let school_points =
        (overlap(&a.schools, &b.schools) * 2 * POINTS_PER_SCHOOL).min(SCHOOL_CAP);
    let employer_points =
        (overlap(&a.employers, &b.employers) * 2 * POINTS_PER_EMPLOYER).min(EMPLOYER_CAP);
    let skill_points = (overlap(&a.skills, &b.skills) * POINTS_PER_SKILL).min(SKILL_CAP);

    let total =
        mutual_points + school_points + employer_points + skill_points + location_points(a, b);
    total.min(100) as u8
}

/// Count of distinct entries present in both lists, case-insensitively.
fn overlap(a: &[String], b: &[String]) -> u32 {
    let lowered: Vec<String> = b.iter().map(|s| s.trim().to_lowercase()).collect();
    let mut seen: Vec<String> = Vec::new();
    for item in a {
        let needle = item.trim().to_lowercase();
        if needle.is_empty() || seen.contains(&needle) {
            continue;
        }
        if lowered.contains(&needle) {
            seen.push(needle);
        }
    }
    seen.len() as u32
}

/// 10 for an exact location match, 5 when one side contains the other, 0
/// otherwise. Empty locations never match.
fn location_points(a: &ActorProfile, b: &ActorProfile) -> u32 {
    let (Some(loc_a), Some(loc_b)) = (&a.location, &b.location) else {
        return 0;
    };
    let loc_a = loc_a.trim().to_lowercase();
    let loc_b = loc_b.trim().to_lowercase();
    if loc_a.is_empty() || loc_b.is_empty() {
        return 0;
    }
    if loc_a == loc_b {
        LOCATION_EXACT
    } else if loc_a.contains(&loc_b) || loc_b.contains(&loc_a) {
        LOCATION_PARTIAL
    } else {
        0
    }
}
