//! Connection strategies — the engine's only output.
//!
//! [`ConnectionStrategy`] is a closed tagged union: a route-backed path
//! strategy or a single-person suggestion. There is deliberately no empty
//! variant, so "the engine found nothing" is unrepresentable at the type
//! level; the selector always degrades to a `Candidate` before it would
//! ever need one.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::route::Route;

/// A strategy backed by a concrete route through the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStrategy {
    pub route: Route,
    /// Calibrated probability the final request is accepted, 0–1.
    pub estimated_acceptance_rate: f64,
    /// Engine confidence in the recommendation, 0–1.
    pub confidence: f64,
    pub low_confidence: bool,
    /// Human-actionable steps, one per intermediate hop plus final outreach.
    pub next_steps: Vec<String>,
}

/// A strategy suggesting a single person instead of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionStrategy {
    pub suggested: Actor,
    pub reasoning: String,
    pub estimated_acceptance_rate: f64,
    pub confidence: f64,
    pub low_confidence: bool,
    pub next_steps: Vec<String>,
}

/// The engine's output: always one of these four, never empty.
///
/// Wire tags are `direct-path`, `mutual-path`, `intermediary`, `candidate`.
/// A persisted `"type": "none"` (legacy corruption) fails deserialization,
/// which is how the cache detects and purges it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ConnectionStrategy {
    /// One hop: the source already borders the target.
    DirectPath(PathStrategy),
    /// Two to three hops through mutual acquaintances.
    MutualPath(PathStrategy),
    /// No route found; a ranked known actor who can bridge to the target.
    Intermediary(SuggestionStrategy),
    /// No route and no bridge; a similarity-based cold suggestion.
    Candidate(SuggestionStrategy),
}

impl ConnectionStrategy {
    /// Wire/display name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DirectPath(_) => "direct-path",
            Self::MutualPath(_) => "mutual-path",
            Self::Intermediary(_) => "intermediary",
            Self::Candidate(_) => "candidate",
        }
    }

    /// The underlying route, for path-typed strategies.
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::DirectPath(p) | Self::MutualPath(p) => Some(&p.route),
            _ => None,
        }
    }

    /// The suggested person, for suggestion-typed strategies.
    pub fn suggested(&self) -> Option<&Actor> {
        match self {
            Self::Intermediary(s) | Self::Candidate(s) => Some(&s.suggested),
            _ => None,
        }
    }

    /// Free-text reasoning, for suggestion-typed strategies.
    pub fn reasoning(&self) -> Option<&str> {
        match self {
            Self::Intermediary(s) | Self::Candidate(s) => Some(s.reasoning.as_str()),
            _ => None,
        }
    }

    pub fn estimated_acceptance_rate(&self) -> f64 {
        match self {
            Self::DirectPath(p) | Self::MutualPath(p) => p.estimated_acceptance_rate,
            Self::Intermediary(s) | Self::Candidate(s) => s.estimated_acceptance_rate,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            Self::DirectPath(p) | Self::MutualPath(p) => p.confidence,
            Self::Intermediary(s) | Self::Candidate(s) => s.confidence,
        }
    }

    pub fn low_confidence(&self) -> bool {
        match self {
            Self::DirectPath(p) | Self::MutualPath(p) => p.low_confidence,
            Self::Intermediary(s) | Self::Candidate(s) => s.low_confidence,
        }
    }

    pub fn next_steps(&self) -> &[String] {
        match self {
            Self::DirectPath(p) | Self::MutualPath(p) => &p.next_steps,
            Self::Intermediary(s) | Self::Candidate(s) => &s.next_steps,
        }
    }
}

impl std::fmt::Display for ConnectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ActorProfile;

    fn candidate() -> ConnectionStrategy {
        ConnectionStrategy::Candidate(SuggestionStrategy {
            suggested: Actor::from_profile(ActorProfile::bare("b")),
            reasoning: "profile similarity only".into(),
            estimated_acceptance_rate: 0.25,
            confidence: 0.4,
            low_confidence: true,
            next_steps: vec!["Engage with their posts".into()],
        })
    }

    #[test]
    fn wire_tag_is_kebab_case() {
        let json = serde_json::to_string(&candidate()).unwrap();
        assert!(json.contains("\"type\":\"candidate\""));
    }

    #[test]
    fn forbidden_none_tag_fails_to_deserialize() {
        let err = serde_json::from_str::<ConnectionStrategy>("{\"type\":\"none\"}");
        assert!(err.is_err());
    }

    #[test]
    fn accessors_cover_all_variants() {
        let c = candidate();
        assert_eq!(c.kind(), "candidate");
        assert!(c.route().is_none());
        assert_eq!(c.suggested().unwrap().id().as_str(), "b");
        assert!(c.low_confidence());
        assert_eq!(c.next_steps().len(), 1);
    }
}
