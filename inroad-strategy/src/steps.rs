//! Human-actionable next steps for each strategy shape.

use inroad_core::models::{Actor, Route};

/// Steps for a route-backed strategy: one introduction request per
/// intermediate hop, then the final outreach.
pub fn route_steps(route: &Route) -> Vec<String> {
    let mut steps = Vec::with_capacity(route.hops());
    let actors = &route.actors;
    let target = match actors.last() {
        Some(target) => target,
        None => return steps,
    };

    for (i, hop) in route.intermediaries().iter().enumerate() {
        let next_name = actors
            .get(i + 2)
            .map(Actor::display_name)
            .unwrap_or_else(|| target.display_name());
        steps.push(format!(
            "Ask {} for an introduction to {}",
            hop.display_name(),
            next_name
        ));
    }

    if route.hops() <= 1 {
        steps.push(format!(
            "Send {} a personalized connection request",
            target.display_name()
        ));
    } else {
        steps.push(format!(
            "Reach out to {} once the introduction lands",
            target.display_name()
        ));
    }
    steps
}

/// Steps for an intermediary suggestion: secure the bridge first.
pub fn intermediary_steps(intermediary: &Actor, target: &Actor) -> Vec<String> {
    vec![
        format!(
            "Connect with {} — they can reach {}",
            intermediary.display_name(),
            target.display_name()
        ),
        format!(
            "Once connected, ask {} for an introduction to {}",
            intermediary.display_name(),
            target.display_name()
        ),
        format!(
            "Follow up with {} referencing the introduction",
            target.display_name()
        ),
    ]
}

/// Steps for a cold candidate suggestion: warm the target up first.
pub fn candidate_steps(target: &Actor) -> Vec<String> {
    vec![
        format!(
            "Follow {} and engage with their recent activity",
            target.display_name()
        ),
        format!(
            "Send {} a personalized connection request referencing shared interests",
            target.display_name()
        ),
    ]
}
