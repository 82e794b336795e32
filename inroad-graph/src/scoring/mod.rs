//! The similarity / edge-weight model.
//!
//! [`match_score`] grades how alike two profiles are on a 0–100 scale;
//! [`edge_weight`] converts that score plus categorical boosts into the
//! inverse-strength traversal cost the weighted search minimizes.

mod edge_weight;
mod match_score;

pub use edge_weight::{edge_weight, BASE_WEIGHT};
pub use match_score::match_score;
