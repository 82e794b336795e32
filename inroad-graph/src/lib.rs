//! # inroad-graph
//!
//! The acquaintance graph and everything that walks it.
//!
//! ```text
//! SocialGraph (petgraph StableGraph + id index)
//! ├── traversal::bfs       — bidirectional existence probe, hop distances
//! ├── traversal::dijkstra  — hop-capped weighted search + probability tiers
//! └── scoring              — 0–100 match score, [0.1, 1.0] edge weight
//! ```
//!
//! Graphs are small (hundreds to low thousands of locally observed actors),
//! so every operation here is synchronous and allocation-light. Edge weights
//! are inverse strengths: the weighted search minimizes cost, so a lower
//! weight always means a stronger, more traversable tie.

pub mod scoring;
pub mod snapshot;
pub mod store;
pub mod traversal;

pub use store::{GraphStats, SocialGraph};
