//! # inroad-strategy
//!
//! The strategy-selection layer: turns a source/target pair plus the
//! acquaintance graph into exactly one
//! [`ConnectionStrategy`](inroad_core::models::ConnectionStrategy).
//!
//! ```text
//! StrategyEngine
//! ├── StrategyCache     — TTL map under one storage key, read-modify-write
//! ├── selector          — weighted search → route classification
//! ├── fallback          — similarity ranking → intermediary | candidate
//! ├── steps             — human-actionable next steps
//! └── TokenIssuer       — monotonic tokens for stale-request discard
//! ```
//!
//! The selector degrades, it never gives up: a found route becomes a
//! `direct-path` or `mutual-path`, a missing route becomes an `intermediary`
//! or `candidate` suggestion. The only caller-visible failures are the two
//! fail-fast rejections (self target, empty graph) and the internal
//! invariant guard.

pub mod cache;
pub mod fallback;
pub mod request;
pub mod selector;
pub mod steps;

pub use cache::StrategyCache;
pub use request::{RequestToken, TokenIssuer};
pub use selector::{select_strategy, Recommendation, StrategyEngine};
