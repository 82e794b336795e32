//! Data models shared across the engine crates.

mod actor;
mod cache_entry;
mod route;
mod snapshot;
mod strategy;

pub use actor::{Actor, ActorStatus};
pub use cache_entry::CacheEntry;
pub use route::Route;
pub use snapshot::{EdgeRecord, GraphSnapshot};
pub use strategy::{ConnectionStrategy, PathStrategy, SuggestionStrategy};
