//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec optimized for route hops (the hop cap keeps these <4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;

/// SmallVec optimized for next-step lists (usually <8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
