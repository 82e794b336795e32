//! The external key-value storage collaborator.

use std::sync::Arc;

use crate::errors::InroadResult;

/// Key-value storage backing both the persisted graph snapshot and the
/// strategy cache.
///
/// Values are opaque strings (the engine stores JSON). Implementations own
/// durability and locking; the engine owns what is stored under which key
/// and performs read-modify-write sequences where entries share a key.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> InroadResult<Option<String>>;

    /// Store `value` under `key`, overwriting any prior value.
    fn set(&self, key: &str, value: &str) -> InroadResult<()>;
}

/// Blanket impl: `Arc<T>` implements `KeyValueStore` by delegating to the
/// inner `T`, so shared handles pass anywhere `&dyn KeyValueStore` is needed.
impl<T: KeyValueStore> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> InroadResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> InroadResult<()> {
        (**self).set(key, value)
    }
}
