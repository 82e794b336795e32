//! SQLite-backed key-value store.

use std::path::Path;
use std::sync::Mutex;

use inroad_core::{InroadResult, KeyValueStore, StorageError};
use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

/// Durable key-value store over a single `kv` table.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (and initialize) the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> InroadResult<Self> {
        let conn = Connection::open(path.as_ref()).map_err(backend_err)?;
        Self::init(conn)
    }

    /// Fully in-memory database, for tests.
    pub fn in_memory() -> InroadResult<Self> {
        let conn = Connection::open_in_memory().map_err(backend_err)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> InroadResult<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
        .map_err(backend_err)?;
        debug!("sqlite kv store ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> InroadResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            StorageError::LockPoisoned {
                message: e.to_string(),
            }
            .into()
        })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> InroadResult<Option<String>> {
        let conn = self.lock()?;
        conn.query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()
        .map_err(backend_err)
    }

    fn set(&self, key: &str, value: &str) -> InroadResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )
        .map_err(backend_err)?;
        Ok(())
    }
}

fn backend_err(err: rusqlite::Error) -> inroad_core::InroadError {
    StorageError::Backend {
        message: err.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let store = SqliteStore::in_memory().unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v2".to_string()));
    }

    #[test]
    fn values_survive_reopening_a_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inroad.db");
        {
            let store = SqliteStore::open(&path).unwrap();
            store.set("snapshot", "{\"nodes\":[],\"edges\":[]}").unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(
            store.get("snapshot").unwrap(),
            Some("{\"nodes\":[],\"edges\":[]}".to_string())
        );
    }
}
