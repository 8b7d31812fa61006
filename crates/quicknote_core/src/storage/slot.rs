//! Key-value slot implementations.
//!
//! # Invariants
//! - `write` replaces the whole value stored under `key`.
//! - `read` returns `Ok(None)` for a key that was never written.

use super::StorageResult;
use crate::db::{open_db, open_db_in_memory};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;

/// Local durable key-value slot holding serialized blobs.
pub trait KeyValueSlot {
    /// Reads the value stored under `key`.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    /// Overwrites the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-process slot backed by a `HashMap`.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    entries: HashMap<String, String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `key` with a raw value, bypassing serialization.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// SQLite-backed slot using the `kv` table.
pub struct SqliteSlot {
    conn: Connection,
}

impl SqliteSlot {
    /// Opens (or creates) the store file at `path`.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens an in-memory store; contents vanish on drop.
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }
}

impl KeyValueSlot for SqliteSlot {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
