//! Persistence adapter for the note collection.
//!
//! # Responsibility
//! - Abstract the local durable key-value slot behind `KeyValueSlot`.
//! - Read/write the whole collection as one serialized blob.
//!
//! # Invariants
//! - Loading never fails the caller; bad data reads as an empty collection.
//! - Saving overwrites the full blob; there are no partial writes.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod persistence;
pub mod slot;

pub use persistence::NotePersistence;
pub use slot::{KeyValueSlot, MemorySlot, SqliteSlot};

/// Default versioned storage key for the note blob.
pub const DEFAULT_STORAGE_KEY: &str = "notes.v2";

pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by slot reads/writes and blob encoding.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Serialization(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "note blob encoding failed: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}
