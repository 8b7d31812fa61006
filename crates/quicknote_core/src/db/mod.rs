//! SQLite file backing the note key-value slot.
//!
//! # Responsibility
//! - Open store files and bring their schema up to date.
//! - Report schema problems distinctly from plain SQLite failures.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`.
//! - The `kv` table is only touched after migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure opening or migrating a store file.
#[derive(Debug)]
pub enum DbError {
    /// Connection, pragma or statement failure outside a migration step.
    Sqlite(rusqlite::Error),
    /// The file was written by a build with a newer schema.
    SchemaTooNew { found: u32, supported: u32 },
    /// A migration step failed; the whole upgrade was rolled back.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "note store: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "note store schema v{found} is newer than this build (v{supported})"
            ),
            Self::Migration { version, source } => {
                write!(f, "note store migration to v{version} failed: {source}")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) | Self::Migration { source: err, .. } => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
