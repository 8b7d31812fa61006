//! Blob-level load/save of the note collection.
//!
//! # Responsibility
//! - Serialize the ordered collection to one JSON array under one key.
//! - Degrade every read failure to an empty collection.
//!
//! # Invariants
//! - `load` never returns an error and never panics.
//! - A loaded collection never contains two notes with the same id.
//! - Loaded notes satisfy the `Note` invariants (see `Note::normalize`).
//! - Note text is never written to logs; only ids, counts and sizes.

use super::{KeyValueSlot, StorageResult, DEFAULT_STORAGE_KEY};
use crate::model::note::Note;
use log::{debug, error, warn};
use std::collections::HashSet;

/// Persistence adapter over a key-value slot.
pub struct NotePersistence<S: KeyValueSlot> {
    slot: S,
    key: String,
}

impl<S: KeyValueSlot> NotePersistence<S> {
    /// Creates an adapter writing under [`DEFAULT_STORAGE_KEY`].
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, DEFAULT_STORAGE_KEY)
    }

    /// Creates an adapter writing under a caller-chosen key.
    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    /// Storage key this adapter reads and writes.
    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    /// Read access to the underlying slot.
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Loads the stored collection.
    ///
    /// Absent key, slot read failure, and malformed JSON all yield an empty
    /// collection. Later records repeating an earlier id are dropped.
    pub fn load(&self) -> Vec<Note> {
        let raw = match self.slot.read(self.key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(
                    "event=notes_load module=storage status=empty key={}",
                    self.key
                );
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=storage status=error key={} error_code=slot_read_failed error={}",
                    self.key, err
                );
                return Vec::new();
            }
        };

        let parsed: Vec<Note> = match serde_json::from_str(raw.as_str()) {
            Ok(notes) => notes,
            Err(err) => {
                warn!(
                    "event=notes_load module=storage status=error key={} error_code=blob_malformed bytes={} error={}",
                    self.key,
                    raw.len(),
                    err
                );
                return Vec::new();
            }
        };

        let total = parsed.len();
        let mut seen = HashSet::with_capacity(total);
        let mut repaired = 0usize;
        let notes: Vec<Note> = parsed
            .into_iter()
            .filter(|note| seen.insert(note.id))
            .map(|mut note| {
                if note.normalize() {
                    repaired += 1;
                }
                note
            })
            .collect();
        if notes.len() != total || repaired > 0 {
            warn!(
                "event=notes_load module=storage status=repaired key={} dropped_duplicates={} normalized={}",
                self.key,
                total - notes.len(),
                repaired
            );
        }

        debug!(
            "event=notes_load module=storage status=ok key={} count={}",
            self.key,
            notes.len()
        );
        notes
    }

    /// Serializes `notes` and overwrites the stored blob.
    ///
    /// Failures are logged and swallowed; use [`Self::try_save`] to observe them.
    pub fn save(&mut self, notes: &[Note]) {
        if let Err(err) = self.try_save(notes) {
            error!(
                "event=notes_save module=storage status=error key={} count={} error={}",
                self.key,
                notes.len(),
                err
            );
        }
    }

    /// Serializes `notes` and overwrites the stored blob, reporting failures.
    pub fn try_save(&mut self, notes: &[Note]) -> StorageResult<()> {
        let blob = serde_json::to_string(notes)?;
        self.slot.write(self.key.as_str(), blob.as_str())?;
        debug!(
            "event=notes_save module=storage status=ok key={} count={} bytes={}",
            self.key,
            notes.len(),
            blob.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NotePersistence;
    use crate::model::note::Note;
    use crate::storage::{KeyValueSlot, MemorySlot, StorageError, StorageResult};
    use chrono::Utc;

    struct BrokenSlot;

    impl KeyValueSlot for BrokenSlot {
        fn read(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Db(crate::db::DbError::Sqlite(
                rusqlite::Error::QueryReturnedNoRows,
            )))
        }

        fn write(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Db(crate::db::DbError::Sqlite(
                rusqlite::Error::QueryReturnedNoRows,
            )))
        }
    }

    #[test]
    fn load_degrades_to_empty_on_bad_blobs() {
        for raw in ["", "not json", "{\"id\":1}", "null", "[{\"title\":\"x\"}]"] {
            let persistence = NotePersistence::new(MemorySlot::new().with_entry("notes.v2", raw));
            assert!(persistence.load().is_empty(), "blob `{raw}` should load empty");
        }
    }

    #[test]
    fn load_degrades_to_empty_on_slot_failure_and_save_is_silent() {
        let mut persistence = NotePersistence::new(BrokenSlot);
        assert!(persistence.load().is_empty());
        persistence.save(&[Note::new(Utc::now())]);
        assert!(persistence.try_save(&[]).is_err());
    }

    #[test]
    fn load_drops_repeated_ids() {
        let note = Note::new(Utc::now());
        let mut copy = note.clone();
        copy.title = "shadow".to_string();
        let blob = serde_json::to_string(&vec![note.clone(), copy]).unwrap();

        let persistence = NotePersistence::new(MemorySlot::new().with_entry("notes.v2", blob));
        assert_eq!(persistence.load(), vec![note]);
    }

    #[test]
    fn load_repairs_records_breaking_note_invariants() {
        let raw = r#"[{"id":"0b6e8a52-3c1f-4d7e-9a2b-5c4d3e2f1a00",
            "createdAt":"2024-03-02T10:00:00Z","updatedAt":"2024-03-01T10:00:00Z",
            "tags":["","  ","x"]}]"#;
        let persistence = NotePersistence::new(MemorySlot::new().with_entry("notes.v2", raw));

        let notes = persistence.load();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].updated_at >= notes[0].created_at);
        assert_eq!(notes[0].updated_at, notes[0].created_at);
        assert_eq!(notes[0].tags, vec!["x".to_string()]);
    }

    #[test]
    fn custom_key_isolates_collections() {
        let mut persistence = NotePersistence::with_key(MemorySlot::new(), "notes.test");
        persistence.save(&[Note::new(Utc::now())]);
        assert_eq!(persistence.key(), "notes.test");
        assert!(persistence.slot().read("notes.v2").unwrap().is_none());
        assert_eq!(persistence.load().len(), 1);
    }
}
