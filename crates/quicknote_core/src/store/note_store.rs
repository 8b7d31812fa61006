//! Note store operations: create, update, delete, filter.
//!
//! # Invariants
//! - New notes are inserted at the front of the collection.
//! - `filter` preserves collection order and yields each note at most once.
//! - Every successful mutation is followed by exactly one `save`.

use crate::model::note::{Note, NoteId, NoteUpdate};
use crate::storage::{KeyValueSlot, NotePersistence};
use chrono::{DateTime, Utc};
use log::{debug, info};

/// Wall-clock source for note timestamps.
pub type Clock = fn() -> DateTime<Utc>;

/// Ordered note collection bound to a persistence adapter.
pub struct NoteStore<S: KeyValueSlot> {
    notes: Vec<Note>,
    persistence: NotePersistence<S>,
    clock: Clock,
}

impl<S: KeyValueSlot> NoteStore<S> {
    /// Loads the collection from `persistence` using the system clock.
    pub fn open(persistence: NotePersistence<S>) -> Self {
        Self::with_clock(persistence, Utc::now)
    }

    /// Loads the collection using a caller-provided clock.
    pub fn with_clock(persistence: NotePersistence<S>, clock: Clock) -> Self {
        let notes = persistence.load();
        info!(
            "event=store_open module=store status=ok key={} count={}",
            persistence.key(),
            notes.len()
        );
        Self {
            notes,
            persistence,
            clock,
        }
    }

    /// Notes in collection order (newest-created first).
    pub fn notes(&self) -> &[Note] {
        self.notes.as_slice()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn persistence(&self) -> &NotePersistence<S> {
        &self.persistence
    }

    /// Creates an empty note at the front of the collection and persists.
    pub fn create(&mut self) -> NoteId {
        let note = Note::new((self.clock)());
        let id = note.id;
        self.notes.insert(0, note);
        self.persist();
        info!(
            "event=note_create module=store status=ok note_id={} count={}",
            id,
            self.notes.len()
        );
        id
    }

    /// Removes the note with `id`, if present, and persists.
    pub fn delete(&mut self, id: NoteId) {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            debug!("event=note_delete module=store status=skipped reason=not_found note_id={id}");
        } else {
            info!(
                "event=note_delete module=store status=ok note_id={} count={}",
                id,
                self.notes.len()
            );
        }
        self.persist();
    }

    /// Applies `update` to the note with `id` and persists.
    ///
    /// Returns `false` without touching anything when `id` is unknown.
    pub fn update(&mut self, id: NoteId, update: NoteUpdate) -> bool {
        let now = (self.clock)();
        let kind = update.kind();
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            debug!(
                "event=note_update module=store status=skipped reason=not_found note_id={id} field={kind}"
            );
            return false;
        };

        note.apply(update, now);
        self.persist();
        debug!("event=note_update module=store status=ok note_id={id} field={kind}");
        true
    }

    /// Returns notes whose title, body or any tag contains `query`,
    /// case-insensitively. Blank queries return the full collection.
    pub fn filter(&self, query: &str) -> Vec<&Note> {
        if query.trim().is_empty() {
            return self.notes.iter().collect();
        }
        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|note| note.matches(needle.as_str()))
            .collect()
    }

    fn persist(&mut self) {
        self.persistence.save(self.notes.as_slice());
    }
}
