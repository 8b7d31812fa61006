//! Note domain model.
//!
//! # Responsibility
//! - Define the single record type persisted by the widget.
//! - Define typed field-level edits applied by the store.
//!
//! # Invariants
//! - `id` is generated once and never reused for another note.
//! - `updated_at >= created_at`.
//! - `tags` never contains blank entries; duplicates are kept.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// User-authored note record.
///
/// Serialized with camelCase field names to match the persisted blob shape
/// (`id, title, body, createdAt, updatedAt, pinned, tags`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    /// Creates an empty, unpinned note stamped with `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::new_v4(), now)
    }

    /// Creates an empty note with a caller-provided id.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: NoteId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: String::new(),
            body: String::new(),
            created_at: now,
            updated_at: now,
            pinned: false,
            tags: Vec::new(),
        }
    }

    /// Applies one field edit and refreshes `updated_at`.
    ///
    /// A clock that moved backwards is clamped to `created_at`.
    pub fn apply(&mut self, update: NoteUpdate, now: DateTime<Utc>) {
        match update {
            NoteUpdate::Title(title) => self.title = title,
            NoteUpdate::Body(body) => self.body = body,
            NoteUpdate::Tags(tags) => self.tags = strip_blank_tags(tags),
            NoteUpdate::TogglePin => self.pinned = !self.pinned,
            NoteUpdate::SetPinned(pinned) => self.pinned = pinned,
        }
        self.updated_at = now.max(self.created_at);
    }

    /// Restores the record invariants on data read from storage.
    ///
    /// Drops blank tags and clamps `updated_at` to `created_at`. Returns
    /// whether anything changed.
    pub fn normalize(&mut self) -> bool {
        let tag_count = self.tags.len();
        self.tags.retain(|tag| !tag.trim().is_empty());
        let clamped = self.updated_at < self.created_at;
        if clamped {
            self.updated_at = self.created_at;
        }
        clamped || self.tags.len() != tag_count
    }

    /// Returns whether title, body or any tag contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.body.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Typed field-level edit for one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteUpdate {
    /// Replaces the title.
    Title(String),
    /// Replaces the body.
    Body(String),
    /// Replaces the full tag sequence. Blank entries are dropped.
    Tags(Vec<String>),
    /// Flips the pin flag.
    TogglePin,
    /// Sets the pin flag explicitly.
    SetPinned(bool),
}

impl NoteUpdate {
    /// Short stable label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Body(_) => "body",
            Self::Tags(_) => "tags",
            Self::TogglePin => "toggle_pin",
            Self::SetPinned(_) => "set_pinned",
        }
    }
}

/// Parses raw tag-field input: split on comma, trim, drop empty pieces.
pub fn parse_tag_input(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_blank_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .filter(|tag| !tag.trim().is_empty())
        .collect()
}
