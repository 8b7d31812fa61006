//! Domain model for the note widget.
//!
//! # Responsibility
//! - Define the canonical note record and its typed edits.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is a hard removal from the collection.

pub mod note;
