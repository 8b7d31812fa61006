//! In-memory note collection with write-through persistence.
//!
//! # Responsibility
//! - Own the ordered collection for the lifetime of a widget session.
//! - Persist the full collection after every mutation.
//!
//! # Invariants
//! - Mutations referencing unknown ids are silent no-ops.
//! - Rendering is never triggered from here; callers decide when to refresh.

pub mod note_store;

pub use note_store::{Clock, NoteStore};
