//! Event controller wiring UI events to store mutations and re-renders.
//!
//! # Responsibility
//! - Translate UI events into typed store operations.
//! - Decide when the card list is refreshed, including debounced refreshes.
//!
//! # Invariants
//! - All handlers run to completion on the caller's thread.
//! - At most one debounced render is pending at any time.

pub mod debounce;
pub mod events;
pub mod note_controller;

pub use debounce::DebouncedTask;
pub use events::{EventOutcome, KeyPress, Platform, UiEvent};
pub use note_controller::{NoteController, NoteView};
