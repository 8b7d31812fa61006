//! Core logic for the QuickNote widget.
//! Owns the note collection, its persistence, rendering and event handling.

pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod view;

pub use config::{ConfigError, WidgetConfig};
pub use controller::{
    DebouncedTask, EventOutcome, KeyPress, NoteController, NoteView, Platform, UiEvent,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{parse_tag_input, Note, NoteId, NoteUpdate};
pub use storage::{
    KeyValueSlot, MemorySlot, NotePersistence, SqliteSlot, StorageError, StorageResult,
    DEFAULT_STORAGE_KEY,
};
pub use store::NoteStore;
pub use view::{escape_html, render, sort_for_display};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
