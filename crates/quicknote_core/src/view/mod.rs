//! Presenter: sorted, escaped UI representation of notes.
//!
//! # Responsibility
//! - Order notes for display (pinned first, most recently edited next).
//! - Produce card markup with every user string escaped.
//!
//! # Invariants
//! - Rendering is a pure function of its inputs.

pub mod escape;
pub mod presenter;

pub use escape::escape_html;
pub use presenter::{render, render_card, sort_for_display};
