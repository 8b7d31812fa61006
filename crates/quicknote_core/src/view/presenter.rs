//! Card list rendering.
//!
//! # Invariants
//! - Pinned notes precede unpinned notes.
//! - Within each group notes are ordered by `updated_at` descending.
//! - Equal sort keys keep their input order.
//! - Title, body and tags only reach the output through `escape_html`.

use super::escape::escape_html;
use crate::model::note::Note;
use chrono::Local;

const PINNED_GLYPH: &str = "📌";
const UNPINNED_GLYPH: &str = "📍";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Orders notes for display: pinned first, then most recently edited.
pub fn sort_for_display<'a>(notes: &[&'a Note]) -> Vec<&'a Note> {
    let mut sorted = notes.to_vec();
    sorted.sort_by(|a, b| {
        b.pinned
            .cmp(&a.pinned)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
    sorted
}

/// Renders the display-sorted card list for `notes`.
pub fn render(notes: &[&Note]) -> String {
    let mut out = String::new();
    for note in sort_for_display(notes) {
        out.push_str(render_card(note).as_str());
    }
    out
}

/// Renders one note card.
pub fn render_card(note: &Note) -> String {
    let pin_glyph = if note.pinned {
        PINNED_GLYPH
    } else {
        UNPINNED_GLYPH
    };
    let edited_local = note.updated_at.with_timezone(&Local);

    format!(
        concat!(
            "<div class=\"note-card\" data-id=\"{id}\" data-pinned=\"{pinned}\">",
            "<div class=\"note-header\">",
            "<input class=\"note-title\" value=\"{title}\" placeholder=\"Title\" />",
            "<div class=\"note-actions\">",
            "<button class=\"pin-btn\" title=\"Pin\">{pin_glyph}</button>",
            "<button class=\"del-btn\" title=\"Delete\">🗑️</button>",
            "</div>",
            "</div>",
            "<textarea class=\"note-body\" placeholder=\"Write your note...\">{body}</textarea>",
            "<div class=\"note-footer\">",
            "<input class=\"tag-input\" value=\"{tags}\" placeholder=\"tags, comma,separated\" />",
            "<span class=\"timestamps\">Edited <time datetime=\"{edited_iso}\">{edited}</time></span>",
            "</div>",
            "</div>\n"
        ),
        id = note.id,
        pinned = note.pinned,
        title = escape_html(note.title.as_str()),
        pin_glyph = pin_glyph,
        body = escape_html(note.body.as_str()),
        tags = escape_html(note.tags.join(", ").as_str()),
        edited_iso = note.updated_at.to_rfc3339(),
        edited = edited_local.format(TIMESTAMP_FORMAT),
    )
}
