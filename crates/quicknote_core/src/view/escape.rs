//! Markup escaping for user-supplied text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static MARKUP_CHAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[&<>"']"#).expect("valid markup char regex"));

/// Escapes `& < > " '` so `value` is inert inside element text and
/// quoted attribute values.
///
/// Borrows the input unchanged when nothing needs escaping.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    MARKUP_CHAR_RE.replace_all(value, |caps: &Captures<'_>| match &caps[0] {
        "&" => "&amp;",
        "<" => "&lt;",
        ">" => "&gt;",
        "\"" => "&quot;",
        _ => "&#39;",
    })
}
