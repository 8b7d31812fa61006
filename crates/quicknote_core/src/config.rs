//! Widget runtime configuration.
//!
//! # Invariants
//! - `storage_key` is non-blank.
//! - `render_debounce` is within `(0, MAX_RENDER_DEBOUNCE]`.

use crate::storage::DEFAULT_STORAGE_KEY;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Default quiet window before a title/body edit re-renders.
pub const DEFAULT_RENDER_DEBOUNCE: Duration = Duration::from_millis(200);
/// Upper bound accepted for `render_debounce`.
pub const MAX_RENDER_DEBOUNCE: Duration = Duration::from_secs(5);

/// Tunables for the note widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Versioned key under which the note blob is stored.
    pub storage_key: String,
    /// Quiet window for coalescing title/body re-renders.
    pub render_debounce: Duration,
    /// Whether tag-field edits re-render immediately.
    ///
    /// Off by default: tag edits update the store without reordering cards.
    pub rerender_on_tag_edit: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            render_debounce: DEFAULT_RENDER_DEBOUNCE,
            rerender_on_tag_edit: false,
        }
    }
}

impl WidgetConfig {
    /// Checks field bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if self.render_debounce.is_zero() || self.render_debounce > MAX_RENDER_DEBOUNCE {
            return Err(ConfigError::DebounceOutOfRange(self.render_debounce));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyStorageKey,
    DebounceOutOfRange(Duration),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStorageKey => write!(f, "storage key cannot be empty"),
            Self::DebounceOutOfRange(value) => write!(
                f,
                "render debounce {}ms out of range; expected 1..={}ms",
                value.as_millis(),
                MAX_RENDER_DEBOUNCE.as_millis()
            ),
        }
    }
}

impl Error for ConfigError {}
