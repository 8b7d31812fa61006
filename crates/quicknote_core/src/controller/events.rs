//! UI event vocabulary understood by the controller.

use crate::model::note::NoteId;

/// Input or click event raised by the widget surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Title field edited.
    TitleInput { id: NoteId, value: String },
    /// Body field edited.
    BodyInput { id: NoteId, value: String },
    /// Raw comma-separated tag field edited.
    TagsInput { id: NoteId, value: String },
    /// Delete affordance clicked.
    DeleteClicked { id: NoteId },
    /// Pin affordance clicked.
    PinClicked { id: NoteId },
    /// Global "new note" trigger clicked.
    NewNoteClicked,
    /// Global search field edited.
    SearchInput { value: String },
    /// Global key press.
    KeyDown(KeyPress),
}

/// Host platform, used to pick the primary shortcut modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Primary modifier is Meta (Cmd).
    Mac,
    /// Primary modifier is Ctrl.
    Other,
}

impl Platform {
    /// Classifies a platform identifier such as `MacIntel` or `Win32`.
    pub fn detect(identifier: &str) -> Self {
        if identifier.to_ascii_uppercase().contains("MAC") {
            Self::Mac
        } else {
            Self::Other
        }
    }

    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Other
        }
    }
}

/// Key press with modifier state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Whether the primary modifier for `platform` is held.
    pub fn has_primary_modifier(&self, platform: Platform) -> bool {
        match platform {
            Platform::Mac => self.meta,
            Platform::Other => self.ctrl,
        }
    }

    /// Case-insensitive key comparison.
    pub fn is_key(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }
}

/// What the host should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// Suppress the host's default handling of the event.
    pub prevent_default: bool,
    /// The card list was re-rendered synchronously.
    pub rendered: bool,
}

#[cfg(test)]
mod tests {
    use super::{KeyPress, Platform};

    #[test]
    fn detect_recognizes_mac_identifiers() {
        assert_eq!(Platform::detect("MacIntel"), Platform::Mac);
        assert_eq!(Platform::detect("macos"), Platform::Mac);
        assert_eq!(Platform::detect("Win32"), Platform::Other);
        assert_eq!(Platform::detect("Linux x86_64"), Platform::Other);
    }

    #[test]
    fn current_matches_compile_target() {
        let expected = if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Other
        };
        assert_eq!(Platform::current(), expected);
    }

    #[test]
    fn primary_modifier_follows_platform() {
        let ctrl_n = KeyPress::new("N").with_ctrl();
        assert!(ctrl_n.has_primary_modifier(Platform::Other));
        assert!(!ctrl_n.has_primary_modifier(Platform::Mac));
        assert!(ctrl_n.is_key("n"));

        let cmd_f = KeyPress::new("f").with_meta();
        assert!(cmd_f.has_primary_modifier(Platform::Mac));
        assert!(!cmd_f.has_primary_modifier(Platform::Other));
    }
}
