//! Note widget controller.
//!
//! # Invariants
//! - Every render applies the current search query.
//! - Title/body edits never render synchronously; they (re)schedule one
//!   debounced render.
//! - Delete, pin, create and search render synchronously and drop any
//!   pending debounced render.
//! - Tag edits render only when `rerender_on_tag_edit` is enabled.

use super::debounce::DebouncedTask;
use super::events::{EventOutcome, KeyPress, Platform, UiEvent};
use crate::config::{ConfigError, WidgetConfig};
use crate::model::note::{parse_tag_input, NoteUpdate};
use crate::storage::KeyValueSlot;
use crate::store::NoteStore;
use crate::view::render;
use log::{debug, trace};
use std::time::Instant;

/// Output surface driven by the controller.
pub trait NoteView {
    /// Replaces the rendered card list.
    fn show_cards(&mut self, html: &str);
    /// Moves input focus to the search field.
    fn focus_search(&mut self);
}

/// Single-threaded controller owning the store and the view.
pub struct NoteController<S: KeyValueSlot, V: NoteView> {
    store: NoteStore<S>,
    view: V,
    platform: Platform,
    query: String,
    pending_render: DebouncedTask,
    rerender_on_tag_edit: bool,
}

impl<S: KeyValueSlot, V: NoteView> NoteController<S, V> {
    /// Builds a controller after validating `config`.
    pub fn new(
        store: NoteStore<S>,
        view: V,
        platform: Platform,
        config: &WidgetConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store,
            view,
            platform,
            query: String::new(),
            pending_render: DebouncedTask::new(config.render_debounce),
            rerender_on_tag_edit: config.rerender_on_tag_edit,
        })
    }

    /// Performs the initial render of the loaded collection.
    pub fn start(&mut self) {
        self.render_now();
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Current search query.
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn has_pending_render(&self) -> bool {
        self.pending_render.is_pending()
    }

    /// Dispatches one UI event.
    pub fn handle(&mut self, event: UiEvent, now: Instant) -> EventOutcome {
        match event {
            UiEvent::TitleInput { id, value } => {
                self.store.update(id, NoteUpdate::Title(value));
                self.schedule_render(now);
                EventOutcome::default()
            }
            UiEvent::BodyInput { id, value } => {
                self.store.update(id, NoteUpdate::Body(value));
                self.schedule_render(now);
                EventOutcome::default()
            }
            UiEvent::TagsInput { id, value } => {
                self.store
                    .update(id, NoteUpdate::Tags(parse_tag_input(value.as_str())));
                if self.rerender_on_tag_edit {
                    self.rendered()
                } else {
                    EventOutcome::default()
                }
            }
            UiEvent::DeleteClicked { id } => {
                self.store.delete(id);
                self.rendered()
            }
            UiEvent::PinClicked { id } => {
                self.store.update(id, NoteUpdate::TogglePin);
                self.rendered()
            }
            UiEvent::NewNoteClicked => {
                self.store.create();
                self.rendered()
            }
            UiEvent::SearchInput { value } => {
                self.query = value;
                self.rendered()
            }
            UiEvent::KeyDown(key) => self.handle_shortcut(&key),
        }
    }

    /// Runs the debounced render if it is due at `now`.
    ///
    /// Returns whether a render happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.pending_render.take_due(now) {
            return false;
        }
        debug!("event=render module=controller status=ok trigger=debounce");
        self.render_now();
        true
    }

    fn handle_shortcut(&mut self, key: &KeyPress) -> EventOutcome {
        if !key.has_primary_modifier(self.platform) {
            return EventOutcome::default();
        }
        if key.is_key("n") {
            self.store.create();
            self.render_now();
            return EventOutcome {
                prevent_default: true,
                rendered: true,
            };
        }
        if key.is_key("f") {
            self.view.focus_search();
            return EventOutcome {
                prevent_default: true,
                rendered: false,
            };
        }
        EventOutcome::default()
    }

    fn schedule_render(&mut self, now: Instant) {
        self.pending_render.schedule(now);
        trace!(
            "event=render_scheduled module=controller delay_ms={}",
            self.pending_render.delay().as_millis()
        );
    }

    fn rendered(&mut self) -> EventOutcome {
        self.render_now();
        EventOutcome {
            prevent_default: false,
            rendered: true,
        }
    }

    fn render_now(&mut self) {
        self.pending_render.cancel();
        let visible = self.store.filter(self.query.as_str());
        let html = render(&visible);
        trace!(
            "event=render module=controller visible={} total={}",
            visible.len(),
            self.store.len()
        );
        self.view.show_cards(html.as_str());
    }
}
