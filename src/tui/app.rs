//! Application state for the forge TUI.
//!
//! `App` wraps the [`Session`] (which owns `AppState`) together with the
//! view-only state each screen needs: the input buffer and its inline error,
//! the expanded sections and selection of the results screen, and the
//! notification queue.

use std::time::{Duration, Instant};

use crate::artifact::{ArtifactKind, ArtifactSet};
use crate::errors::ValidationError;
use crate::export::{ClipboardSink, DownloadTarget};
use crate::notification::{NotificationDurations, NotificationQueue};
use crate::state_machine::{AppState, Effect, Phase, Session};
use crate::visibility::SectionVisibility;

/// Main application state
pub struct App {
    session: Session,
    /// Text in the URL field
    input: String,
    /// Inline validation message shown under the URL field
    input_error: Option<ValidationError>,
    /// Expanded sections on the results screen
    visibility: SectionVisibility,
    /// Highlighted section on the results screen
    selected: ArtifactKind,
    /// First visible line of the results list
    scroll: usize,
    show_help: bool,
    notifications: NotificationQueue,
    durations: NotificationDurations,
    clipboard: Box<dyn ClipboardSink>,
    /// Whether the copy key is offered on the results screen
    clipboard_available: bool,
    downloads: Box<dyn DownloadTarget>,
    /// Time of the last tick; rendering uses it as "now"
    now: Instant,
    should_quit: bool,
}

impl App {
    pub fn new(
        session: Session,
        clipboard: Box<dyn ClipboardSink>,
        downloads: Box<dyn DownloadTarget>,
        durations: NotificationDurations,
    ) -> Self {
        Self {
            session,
            input: String::new(),
            input_error: None,
            visibility: SectionVisibility::new(),
            selected: ArtifactKind::Readme,
            scroll: 0,
            show_help: false,
            notifications: NotificationQueue::new(),
            durations,
            clipboard,
            clipboard_available: true,
            downloads,
            now: Instant::now(),
            should_quit: false,
        }
    }

    /// Pre-fill the URL field.
    pub fn with_input(mut self, url: impl Into<String>) -> Self {
        self.input = url.into();
        self
    }

    /// Hide the copy hint when the system clipboard cannot be opened.
    pub fn with_clipboard_available(mut self, available: bool) -> Self {
        self.clipboard_available = available;
        self
    }

    /// Advance time: commit a due completion and expire notifications.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        let effects = self.session.poll(now);
        self.apply_effects(&effects);
        self.notifications.tick(now);
    }

    /// Carry out the view-side effects of a transition.
    pub(crate) fn apply_effects(&mut self, effects: &[Effect]) {
        for effect in effects {
            if let Effect::ResetSections = effect {
                self.visibility.reset();
                self.selected = ArtifactKind::Readme;
                self.scroll = 0;
                self.show_help = false;
            }
        }
    }

    /// Refill the URL field from the state after returning to `Input`.
    pub(crate) fn sync_input_from_state(&mut self) {
        if self.phase() == Phase::Input {
            self.input = self.session.state().url().to_string();
            self.input_error = None;
        }
    }

    // Accessors

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn state(&self) -> &AppState {
        self.session.state()
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn artifacts(&self) -> Option<&ArtifactSet> {
        self.session.state().artifacts()
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn loading_elapsed(&self) -> Duration {
        self.session.loading_elapsed(self.now).unwrap_or_default()
    }

    pub fn loading_progress(&self) -> f64 {
        self.session.loading_progress(self.now).unwrap_or(0.0)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn input_error(&self) -> Option<ValidationError> {
        self.input_error
    }

    pub(crate) fn set_input_error(&mut self, error: Option<ValidationError>) {
        self.input_error = error;
    }

    pub fn visibility(&self) -> &SectionVisibility {
        &self.visibility
    }

    pub(crate) fn visibility_mut(&mut self) -> &mut SectionVisibility {
        &mut self.visibility
    }

    pub fn selected(&self) -> ArtifactKind {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, kind: ArtifactKind) {
        self.selected = kind;
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub(crate) fn set_scroll(&mut self, scroll: usize) {
        self.scroll = scroll.min(self.max_scroll());
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub(crate) fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub(crate) fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    pub fn durations(&self) -> NotificationDurations {
        self.durations
    }

    /// Exporter sinks, borrowed together with the selected artifact.
    pub(crate) fn export_parts(
        &mut self,
    ) -> (
        Option<&ArtifactSet>,
        &mut dyn ClipboardSink,
        &mut dyn DownloadTarget,
    ) {
        (
            self.session.state().artifacts(),
            self.clipboard.as_mut(),
            self.downloads.as_mut(),
        )
    }

    pub fn clipboard_available(&self) -> bool {
        self.clipboard_available
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // Results layout

    /// Total lines of the results list with the current visibility.
    pub fn results_height(&self) -> usize {
        self.artifacts()
            .map(|set| {
                set.iter()
                    .map(|a| section_height(a.line_count(), self.visibility.is_expanded(a.kind)))
                    .sum()
            })
            .unwrap_or(0)
    }

    fn max_scroll(&self) -> usize {
        self.results_height().saturating_sub(1)
    }

    /// Line at which the header of `kind` is drawn.
    pub fn section_offset(&self, kind: ArtifactKind) -> usize {
        self.artifacts()
            .map(|set| {
                set.iter()
                    .take_while(|a| a.kind != kind)
                    .map(|a| section_height(a.line_count(), self.visibility.is_expanded(a.kind)))
                    .sum()
            })
            .unwrap_or(0)
    }
}

/// Header line, plus content and a blank spacer when expanded.
pub fn section_height(line_count: usize, expanded: bool) -> usize {
    if expanded {
        1 + line_count + 1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_sections_take_one_line() {
        assert_eq!(section_height(40, false), 1);
        assert_eq!(section_height(40, true), 42);
        assert_eq!(section_height(0, true), 2);
    }
}
