//! Keyboard handling: the imperative shell around `actions`.
//!
//! `handle_key` asks the pure `determine_action` what a key means on the
//! current screen, then `execute_action` carries it out against the session,
//! the section visibility and the exporter.

use crossterm::event::{KeyEvent, KeyEventKind};
use std::time::Instant;

use super::actions::{determine_action, Action, EXAMPLE_URLS};
use super::app::App;
use crate::artifact::ArtifactKind;
use crate::errors::SubmitError;
use crate::export;
use crate::state_machine::Phase;

/// Lines moved by PgUp/PgDn.
pub const PAGE_SIZE: usize = 10;

/// Handle one key press. Returns true when the application should exit.
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    if let Some(action) = determine_action(app.phase(), key) {
        execute_action(app, action, now);
    }
    app.should_quit()
}

/// Execute an action (imperative shell).
pub fn execute_action(app: &mut App, action: Action, now: Instant) {
    match action {
        Action::Quit => quit(app, now),

        Action::InsertChar(c) => {
            app.input_mut().push(c);
            app.set_input_error(None);
        }
        Action::DeleteChar => {
            app.input_mut().pop();
            app.set_input_error(None);
        }
        Action::ClearInput => {
            app.input_mut().clear();
            app.set_input_error(None);
        }
        Action::UseExample(index) => {
            if let Some(url) = EXAMPLE_URLS.get(index) {
                *app.input_mut() = (*url).to_string();
                app.set_input_error(None);
            }
        }
        Action::Submit => submit(app, now),

        Action::SelectPrevious => move_selection(app, -1),
        Action::SelectNext => move_selection(app, 1),
        Action::ToggleSection => {
            let kind = app.selected();
            app.visibility_mut().toggle(kind);
            let scroll = app.scroll();
            app.set_scroll(scroll);
        }
        Action::ExpandAll => app.visibility_mut().expand_all(),
        Action::CollapseAll => {
            app.visibility_mut().collapse_all();
            let offset = app.section_offset(app.selected());
            app.set_scroll(offset);
        }
        Action::ScrollUp => {
            let scroll = app.scroll().saturating_sub(PAGE_SIZE);
            app.set_scroll(scroll);
        }
        Action::ScrollDown => {
            let scroll = app.scroll() + PAGE_SIZE;
            app.set_scroll(scroll);
        }
        Action::ToggleHelp => app.toggle_help(),
        Action::DismissNotification => {
            app.notifications_mut().dismiss_latest();
        }

        Action::CopySelected => export_selected(app, ExportKind::Copy, now),
        Action::DownloadSelected => export_selected(app, ExportKind::Download, now),
        Action::DownloadAll => download_all(app, now),

        Action::StartOver => {
            if let Err(e) = app.session_mut().start_over(now) {
                tracing::debug!("Start over ignored: {}", e);
            }
            app.sync_input_from_state();
        }
        Action::Retry => {
            if let Err(e) = app.session_mut().retry(now) {
                tracing::debug!("Retry ignored: {}", e);
            }
            app.sync_input_from_state();
        }
    }
}

fn quit(app: &mut App, now: Instant) {
    if app.phase() == Phase::Loading {
        if let Err(e) = app.session_mut().cancel(now) {
            tracing::debug!("Cancel on quit ignored: {}", e);
        }
    }
    app.request_quit();
}

fn submit(app: &mut App, now: Instant) {
    let raw = app.input().to_string();
    match app.session_mut().submit(&raw, now) {
        Ok(effects) => {
            app.set_input_error(None);
            app.apply_effects(&effects);
        }
        Err(SubmitError::Invalid(e)) => app.set_input_error(Some(e)),
        Err(SubmitError::Transition(e)) => tracing::debug!("Submit ignored: {}", e),
    }
}

/// Move the selection by `delta` sections, clamped, and bring it into view.
fn move_selection(app: &mut App, delta: isize) {
    let current = app.selected().index() as isize;
    let last = ArtifactKind::ALL.len() as isize - 1;
    let next = (current + delta).clamp(0, last) as usize;
    let kind = ArtifactKind::ALL[next];
    app.set_selected(kind);
    let offset = app.section_offset(kind);
    app.set_scroll(offset);
}

#[derive(Debug, Clone, Copy)]
enum ExportKind {
    Copy,
    Download,
}

fn export_selected(app: &mut App, kind: ExportKind, now: Instant) {
    let selected = app.selected();
    let durations = app.durations();
    let (artifacts, clipboard, downloads) = app.export_parts();
    let Some(artifact) = artifacts.map(|set| set.get(selected)) else {
        return;
    };
    let notification = match kind {
        ExportKind::Copy => export::copy_artifact(clipboard, artifact, durations),
        ExportKind::Download => export::download_artifact(downloads, artifact, durations),
    };
    app.notifications_mut().push(notification, now);
}

fn download_all(app: &mut App, now: Instant) {
    let durations = app.durations();
    let (artifacts, _, downloads) = app.export_parts();
    let Some(artifacts) = artifacts else {
        return;
    };
    let (_, notification) = export::download_all_artifacts(downloads, artifacts, durations);
    app.notifications_mut().push(notification, now);
}
