//! Pure action determination for keyboard handling.
//!
//! `determine_action` maps a key plus the current screen to an [`Action`];
//! `navigation::execute_action` performs it. Keeping the mapping pure lets
//! every binding be unit tested without a terminal or a session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state_machine::Phase;

/// Example repositories offered on the input screen.
pub const EXAMPLE_URLS: [&str; 3] = [
    "https://github.com/facebook/react",
    "https://github.com/microsoft/vscode",
    "https://github.com/vercel/next.js",
];

/// Every user intent the TUI understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application (cancels a running analysis).
    Quit,

    // Input screen
    InsertChar(char),
    DeleteChar,
    ClearInput,
    UseExample(usize),
    Submit,

    // Results screen
    SelectPrevious,
    SelectNext,
    ToggleSection,
    ExpandAll,
    CollapseAll,
    CopySelected,
    DownloadSelected,
    DownloadAll,
    ScrollUp,
    ScrollDown,
    ToggleHelp,
    DismissNotification,

    // Results and failed screens
    StartOver,
    Retry,
}

/// Map `key` to an action for the screen `phase`.
pub fn determine_action(phase: Phase, key: KeyEvent) -> Option<Action> {
    if is_ctrl_c(&key) {
        return Some(Action::Quit);
    }
    match phase {
        Phase::Input => input_action(key),
        Phase::Loading => loading_action(key),
        Phase::Results => results_action(key),
        Phase::Failed => failed_action(key),
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

fn input_action(key: KeyEvent) -> Option<Action> {
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::DeleteChar),
        KeyCode::F(n @ 1..=3) => Some(Action::UseExample(n as usize - 1)),
        KeyCode::Char(c @ '1'..='3') if alt => Some(Action::UseExample(c as usize - '1' as usize)),
        KeyCode::Char('u') if ctrl => Some(Action::ClearInput),
        KeyCode::Char(_) if alt || ctrl => None,
        KeyCode::Char(c) => Some(Action::InsertChar(c)),
        _ => None,
    }
}

fn loading_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn results_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),

        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::PageDown => Some(Action::ScrollDown),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleSection),
        KeyCode::Char('e') => Some(Action::ExpandAll),
        KeyCode::Char('E') => Some(Action::CollapseAll),

        KeyCode::Char('c') => Some(Action::CopySelected),
        KeyCode::Char('d') => Some(Action::DownloadSelected),
        KeyCode::Char('D') => Some(Action::DownloadAll),

        KeyCode::Char('n') => Some(Action::StartOver),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('x') | KeyCode::Esc => Some(Action::DismissNotification),

        _ => None,
    }
}

fn failed_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Enter => Some(Action::Retry),
        KeyCode::Char('n') => Some(Action::StartOver),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
