//! Results screen: one collapsible section per artifact.

use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{render_hints, render_title};
use crate::artifact::Artifact;
use crate::state_machine::AppState;
use crate::tui::app::App;
use crate::tui::highlight::highlight_line;
use crate::tui::layout::{calculate_layout, LayoutMode};
use crate::tui::theme::Theme;

const HELP: &[(&str, &str)] = &[
    ("↑/↓", "select"),
    ("Enter", "toggle"),
    ("c", "copy"),
    ("d", "download"),
    ("D", "download all"),
    ("e/E", "expand/collapse all"),
    ("PgUp/PgDn", "scroll"),
    ("x", "dismiss"),
    ("n", "start over"),
    ("q", "quit"),
];

const SHORT_HINTS: &[(&str, &str)] = &[
    ("Enter", "toggle"),
    ("c", "copy"),
    ("d", "download"),
    ("D", "all"),
    ("?", "help"),
];

pub fn header_text(app: &App) -> String {
    match app.state() {
        AppState::Results { url, .. } => format!("Artifacts Generated for {}", url.label()),
        _ => "Artifacts Generated".to_string(),
    }
}

pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let [header, body, footer] = calculate_layout(frame.area());
    let mode = LayoutMode::from_terminal_width(frame.area().width);

    let count = app.artifacts().map(|set| set.len()).unwrap_or(0);
    render_title(
        frame,
        header,
        theme,
        &header_text(app),
        &format!("{} artifacts ready", count),
    );

    let lines: Vec<Line> = app
        .artifacts()
        .map(|set| {
            set.iter()
                .flat_map(|artifact| section_lines(app, artifact, mode, theme))
                .collect()
        })
        .unwrap_or_default();

    let scroll = u16::try_from(app.scroll()).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), body);

    let hints = if app.show_help() { HELP } else { SHORT_HINTS };
    let hints: Vec<(&str, &str)> = hints
        .iter()
        .copied()
        .filter(|(key, _)| app.clipboard_available() || *key != "c")
        .collect();
    render_hints(frame, footer, theme, &hints);
}

/// Header plus, when expanded, numbered content and a spacer.
fn section_lines(app: &App, artifact: &Artifact, mode: LayoutMode, theme: &Theme) -> Vec<Line<'static>> {
    let expanded = app.visibility().is_expanded(artifact.kind);
    let selected = app.selected() == artifact.kind;
    let marker = if expanded { "▾" } else { "▸" };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} {}", marker, artifact.title),
            theme.section_style(selected),
        ),
        Span::styled(
            format!("  {} · {} lines", artifact.export_name(), artifact.line_count()),
            theme.hint_style(),
        ),
    ])];

    if expanded {
        let width = artifact.line_count().to_string().len();
        for (i, raw) in artifact.content.lines().enumerate() {
            let mut line = highlight_line(&artifact.language, raw, theme);
            if mode.shows_line_numbers() {
                line.spans.insert(
                    0,
                    Span::styled(format!("{:>width$} │ ", i + 1, width = width), theme.line_number_style()),
                );
            } else {
                line.spans.insert(0, Span::raw("  "));
            }
            lines.push(line);
        }
        lines.push(Line::from(""));
    }
    lines
}
