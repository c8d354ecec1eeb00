//! One module per screen. Each exposes `render(frame, app, theme)`.

pub mod failed;
pub mod input;
pub mod loading;
pub mod results;

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Theme;

/// Centered title with an optional subtitle underneath.
pub(crate) fn render_title(frame: &mut Frame, area: Rect, theme: &Theme, title: &str, subtitle: &str) {
    let lines = vec![
        Line::from(Span::styled(title.to_string(), theme.title_style())),
        Line::from(Span::styled(subtitle.to_string(), theme.hint_style())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Key hints along the bottom edge: `[(key, label)]`.
pub(crate) fn render_hints(frame: &mut Frame, area: Rect, theme: &Theme, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme.hint_style()));
        }
        spans.push(Span::styled((*key).to_string(), theme.title_style()));
        spans.push(Span::styled(format!(" {}", label), theme.hint_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
