//! Input screen: URL field, inline validation message and examples.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{render_hints, render_title};
use crate::tui::actions::EXAMPLE_URLS;
use crate::tui::app::App;
use crate::tui::layout::calculate_layout;
use crate::tui::theme::Theme;
use crate::url::validate;

pub const TITLE: &str = "Artifact Forge";
pub const TAGLINE: &str =
    "Transform any GitHub repository into comprehensive documentation, tests, and deployment configs";
const PLACEHOLDER: &str = "https://github.com/username/repository";

pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let [header, body, footer] = calculate_layout(frame.area());
    render_title(frame, header, theme, TITLE, TAGLINE);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // URL field
            Constraint::Length(1), // Validation message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Examples heading
            Constraint::Length(3), // Examples
            Constraint::Min(0),
        ])
        .split(body);

    let error = app.input_error();
    let field = if app.input().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, theme.hint_style()))
    } else {
        Line::from(vec![
            Span::styled(app.input().to_string(), theme.text_style()),
            Span::styled("▏", theme.title_style()),
        ])
    };
    frame.render_widget(
        Paragraph::new(field).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.input_style(error.is_some()))
                .title(" Repository URL "),
        ),
        rows[1],
    );

    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("! {}", error),
                theme.error_style(),
            ))),
            rows[2],
        );
    } else if let Ok(url) = validate(app.input()) {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("↗ ", theme.success_style()),
                Span::styled(format!("github.com/{}", url.label()), theme.hint_style()),
            ])),
            rows[2],
        );
    }

    frame.render_widget(
        Paragraph::new(Span::styled("Try these examples:", theme.hint_style())),
        rows[4],
    );
    let examples: Vec<Line> = EXAMPLE_URLS
        .iter()
        .enumerate()
        .map(|(i, url)| {
            Line::from(vec![
                Span::styled(format!("F{} ", i + 1), theme.title_style()),
                Span::styled(url.trim_start_matches("https://github.com/").to_string(), theme.text_style()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(examples), rows[5]);

    render_hints(
        frame,
        footer,
        theme,
        &[("Enter", "analyze"), ("F1-F3", "example"), ("Ctrl+U", "clear"), ("Esc", "quit")],
    );
}
