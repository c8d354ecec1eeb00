//! Failed screen: the analysis error and the way back.

use ratatui::{
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{render_hints, render_title};
use crate::state_machine::AppState;
use crate::tui::app::App;
use crate::tui::layout::calculate_layout;
use crate::tui::theme::Theme;

pub const TITLE: &str = "Analysis Failed";

pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let [header, body, footer] = calculate_layout(frame.area());
    render_title(frame, header, theme, TITLE, app.state().url());

    let message = match app.state() {
        AppState::Failed { error, .. } => error.to_string(),
        _ => String::new(),
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(message, theme.error_style())),
        ])
        .wrap(Wrap { trim: true }),
        body,
    );

    render_hints(
        frame,
        footer,
        theme,
        &[("r", "retry"), ("n", "start over"), ("q", "quit")],
    );
}
