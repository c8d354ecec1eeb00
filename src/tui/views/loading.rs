//! Loading screen: revealed steps, spinner and elapsed progress.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{render_hints, render_title};
use crate::progress::{revealed_steps, LOADING_STEPS};
use crate::tui::animation::{ellipsis, render_progress_bar, spinner_char};
use crate::tui::app::App;
use crate::tui::layout::calculate_layout;
use crate::tui::theme::Theme;

pub const TITLE: &str = "Forging Your Artifacts";
const SUBTITLE: &str = "Analyzing your repository and generating comprehensive artifacts";

pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let elapsed = app.loading_elapsed();
    let [header, body, footer] = calculate_layout(frame.area());
    render_title(
        frame,
        header,
        theme,
        TITLE,
        &format!("{}{}", SUBTITLE, ellipsis(elapsed)),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                          // Repository
            Constraint::Length(1),                          // Spacer
            Constraint::Length(LOADING_STEPS.len() as u16), // Steps
            Constraint::Length(1),                          // Spacer
            Constraint::Length(1),                          // Progress bar
            Constraint::Min(0),
        ])
        .split(body);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Repository ", theme.hint_style()),
            Span::styled(app.state().url().to_string(), theme.text_style()),
        ])),
        rows[0],
    );

    let revealed = revealed_steps(elapsed);
    let steps: Vec<Line> = LOADING_STEPS
        .iter()
        .enumerate()
        .map(|(i, (label, _))| {
            let is_revealed = i < revealed;
            let active = i + 1 == revealed;
            let marker = match (is_revealed, active) {
                (true, true) => spinner_char(elapsed),
                (true, false) => "✓",
                _ => "·",
            };
            Line::from(vec![
                Span::styled(format!("{}  ", marker), theme.step_style(is_revealed, active)),
                Span::styled((*label).to_string(), theme.step_style(is_revealed, active)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(steps), rows[2]);

    let progress = app.loading_progress();
    let width = rows[4].width.saturating_sub(6) as usize;
    frame.render_widget(
        Paragraph::new(format!(
            "{} {:>3}%",
            render_progress_bar(progress, width),
            (progress * 100.0) as u32
        ))
        .style(theme.progress_bar_style()),
        rows[4],
    );

    render_hints(frame, footer, theme, &[("q", "quit")]);
}
