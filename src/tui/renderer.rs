//! Frame rendering: one view per phase plus the notification overlay.

use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::App;
use super::layout::toast_area;
use super::theme::Theme;
use super::views;
use crate::state_machine::Phase;

/// Render the screen for the current phase.
pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::default_theme();

    match app.phase() {
        Phase::Input => views::input::render(frame, app, &theme),
        Phase::Loading => views::loading::render(frame, app, &theme),
        Phase::Results => views::results::render(frame, app, &theme),
        Phase::Failed => views::failed::render(frame, app, &theme),
    }

    render_notifications(frame, app, &theme);
}

fn render_notifications(frame: &mut Frame, app: &App, theme: &Theme) {
    let visible: Vec<_> = app.notifications().visible().collect();
    if visible.is_empty() {
        return;
    }

    let area = toast_area(frame.area(), visible.len());
    for (i, notification) in visible.iter().enumerate() {
        let y = area.y + (i as u16) * 3;
        if y + 3 > area.y + area.height {
            break;
        }
        let rect = ratatui::layout::Rect {
            y,
            height: 3,
            ..area
        };
        let style = if notification.is_error() {
            theme.error_style()
        } else {
            theme.success_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(Span::styled(notification.title.clone(), style));
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(notification.description.clone())).block(block),
            rect,
        );
    }
}
