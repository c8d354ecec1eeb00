//! Color themes and styling for TUI components.

use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the forge screens
pub struct Theme {
    /// Accent for titles, the selected section and active steps
    pub primary: Color,
    /// Completed steps and success notifications
    pub success: Color,
    /// Validation messages, failures and error notifications
    pub error: Color,
    /// Pending steps, hints and line numbers
    pub muted: Color,
    /// Normal text
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for loading steps (based on status)
    pub fn step_style(&self, revealed: bool, active: bool) -> Style {
        match (revealed, active) {
            (true, true) => Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(self.success),
            _ => Style::default().fg(self.muted),
        }
    }

    /// Section header in the results list
    pub fn section_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(Color::Black)
                .bg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.text)
                .add_modifier(Modifier::BOLD)
        }
    }

    pub fn line_number_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn progress_bar_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn input_style(&self, invalid: bool) -> Style {
        if invalid {
            Style::default().fg(self.error)
        } else {
            Style::default().fg(self.primary)
        }
    }

    // Content highlighting

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn keyword_style(&self) -> Style {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_style(&self) -> Style {
        Style::default().fg(Color::Blue)
    }

    pub fn string_style(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn comment_style(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn emphasis_style(&self) -> Style {
        Style::default().fg(Color::LightGreen)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
