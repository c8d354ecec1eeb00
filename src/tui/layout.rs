//! Layout helpers shared by the screens.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout mode based on terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Line numbers and tagline shown (>=80 cols)
    Standard,
    /// Narrow terminals drop the decorations (<80 cols)
    Compact,
}

impl LayoutMode {
    pub fn from_terminal_width(width: u16) -> Self {
        if width < 80 {
            Self::Compact
        } else {
            Self::Standard
        }
    }

    pub fn shows_line_numbers(&self) -> bool {
        matches!(self, Self::Standard)
    }
}

/// Header, body and footer of every screen.
pub fn calculate_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Screen content
            Constraint::Length(1), // Key hints
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Area for notifications in the top-right corner.
pub fn toast_area(area: Rect, count: usize) -> Rect {
    let width = 48u16.min(area.width);
    let height = ((count as u16) * 3).min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_mode_selection() {
        assert_eq!(LayoutMode::from_terminal_width(60), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_terminal_width(80), LayoutMode::Standard);
        assert!(!LayoutMode::Compact.shows_line_numbers());
    }

    #[test]
    fn layout_has_fixed_header_and_footer() {
        let [header, body, footer] = calculate_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 1);
        assert_eq!(body.height, 30 - 2 - 3 - 1);
    }

    #[test]
    fn toasts_stack_in_corner() {
        let rect = toast_area(Rect::new(0, 0, 120, 40), 2);
        assert_eq!(rect.x, 72);
        assert_eq!(rect.height, 6);
    }
}
