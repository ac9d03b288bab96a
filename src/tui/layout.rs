//! Layout definitions for the TUI
//!
//! Header, input box, expense list, status bar, top to bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title line
    pub header: Rect,
    /// Bordered input box
    pub input: Rect,
    /// Expense list
    pub list: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(3), // Input
                Constraint::Min(3),    // List
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            input: chunks[1],
            list: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Create a centered rect sized as a percentage of `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect, clipped to `r`
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.list.height, 19);
        assert_eq!(layout.status_bar.y, 23);
    }

    #[test]
    fn test_centered_rect_fixed_clips() {
        let r = centered_rect_fixed(100, 10, Rect::new(0, 0, 40, 20));
        assert_eq!(r.width, 40);
        assert_eq!(r.y, 5);
    }
}
