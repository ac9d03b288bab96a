//! Confirmation dialog
//!
//! Simple yes/no confirmation

use ratatui::{
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;
use crate::tui::palette::Palette;

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, palette: &Palette, message: &str) {
    let area = centered_rect_fixed(50, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(palette.base().fg(palette.danger).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(palette.base().fg(palette.danger))
        .style(palette.base());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), palette.base())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", palette.base().fg(palette.accent)),
            Span::raw(" Yes  "),
            Span::styled("[N]", palette.base().fg(palette.danger)),
            Span::raw(" No"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
