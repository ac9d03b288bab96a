//! Help dialog
//!
//! Lists keyboard shortcuts for both panels.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::palette::Palette;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(true))
        .style(palette.base());

    let mut lines = vec![
        section(&palette, "Input"),
        key_line(&palette, "Enter", "Add the typed expense"),
        key_line(&palette, "Tab/Esc", "Move to the list"),
        key_line(&palette, "Ctrl-C", "Quit"),
        Line::from(""),
        section(&palette, "List"),
        key_line(&palette, "j/k", "Move selection down/up"),
        key_line(&palette, "g/G", "First/last expense"),
        key_line(&palette, "d", "Delete selected expense"),
        key_line(&palette, "i/Tab", "Back to input"),
        key_line(&palette, "t", "Toggle light/dark theme"),
        key_line(&palette, "q", "Quit"),
        Line::from(""),
    ];
    lines.push(Line::from(Span::styled(
        format!("Preferences: {}", app.paths.local_store_file().display()),
        palette.base().fg(palette.muted),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn section(palette: &Palette, title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        palette.base().fg(palette.accent).add_modifier(Modifier::BOLD),
    ))
}

fn key_line(palette: &Palette, key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), palette.base().fg(palette.accent)),
        Span::styled(description.to_string(), palette.base()),
    ])
}
