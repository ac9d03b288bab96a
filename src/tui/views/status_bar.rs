//! Status bar view
//!
//! Shows the entry count, pending text length and key hints.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let mut spans = vec![
        Span::styled(" Expenses: ", palette.base()),
        Span::styled(app.store.len().to_string(), palette.title()),
    ];

    if !app.store.pending().is_empty() {
        spans.push(Span::styled(" │ ", palette.base().fg(palette.muted)));
        spans.push(Span::styled(
            format!("Typing {} chars", app.store.pending().chars().count()),
            palette.base().fg(palette.muted),
        ));
    }

    let hints = match app.focus {
        Focus::Input => " Enter:Add  Tab:List  Ctrl-C:Quit ",
        Focus::List => " d:Delete  i:Type  t:Theme  ?:Help  q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::styled(" ".repeat(padding_len.max(1)), palette.base()));
    spans.push(Span::styled(hints, palette.base().fg(palette.accent)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
