//! Input box and expense list

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the bordered input box
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let focused = app.focus == Focus::Input;

    let block = Block::default()
        .title(" New expense ")
        .title_bottom(Line::from(" Enter: Add ").right_aligned())
        .borders(Borders::ALL)
        .border_style(palette.border(focused))
        .style(palette.base());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = app
        .input
        .clone()
        .focused(focused)
        .colors(palette.fg, palette.muted, palette.accent);
    frame.render_widget(input, inner);
}

/// Render the expense list, one row per entry
pub fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let focused = app.focus == Focus::List;

    let block = Block::default()
        .title(format!(" Expenses ({}) ", app.store.len()))
        .borders(Borders::ALL)
        .border_style(palette.border(focused))
        .style(palette.base());

    if app.store.is_empty() {
        let hint = Paragraph::new("No expenses yet. Type one above and press Enter.")
            .style(palette.base().fg(palette.muted))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = app
        .store
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3}  ", i), palette.base().fg(palette.muted)),
                Span::raw(entry.label().to_string()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(palette.highlight())
        .highlight_symbol(if focused { "> " } else { "  " });

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
