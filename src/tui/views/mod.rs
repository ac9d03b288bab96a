//! TUI Views module
//!
//! Renders the editor: header, input, expense list, status bar, and any
//! open dialog or toast on top.

pub mod expense_list;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.palette();
    let area = frame.area();

    frame.render_widget(Block::default().style(palette.base()), area);

    let layout = AppLayout::new(area);

    let header = Line::from(vec![
        Span::styled(" Expense Tracker", palette.title()),
        Span::styled(format!("  ({} theme)", app.theme), palette.base().fg(palette.muted)),
    ]);
    frame.render_widget(Paragraph::new(header).style(palette.base()), layout.header);

    expense_list::render_input(frame, app, layout.input);
    expense_list::render_list(frame, app, layout.list);
    status_bar::render(frame, app, layout.status_bar);

    render_notification(frame, app, area);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog.clone() {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::ConfirmDelete(index) => {
            let label = app
                .store
                .get(index)
                .map(|e| e.label().to_string())
                .unwrap_or_default();
            dialogs::confirm::render(frame, &app.palette(), &format!("Delete '{}'?", label));
        }
        ActiveDialog::None => {}
    }
}

/// Render the newest toast in the top-right corner
fn render_notification(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notification) = app.notifications.current() else {
        return;
    };

    let width = 36.min(area.width);
    let height = 3.min(area.height);
    let toast = Rect::new(area.x + area.width - width, area.y, width, height);
    frame.render_widget(notification, toast);
}
