//! Toast notifications
//!
//! Short-lived messages shown in the top-right corner after an action.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Border and title colour
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Title shown in the border
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => " Info ",
            Self::Success => " Done ",
            Self::Warning => " Warning ",
            Self::Error => " Error ",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
    ttl: Duration,
}

impl Notification {
    /// Create a notification that lives for three seconds
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            ttl: Duration::from_secs(3),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    /// Override how long the notification stays visible
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

impl Widget for &Notification {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(self.kind.title())
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.message.as_str())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Notifications waiting to be shown, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification; the queue keeps at most the last five
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
        if self.notifications.len() > 5 {
            self.notifications.remove(0);
        }
    }

    /// Drop expired notifications
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// The most recent notification
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_shows_latest() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::info("First"));
        queue.push(Notification::success("Second"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "Second");
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut queue = NotificationQueue::new();
        for i in 0..8 {
            queue.push(Notification::info(format!("n{}", i)));
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.current().unwrap().message, "n7");
    }

    #[test]
    fn test_expired_removed() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::warning("gone").with_ttl(Duration::ZERO));
        queue.push(Notification::error("stays"));

        queue.remove_expired();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().kind, NotificationKind::Error);
    }
}
