//! Colour palettes for the light and dark themes

use ratatui::style::{Color, Modifier, Style};

use crate::models::Theme;

/// Colours used across all views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub danger: Color,
}

impl Palette {
    /// Palette for a theme
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                bg: Color::White,
                fg: Color::Black,
                accent: Color::Blue,
                muted: Color::DarkGray,
                highlight_bg: Color::LightBlue,
                highlight_fg: Color::Black,
                danger: Color::Red,
            },
            Theme::Dark => Self {
                bg: Color::Black,
                fg: Color::White,
                accent: Color::Yellow,
                muted: Color::Gray,
                highlight_bg: Color::DarkGray,
                highlight_fg: Color::Yellow,
                danger: Color::LightRed,
            },
        }
    }

    /// Base style for backgrounds and body text
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Bold accent style for titles
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style, brighter when the panel has focus
    pub fn border(&self, focused: bool) -> Style {
        let fg = if focused { self.accent } else { self.muted };
        Style::default().fg(fg).bg(self.bg)
    }

    /// Style for the selected list row
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }
}
