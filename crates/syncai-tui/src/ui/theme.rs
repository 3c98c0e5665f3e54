//! Theme and styling definitions for the SyncAI TUI.
//!
//! The palette follows the product's dark zinc look with the purple
//! primary accent.

use ratatui::style::{Color, Modifier, Style};

/// Color palette for the TUI.
pub struct Palette;

impl Palette {
    // Base colors
    pub const BG: Color = Color::Rgb(24, 24, 27);
    pub const FG: Color = Color::Rgb(244, 244, 245);
    pub const DIM: Color = Color::Rgb(161, 161, 170);

    // Accent colors
    pub const PRIMARY: Color = Color::Rgb(150, 120, 255);
    pub const ACCENT: Color = Color::Rgb(130, 220, 200);

    // Status bar colors (high contrast)
    pub const STATUS_BG: Color = Color::Rgb(39, 39, 46);
    pub const STATUS_KEY_BG: Color = Color::Rgb(88, 70, 160);

    // Status colors
    pub const SUCCESS: Color = Color::Rgb(74, 222, 128);
    pub const WARNING: Color = Color::Rgb(250, 204, 21);
    pub const ERROR: Color = Color::Rgb(248, 113, 113);

    // Border colors
    pub const BORDER: Color = Color::Rgb(63, 63, 70);
    pub const BORDER_ACTIVE: Color = Color::Rgb(150, 120, 255);
}

/// Frames for the assistant typing indicator, advanced once per tick.
pub const TYPING_FRAMES: [&str; 4] = ["   ", ".  ", ".. ", "..."];

/// Common styles used throughout the TUI.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::BG)
    }

    /// Dimmed text for secondary information.
    pub fn dim() -> Style {
        Style::default().fg(Palette::DIM).bg(Palette::BG)
    }

    /// Highlighted/selected item.
    pub fn highlight() -> Style {
        Style::default()
            .fg(Palette::PRIMARY)
            .bg(Palette::BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active/focused element.
    pub fn active() -> Style {
        Style::default().fg(Palette::PRIMARY).bg(Palette::BG)
    }

    /// Secondary accent.
    pub fn accent() -> Style {
        Style::default().fg(Palette::ACCENT).bg(Palette::BG)
    }

    /// Success status.
    pub fn success() -> Style {
        Style::default().fg(Palette::SUCCESS).bg(Palette::BG)
    }

    /// Warning status.
    pub fn warning() -> Style {
        Style::default().fg(Palette::WARNING).bg(Palette::BG)
    }

    /// Error status.
    pub fn error() -> Style {
        Style::default().fg(Palette::ERROR).bg(Palette::BG)
    }

    /// Title style.
    pub fn title() -> Style {
        Style::default()
            .fg(Palette::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint style (for status bar) - bright on dark for visibility.
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Palette::FG)
            .bg(Palette::STATUS_KEY_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint label style - readable on status bar background.
    pub fn key_label() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Status bar background style.
    pub fn status_bar() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Border style for inactive elements.
    pub fn border() -> Style {
        Style::default().fg(Palette::BORDER)
    }

    /// Border style for active/focused elements.
    pub fn border_active() -> Style {
        Style::default().fg(Palette::BORDER_ACTIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_frames_cycle() {
        // One frame per tick; all frames render at the same width so the
        // indicator doesn't jitter.
        for frame in TYPING_FRAMES {
            assert_eq!(frame.len(), 3);
        }
    }

    #[test]
    fn test_highlight_is_bold() {
        assert!(Styles::highlight().add_modifier.contains(Modifier::BOLD));
    }
}
