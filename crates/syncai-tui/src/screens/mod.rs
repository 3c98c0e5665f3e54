//! Screen definitions for the SyncAI TUI.

pub mod calendar;
pub mod chat;
pub mod overview;
pub mod settings;

use crate::app::App;
use crate::ui::centered_fixed;
use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Render the help overlay.
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let help_text = r"
  Navigation
    1-4               Jump to view
    Tab / Shift+Tab   Next/prev view
    j/k or Up/Down    Scroll / select
    h/l or Left/Right Previous/next month
    Enter             Select/send
    Esc               Back
    q                 Quit
    ?                 Toggle this help

  [Press any key to close]
";

    let width = 50.min(area.width.saturating_sub(4));
    let height = 16.min(area.height.saturating_sub(4));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .style(Styles::default());

    Paragraph::new(help_text)
        .block(block)
        .style(Styles::default())
        .render(overlay_area, buf);
}

/// Render the quit confirmation dialog.
pub fn render_quit_confirm(area: Rect, buf: &mut Buffer) {
    let width = 44.min(area.width.saturating_sub(4));
    let height = 7.min(area.height.saturating_sub(4));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Quit SyncAI? ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .style(Styles::default());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  The conversation will not be saved.",
            Styles::dim(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Enter ", Styles::highlight()),
            Span::styled("Quit    ", Styles::default()),
            Span::styled("Esc ", Styles::highlight()),
            Span::styled("Stay", Styles::default()),
        ]),
    ];

    Paragraph::new(lines)
        .block(block)
        .style(Styles::default())
        .render(overlay_area, buf);
}
