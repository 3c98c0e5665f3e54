//! Layout helpers for the SyncAI TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the full terminal area into content and a one-line status bar.
pub fn main_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Inset a rect on all sides by a fixed margin.
pub fn padded(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin.min(area.width / 2),
        y: area.y + margin.min(area.height / 2),
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_reserves_status_line() {
        let (content, status) = main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_centered_fixed_clamps_to_area() {
        let rect = centered_fixed(100, 100, Rect::new(0, 0, 80, 24));
        assert!(rect.width <= 80);
        assert!(rect.height <= 24);
    }

    #[test]
    fn test_padded_shrinks_symmetrically() {
        let rect = padded(Rect::new(0, 0, 80, 24), 2);
        assert_eq!(rect, Rect::new(2, 2, 76, 20));
    }
}
