//! Test utilities for rendering screens to strings.

use crate::app::{App, Screen};
use ratatui::{buffer::Buffer, layout::Rect};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test app with default mock data.
pub fn create_test_app() -> App {
    App::new_for_test()
}

/// Create a test app positioned at a specific screen.
pub fn create_test_app_at_screen(screen: Screen) -> App {
    let mut app = App::new_for_test();
    app.screen = screen;
    app
}

/// Convert a buffer to a plain string, one row per line with trailing
/// whitespace removed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.y..area.y + area.height {
        let mut row = String::new();
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                row.push_str(cell.symbol());
            }
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// Render the app at the default test size and return the content.
pub fn render_to_string(app: &App) -> String {
    render_to_string_sized(app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render the app at a custom size and return the content.
pub fn render_to_string_sized(app: &App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    crate::render_app(app, area, &mut buffer);
    buffer_to_string(&buffer)
}
