//! Calendar screen - the month grid.

use crate::app::App;
use crate::screens::Screen;
use crate::ui::main_layout;
use crate::ui::theme::{Palette, Styles};
use crate::ui::widgets::{KeyHint, StatusBar};
use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use syncai_engine::{EventAccent, MonthCell, DAY_NAMES};

/// The Calendar screen.
pub struct CalendarScreen;

impl Screen for CalendarScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (main_area, status_area) = main_layout(area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Month header
                Constraint::Length(1), // Weekday names
                Constraint::Min(5),    // Grid
            ])
            .split(main_area);

        render_month_header(app, chunks[0], buf);
        render_weekday_header(chunks[1], buf);
        render_grid(app, chunks[2], buf);

        let hints = vec![
            KeyHint::new("h/l", "Prev/Next Month"),
            KeyHint::new("Esc", "Back"),
            KeyHint::new("?", "Help"),
        ];
        let mut status_bar = StatusBar::new("Calendar").hints(hints);
        if let Some(notification) = &app.notification {
            status_bar = status_bar.right(notification);
        }
        status_bar.render(status_area, buf);
    }
}

fn accent_color(accent: EventAccent) -> Color {
    match accent {
        EventAccent::Primary => Palette::PRIMARY,
        EventAccent::Accent => Palette::ACCENT,
        EventAccent::Secondary => Palette::WARNING,
        EventAccent::Neutral => Palette::DIM,
    }
}

fn render_month_header(app: &App, area: Rect, buf: &mut Buffer) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", app.month.label()), Styles::title()),
        Span::styled("  h/l to change month", Styles::dim()),
    ]);
    Paragraph::new(line).style(Styles::default()).render(area, buf);
}

#[allow(clippy::cast_possible_truncation)]
fn render_weekday_header(area: Rect, buf: &mut Buffer) {
    let col_width = area.width / 7;
    if col_width == 0 {
        return;
    }
    for (i, name) in DAY_NAMES.iter().enumerate() {
        let x = area.x + col_width * i as u16;
        buf.set_string(x + 1, area.y, name, Styles::dim());
    }
}

#[allow(clippy::cast_possible_truncation)]
fn render_grid(app: &App, area: Rect, buf: &mut Buffer) {
    let cells = app.month.cells();
    let rows = cells.len() / 7;
    if rows == 0 || area.width < 7 || area.height < rows as u16 {
        return;
    }

    let row_constraints: Vec<Constraint> =
        (0..rows).map(|_| Constraint::Ratio(1, rows as u32)).collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    let col_constraints: Vec<Constraint> = (0..7).map(|_| Constraint::Ratio(1, 7)).collect();

    for (row, row_area) in row_areas.iter().enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints.clone())
            .split(*row_area);
        for (col, cell_area) in col_areas.iter().enumerate() {
            render_cell(app, &cells[row * 7 + col], *cell_area, buf);
        }
    }
}

fn render_cell(app: &App, cell: &MonthCell, area: Rect, buf: &mut Buffer) {
    let border = if cell.is_today {
        Styles::border_active()
    } else {
        Styles::border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .style(Styles::default());
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.width < 2 || inner.height < 1 {
        return;
    }

    let day_style = if cell.is_today {
        Styles::highlight()
    } else if cell.in_month {
        Styles::default()
    } else {
        Styles::dim()
    };
    let mut lines = vec![Line::from(Span::styled(
        cell.date.day().to_string(),
        day_style,
    ))];

    for event in app.month.events_on(cell.date) {
        let style = Styles::default().fg(accent_color(event.accent));
        lines.push(Line::from(Span::styled(
            format!("{} {}", event.time, event.title),
            style,
        )));
    }

    Paragraph::new(lines).style(Styles::default()).render(inner, buf);
}
