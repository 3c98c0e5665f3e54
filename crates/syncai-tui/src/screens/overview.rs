//! Overview screen - the product landing view.

use crate::app::App;
use crate::screens::Screen;
use crate::ui::theme::{Palette, Styles};
use crate::ui::widgets::{KeyHint, StatusBar};
use crate::ui::{main_layout, padded};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// The Overview screen.
pub struct OverviewScreen;

impl Screen for OverviewScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (main_area, status_area) = main_layout(area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),  // Hero
                Constraint::Min(7),     // Feature columns
                Constraint::Length(3),  // Call to action
            ])
            .split(main_area);

        render_hero(chunks[0], buf);
        render_features(chunks[1], buf);
        render_call_to_action(chunks[2], buf);

        let hints = vec![
            KeyHint::new("Enter", "Open Chat"),
            KeyHint::new("1-4", "Views"),
            KeyHint::new("?", "Help"),
        ];
        let mut status_bar = StatusBar::new("Overview").hints(hints);
        if let Some(notification) = &app.notification {
            status_bar = status_bar.right(notification);
        }
        status_bar.render(status_area, buf);
    }
}

fn render_hero(area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .style(Styles::default());
    let inner = padded(block.inner(area), 1);
    block.render(area, buf);

    let lines = vec![
        Line::from(vec![
            Span::styled("[", Styles::dim()),
            Span::styled(" SYSTEM OPERATIONAL ", Styles::success()),
            Span::styled("]", Styles::dim()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Schedule meetings with engineering precision.",
            Styles::title(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "SyncAI parses natural language, checks every calendar, and proposes \
             slots that work for everyone.",
            Styles::dim(),
        )),
    ];

    Paragraph::new(lines)
        .style(Styles::default())
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Semantic Parsing",
        body: "Type requests the way you would say them. Names, ranges, and constraints are extracted automatically.",
    },
    Feature {
        title: "Conflict Resolution Algorithm",
        body: "Candidate slots are scored against every attendee's calendar before anything is proposed.",
    },
    Feature {
        title: "OAuth Native Integration",
        body: "Connects directly to Google Calendar, Outlook, and Zoom. No forwarding, no copy-paste.",
    },
];

fn render_features(area: Rect, buf: &mut Buffer) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (feature, column) in FEATURES.iter().zip(columns.iter()) {
        let block = Block::default()
            .title(format!(" {} ", feature.title))
            .title_style(Styles::accent())
            .borders(Borders::ALL)
            .border_style(Styles::border())
            .style(Styles::default());
        let inner = padded(block.inner(*column), 1);
        block.render(*column, buf);

        Paragraph::new(feature.body)
            .style(Styles::dim())
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

fn render_call_to_action(area: Rect, buf: &mut Buffer) {
    let line = Line::from(vec![
        Span::styled(" Enter ", Styles::default().bg(Palette::PRIMARY).fg(Palette::BG)),
        Span::styled("  Run Scheduler Agent", Styles::highlight()),
    ]);

    Paragraph::new(line)
        .style(Styles::default())
        .render(padded(area, 1), buf);
}
