//! Settings screen - integrations and privacy preferences.

use crate::app::App;
use crate::screens::Screen;
use crate::ui::theme::Styles;
use crate::ui::widgets::{KeyHint, StatusBar};
use crate::ui::{main_layout, padded};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use syncai_engine::IntegrationStatus;

/// The Settings screen.
pub struct SettingsScreen;

impl Screen for SettingsScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (main_area, status_area) = main_layout(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(7), Constraint::Length(6)])
            .split(columns[0]);

        render_integrations(app, left[0], buf);
        render_privacy(app, left[1], buf);
        render_sidebar(app, columns[1], buf);

        let hints = vec![
            KeyHint::new("Up/Dn", "Select"),
            KeyHint::new("Enter", "Toggle"),
            KeyHint::new("Esc", "Back"),
            KeyHint::new("?", "Help"),
        ];
        let mut status_bar = StatusBar::new("Settings").hints(hints);
        if let Some(notification) = &app.notification {
            status_bar = status_bar.right(notification);
        }
        status_bar.render(status_area, buf);
    }
}

fn marker(selected: bool) -> Span<'static> {
    if selected {
        Span::styled("> ", Styles::highlight())
    } else {
        Span::styled("  ", Styles::default())
    }
}

fn render_integrations(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(" Integrations ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .style(Styles::default());
    let inner = padded(block.inner(area), 1);
    block.render(area, buf);

    let mut lines = Vec::new();
    for (i, integration) in app.settings.integrations.iter().enumerate() {
        let selected = app.selected_setting == i;
        let mut spans = vec![
            marker(selected),
            Span::styled(
                format!("{:<16}", integration.kind.display_name()),
                if selected {
                    Styles::highlight()
                } else {
                    Styles::default()
                },
            ),
        ];
        match &integration.status {
            IntegrationStatus::Connected { account } => {
                spans.push(Span::styled("Connected", Styles::success()));
                lines.push(Line::from(spans));
                lines.push(Line::from(Span::styled(
                    format!("    {account}"),
                    Styles::dim(),
                )));
            }
            IntegrationStatus::NotConnected => {
                spans.push(Span::styled("Not connected", Styles::dim()));
                lines.push(Line::from(spans));
            }
        }
        lines.push(Line::from(""));
    }

    Paragraph::new(lines).style(Styles::default()).render(inner, buf);
}

fn render_privacy(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(" Privacy & Automation ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .style(Styles::default());
    let inner = padded(block.inner(area), 1);
    block.render(area, buf);

    let base = app.settings.integrations.len();
    let toggles = [
        (
            "Auto-Schedule Approval",
            app.settings.auto_schedule_approval,
            base,
        ),
        ("AI Data Access", app.settings.ai_data_access, base + 1),
    ];

    let mut lines = Vec::new();
    for (label, enabled, row) in toggles {
        let selected = app.selected_setting == row;
        let state = if enabled {
            Span::styled("[on] ", Styles::success())
        } else {
            Span::styled("[off]", Styles::dim())
        };
        lines.push(Line::from(vec![
            marker(selected),
            Span::styled(
                format!("{label:<24}"),
                if selected {
                    Styles::highlight()
                } else {
                    Styles::default()
                },
            ),
            state,
        ]));
    }

    Paragraph::new(lines).style(Styles::default()).render(inner, buf);
}

fn render_sidebar(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(5)])
        .split(area);

    let hours_block = Block::default()
        .title(" Working Hours ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .style(Styles::default());
    let hours_inner = padded(hours_block.inner(chunks[0]), 1);
    hours_block.render(chunks[0], buf);

    let hours = &app.settings.working_hours;
    let hours_lines = vec![
        Line::from(vec![
            Span::styled("Mon - Fri  ", Styles::dim()),
            Span::styled(hours.weekday.clone(), Styles::default()),
        ]),
        Line::from(vec![
            Span::styled("Sat - Sun  ", Styles::dim()),
            Span::styled(hours.weekend.clone(), Styles::default()),
        ]),
    ];
    Paragraph::new(hours_lines)
        .style(Styles::default())
        .render(hours_inner, buf);

    let pro_block = Block::default()
        .title(" SyncAI Pro ")
        .title_style(Styles::accent())
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .style(Styles::default());
    let pro_inner = padded(pro_block.inner(chunks[1]), 1);
    pro_block.render(chunks[1], buf);

    Paragraph::new(
        "Unlimited scheduling agents, priority conflict resolution, and \
         team-wide availability insights.",
    )
    .style(Styles::dim())
    .wrap(Wrap { trim: true })
    .render(pro_inner, buf);
}
