//! Chat screen - the conversation with the scheduling assistant.

use crate::app::App;
use crate::screens::Screen;
use crate::ui::main_layout;
use crate::ui::theme::{Styles, TYPING_FRAMES};
use crate::ui::widgets::{KeyHint, StatusBar};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use syncai_engine::{Message, Role};

/// The Chat screen.
pub struct ChatScreen;

impl Screen for ChatScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (main_area, status_area) = main_layout(area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Transcript
                Constraint::Length(3), // Composer
            ])
            .split(main_area);

        render_transcript(app, chunks[0], buf);
        render_composer(app, chunks[1], buf);

        let hints = vec![
            KeyHint::new("Enter", "Send"),
            KeyHint::new("Up/Dn", "Scroll"),
            KeyHint::new("Esc", "Back"),
            KeyHint::new("?", "Help"),
        ];
        let mut status_bar = StatusBar::new("Chat").hints(hints);
        if let Some(notification) = &app.notification {
            status_bar = status_bar.right(notification);
        } else {
            status_bar = status_bar.right("SyncAI can make mistakes.");
        }
        status_bar.render(status_area, buf);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn render_transcript(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(" Conversation ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .style(Styles::default());
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.width < 4 || inner.height < 1 {
        return;
    }

    let wrap_width = inner.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for message in app.session.messages() {
        push_message_lines(&mut lines, message, wrap_width);
    }

    if app.session.is_composing() {
        let frame = TYPING_FRAMES[app.tick % TYPING_FRAMES.len()];
        lines.push(Line::from(Span::styled(
            format!("SyncAI is thinking{frame}"),
            Styles::dim(),
        )));
    }

    // Clamp the requested offset so scrolling past the end still shows
    // the last page.
    let max_scroll = lines.len().saturating_sub(inner.height as usize);
    let offset = app.transcript_scroll.min(max_scroll);

    Paragraph::new(lines)
        .style(Styles::default())
        .scroll((offset as u16, 0))
        .render(inner, buf);
}

fn push_message_lines(lines: &mut Vec<Line>, message: &Message, wrap_width: usize) {
    let (name, name_style) = match message.role {
        Role::User => ("You", Styles::accent()),
        Role::Assistant => ("SyncAI", Styles::highlight()),
    };
    lines.push(Line::from(Span::styled(name, name_style)));

    for wrapped in textwrap::wrap(&message.content, wrap_width.max(1)) {
        lines.push(Line::from(Span::styled(
            wrapped.into_owned(),
            Styles::default(),
        )));
    }

    if let Some(proposal) = &message.proposal {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  ", Styles::default()),
            Span::styled("Proposed slot", Styles::accent()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  ", Styles::default()),
            Span::styled(
                format!("{} ({})", proposal.date, proposal.date_label),
                Styles::default(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  ", Styles::default()),
            Span::styled(proposal.time_range(), Styles::default()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  ", Styles::default()),
            Span::styled(proposal.timezone.clone(), Styles::dim()),
        ]));
    }

    lines.push(Line::from(""));
}

fn render_composer(app: &App, area: Rect, buf: &mut Buffer) {
    let border = if app.session.is_composing() {
        Styles::border()
    } else {
        Styles::border_active()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .style(Styles::default());
    let inner = block.inner(area);
    block.render(area, buf);

    app.input_state
        .widget()
        .focused(true)
        .placeholder("Message assistant...")
        .render(inner, buf);
}
