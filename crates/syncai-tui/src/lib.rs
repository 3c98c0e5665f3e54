//! syncai-tui: Terminal UI for the SyncAI scheduling assistant
//!
//! This crate provides the TUI layer for SyncAI, including:
//! - Overview screen with the product pitch
//! - Chat screen for conversing with the assistant
//! - Calendar screen with the month grid
//! - Settings screen for integrations and privacy toggles

mod app;
mod event;
mod screens;
#[cfg(test)]
pub mod test_utils;
mod ui;

use screens::Screen as ScreenTrait;

pub use app::{App, Screen};
pub use event::{Action, Event, EventHandler};
pub use syncai_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, buffer::Buffer, layout::Rect, Terminal};
use std::io::{self, stdout};
use std::path::Path;
use syncai_engine::ReplyTicket;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(base_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(base_path.to_path_buf());

    // Create event handler (4 Hz tick rate = 250ms)
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

/// Render the full app (current screen plus overlays) into a buffer.
fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    match app.screen {
        Screen::Overview => screens::overview::OverviewScreen.render(app, area, buf),
        Screen::Chat => screens::chat::ChatScreen.render(app, area, buf),
        Screen::Calendar => screens::calendar::CalendarScreen.render(app, area, buf),
        Screen::Settings => screens::settings::SettingsScreen.render(app, area, buf),
        Screen::QuitConfirm => screens::render_quit_confirm(area, buf),
    }

    if app.show_help {
        screens::render_help_overlay(area, buf);
    }
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    // Deferred assistant replies in flight
    let mut reply_handles: Vec<tokio::task::JoinHandle<ReplyTicket>> = Vec::new();

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            render_app(app, area, buf);
        })?;

        // Deliver any replies whose delay has elapsed (non-blocking)
        let mut completed = Vec::new();
        for (i, handle) in reply_handles.iter().enumerate() {
            if handle.is_finished() {
                completed.push(i);
            }
        }
        for i in completed.into_iter().rev() {
            if let Ok(ticket) = reply_handles.remove(i).await {
                app.deliver_reply(ticket);
            }
        }

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    // Chat composer gets first crack at key input
                    if app.screen == Screen::Chat
                        && !app.show_help
                        && handle_chat_key(app, key, &mut reply_handles)
                    {
                        continue;
                    }
                    let action = event::key_to_action(key);
                    app.handle_action(action);
                }
                Event::Mouse(mouse) => {
                    use crossterm::event::MouseEventKind;
                    match mouse.kind {
                        MouseEventKind::ScrollUp => app.handle_action(Action::Up),
                        MouseEventKind::ScrollDown => app.handle_action(Action::Down),
                        _ => {}
                    }
                }
                Event::Tick => {
                    app.tick();
                }
                Event::Resize(_, _) => {
                    // Terminal handles resize automatically
                }
            }
        }

        if app.should_quit {
            // A reply still in flight at shutdown is simply dropped
            for handle in reply_handles {
                handle.abort();
            }
            break;
        }
    }

    Ok(())
}

/// Handle key input for the chat composer.
/// Returns true if the key was handled (should not be processed as action).
fn handle_chat_key(
    app: &mut App,
    key: crossterm::event::KeyEvent,
    reply_handles: &mut Vec<tokio::task::JoinHandle<ReplyTicket>>,
) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false; // Let action handler deal with Ctrl+C
    }

    match key.code {
        // Special keys that should be handled as actions
        KeyCode::Esc | KeyCode::Tab => false,

        // Enter sends the message
        KeyCode::Enter => {
            if let Some(ticket) = app.submit_input() {
                let handle = tokio::spawn(async move {
                    tokio::time::sleep(ticket.delay()).await;
                    ticket
                });
                reply_handles.push(handle);
            }
            true
        }

        // Text input
        KeyCode::Char(c) => {
            app.input_state.insert(c);
            true
        }
        KeyCode::Backspace => {
            app.input_state.backspace();
            true
        }
        KeyCode::Delete => {
            app.input_state.delete();
            true
        }
        KeyCode::Left => {
            app.input_state.move_left();
            true
        }
        KeyCode::Right => {
            app.input_state.move_right();
            true
        }
        KeyCode::Home => {
            app.input_state.move_home();
            true
        }
        KeyCode::End => {
            app.input_state.move_end();
            true
        }
        KeyCode::Up => {
            // History navigation when input is empty
            if app.input_state.is_empty() {
                app.input_state.history_prev();
                true
            } else {
                false // Let action handler scroll transcript
            }
        }
        KeyCode::Down => {
            if app.input_state.is_empty() {
                app.input_state.history_next();
                true
            } else {
                false
            }
        }

        _ => false,
    }
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        create_test_app, create_test_app_at_screen, render_to_string, render_to_string_sized,
    };
    use syncai_engine::{Role, REPLY_DELAY};

    #[test]
    fn test_tui_version() {
        assert!(!tui_version().is_empty());
    }

    #[test]
    fn test_overview_renders_pitch() {
        let app = create_test_app();
        let content = render_to_string(&app);
        assert!(content.contains("SYSTEM OPERATIONAL"));
        assert!(content.contains("Schedule meetings with engineering"));
        assert!(content.contains("Semantic Parsing"));
        assert!(content.contains("Conflict Resolution Algorithm"));
        assert!(content.contains("OAuth Native Integration"));
        assert!(content.contains("Run Scheduler Agent"));
    }

    #[test]
    fn test_chat_renders_welcome_and_composer() {
        let app = create_test_app_at_screen(Screen::Chat);
        let content = render_to_string(&app);
        assert!(content.contains("SyncAI"));
        assert!(content.contains("help you find time"));
        assert!(content.contains("Message assistant..."));
    }

    #[test]
    fn test_chat_shows_typing_indicator_while_composing() {
        let mut app = create_test_app_at_screen(Screen::Chat);
        app.send_message("Meet with Jordan on Friday");
        let content = render_to_string(&app);
        assert!(content.contains("SyncAI is thinking"));
    }

    #[test]
    fn test_chat_shows_proposal_card_after_reply() {
        let mut app = create_test_app_at_screen(Screen::Chat);
        let ticket = app.send_message("Meet with Jordan").expect("accepted");
        app.deliver_reply(ticket);

        let content = render_to_string(&app);
        assert!(content.contains("Proposed slot"));
        assert!(content.contains("Oct 24"));
        assert!(content.contains("2:00 PM - 2:30 PM"));
        assert!(content.contains("Eastern Time (ET)"));
        assert!(!content.contains("SyncAI is thinking"));
    }

    #[test]
    fn test_calendar_renders_month_and_events() {
        let app = create_test_app_at_screen(Screen::Calendar);
        let content = render_to_string_sized(&app, 180, 40);
        assert!(content.contains("October 2026"));
        assert!(content.contains("Mon"));
        assert!(content.contains("Sun"));
        assert!(content.contains("Design Sync"));
        assert!(content.contains("Board Meeting"));
    }

    #[test]
    fn test_settings_renders_integrations_and_toggles() {
        let app = create_test_app_at_screen(Screen::Settings);
        let content = render_to_string(&app);
        assert!(content.contains("Google Calendar"));
        assert!(content.contains("user@organization.com"));
        assert!(content.contains("Not connected"));
        assert!(content.contains("Auto-Schedule Approval"));
        assert!(content.contains("AI Data Access"));
        assert!(content.contains("Working Hours"));
    }

    #[test]
    fn test_quit_confirm_renders_dialog() {
        let app = create_test_app_at_screen(Screen::QuitConfirm);
        let content = render_to_string(&app);
        assert!(content.contains("Quit SyncAI?"));
        assert!(content.contains("will not be saved"));
    }

    #[test]
    fn test_help_overlay_renders_on_top() {
        let mut app = create_test_app();
        app.show_help = true;
        let content = render_to_string(&app);
        assert!(content.contains("Help"));
        assert!(content.contains("Toggle this help"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_fixed_delay() {
        let mut app = create_test_app_at_screen(Screen::Chat);
        let ticket = app.send_message("Book time with Alex").expect("accepted");

        let handle = tokio::spawn(async move {
            tokio::time::sleep(ticket.delay()).await;
            ticket
        });

        // Just before the delay elapses the task must still be pending
        tokio::time::sleep(REPLY_DELAY - std::time::Duration::from_millis(1)).await;
        assert!(!handle.is_finished());

        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let ticket = handle.await.expect("task completes");
        app.deliver_reply(ticket);

        assert_eq!(app.session.last_message().role, Role::Assistant);
        assert!(app.session.last_message().proposal.is_some());
        assert!(!app.session.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_ticket_after_relaunch_is_dropped() {
        let mut app = create_test_app_at_screen(Screen::Chat);
        let ticket = app.send_message("Book time with Alex").expect("accepted");

        // Simulate a relaunch: a fresh session replaces the old one
        let mut fresh = create_test_app_at_screen(Screen::Chat);
        fresh.deliver_reply(ticket);

        assert_eq!(fresh.session.messages().len(), 1);
        assert!(!fresh.session.is_composing());
        assert!(app.session.is_composing());
    }
}
