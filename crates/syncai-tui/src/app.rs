//! Application state and update logic for the SyncAI TUI.

use crate::event::Action;
use crate::ui::widgets::TextInputState;
use std::path::PathBuf;
use syncai_engine::{IntegrationStatus, MonthView, ReplyTicket, Session, Settings};

/// The current screen being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Product overview landing view.
    #[default]
    Overview,
    /// Conversation with the scheduling assistant.
    Chat,
    /// Month-grid schedule view.
    Calendar,
    /// Integrations and preferences.
    Settings,
    /// Quit confirmation dialog.
    QuitConfirm,
}

/// Navigable views in sidebar order, addressed by the number keys.
pub const NAV_SCREENS: [Screen; 4] = [
    Screen::Overview,
    Screen::Chat,
    Screen::Calendar,
    Screen::Settings,
];

impl Screen {
    /// Position in [`NAV_SCREENS`], if this is a navigable view.
    fn nav_index(self) -> Option<usize> {
        NAV_SCREENS.iter().position(|s| *s == self)
    }
}

/// Number of non-integration rows on the settings screen (the two
/// privacy toggles).
const SETTINGS_TOGGLE_ROWS: usize = 2;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Current screen.
    pub screen: Screen,

    /// Screen to return to when a quit confirm is cancelled.
    return_screen: Screen,

    /// The conversation session. Recreated fresh on every launch; the
    /// transcript is never persisted.
    pub session: Session,

    /// Text input state for the chat composer.
    pub input_state: TextInputState,

    /// Scroll offset for the transcript pane.
    pub transcript_scroll: usize,

    /// The displayed calendar month.
    pub month: MonthView,

    /// User settings.
    pub settings: Settings,

    /// Where settings are persisted.
    settings_path: PathBuf,

    /// Selected row on the settings screen.
    pub selected_setting: usize,

    /// Tick counter for animations.
    pub tick: usize,

    /// Notification message (displayed temporarily, cleared after some ticks).
    pub notification: Option<String>,

    /// Ticks remaining until notification is cleared.
    notification_ttl: usize,
}

impl App {
    /// Create a new app instance rooted at the given directory.
    pub fn new(base_dir: PathBuf) -> Self {
        let settings_path = base_dir.join(".syncai").join("settings.json");
        let settings = Settings::load(&settings_path).unwrap_or_default();

        Self {
            should_quit: false,
            show_help: false,
            screen: Screen::Overview,
            return_screen: Screen::Overview,
            session: Session::new(),
            input_state: TextInputState::new(),
            transcript_scroll: 0,
            month: MonthView::seeded(),
            settings,
            settings_path,
            selected_setting: 0,
            tick: 0,
            notification: None,
            notification_ttl: 0,
        }
    }

    /// Create an app for tests, pointing settings at a scratch path.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        let mut app = Self::new(std::env::temp_dir().join("syncai-test"));
        app.settings = Settings::default();
        app
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        // Global actions
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else if self.screen == Screen::QuitConfirm {
                    self.should_quit = true;
                } else {
                    self.open_quit_confirm();
                }
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        // View switching, available everywhere except the quit dialog
        if self.screen != Screen::QuitConfirm {
            match action {
                Action::Tab(n) => {
                    if let Some(screen) = NAV_SCREENS.get(n) {
                        self.screen = *screen;
                    }
                    return;
                }
                Action::NextTab | Action::PrevTab => {
                    if let Some(i) = self.screen.nav_index() {
                        let len = NAV_SCREENS.len();
                        let next = if action == Action::NextTab {
                            (i + 1) % len
                        } else {
                            (i + len - 1) % len
                        };
                        self.screen = NAV_SCREENS[next];
                    }
                    return;
                }
                _ => {}
            }
        }

        // Screen-specific actions
        match self.screen {
            Screen::Overview => self.handle_overview_action(action),
            Screen::Chat => self.handle_chat_action(action),
            Screen::Calendar => self.handle_calendar_action(action),
            Screen::Settings => self.handle_settings_action(action),
            Screen::QuitConfirm => self.handle_quit_confirm_action(action),
        }
    }

    fn handle_overview_action(&mut self, action: Action) {
        match action {
            // Enter mirrors the "Run Scheduler Agent" call to action.
            Action::Select => self.screen = Screen::Chat,
            Action::Back => self.open_quit_confirm(),
            _ => {}
        }
    }

    fn handle_chat_action(&mut self, action: Action) {
        match action {
            Action::Back => self.screen = Screen::Overview,
            Action::Up => {
                self.transcript_scroll = self.transcript_scroll.saturating_sub(1);
            }
            Action::Down => {
                self.transcript_scroll += 1;
            }
            _ => {}
        }
    }

    fn handle_calendar_action(&mut self, action: Action) {
        match action {
            Action::Back => self.screen = Screen::Overview,
            Action::Left => self.month.prev_month(),
            Action::Right => self.month.next_month(),
            _ => {}
        }
    }

    fn handle_settings_action(&mut self, action: Action) {
        match action {
            Action::Back => self.screen = Screen::Overview,
            Action::Up => {
                self.selected_setting = self.selected_setting.saturating_sub(1);
            }
            Action::Down => {
                if self.selected_setting + 1 < self.settings_row_count() {
                    self.selected_setting += 1;
                }
            }
            Action::Select => self.toggle_selected_setting(),
            _ => {}
        }
    }

    fn handle_quit_confirm_action(&mut self, action: Action) {
        match action {
            Action::Select => self.should_quit = true,
            Action::Back => self.screen = self.return_screen,
            _ => {}
        }
    }

    fn open_quit_confirm(&mut self) {
        self.return_screen = self.screen;
        self.screen = Screen::QuitConfirm;
    }

    /// Number of selectable rows on the settings screen.
    pub fn settings_row_count(&self) -> usize {
        self.settings.integrations.len() + SETTINGS_TOGGLE_ROWS
    }

    /// Toggle the selected settings row and persist the change.
    fn toggle_selected_setting(&mut self) {
        let integrations = self.settings.integrations.len();
        let message = if self.selected_setting < integrations {
            let kind = self.settings.integrations[self.selected_setting].kind;
            self.settings.toggle_integration(kind);
            let connected = matches!(
                self.settings.integrations[self.selected_setting].status,
                IntegrationStatus::Connected { .. }
            );
            if connected {
                format!("{} connected", kind.display_name())
            } else {
                format!("{} disconnected", kind.display_name())
            }
        } else if self.selected_setting == integrations {
            self.settings.auto_schedule_approval = !self.settings.auto_schedule_approval;
            "Auto-schedule approval updated".to_string()
        } else {
            self.settings.ai_data_access = !self.settings.ai_data_access;
            "AI data access updated".to_string()
        };

        match self.settings.save(&self.settings_path) {
            Ok(()) => self.set_notification(message),
            Err(e) => self.set_notification(format!("Failed to save settings: {e}")),
        }
    }

    /// Submit the composer content to the session.
    ///
    /// Returns the reply ticket when the session accepted the input.
    pub fn submit_input(&mut self) -> Option<ReplyTicket> {
        let content = self.input_state.submit();
        self.send_message(&content)
    }

    /// Submit text directly to the session, bypassing the composer.
    pub fn send_message(&mut self, text: &str) -> Option<ReplyTicket> {
        let ticket = self.session.submit(text)?;
        self.scroll_transcript_to_bottom();
        Some(ticket)
    }

    /// Deliver a deferred assistant reply.
    pub fn deliver_reply(&mut self, ticket: ReplyTicket) {
        if self.session.deliver(ticket).is_some() {
            self.scroll_transcript_to_bottom();
        }
    }

    /// Scroll transcript to show the latest messages.
    fn scroll_transcript_to_bottom(&mut self) {
        // Rough estimate of rendered lines; the chat screen clamps the
        // offset to the real line count when drawing.
        let estimated_lines: usize = self
            .session
            .messages()
            .iter()
            .map(|m| if m.proposal.is_some() { 9 } else { 3 })
            .sum();
        self.transcript_scroll = estimated_lines.saturating_sub(10);
    }

    /// Set a temporary notification message.
    pub fn set_notification(&mut self, msg: String) {
        self.notification = Some(msg);
        // Display for ~3 seconds at 4 Hz tick rate (250ms) = 12 ticks
        self.notification_ttl = 12;
    }

    /// Increment tick counter and update time-based state.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syncai_engine::Role;

    #[test]
    fn test_new_app_defaults() {
        let app = App::new_for_test();
        assert_eq!(app.screen, Screen::Overview);
        assert!(!app.should_quit);
        assert_eq!(app.session.messages().len(), 1);
        assert!(!app.session.is_composing());
    }

    #[test]
    fn test_number_keys_switch_views() {
        let mut app = App::new_for_test();
        app.handle_action(Action::Tab(1));
        assert_eq!(app.screen, Screen::Chat);
        app.handle_action(Action::Tab(2));
        assert_eq!(app.screen, Screen::Calendar);
        app.handle_action(Action::Tab(3));
        assert_eq!(app.screen, Screen::Settings);
        app.handle_action(Action::Tab(0));
        assert_eq!(app.screen, Screen::Overview);
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = App::new_for_test();
        app.handle_action(Action::NextTab);
        assert_eq!(app.screen, Screen::Chat);
        app.handle_action(Action::PrevTab);
        assert_eq!(app.screen, Screen::Overview);
        app.handle_action(Action::PrevTab);
        assert_eq!(app.screen, Screen::Settings);
    }

    #[test]
    fn test_quit_shows_confirm_then_quits() {
        let mut app = App::new_for_test();
        app.screen = Screen::Calendar;

        app.handle_action(Action::Quit);
        assert_eq!(app.screen, Screen::QuitConfirm);
        assert!(!app.should_quit);

        app.handle_action(Action::Select);
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_confirm_cancel_restores_screen() {
        let mut app = App::new_for_test();
        app.screen = Screen::Calendar;

        app.handle_action(Action::Quit);
        app.handle_action(Action::Back);
        assert_eq!(app.screen, Screen::Calendar);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_help_closes_before_quit() {
        let mut app = App::new_for_test();
        app.show_help = true;

        app.handle_action(Action::Quit);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_overview_enter_opens_chat() {
        let mut app = App::new_for_test();
        app.handle_action(Action::Select);
        assert_eq!(app.screen, Screen::Chat);
    }

    #[test]
    fn test_calendar_month_navigation() {
        let mut app = App::new_for_test();
        app.screen = Screen::Calendar;
        assert_eq!(app.month.label(), "October 2026");

        app.handle_action(Action::Right);
        assert_eq!(app.month.label(), "November 2026");
        app.handle_action(Action::Left);
        app.handle_action(Action::Left);
        assert_eq!(app.month.label(), "September 2026");
    }

    #[test]
    fn test_settings_selection_stays_in_bounds() {
        let mut app = App::new_for_test();
        app.screen = Screen::Settings;

        app.handle_action(Action::Up);
        assert_eq!(app.selected_setting, 0);

        for _ in 0..20 {
            app.handle_action(Action::Down);
        }
        assert_eq!(app.selected_setting, app.settings_row_count() - 1);
    }

    #[test]
    fn test_settings_toggle_updates_state() {
        let mut app = App::new_for_test();
        app.screen = Screen::Settings;
        app.selected_setting = app.settings.integrations.len(); // approval toggle
        assert!(app.settings.auto_schedule_approval);

        app.handle_action(Action::Select);
        assert!(!app.settings.auto_schedule_approval);
        assert!(app.notification.is_some());
    }

    #[test]
    fn test_toggle_persists_settings_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(dir.path().to_path_buf());
        app.screen = Screen::Settings;
        app.selected_setting = 1; // Outlook

        app.handle_action(Action::Select);

        let reloaded = Settings::load(&dir.path().join(".syncai").join("settings.json")).unwrap();
        assert!(matches!(
            reloaded.integrations[1].status,
            IntegrationStatus::Connected { .. }
        ));
    }

    #[test]
    fn test_send_message_appends_and_returns_ticket() {
        let mut app = App::new_for_test();
        let ticket = app.send_message("Book time with Alex").expect("accepted");

        assert_eq!(app.session.messages().len(), 2);
        assert_eq!(app.session.last_message().role, Role::User);
        assert!(app.session.is_composing());

        app.deliver_reply(ticket);
        assert_eq!(app.session.messages().len(), 3);
        assert_eq!(app.session.last_message().role, Role::Assistant);
        assert!(app.session.last_message().proposal.is_some());
        assert!(!app.session.is_composing());
    }

    #[test]
    fn test_submit_input_ignores_whitespace() {
        let mut app = App::new_for_test();
        app.input_state.insert_str("   ");
        assert!(app.submit_input().is_none());
        assert_eq!(app.session.messages().len(), 1);
        assert!(app.input_state.is_empty());
    }

    #[test]
    fn test_notification_clears_after_ttl() {
        let mut app = App::new_for_test();
        app.set_notification("saved".to_string());
        assert!(app.notification.is_some());

        for _ in 0..12 {
            app.tick();
        }
        assert!(app.notification.is_none());
    }
}
