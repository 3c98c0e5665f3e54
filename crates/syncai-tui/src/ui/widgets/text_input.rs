//! Single-line text input widget for the chat composer.

use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// State for the text input, managing content, cursor, and history.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    /// The text content.
    content: String,
    /// Cursor position as a character index.
    cursor: usize,
    /// Previously submitted entries for up/down navigation.
    history: Vec<String>,
    /// Index into `history` while navigating; `None` = editing fresh input.
    history_index: Option<usize>,
    /// Input saved while navigating history.
    saved_input: String,
}

impl TextInputState {
    /// Create a new empty text input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let byte_idx = self.byte_index();
        self.content.insert(byte_idx, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        let byte_idx = self.byte_index();
        self.content.insert_str(byte_idx, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.byte_index();
            self.content.remove(byte_idx);
        }
    }

    /// Delete the character at the cursor (delete).
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let byte_idx = self.byte_index();
            self.content.remove(byte_idx);
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    /// Take the content, recording it in history.
    pub fn submit(&mut self) -> String {
        let content = std::mem::take(&mut self.content);
        self.cursor = 0;
        if !content.trim().is_empty() {
            self.history.push(content.clone());
        }
        self.history_index = None;
        self.saved_input.clear();
        content
    }

    /// Navigate to the previous (older) history entry.
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next = match self.history_index {
            None => {
                self.saved_input = std::mem::take(&mut self.content);
                0
            }
            Some(i) if i + 1 < self.history.len() => i + 1,
            Some(i) => i,
        };
        self.history_index = Some(next);
        self.content = self.history[self.history.len() - 1 - next].clone();
        self.move_end();
    }

    /// Navigate to the next (newer) history entry, or back to the
    /// input that was being edited.
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(0) => {
                self.history_index = None;
                self.content = std::mem::take(&mut self.saved_input);
                self.move_end();
            }
            Some(i) => {
                self.history_index = Some(i - 1);
                self.content = self.history[self.history.len() - i].clone();
                self.move_end();
            }
        }
    }

    /// Byte offset of the cursor within `content`.
    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(i, _)| i)
    }

    /// Create a render widget from this state.
    pub fn widget(&self) -> TextInput<'_> {
        TextInput {
            state: self,
            focused: true,
            placeholder: None,
        }
    }
}

/// Render widget for a [`TextInputState`].
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    state: &'a TextInputState,
    focused: bool,
    placeholder: Option<&'a str>,
}

impl<'a> TextInput<'a> {
    /// Set focus state; an unfocused input draws no cursor.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set placeholder text shown when the input is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 1 {
            return;
        }

        let mut spans = vec![Span::styled("> ", Styles::active())];

        if self.state.content.is_empty() {
            if self.focused {
                spans.push(Span::styled("_", Styles::active()));
            }
            if let Some(placeholder) = self.placeholder {
                spans.push(Span::styled(placeholder, Styles::dim()));
            }
        } else {
            let chars: Vec<char> = self.state.content.chars().collect();
            let cursor = self.state.cursor.min(chars.len());

            let before: String = chars[..cursor].iter().collect();
            spans.push(Span::styled(before, Styles::default()));
            if self.focused {
                if cursor < chars.len() {
                    spans.push(Span::styled("|", Styles::active()));
                } else {
                    spans.push(Span::styled("_", Styles::active()));
                }
            }
            let after: String = chars[cursor..].iter().collect();
            spans.push(Span::styled(after, Styles::default()));
        }

        Paragraph::new(Line::from(spans))
            .style(Styles::default())
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut state = TextInputState::new();
        assert!(state.is_empty());

        state.insert('H');
        state.insert('i');
        assert_eq!(state.content(), "Hi");

        state.backspace();
        assert_eq!(state.content(), "H");
    }

    #[test]
    fn test_cursor_movement_and_mid_insert() {
        let mut state = TextInputState::new();
        state.insert_str("Hello");

        state.move_left();
        state.move_left();
        state.insert('X');
        assert_eq!(state.content(), "HelXlo");

        state.move_home();
        state.delete();
        assert_eq!(state.content(), "elXlo");

        state.move_end();
        state.backspace();
        assert_eq!(state.content(), "elXl");
    }

    #[test]
    fn test_multibyte_input() {
        let mut state = TextInputState::new();
        state.insert_str("café");
        state.move_left();
        state.backspace();
        assert_eq!(state.content(), "caé");
    }

    #[test]
    fn test_submit_clears_and_records_history() {
        let mut state = TextInputState::new();
        state.insert_str("first");
        assert_eq!(state.submit(), "first");
        assert!(state.is_empty());

        state.insert_str("second");
        state.submit();

        state.history_prev();
        assert_eq!(state.content(), "second");
        state.history_prev();
        assert_eq!(state.content(), "first");
        state.history_next();
        assert_eq!(state.content(), "second");
        state.history_next();
        assert!(state.is_empty());
    }

    #[test]
    fn test_history_preserves_draft() {
        let mut state = TextInputState::new();
        state.insert_str("sent");
        state.submit();

        state.insert_str("draft");
        state.history_prev();
        assert_eq!(state.content(), "sent");
        state.history_next();
        assert_eq!(state.content(), "draft");
    }
}
