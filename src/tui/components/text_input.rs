//! Single-line text input component

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{byte_offset, screen_offset, scroll_offset, visible_slice};

/// Single-line text input widget. The cursor counts characters, not bytes.
#[derive(Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
    label: String,
    placeholder: String,
}

impl TextInput {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Default::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self) -> usize {
        byte_offset(&self.value, self.cursor)
    }

    /// Insert pasted text at the cursor. Line breaks are dropped.
    pub fn handle_paste(&mut self, text: &str) {
        let cleaned: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let at = self.byte_index();
        self.value.insert_str(at, &cleaned);
        self.cursor += cleaned.chars().count();
    }

    /// Handle key event, returns true if the value changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let changed = !self.value.is_empty();
                self.value.clear();
                self.cursor = 0;
                changed
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            KeyCode::Char(c) => {
                let at = self.byte_index();
                self.value.insert(at, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_index();
                self.value.remove(at);
                true
            }
            KeyCode::Delete => {
                if self.cursor >= self.char_len() {
                    return false;
                }
                let at = self.byte_index();
                self.value.remove(at);
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                false
            }
            _ => false,
        }
    }

    /// Render the input; a validation error turns the border red
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, error: Option<&str>) {
        // Keep the cursor in view on narrow terminals
        let inner_width = area.width.saturating_sub(2) as usize;
        let scroll = scroll_offset(self.cursor, inner_width);

        let display_value = if self.value.is_empty() {
            Span::styled(&self.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(visible_slice(&self.value, scroll, inner_width))
        };

        let border_color = match (error.is_some(), focused) {
            (true, _) => Color::Red,
            (false, true) => Color::Green,
            (false, false) => Color::Gray,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(self.label.as_str());

        frame.render_widget(Paragraph::new(Line::from(display_value)).block(block), area);

        if focused {
            let x = screen_offset(area.x, 1 + self.cursor - scroll);
            frame.set_cursor_position((x, area.y.saturating_add(1)));
        }
    }
}
