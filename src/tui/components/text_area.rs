//! Multi-line text area component for the order notes

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{byte_offset, screen_offset, scroll_offset, visible_slice};

fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Multi-line text area widget
#[derive(Clone)]
pub struct TextArea {
    lines: Vec<String>,
    cursor_line: usize,
    /// Column in characters
    cursor_col: usize,
    label: String,
    placeholder: String,
}

impl TextArea {
    pub fn new(label: &str) -> Self {
        Self {
            lines: vec![String::new()],
            cursor_line: 0,
            cursor_col: 0,
            label: label.to_string(),
            placeholder: String::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn cursor_line(&self) -> usize {
        self.cursor_line
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn current(&self) -> &String {
        &self.lines[self.cursor_line]
    }

    fn insert_char(&mut self, c: char) {
        let at = byte_offset(self.current(), self.cursor_col);
        self.lines[self.cursor_line].insert(at, c);
        self.cursor_col += 1;
    }

    fn break_line(&mut self) {
        let at = byte_offset(self.current(), self.cursor_col);
        let rest = self.lines[self.cursor_line].split_off(at);
        self.cursor_line += 1;
        self.lines.insert(self.cursor_line, rest);
        self.cursor_col = 0;
    }

    fn insert_str(&mut self, text: &str) {
        let at = byte_offset(self.current(), self.cursor_col);
        self.lines[self.cursor_line].insert_str(at, text);
        self.cursor_col += char_len(text);
    }

    /// Insert pasted text at the cursor
    pub fn handle_paste(&mut self, text: &str) {
        let cleaned = text.replace('\r', "");
        for (i, segment) in cleaned.split('\n').enumerate() {
            if i > 0 {
                self.break_line();
            }
            self.insert_str(segment);
        }
    }

    /// Handle key event, returns true if the content changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Enter => {
                self.break_line();
                true
            }
            KeyCode::Backspace => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                    let at = byte_offset(self.current(), self.cursor_col);
                    self.lines[self.cursor_line].remove(at);
                    true
                } else if self.cursor_line > 0 {
                    let removed = self.lines.remove(self.cursor_line);
                    self.cursor_line -= 1;
                    self.cursor_col = char_len(self.current());
                    self.lines[self.cursor_line].push_str(&removed);
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if self.cursor_col < char_len(self.current()) {
                    let at = byte_offset(self.current(), self.cursor_col);
                    self.lines[self.cursor_line].remove(at);
                    true
                } else if self.cursor_line + 1 < self.lines.len() {
                    let next = self.lines.remove(self.cursor_line + 1);
                    self.lines[self.cursor_line].push_str(&next);
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                } else if self.cursor_line > 0 {
                    self.cursor_line -= 1;
                    self.cursor_col = char_len(self.current());
                }
                false
            }
            KeyCode::Right => {
                if self.cursor_col < char_len(self.current()) {
                    self.cursor_col += 1;
                } else if self.cursor_line + 1 < self.lines.len() {
                    self.cursor_line += 1;
                    self.cursor_col = 0;
                }
                false
            }
            KeyCode::Up if self.cursor_line > 0 => {
                self.cursor_line -= 1;
                self.cursor_col = self.cursor_col.min(char_len(self.current()));
                false
            }
            KeyCode::Down if self.cursor_line + 1 < self.lines.len() => {
                self.cursor_line += 1;
                self.cursor_col = self.cursor_col.min(char_len(self.current()));
                false
            }
            KeyCode::Home => {
                self.cursor_col = 0;
                false
            }
            KeyCode::End => {
                self.cursor_col = char_len(self.current());
                false
            }
            _ => false,
        }
    }

    /// Render the text area
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_color = if focused { Color::Green } else { Color::Gray };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(self.label.as_str());

        let inner = block.inner(area);
        let visible_height = inner.height.max(1) as usize;
        let inner_width = inner.width as usize;
        let scroll = (self.cursor_line + 1).saturating_sub(visible_height);
        // Every line shares the cursor line's sideways offset
        let h_scroll = scroll_offset(self.cursor_col, inner_width);

        let content: Vec<Line> = if self.is_empty() {
            vec![Line::from(Span::styled(
                &self.placeholder,
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.lines
                .iter()
                .skip(scroll)
                .take(visible_height)
                .map(|line| Line::from(visible_slice(line, h_scroll, inner_width)))
                .collect()
        };

        frame.render_widget(Paragraph::new(content).block(block), area);

        if focused && !inner.is_empty() {
            frame.set_cursor_position((
                screen_offset(inner.x, self.cursor_col - h_scroll),
                screen_offset(inner.y, self.cursor_line - scroll),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{
        backend::{Backend, TestBackend},
        layout::Position,
        Terminal,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_splits_lines() {
        let mut area = TextArea::new("Notes");
        assert!(area.is_empty());
        area.handle_paste("kategori");
        area.handle_key(key(KeyCode::Enter));
        area.handle_paste("beauty");
        assert_eq!(area.content(), "kategori\nbeauty");
        assert_eq!(area.line_count(), 2);
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut area = TextArea::new("Notes");
        area.handle_paste("a\nb");
        area.handle_key(key(KeyCode::Home));
        assert!(area.handle_key(key(KeyCode::Backspace)));
        assert_eq!(area.content(), "ab");
        assert_eq!(area.cursor_line(), 0);
    }

    #[test]
    fn test_paste_strips_carriage_returns() {
        let mut area = TextArea::new("Notes");
        area.handle_paste("satu\r\ndua");
        assert_eq!(area.content(), "satu\ndua");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut area = TextArea::new("Notes");
        area.handle_paste("résumé");
        area.handle_key(key(KeyCode::Left));
        area.handle_key(key(KeyCode::Backspace));
        assert_eq!(area.content(), "résué");
    }

    fn draw(area: &TextArea, width: u16, height: u16) -> (Vec<String>, Position) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| area.render(f, f.area(), true))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let rows = (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect();
        (rows, terminal.backend_mut().get_cursor_position().unwrap())
    }

    #[test]
    fn test_long_line_scrolls_sideways() {
        let mut area = TextArea::new("Notes");
        area.handle_paste(&format!("{}END", "y".repeat(100)));

        let (rows, cursor) = draw(&area, 40, 6);
        let inside = rows[1].trim_end_matches('│').trim_end();
        assert!(inside.ends_with("END"), "row was {:?}", rows[1]);
        assert_eq!(cursor, Position::new(38, 1));
    }

    #[test]
    fn test_huge_paste_renders() {
        let mut area = TextArea::new("Notes");
        area.handle_paste("kategori\n");
        area.handle_paste(&"z".repeat(70_000));
        assert_eq!(area.cursor_line(), 1);

        let (rows, cursor) = draw(&area, 80, 10);
        assert!(rows[2].contains("zzzz"));
        assert_eq!(cursor, Position::new(78, 2));
    }

    #[test]
    fn test_multiline_paste_keeps_cursor_at_end() {
        let mut area = TextArea::new("Notes");
        area.handle_paste("ab");
        area.handle_key(key(KeyCode::Left));
        area.handle_paste("1\n2\n3");
        assert_eq!(area.content(), "a1\n2\n3b");
        assert_eq!(area.cursor_line(), 2);
        area.handle_key(key(KeyCode::Char('x')));
        assert_eq!(area.content(), "a1\n2\n3xb");
    }
}
