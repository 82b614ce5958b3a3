//! Text input widget
//!
//! A single-line text field with a character cursor. The cursor counts
//! characters, not bytes, so descriptions like "Café" edit correctly.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// A single-line text field
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
    placeholder: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.chars().count();
        self
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        self.content
            .char_indices()
            .nth(cursor)
            .map_or(self.content.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Render as `label: value`, with a block cursor when focused
    pub fn to_line(&self, label: &str, focused: bool) -> Line<'static> {
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let mut spans = vec![Span::styled(format!("{:>12}: ", label), label_style)];

        if !focused {
            let (text, style) = if self.content.is_empty() {
                (self.placeholder.clone(), Style::default().fg(Color::DarkGray))
            } else {
                (self.content.clone(), Style::default().fg(Color::Yellow))
            };
            spans.push(Span::styled(text, style));
            return Line::from(spans);
        }

        let split = self.byte_offset(self.cursor);
        let (before, after) = self.content.split_at(split);
        let mut rest = after.chars();
        let under_cursor = rest.next().unwrap_or(' ');

        let value_style = Style::default().fg(Color::White);
        spans.push(Span::styled(before.to_string(), value_style));
        spans.push(Span::styled(
            under_cursor.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(rest.as_str().to_string(), value_style));

        Line::from(spans)
    }
}
