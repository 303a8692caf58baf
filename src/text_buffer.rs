//! The visible text surface, backed by ropey
//! O(log n) insertions and deletions

use ropey::Rope;

use crate::view::BufferView;

/// Single editing surface shared by all tabs. Holds one tab's text at a
/// time plus a cursor (char index).
pub struct TextBuffer {
    rope: Rope,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: 0,
        }
    }

    pub fn from_str(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: 0,
        }
    }

    pub fn content(&self) -> String {
        self.rope.to_string()
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.rope.len_chars());
    }

    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Replace the whole text, like assigning a textarea's value.
    pub fn replace(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = 0;
    }

    pub fn insert(&mut self, ch: char) {
        self.rope.insert_char(self.cursor, ch);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, text: &str) {
        self.rope.insert(self.cursor, text);
        self.cursor += text.chars().count();
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.rope.remove(self.cursor..self.cursor + 1);
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(self.cursor..self.cursor + 1);
        true
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.rope.len_chars() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        let (line, col) = self.char_to_line_col(self.cursor);
        if line == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.rope.line_to_char(line - 1) + col.min(self.line_len(line - 1));
    }

    pub fn move_down(&mut self) {
        let (line, col) = self.char_to_line_col(self.cursor);
        if line + 1 >= self.rope.len_lines() {
            self.cursor = self.rope.len_chars();
            return;
        }
        self.cursor = self.rope.line_to_char(line + 1) + col.min(self.line_len(line + 1));
    }

    pub fn move_to_line_start(&mut self) {
        let line = self.rope.char_to_line(self.cursor);
        self.cursor = self.rope.line_to_char(line);
    }

    pub fn move_to_line_end(&mut self) {
        let line = self.rope.char_to_line(self.cursor);
        self.cursor = self.rope.line_to_char(line) + self.line_len(line);
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.rope.len_chars();
    }

    pub fn char_to_line_col(&self, char_idx: usize) -> (usize, usize) {
        let line = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(line);
        (line, char_idx - line_start)
    }

    /// Length of a line without its trailing newline
    fn line_len(&self, line: usize) -> usize {
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferView for TextBuffer {
    fn text(&self) -> String {
        self.content()
    }

    fn set_text(&mut self, text: &str) {
        self.replace(text);
    }

    fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer() {
        let buf = TextBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
        assert_eq!(buf.len_lines(), 1);
    }

    #[test]
    fn test_insert_multiple() {
        let mut buf = TextBuffer::new();
        for ch in "Hello".chars() {
            buf.insert(ch);
        }
        assert_eq!(buf.content(), "Hello");
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn test_insert_str() {
        let mut buf = TextBuffer::new();
        buf.insert_str("Hello World");
        assert_eq!(buf.content(), "Hello World");
        assert_eq!(buf.cursor(), 11);
    }

    #[test]
    fn test_backspace() {
        let mut buf = TextBuffer::from_str("Hello");
        buf.move_to_end();
        assert!(buf.backspace());
        assert_eq!(buf.content(), "Hell");
        buf.move_to_start();
        assert!(!buf.backspace());
        assert_eq!(buf.content(), "Hell");
    }

    #[test]
    fn test_delete() {
        let mut buf = TextBuffer::from_str("Hello");
        assert!(buf.delete());
        assert_eq!(buf.content(), "ello");
        buf.move_to_end();
        assert!(!buf.delete());
    }

    #[test]
    fn test_replace_resets_cursor() {
        let mut buf = TextBuffer::from_str("abc");
        buf.move_to_end();
        buf.set_text("new text");
        assert_eq!(buf.text(), "new text");
        assert_eq!(BufferView::cursor(&buf), 0);
    }

    #[test]
    fn test_multiline_navigation() {
        let mut buf = TextBuffer::from_str("Line1\nLi\nLine3");
        buf.set_cursor(4);
        buf.move_down();
        assert_eq!(buf.char_to_line_col(buf.cursor()), (1, 2));
        buf.move_down();
        assert_eq!(buf.char_to_line_col(buf.cursor()), (2, 2));
        buf.move_to_line_end();
        assert_eq!(buf.cursor(), buf.len());
        buf.move_up();
        buf.move_to_line_start();
        assert_eq!(buf.char_to_line_col(buf.cursor()), (1, 0));
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut buf = TextBuffer::from_str("abc");
        buf.set_cursor(99);
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_large_text() {
        let mut buf = TextBuffer::from_str(&"a".repeat(100_000));
        assert_eq!(buf.len(), 100_000);
        buf.set_cursor(50_000);
        buf.insert('X');
        assert_eq!(buf.len(), 100_001);
        assert_eq!(buf.content().chars().nth(50_000), Some('X'));
    }
}
