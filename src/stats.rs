//! Live document statistics for the status bar

use std::fmt;

/// Counts shown under the editor. `column` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub words: usize,
    pub chars: usize,
    pub lines: usize,
    pub column: usize,
}

impl Stats {
    /// Compute counts for `text` with the cursor at char index `cursor`.
    pub fn compute(text: &str, cursor: usize) -> Self {
        Self {
            words: word_count(text),
            chars: text.chars().count(),
            lines: line_count(text),
            column: column_at(text, cursor),
        }
    }

    pub fn word_label(&self) -> String {
        counted(self.words, "word")
    }

    pub fn char_label(&self) -> String {
        counted(self.chars, "character")
    }

    pub fn line_label(&self) -> String {
        counted(self.lines, "line")
    }

    pub fn column_label(&self) -> String {
        format!("Col: {}", self.column)
    }

    /// Gutter numbers, one per line.
    pub fn line_numbers(&self) -> impl Iterator<Item = usize> {
        1..=self.lines
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.word_label(),
            self.char_label(),
            self.line_label(),
            self.column_label()
        )
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Lines as `split('\n')` sees them, so empty text is one line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

pub fn column_at(text: &str, cursor: usize) -> usize {
    let current_line = text
        .chars()
        .take(cursor)
        .collect::<String>()
        .rsplit('\n')
        .next()
        .map(|line| line.chars().count())
        .unwrap_or(0);
    current_line + 1
}

fn counted(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
