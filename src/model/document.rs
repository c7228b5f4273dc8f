//! Document mirror - the text of the active view as last reported by the host

use ropey::Rope;
use serde::{Deserialize, Serialize};

/// Replace chars `start..end` with `text` (char indices, clamped to the buffer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl TextEdit {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            start: at,
            end: at,
            text: text.into(),
        }
    }

    pub fn delete(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            text: String::new(),
        }
    }

    pub fn replace(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Replace the whole document
    pub fn replace_all(text: impl Into<String>) -> Self {
        Self::replace(0, usize::MAX, text)
    }
}

/// Text buffer for one document
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Incremented on each applied edit
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            revision: 0,
        }
    }

    /// Full text snapshot for parsing
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Char index of `(line, column)`, clamped to the buffer
    pub fn char_index(&self, line: usize, column: usize) -> usize {
        if line >= self.buffer.len_lines() {
            return self.buffer.len_chars();
        }
        let line_start = self.buffer.line_to_char(line);
        let line_len = self.buffer.line(line).len_chars();
        line_start + column.min(line_len)
    }

    /// Apply one edit; out-of-range indices are clamped
    pub fn apply(&mut self, edit: &TextEdit) {
        let len = self.buffer.len_chars();
        let end = edit.end.min(len);
        let start = edit.start.min(end);
        if start < end {
            self.buffer.remove(start..end);
        }
        if !edit.text.is_empty() {
            self.buffer.insert(start, &edit.text);
        }
        self.revision += 1;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
