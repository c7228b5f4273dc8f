//! Editor view state - cursor and visible range of the active document

use super::document::Document;

/// Host-assigned identity of a document view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u64);

/// Visible line range, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top_line: usize,
    pub bottom_line: usize,
}

impl Viewport {
    pub fn new(top_line: usize, bottom_line: usize) -> Self {
        Self {
            top_line,
            bottom_line: bottom_line.max(top_line),
        }
    }

    pub fn contains(&self, line: usize) -> bool {
        self.top_line <= line && line <= self.bottom_line
    }

    /// Same height, scrolled so `line` is the top line
    pub fn scrolled_to(&self, line: usize) -> Self {
        let height = self.bottom_line - self.top_line;
        Self::new(line, line.saturating_add(height))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// The document view the session is attached to
#[derive(Debug, Clone)]
pub struct EditorView {
    pub id: ViewId,
    pub document: Document,
    /// Line of the primary cursor (0-based)
    pub cursor_line: usize,
    pub viewport: Viewport,
}

impl EditorView {
    /// View with the cursor at the top of `viewport`
    pub fn new(id: ViewId, document: Document, viewport: Viewport) -> Self {
        Self {
            id,
            document,
            cursor_line: viewport.top_line,
            viewport,
        }
    }

    pub fn with_cursor(mut self, line: usize) -> Self {
        self.cursor_line = line;
        self
    }
}
