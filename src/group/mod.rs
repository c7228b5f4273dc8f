//! Logical groups
//!
//! A logical group is a run of lines introduced by a marker comment such as
//! `// VLG: Form state`. Groups are rebuilt wholesale from the document text
//! on every recompute and are never patched in place.

mod locate;
mod parser;

pub use locate::{containing, nearest_at_or_above};
pub use parser::{parse, MarkerPattern, DEFAULT_TAG};

use serde::Serialize;

use crate::color;

/// A group of lines headed by a marker comment (lines are 0-based)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogicalGroup {
    /// Line holding the marker comment
    pub start_line: usize,
    /// Last line belonging to the group (inclusive, `>= start_line`)
    pub end_line: usize,
    /// Trimmed text after the marker tag (may be empty)
    pub name: String,
    /// Body color, already resolved at the configured opacity
    pub color: String,
}

impl LogicalGroup {
    /// Whether `line` falls within this group
    pub fn contains(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    /// Lines drawn with the body fill (empty when the group is only a header)
    pub fn body_lines(&self) -> std::ops::Range<usize> {
        self.start_line + 1..self.end_line + 1
    }

    /// Header color at full opacity, derived on demand from the body color
    pub fn header_color(&self) -> String {
        color::header(&self.color)
    }
}
