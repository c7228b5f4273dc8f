//! Host-facing surface contracts
//!
//! The host owns drawing. The synchronizer only hands it ranges, labels and
//! colors through these traits and keeps track of what it must take back.

use std::ops::Range;

use serde::Serialize;

/// Handle to a highlight issued on a [`HighlightSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HighlightId(pub u64);

/// Visual treatment of a highlighted range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HighlightStyle {
    /// Marker line: full-opacity fill, bold white text
    Header,
    /// Group body: low-opacity fill mirrored in the overview ruler
    Body,
}

impl HighlightStyle {
    /// Text color override, if any
    pub fn foreground(self) -> Option<&'static str> {
        match self {
            HighlightStyle::Header => Some("#FFFFFF"),
            HighlightStyle::Body => None,
        }
    }

    pub fn bold(self) -> bool {
        matches!(self, HighlightStyle::Header)
    }

    /// Whether the fill is also drawn in the scrollbar overview ruler
    pub fn overview_ruler(self) -> bool {
        matches!(self, HighlightStyle::Body)
    }

    /// Both styles paint the full editor width of each line
    pub fn whole_line(self) -> bool {
        true
    }
}

/// Request to paint whole lines with a fill color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightRequest {
    /// Half-open line range; may be empty for header-only groups
    pub lines: Range<usize>,
    pub fill: String,
    pub style: HighlightStyle,
}

/// Folding region kind (groups always fold as regions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FoldingKind {
    Region,
}

/// A foldable line span, inclusive on both ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldingRegion {
    pub start_line: usize,
    pub end_line: usize,
    pub kind: FoldingKind,
}

/// Inline title drawn above a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeLensEntry {
    pub line: usize,
    pub title: String,
}

/// Sticky header panel content for the current group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderPanel {
    pub name: String,
    pub color: String,
    pub html: String,
}

/// Status bar item describing the current group
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatusIndicator {
    pub text: String,
    /// Icon id drawn before the text
    pub icon: Option<String>,
    pub tooltip: Option<String>,
    /// Host command run when the indicator is clicked
    pub command: Option<String>,
    pub background: Option<String>,
    pub visible: bool,
}

impl StatusIndicator {
    /// Hidden indicator with no content
    pub fn hidden() -> Self {
        Self::default()
    }
}

/// Paints and removes line highlights
pub trait HighlightSurface {
    /// Issue a highlight; the returned id stays live until disposed
    fn create(&mut self, request: HighlightRequest) -> HighlightId;
    /// Remove a previously issued highlight
    fn dispose(&mut self, id: HighlightId);
}

/// Receives the full set of folding regions (replaces the previous set)
pub trait FoldingSurface {
    fn publish_folding(&mut self, regions: Vec<FoldingRegion>);
}

/// Receives the full set of code-lens titles (replaces the previous set)
pub trait CodeLensSurface {
    fn publish_code_lenses(&mut self, lenses: Vec<CodeLensEntry>);
}

/// Receives the sticky header payload; `None` blanks the panel
pub trait HeaderPanelSurface {
    fn publish_header(&mut self, panel: Option<HeaderPanel>);
}

/// Receives the status indicator state
pub trait StatusSurface {
    fn publish_status(&mut self, status: StatusIndicator);
}

/// Everything a host must provide to display groups
pub trait Host:
    HighlightSurface + FoldingSurface + CodeLensSurface + HeaderPanelSurface + StatusSurface
{
}

impl<T> Host for T where
    T: HighlightSurface + FoldingSurface + CodeLensSurface + HeaderPanelSurface + StatusSurface
{
}
