//! In-memory host
//!
//! Records everything the synchronizer publishes. Used by the headless CLI
//! and by tests to inspect live overlay state.

use std::collections::BTreeMap;

use serde::Serialize;

use super::surface::{
    CodeLensEntry, CodeLensSurface, FoldingRegion, FoldingSurface, HeaderPanel,
    HeaderPanelSurface, HighlightId, HighlightRequest, HighlightStyle, HighlightSurface,
    StatusIndicator, StatusSurface,
};

/// Host that keeps overlays in plain collections
#[derive(Debug, Default)]
pub struct MemoryHost {
    next_id: u64,
    highlights: BTreeMap<HighlightId, HighlightRequest>,
    folding: Vec<FoldingRegion>,
    code_lenses: Vec<CodeLensEntry>,
    header: Option<HeaderPanel>,
    status: StatusIndicator,
    stale_disposals: usize,
    created: usize,
}

/// A live highlight with its style resolved to drawing attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedHighlight {
    pub lines: std::ops::Range<usize>,
    pub fill: String,
    pub style: HighlightStyle,
    pub foreground: Option<&'static str>,
    pub bold: bool,
    pub overview_ruler: bool,
    pub whole_line: bool,
}

impl From<&HighlightRequest> for RenderedHighlight {
    fn from(request: &HighlightRequest) -> Self {
        let style = request.style;
        Self {
            lines: request.lines.clone(),
            fill: request.fill.clone(),
            style,
            foreground: style.foreground(),
            bold: style.bold(),
            overview_ruler: style.overview_ruler(),
            whole_line: style.whole_line(),
        }
    }
}

/// Comparable copy of everything visible on a [`MemoryHost`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostSnapshot {
    /// Live highlights in issue order
    pub highlights: Vec<RenderedHighlight>,
    pub folding: Vec<FoldingRegion>,
    pub code_lenses: Vec<CodeLensEntry>,
    pub header: Option<HeaderPanel>,
    pub status: StatusIndicator,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights created and not yet disposed
    pub fn live_highlight_count(&self) -> usize {
        self.highlights.len()
    }

    /// Live highlights in issue order
    pub fn highlights(&self) -> impl Iterator<Item = &HighlightRequest> {
        self.highlights.values()
    }

    pub fn folding(&self) -> &[FoldingRegion] {
        &self.folding
    }

    pub fn code_lenses(&self) -> &[CodeLensEntry] {
        &self.code_lenses
    }

    pub fn header(&self) -> Option<&HeaderPanel> {
        self.header.as_ref()
    }

    pub fn status(&self) -> &StatusIndicator {
        &self.status
    }

    /// Total `create` calls over the host's lifetime
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Dispose calls for ids that were not live (double dispose)
    pub fn stale_disposals(&self) -> usize {
        self.stale_disposals
    }

    pub fn snapshot(&self) -> HostSnapshot {
        HostSnapshot {
            highlights: self.highlights.values().map(RenderedHighlight::from).collect(),
            folding: self.folding.clone(),
            code_lenses: self.code_lenses.clone(),
            header: self.header.clone(),
            status: self.status.clone(),
        }
    }
}

impl HighlightSurface for MemoryHost {
    fn create(&mut self, request: HighlightRequest) -> HighlightId {
        let id = HighlightId(self.next_id);
        self.next_id += 1;
        self.created += 1;
        tracing::trace!(?id, lines = ?request.lines, fill = %request.fill, "highlight created");
        self.highlights.insert(id, request);
        id
    }

    fn dispose(&mut self, id: HighlightId) {
        if self.highlights.remove(&id).is_none() {
            tracing::warn!(?id, "dispose of unknown highlight");
            self.stale_disposals += 1;
        }
    }
}

impl FoldingSurface for MemoryHost {
    fn publish_folding(&mut self, regions: Vec<FoldingRegion>) {
        self.folding = regions;
    }
}

impl CodeLensSurface for MemoryHost {
    fn publish_code_lenses(&mut self, lenses: Vec<CodeLensEntry>) {
        self.code_lenses = lenses;
    }
}

impl HeaderPanelSurface for MemoryHost {
    fn publish_header(&mut self, panel: Option<HeaderPanel>) {
        self.header = panel;
    }
}

impl StatusSurface for MemoryHost {
    fn publish_status(&mut self, status: StatusIndicator) {
        self.status = status;
    }
}
