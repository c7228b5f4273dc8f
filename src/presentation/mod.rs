//! Presentation synchronizer
//!
//! Turns a parsed group list plus the current group into host overlays:
//! header and body highlights, folding regions, code-lens titles, the sticky
//! header panel and the status indicator.
//!
//! Every pass starts by disposing all highlights issued by the previous pass,
//! so repeated renders never stack overlays and the last pass always wins.

mod html;
mod memory;
mod surface;

pub use html::header_panel_html;
pub use memory::{HostSnapshot, MemoryHost, RenderedHighlight};
pub use surface::{
    CodeLensEntry, CodeLensSurface, FoldingKind, FoldingRegion, FoldingSurface, HeaderPanel,
    HeaderPanelSurface, HighlightId, HighlightRequest, HighlightStyle, HighlightSurface, Host,
    StatusIndicator, StatusSurface,
};

use crate::commands::CommandId;
use crate::group::LogicalGroup;

/// Owns the host and every highlight currently issued on it
#[derive(Debug)]
pub struct Synchronizer<H: Host> {
    host: H,
    issued: Vec<HighlightId>,
}

impl<H: Host> Synchronizer<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            issued: Vec::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Number of highlights issued and not yet disposed
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    /// Replace all overlays with the ones derived from `groups`
    pub fn render(&mut self, groups: &[LogicalGroup], current: Option<&LogicalGroup>) {
        self.release_highlights();

        for group in groups {
            let header = self.host.create(HighlightRequest {
                lines: group.start_line..group.start_line + 1,
                fill: group.header_color(),
                style: HighlightStyle::Header,
            });
            self.issued.push(header);

            let body = self.host.create(HighlightRequest {
                lines: group.body_lines(),
                fill: group.color.clone(),
                style: HighlightStyle::Body,
            });
            self.issued.push(body);
        }

        self.host.publish_folding(folding_regions(groups));
        self.host.publish_code_lenses(code_lenses(groups));
        self.host.publish_header(current.map(header_panel));
        self.host.publish_status(
            current
                .map(status_indicator)
                .unwrap_or_else(StatusIndicator::hidden),
        );

        tracing::debug!(
            groups = groups.len(),
            highlights = self.issued.len(),
            current = current.map(|g| g.name.as_str()),
            "rendered"
        );
    }

    /// Remove every overlay and blank the panels
    pub fn clear(&mut self) {
        self.release_highlights();
        self.host.publish_folding(Vec::new());
        self.host.publish_code_lenses(Vec::new());
        self.host.publish_header(None);
        self.host.publish_status(StatusIndicator::hidden());
        tracing::debug!("cleared overlays");
    }

    fn release_highlights(&mut self) {
        for id in self.issued.drain(..) {
            self.host.dispose(id);
        }
    }
}

impl<H: Host> Drop for Synchronizer<H> {
    fn drop(&mut self) {
        self.release_highlights();
    }
}

/// One region per group, spanning header to last body line
pub fn folding_regions(groups: &[LogicalGroup]) -> Vec<FoldingRegion> {
    groups
        .iter()
        .map(|group| FoldingRegion {
            start_line: group.start_line,
            end_line: group.end_line,
            kind: FoldingKind::Region,
        })
        .collect()
}

/// One title per group, anchored at the header line
pub fn code_lenses(groups: &[LogicalGroup]) -> Vec<CodeLensEntry> {
    groups
        .iter()
        .map(|group| CodeLensEntry {
            line: group.start_line,
            title: group.name.clone(),
        })
        .collect()
}

pub fn header_panel(group: &LogicalGroup) -> HeaderPanel {
    HeaderPanel {
        name: group.name.clone(),
        color: group.color.clone(),
        html: header_panel_html(&group.name, &group.color),
    }
}

pub fn status_indicator(group: &LogicalGroup) -> StatusIndicator {
    StatusIndicator {
        text: format!("GROUP: {}", group.name),
        icon: Some("list-selection".to_string()),
        tooltip: Some("Click to select a group".to_string()),
        command: Some(CommandId::SelectGroup.name().to_string()),
        background: Some(group.header_color()),
        visible: true,
    }
}
