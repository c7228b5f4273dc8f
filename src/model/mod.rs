//! Session model - the complete state of one spotlight session
//!
//! A session owns its enabled flag, the active view, the configuration, the
//! latest parse result and every overlay issued on the host. Separate
//! sessions share nothing.

pub mod document;
pub mod editor;

pub use document::{Document, TextEdit};
pub use editor::{EditorView, ViewId, Viewport};

use crate::config::SpotlightConfig;
use crate::group::{self, LogicalGroup};
use crate::presentation::{Host, Synchronizer};

/// Session context driven by `update`
#[derive(Debug)]
pub struct Session<H: Host> {
    enabled: bool,
    view: Option<EditorView>,
    config: SpotlightConfig,
    groups: Vec<LogicalGroup>,
    presenter: Synchronizer<H>,
}

impl<H: Host> Session<H> {
    /// Enabled session with no active view
    pub fn new(host: H, config: SpotlightConfig) -> Self {
        Self {
            enabled: true,
            view: None,
            config,
            groups: Vec::new(),
            presenter: Synchronizer::new(host),
        }
    }

    /// Enabled session attached to `view`, rendered immediately
    pub fn with_view(host: H, config: SpotlightConfig, view: EditorView) -> Self {
        let mut session = Self::new(host, config);
        session.view = Some(view);
        session.recompute();
        session
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn view(&self) -> Option<&EditorView> {
        self.view.as_ref()
    }

    pub fn config(&self) -> &SpotlightConfig {
        &self.config
    }

    /// Groups from the latest parse
    pub fn groups(&self) -> &[LogicalGroup] {
        &self.groups
    }

    pub fn host(&self) -> &H {
        self.presenter.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.presenter.host_mut()
    }

    /// Group the status indicator and header panel describe.
    ///
    /// The group under the cursor wins while the cursor is on screen;
    /// otherwise the group owning the top of the viewport.
    pub fn current_group(&self) -> Option<&LogicalGroup> {
        let view = self.view.as_ref()?;
        let at_cursor = if view.viewport.contains(view.cursor_line) {
            group::containing(&self.groups, view.cursor_line)
        } else {
            None
        };
        at_cursor.or_else(|| {
            group::nearest_at_or_above(
                &self.groups,
                view.viewport.top_line,
                view.viewport.bottom_line,
            )
        })
    }

    /// Re-parse the active document and render
    pub(crate) fn recompute(&mut self) {
        self.groups = match &self.view {
            Some(view) => self.config.parse(&view.document.text()),
            None => Vec::new(),
        };
        if self.config.colors.is_empty() && !self.groups.is_empty() {
            tracing::warn!("empty color palette, groups render without fill");
        }
        tracing::debug!(groups = self.groups.len(), "recomputed groups");
        self.present();
    }

    /// Re-render from the cached groups (cursor/viewport changes)
    pub(crate) fn present(&mut self) {
        let current = self.current_group().cloned();
        self.presenter.render(&self.groups, current.as_ref());
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn clear_overlays(&mut self) {
        self.presenter.clear();
    }

    pub(crate) fn view_mut(&mut self) -> Option<&mut EditorView> {
        self.view.as_mut()
    }

    pub(crate) fn set_view(&mut self, view: Option<EditorView>) {
        self.view = view;
    }

    pub(crate) fn set_config(&mut self, config: SpotlightConfig) {
        self.config = config;
    }
}
