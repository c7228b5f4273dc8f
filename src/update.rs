//! Update function for the Elm-style architecture
//!
//! The single entry point for host events. Each message is handled to
//! completion (parse, locate, render) before the next one is accepted.
//! View state is always tracked; overlay work only happens while enabled.

use crate::commands::Cmd;
use crate::config::SpotlightConfig;
use crate::messages::Msg;
use crate::model::{EditorView, Session, TextEdit, ViewId, Viewport};
use crate::picker::{GroupPicker, PICKER_PLACEHOLDER};
use crate::presentation::Host;

/// Main update function - dispatches to sub-handlers
pub fn update<H: Host>(session: &mut Session<H>, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::CursorMoved { line } => update_cursor(session, line),
        Msg::Scrolled {
            top_line,
            bottom_line,
        } => update_scroll(session, top_line, bottom_line),
        Msg::DocumentEdited { view, edits } => update_document(session, view, &edits),
        Msg::ViewChanged(view) => update_view(session, view),
        Msg::ConfigChanged(config) => update_config(session, config),
        Msg::ToggleRequested => toggle(session),
        Msg::NavigateRequested => request_navigation(session),
        Msg::GroupPicked(line) => navigate_to(session, line),
    }
}

fn update_cursor<H: Host>(session: &mut Session<H>, line: usize) -> Option<Cmd> {
    let view = session.view_mut()?;
    view.cursor_line = line;
    if session.is_enabled() {
        session.present();
    }
    None
}

fn update_scroll<H: Host>(session: &mut Session<H>, top: usize, bottom: usize) -> Option<Cmd> {
    let view = session.view_mut()?;
    view.viewport = Viewport::new(top, bottom);
    if session.is_enabled() {
        session.present();
    }
    None
}

fn update_document<H: Host>(
    session: &mut Session<H>,
    id: ViewId,
    edits: &[TextEdit],
) -> Option<Cmd> {
    let view = session.view_mut()?;
    if view.id != id {
        tracing::trace!(?id, active = ?view.id, "edit for inactive view ignored");
        return None;
    }
    for edit in edits {
        view.document.apply(edit);
    }
    tracing::debug!(
        edits = edits.len(),
        revision = view.document.revision,
        "document edited"
    );
    if session.is_enabled() {
        session.recompute();
    }
    None
}

fn update_view<H: Host>(session: &mut Session<H>, view: Option<EditorView>) -> Option<Cmd> {
    tracing::debug!(view = ?view.as_ref().map(|v| v.id), "active view changed");
    session.set_view(view);
    if session.is_enabled() {
        session.recompute();
    }
    None
}

fn update_config<H: Host>(session: &mut Session<H>, config: SpotlightConfig) -> Option<Cmd> {
    let config = config.normalized();
    if config == *session.config() {
        return None;
    }
    tracing::info!(
        tag = %config.tag,
        colors = config.colors.len(),
        opacity = config.default_opacity,
        "configuration changed"
    );
    session.set_config(config);
    if session.is_enabled() {
        session.recompute();
    }
    None
}

fn toggle<H: Host>(session: &mut Session<H>) -> Option<Cmd> {
    if session.is_enabled() {
        session.set_enabled(false);
        session.clear_overlays();
    } else {
        session.set_enabled(true);
        session.recompute();
    }
    tracing::info!(enabled = session.is_enabled(), "spotlight toggled");
    None
}

fn request_navigation<H: Host>(session: &mut Session<H>) -> Option<Cmd> {
    if !session.is_enabled() {
        return None;
    }
    let picker = GroupPicker::from_groups(session.groups());
    if picker.is_empty() {
        return None;
    }
    Some(Cmd::ShowGroupPicker {
        placeholder: PICKER_PLACEHOLDER,
        items: picker.into_items(),
    })
}

fn navigate_to<H: Host>(session: &mut Session<H>, line: Option<usize>) -> Option<Cmd> {
    // Dismissed picker
    let line = line?;
    let view = session.view_mut()?;
    if line >= view.document.line_count() {
        tracing::warn!(line, "picked group is past the end of the document");
        return None;
    }
    view.cursor_line = line;
    view.viewport = view.viewport.scrolled_to(line);
    if session.is_enabled() {
        session.present();
    }
    Some(Cmd::RevealLine { line })
}
