//! Message types for the Elm-style architecture
//!
//! Every host event reaches the session as one of these messages, one at a
//! time, through `update`.

use crate::config::SpotlightConfig;
use crate::model::{EditorView, TextEdit, ViewId};

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Primary cursor of the active view moved to `line`
    CursorMoved { line: usize },
    /// Visible range of the active view changed
    Scrolled { top_line: usize, bottom_line: usize },
    /// Edits were applied to the document shown in `view`
    DocumentEdited { view: ViewId, edits: Vec<TextEdit> },
    /// A different view became active (`None` when no document is focused)
    ViewChanged(Option<EditorView>),
    /// Settings were edited
    ConfigChanged(SpotlightConfig),
    /// `toggleSpotlight` command
    ToggleRequested,
    /// `selectGroup` command (status indicator click)
    NavigateRequested,
    /// Picker closed with the chosen header line, or `None` if dismissed
    GroupPicked(Option<usize>),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a cursor movement message
    pub fn cursor(line: usize) -> Self {
        Msg::CursorMoved { line }
    }

    /// Create a scroll message
    pub fn scroll(top_line: usize, bottom_line: usize) -> Self {
        Msg::Scrolled {
            top_line,
            bottom_line,
        }
    }

    /// Create a single-edit message
    pub fn edit(view: ViewId, edit: TextEdit) -> Self {
        Msg::DocumentEdited {
            view,
            edits: vec![edit],
        }
    }
}
