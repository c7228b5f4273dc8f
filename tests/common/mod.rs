//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use spotlight::config::SpotlightConfig;
use spotlight::model::{Document, EditorView, ViewId, Viewport};
use spotlight::presentation::MemoryHost;
use spotlight::Session;

/// Id used for the view created by [`test_view`]
pub const TEST_VIEW: ViewId = ViewId(1);

/// Vue-style component with three groups:
/// Imports (lines 1-3), Form state (6-8), Submit (10-14)
pub const SAMPLE: &str = "\
<script setup>
// VLG: Imports
import { ref } from 'vue'
import api from './api'


// VLG: Form state
const name = ref('')
const email = ref('')

// VLG: Submit
async function submit() {
  await api.save(name.value, email.value)
}
</script>
";

/// Config with a small hex palette so colors are easy to assert
pub fn test_config() -> SpotlightConfig {
    SpotlightConfig {
        tag: "VLG".to_string(),
        colors: vec!["#336699".to_string(), "#993366".to_string()],
        default_opacity: 0.5,
    }
}

/// View over `text` with the cursor on `line` and a 25-line viewport at the top
pub fn test_view(text: &str, line: usize) -> EditorView {
    EditorView::new(TEST_VIEW, Document::with_text(text), Viewport::new(0, 24)).with_cursor(line)
}

/// Enabled session attached to [`test_view`]
pub fn test_session(text: &str, line: usize) -> Session<MemoryHost> {
    Session::with_view(MemoryHost::new(), test_config(), test_view(text, line))
}

/// Names of the session's groups, in order
pub fn group_names(session: &Session<MemoryHost>) -> Vec<String> {
    session.groups().iter().map(|g| g.name.clone()).collect()
}
