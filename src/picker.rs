//! Group navigation picker
//!
//! Lists the groups of the active document and filters them with fuzzy
//! matching as the user types.

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::Serialize;

use crate::group::LogicalGroup;

/// Prompt shown in the picker input
pub const PICKER_PLACEHOLDER: &str = "Select a group to navigate to";

/// One selectable entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerItem {
    /// Group name
    pub label: String,
    /// 1-based line hint, e.g. "Line 12"
    pub description: String,
    /// Header line the cursor jumps to (0-based)
    pub line: usize,
}

impl PickerItem {
    pub fn from_group(group: &LogicalGroup) -> Self {
        Self {
            label: group.name.clone(),
            description: format!("Line {}", group.start_line + 1),
            line: group.start_line,
        }
    }
}

/// Picker contents for one invocation
#[derive(Debug, Clone, Default)]
pub struct GroupPicker {
    items: Vec<PickerItem>,
}

impl GroupPicker {
    /// One item per group, in document order
    pub fn from_groups(groups: &[LogicalGroup]) -> Self {
        Self {
            items: groups.iter().map(PickerItem::from_group).collect(),
        }
    }

    pub fn items(&self) -> &[PickerItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<PickerItem> {
        self.items
    }

    /// Items whose label fuzzy-matches `query`, best match first.
    ///
    /// An empty query keeps every item in document order. Equal scores keep
    /// document order.
    pub fn filter(&self, query: &str) -> Vec<&PickerItem> {
        let query = query.trim();
        if query.is_empty() {
            return self.items.iter().collect();
        }

        let atom = Atom::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
            false,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();

        let mut scored: Vec<(&PickerItem, u16)> = self
            .items
            .iter()
            .filter_map(|item| {
                atom.score(Utf32Str::new(&item.label, &mut buf), &mut matcher)
                    .map(|score| (item, score))
            })
            .collect();
        // Stable sort keeps document order among ties
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(item, _)| item).collect()
    }
}
