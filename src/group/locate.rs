//! Cursor and viewport queries over a parsed group list

use super::LogicalGroup;

/// First group whose line range contains `line`.
///
/// Groups never overlap, so the first match is the only match. Lines past
/// the end of the document (stale queries after an edit) find nothing.
pub fn containing(groups: &[LogicalGroup], line: usize) -> Option<&LogicalGroup> {
    groups.iter().find(|group| group.contains(line))
}

/// Group whose header best represents the visible range `top..=bottom`.
///
/// A header inside the viewport wins (first in scan order when several are
/// visible). Otherwise the closest header above the viewport is used.
pub fn nearest_at_or_above(
    groups: &[LogicalGroup],
    top: usize,
    bottom: usize,
) -> Option<&LogicalGroup> {
    groups
        .iter()
        .find(|group| group.start_line >= top && group.start_line <= bottom)
        .or_else(|| {
            groups
                .iter()
                .filter(|group| group.start_line <= top)
                .max_by_key(|group| group.start_line)
        })
}
