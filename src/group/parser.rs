//! Marker scanning
//!
//! Single pass over the document lines. A marker line opens a new group and
//! closes the previous one at the last non-blank line seen before it, so
//! trailing blank lines never belong to a group.

use regex::Regex;

use super::LogicalGroup;
use crate::color::{self, UNRESOLVED_COLOR};

/// Tag used when the configuration does not name one
pub const DEFAULT_TAG: &str = "VLG";

/// Compiled matcher for `// <tag>: <name>` marker comments
#[derive(Debug, Clone)]
pub struct MarkerPattern {
    tag: String,
    regex: Regex,
}

impl MarkerPattern {
    /// Build a matcher for the given tag (matched literally, case-sensitive)
    pub fn new(tag: &str) -> Self {
        let source = format!(r"//\s*{}:\s*(.+)", regex::escape(tag));
        let regex = Regex::new(&source).expect("escaped tag always forms a valid regex");
        Self {
            tag: tag.to_string(),
            regex,
        }
    }

    /// The tag this pattern matches
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Group name if `line` carries a marker
    pub fn capture(&self, line: &str) -> Option<String> {
        self.regex
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}

impl Default for MarkerPattern {
    fn default() -> Self {
        Self::new(DEFAULT_TAG)
    }
}

/// Parse the logical groups of a document.
///
/// Lines are split on `\n` only; a trailing `\r` is treated as whitespace.
/// Palette entries are consumed cyclically in discovery order, falling back
/// to the first entry when the cyclic entry is blank. An empty palette
/// leaves every group with [`UNRESOLVED_COLOR`].
pub fn parse(
    text: &str,
    pattern: &MarkerPattern,
    palette: &[String],
    default_opacity: f64,
) -> Vec<LogicalGroup> {
    let mut groups = Vec::new();
    let mut open: Option<LogicalGroup> = None;
    let mut palette_cursor = 0usize;
    let mut last_non_blank: Option<usize> = None;

    for (idx, line) in text.split('\n').enumerate() {
        if let Some(name) = pattern.capture(line) {
            if let Some(group) = open.take() {
                close_group(group, last_non_blank, &mut groups);
            }
            open = Some(LogicalGroup {
                start_line: idx,
                end_line: idx + 1,
                name,
                color: palette_color(palette, palette_cursor, default_opacity),
            });
            palette_cursor += 1;
            // The marker itself always counts as content
            last_non_blank = Some(idx);
        } else if !line.trim().is_empty() {
            last_non_blank = Some(idx);
        }
    }

    if let Some(group) = open.take() {
        close_group(group, last_non_blank, &mut groups);
    }

    groups
}

fn close_group(mut group: LogicalGroup, last_non_blank: Option<usize>, out: &mut Vec<LogicalGroup>) {
    let end_line = last_non_blank.unwrap_or(group.start_line);
    if group.start_line <= end_line {
        group.end_line = end_line;
        out.push(group);
    }
}

fn palette_color(palette: &[String], cursor: usize, default_opacity: f64) -> String {
    let Some(first) = palette.first() else {
        return UNRESOLVED_COLOR.to_string();
    };
    let raw = match &palette[cursor % palette.len()] {
        entry if entry.trim().is_empty() => first,
        entry => entry,
    };
    color::body(raw, default_opacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(colors: &[&str]) -> Vec<String> {
        colors.iter().map(|c| c.to_string()).collect()
    }

    fn parse_default(text: &str) -> Vec<LogicalGroup> {
        parse(text, &MarkerPattern::default(), &palette(&["#112233"]), 0.1)
    }

    // ========================================================================
    // Marker matching
    // ========================================================================

    #[test]
    fn test_marker_capture_trims_name() {
        let pattern = MarkerPattern::default();
        assert_eq!(pattern.capture("// VLG:   Form state  "), Some("Form state".into()));
        assert_eq!(pattern.capture("//VLG:x"), Some("x".into()));
        assert_eq!(pattern.capture("  const a = 1; // VLG: Tail"), Some("Tail".into()));
    }

    #[test]
    fn test_marker_whitespace_only_name_is_empty() {
        let pattern = MarkerPattern::default();
        assert_eq!(pattern.capture("// VLG:   "), Some(String::new()));
    }

    #[test]
    fn test_marker_requires_text_after_colon() {
        assert_eq!(MarkerPattern::default().capture("// VLG:"), None);
    }

    #[test]
    fn test_marker_tag_is_case_sensitive() {
        assert_eq!(MarkerPattern::default().capture("// vlg: nope"), None);
    }

    #[test]
    fn test_marker_custom_tag_is_escaped() {
        let pattern = MarkerPattern::new("A.B");
        assert_eq!(pattern.capture("// A.B: yes"), Some("yes".into()));
        assert_eq!(pattern.capture("// AxB: no"), None);
        assert_eq!(pattern.tag(), "A.B");
    }

    // ========================================================================
    // Group boundaries
    // ========================================================================

    #[test]
    fn test_no_markers_yields_no_groups() {
        assert!(parse_default("fn main() {}\n\nlet x = 1;\n").is_empty());
        assert!(parse_default("").is_empty());
    }

    #[test]
    fn test_single_marker_ends_at_last_non_blank_line() {
        let groups = parse_default("intro\n// VLG: A\none\ntwo\n\n\n");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].start_line, 1);
        assert_eq!(groups[0].end_line, 3);
        assert_eq!(groups[0].name, "A");
    }

    #[test]
    fn test_trailing_blank_lines_excluded_before_next_marker() {
        let text = "// VLG: A\nbody\n\n  \n\t\n// VLG: B\nmore\n";
        let groups = parse_default(text);
        assert_eq!(groups.len(), 2);
        assert_eq!((groups[0].start_line, groups[0].end_line), (0, 1));
        assert_eq!((groups[1].start_line, groups[1].end_line), (5, 6));
    }

    #[test]
    fn test_marker_on_final_line_is_header_only() {
        let groups = parse_default("x\n// VLG: Last");
        assert_eq!(groups.len(), 1);
        assert_eq!((groups[0].start_line, groups[0].end_line), (1, 1));
    }

    #[test]
    fn test_blank_remainder_degenerates_to_header() {
        let groups = parse_default("// VLG: Only\n\n   \n");
        assert_eq!((groups[0].start_line, groups[0].end_line), (0, 0));
    }

    #[test]
    fn test_consecutive_markers() {
        let groups = parse_default("// VLG: A\n// VLG: B\n");
        assert_eq!((groups[0].start_line, groups[0].end_line), (0, 0));
        assert_eq!((groups[1].start_line, groups[1].end_line), (1, 1));
    }

    #[test]
    fn test_carriage_returns_are_not_line_breaks() {
        let groups = parse_default("// VLG: A\r\nbody\r\n\r\n");
        assert_eq!(groups[0].name, "A");
        assert_eq!(groups[0].end_line, 1);
    }

    #[test]
    fn test_groups_are_ordered_and_disjoint() {
        let text = "a\n// VLG: 1\nb\n\n// VLG: 2\n\n// VLG: 3\nc\nd\n";
        let groups = parse_default(text);
        for pair in groups.windows(2) {
            assert!(pair[0].start_line < pair[1].start_line);
            assert!(pair[0].end_line < pair[1].start_line);
        }
        for g in &groups {
            assert!(g.start_line <= g.end_line);
        }
    }

    // ========================================================================
    // Palette
    // ========================================================================

    #[test]
    fn test_palette_cycles_by_discovery_order() {
        let text = "// VLG: a\n// VLG: b\n// VLG: c\n";
        let groups = parse(
            text,
            &MarkerPattern::default(),
            &palette(&["#111111", "#222222"]),
            0.5,
        );
        assert_eq!(groups[0].color, "#11111180");
        assert_eq!(groups[1].color, "#22222280");
        assert_eq!(groups[2].color, "#11111180");
    }

    #[test]
    fn test_blank_palette_entry_falls_back_to_first() {
        let text = "// VLG: a\n// VLG: b\n";
        let groups = parse(text, &MarkerPattern::default(), &palette(&["#111111", ""]), 0.5);
        assert_eq!(groups[1].color, "#11111180");
    }

    #[test]
    fn test_empty_palette_is_degraded_not_fatal() {
        let groups = parse("// VLG: a\nx\n", &MarkerPattern::default(), &[], 0.5);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].color, UNRESOLVED_COLOR);
    }
}
