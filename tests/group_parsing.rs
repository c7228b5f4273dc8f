//! Group discovery tests
//!
//! Boundary rules for marker-delimited groups over whole documents.

mod common;

use common::{test_config, SAMPLE};
use spotlight::color::{self, Fill};
use spotlight::group::{self, MarkerPattern};

fn parse(text: &str) -> Vec<spotlight::LogicalGroup> {
    test_config().parse(text)
}

// =============================================================================
// Boundaries
// =============================================================================

#[test]
fn test_sample_component_groups() {
    let groups = parse(SAMPLE);
    let spans: Vec<_> = groups
        .iter()
        .map(|g| (g.name.as_str(), g.start_line, g.end_line))
        .collect();
    assert_eq!(
        spans,
        [("Imports", 1, 3), ("Form state", 6, 8), ("Submit", 10, 14)]
    );
}

#[test]
fn test_documents_without_markers() {
    for text in ["", "\n\n", "plain text\nmore", "// VLGX nothing\n// TODO: later"] {
        assert!(parse(text).is_empty(), "unexpected groups in {text:?}");
    }
}

#[test]
fn test_single_marker_spans_to_last_non_blank_line() {
    let text = "a\nb\n// VLG: Only\nc\n  d\ne";
    let groups = parse(text);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].start_line, 2);
    assert_eq!(groups[0].end_line, 5);
}

#[test]
fn test_two_markers_with_blank_gap() {
    let text = "// VLG: A\nbody\n\n\n\n// VLG: B\nx\ny\n\n";
    let groups = parse(text);
    assert_eq!((groups[0].start_line, groups[0].end_line), (0, 1));
    assert_eq!((groups[1].start_line, groups[1].end_line), (5, 7));
}

#[test]
fn test_marker_on_last_line() {
    let groups = parse("x\ny\n// VLG: End");
    assert_eq!((groups[0].start_line, groups[0].end_line), (2, 2));
}

#[test]
fn test_whitespace_only_lines_count_as_blank() {
    let groups = parse("// VLG: A\ncode\n \t \n\r\n// VLG: B\n");
    assert_eq!(groups[0].end_line, 1);
}

#[test]
fn test_empty_name_after_trim() {
    let groups = parse("// VLG:  \nline\n");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "");
    assert_eq!(groups[0].end_line, 1);
}

#[test]
fn test_marker_inside_trailing_comment() {
    let groups = parse("let a = 1; // VLG: Inline\nlet b = 2;\n");
    assert_eq!(groups[0].name, "Inline");
    assert_eq!((groups[0].start_line, groups[0].end_line), (0, 1));
}

// =============================================================================
// Colors
// =============================================================================

#[test]
fn test_palette_cycles_over_three_groups() {
    let groups = parse(SAMPLE);
    assert_eq!(groups[0].color, "#33669980");
    assert_eq!(groups[1].color, "#99336680");
    assert_eq!(groups[2].color, "#33669980");
}

#[test]
fn test_header_color_is_derived_from_body() {
    let groups = parse(SAMPLE);
    assert_eq!(groups[1].header_color(), "#993366ff");
    assert_eq!(
        groups[1].header_color(),
        color::resolve("#993366", 0.5, Fill::Header)
    );
}

#[test]
fn test_functional_palette() {
    let palette = vec!["rgb(10, 20, 30)".to_string(), "hsla(1, 2%, 3%, 0.4)".to_string()];
    let groups = group::parse(
        "// VLG: a\n// VLG: b\n",
        &MarkerPattern::default(),
        &palette,
        0.25,
    );
    assert_eq!(groups[0].color, "rgba(10, 20, 30, 0.25)");
    assert_eq!(groups[0].header_color(), "rgba(10, 20, 30, 1.0)");
    assert_eq!(groups[1].color, "hsla(1, 2%, 3%, 0.4)");
    assert_eq!(groups[1].header_color(), "hsla(1, 2%, 3%, 1.0)");
}

#[test]
fn test_reparse_rebuilds_from_scratch() {
    let first = parse(SAMPLE);
    let second = parse(SAMPLE);
    assert_eq!(first, second);
}
