//! Benchmarks for group discovery
//!
//! Run with: cargo bench --bench parse

use spotlight::color::{self, Fill};
use spotlight::config::SpotlightConfig;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Document with one marker every `group_len` lines
fn document(line_count: usize, group_len: usize) -> String {
    let mut text = String::with_capacity(line_count * 32);
    for i in 0..line_count {
        if i % group_len == 0 {
            text.push_str(&format!("// VLG: Group {}\n", i / group_len));
        } else if i % group_len == group_len - 1 {
            text.push('\n');
        } else {
            text.push_str("    const value = compute(input);\n");
        }
    }
    text
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn parse_dense_groups(bencher: divan::Bencher, line_count: usize) {
    let config = SpotlightConfig::default();
    let text = document(line_count, 10);
    bencher.bench(|| config.parse(divan::black_box(&text)));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn parse_without_markers(bencher: divan::Bencher, line_count: usize) {
    let config = SpotlightConfig::default();
    let text = "let x = 1;\n".repeat(line_count);
    bencher.bench(|| config.parse(divan::black_box(&text)));
}

#[divan::bench]
fn resolve_hex_body() -> String {
    color::resolve(divan::black_box("#336699"), 0.1, Fill::Body)
}

#[divan::bench]
fn resolve_rgba_header() -> String {
    color::resolve(divan::black_box("rgba(255, 182, 193, 0.2)"), 0.1, Fill::Header)
}
