//! Color literal resolution
//!
//! Group colors come from user configuration as CSS-style literals. Body
//! fills are drawn at a low opacity while headers use the same color at
//! full opacity, so every literal is rewritten into an alpha-bearing form
//! before it reaches a host surface.
//!
//! Supported inputs:
//! - `#RRGGBB` (alpha byte appended)
//! - `#RRGGBBAA` (alpha byte rewritten to `ff` for headers)
//! - `rgb(...)` / `hsl(...)` (promoted to `rgba(...)` / `hsla(...)`)
//! - `rgba(...)` / `hsla(...)` (alpha rewritten to `1.0` for headers)
//!
//! Anything else is passed through untouched. A color the resolver does not
//! understand must never stop a render pass.

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder stored on groups when the palette is empty
pub const UNRESOLVED_COLOR: &str = "";

static HEX6: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex regex"));
static HEX8: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{8}$").expect("valid hex regex"));
static TRAILING_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9.]+\)$").expect("valid alpha regex"));

/// Which fill a color is resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Low-opacity body fill (uses the configured default opacity)
    Body,
    /// Full-opacity header fill
    Header,
}

impl Fill {
    fn opacity(self, default_opacity: f64) -> f64 {
        match self {
            Fill::Body => default_opacity.clamp(0.0, 1.0),
            Fill::Header => 1.0,
        }
    }
}

/// Resolve a color literal for the given fill.
///
/// Pure and idempotent for a fixed `fill`: feeding the output back in
/// returns it unchanged.
pub fn resolve(literal: &str, default_opacity: f64, fill: Fill) -> String {
    if literal.contains("rgba") || literal.contains("hsla") {
        return match fill {
            Fill::Header => TRAILING_ALPHA.replace(literal, "1.0)").into_owned(),
            Fill::Body => literal.to_string(),
        };
    }

    if HEX6.is_match(literal) {
        let alpha = (fill.opacity(default_opacity) * 255.0).round() as u8;
        return format!("{}{:02x}", literal, alpha);
    }

    if HEX8.is_match(literal) {
        return match fill {
            Fill::Header => format!("{}ff", &literal[..7]),
            Fill::Body => literal.to_string(),
        };
    }

    let opacity = format_alpha(fill.opacity(default_opacity));
    if let Some(rest) = literal.strip_prefix("rgb(") {
        return format!("rgba({})", close_with_alpha(rest, &opacity));
    }
    if let Some(rest) = literal.strip_prefix("hsl(") {
        return format!("hsla({})", close_with_alpha(rest, &opacity));
    }

    literal.to_string()
}

/// Resolve a body color (shorthand for `resolve(.., Fill::Body)`)
pub fn body(literal: &str, default_opacity: f64) -> String {
    resolve(literal, default_opacity, Fill::Body)
}

/// Resolve a header color from an already resolved body color
pub fn header(literal: &str) -> String {
    resolve(literal, 1.0, Fill::Header)
}

/// Replace the first `)` in `rest` with `, <alpha>)`
fn close_with_alpha(rest: &str, alpha: &str) -> String {
    match rest.find(')') {
        Some(idx) => format!("{}, {}){}", &rest[..idx], alpha, &rest[idx + 1..]),
        None => rest.to_string(),
    }
}

/// Full opacity is written as `1.0` so header output matches the
/// rewritten form of existing rgba/hsla literals.
fn format_alpha(opacity: f64) -> String {
    if opacity >= 1.0 {
        "1.0".to_string()
    } else {
        opacity.to_string()
    }
}
