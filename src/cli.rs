//! Command-line argument parsing for the headless host
//!
//! Supports:
//! - Listing the groups of a file
//! - Simulating cursor and viewport position
//! - JSON output of the full overlay state
//! - Fuzzy filtering of the group picker
//! - Writing a default config file, locating the log file

use clap::Parser;
use std::path::PathBuf;

use crate::model::Viewport;

/// Lines shown when no explicit viewport is given
pub const DEFAULT_VISIBLE_LINES: usize = 50;

/// Show the logical groups of a document and the overlays they produce
#[derive(Parser, Debug)]
#[command(name = "spotlight", version, about = "Show logical groups of a document")]
pub struct CliArgs {
    /// File to analyze
    #[arg(
        value_name = "FILE",
        required_unless_present_any = ["init_config", "log_path"]
    )]
    pub file: Option<PathBuf>,

    /// Cursor line (1-based)
    #[arg(short = 'l', long, value_name = "N")]
    pub line: Option<usize>,

    /// First visible line (1-based)
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Last visible line (1-based)
    #[arg(long, value_name = "N")]
    pub bottom: Option<usize>,

    /// Config file (defaults to ~/.config/spotlight/config.yaml)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the overlay state as JSON
    #[arg(long)]
    pub json: bool,

    /// Print picker entries matching QUERY instead of the overlay
    #[arg(long, value_name = "QUERY")]
    pub pick: Option<String>,

    /// Write the default config (to --config or the standard location) and exit
    #[arg(long)]
    pub init_config: bool,

    /// Print the path of the current log file and exit
    #[arg(long)]
    pub log_path: bool,
}

impl CliArgs {
    /// Viewport from `--top`/`--bottom`, converted to 0-based lines
    pub fn viewport(&self) -> Viewport {
        let top = self.top.map(|n| n.saturating_sub(1)).unwrap_or(0);
        let bottom = self
            .bottom
            .map(|n| n.saturating_sub(1))
            .unwrap_or(top.saturating_add(DEFAULT_VISIBLE_LINES - 1));
        Viewport::new(top, bottom)
    }

    /// 0-based cursor line, defaulting to the top of the viewport
    pub fn cursor_line(&self) -> usize {
        self.line
            .map(|n| n.saturating_sub(1))
            .unwrap_or_else(|| self.viewport().top_line)
    }
}
