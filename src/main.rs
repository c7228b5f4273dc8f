use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use spotlight::cli::CliArgs;
use spotlight::config::SpotlightConfig;
use spotlight::model::{Document, EditorView, ViewId};
use spotlight::picker::{GroupPicker, PickerItem};
use spotlight::presentation::{HostSnapshot, MemoryHost};
use spotlight::{update, LogicalGroup, Msg, Session};

/// Everything the headless host observed after one pass
#[derive(Serialize)]
struct Report<'a> {
    file: String,
    tag: &'a str,
    groups: &'a [LogicalGroup],
    current: Option<&'a LogicalGroup>,
    overlay: HostSnapshot,
}

fn main() -> Result<()> {
    spotlight::tracing::init();

    let args = CliArgs::parse();

    if args.log_path {
        match spotlight::config_paths::log_file() {
            Some(path) => println!("{}", path.display()),
            None => anyhow::bail!("No config directory available"),
        }
        return Ok(());
    }

    if args.init_config {
        let config = SpotlightConfig::default();
        let saved = match &args.config {
            Some(path) => config.save_to(path),
            None => config.save(),
        };
        saved.map_err(anyhow::Error::msg)?;
        return Ok(());
    }

    let Some(file) = args.file.as_deref() else {
        anyhow::bail!("No input file given");
    };

    let config = match &args.config {
        Some(path) => SpotlightConfig::from_file(path).map_err(anyhow::Error::msg)?,
        None => SpotlightConfig::load(),
    };

    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let mut session = Session::new(MemoryHost::new(), config);
    let view = EditorView::new(ViewId(0), Document::with_text(&text), args.viewport())
        .with_cursor(args.cursor_line());
    update(&mut session, Msg::ViewChanged(Some(view)));

    if let Some(query) = &args.pick {
        let picker = GroupPicker::from_groups(session.groups());
        let hits = picker.filter(query);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&hits)?);
        } else {
            print_picker(&hits);
        }
        return Ok(());
    }

    let report = Report {
        file: file.display().to_string(),
        tag: &session.config().tag,
        groups: session.groups(),
        current: session.current_group(),
        overlay: session.host().snapshot(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &Report) {
    println!(
        "{}: {} group(s) tagged {}",
        report.file,
        report.groups.len(),
        report.tag
    );
    for group in report.groups {
        println!(
            "  {:>5}-{:<5} {:<32} {}",
            group.start_line + 1,
            group.end_line + 1,
            group.name,
            group.color
        );
    }

    match report.current {
        Some(group) => println!("current: {}", group.name),
        None => println!("current: -"),
    }

    let status = &report.overlay.status;
    if status.visible {
        println!(
            "status: {} [{}]",
            status.text,
            status.background.as_deref().unwrap_or("")
        );
    }
    println!(
        "overlay: {} highlight(s), {} fold(s), {} lens(es)",
        report.overlay.highlights.len(),
        report.overlay.folding.len(),
        report.overlay.code_lenses.len()
    );
}

fn print_picker(items: &[&PickerItem]) {
    if items.is_empty() {
        println!("no matching groups");
        return;
    }
    for item in items {
        println!("{:<32} {}", item.label, item.description);
    }
}
