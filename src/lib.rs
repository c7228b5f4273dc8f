//! Spotlight - logical group overlays for text documents
//!
//! Finds `// VLG: <name>` marker comments, turns the lines they introduce
//! into colored groups, and keeps host overlays (highlights, folding,
//! code lenses, sticky header, status indicator) in sync with the document,
//! the cursor and the viewport. Built on the Elm Architecture pattern:
//! host events arrive as [`Msg`], [`update`] mutates the [`Session`], and
//! side effects come back as [`Cmd`].

pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod group;
pub mod messages;
pub mod model;
pub mod picker;
pub mod presentation;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SpotlightConfig;
pub use group::LogicalGroup;
pub use messages::Msg;
pub use model::Session;
pub use presentation::{Host, MemoryHost};
pub use update::update;
