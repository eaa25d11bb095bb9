//! Snapshot renderers.
//!
//! Each renderer turns a [`Snapshot`] into a complete string in one
//! format. Renderers never mutate the snapshot and never touch the
//! filesystem except through [`Renderer::render_to_file`].

pub mod html;
pub mod markdown;
pub mod tree;

use std::io::Write;
use std::path::Path;

use strum_macros::Display;
use strum_macros::EnumString;

use crate::error::HooksError;
use crate::model::Snapshot;

pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;
pub use tree::TreeRenderer;

/// A snapshot-to-string renderer.
pub trait Renderer {
    /// Render the snapshot to a single string.
    fn render(&self, snapshot: &Snapshot) -> String;

    /// Render and write to `path`, replacing any existing file.
    fn render_to_file(&self, snapshot: &Snapshot, path: &Path) -> Result<(), HooksError> {
        let content = self.render(snapshot);
        let mut file = std::fs::File::create(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

/// Identifier of an output format, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RendererKind {
    Terminal,
    Markdown,
    Html,
    Tui,
}

/// ANSI escape codes shared by the text renderers.
pub mod ansi {
    pub const GREEN: &str = "\x1b[92m";
    pub const YELLOW: &str = "\x1b[93m";
    pub const RED: &str = "\x1b[91m";
    pub const BLUE: &str = "\x1b[94m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}
