//! # Hooksmith core
//!
//! Scans Claude Code extension declarations (hooks, skills, slash
//! commands) into a unified [`model::Snapshot`] and renders them through
//! a pluggable [`render::Renderer`] family.
//!
//! ## Architecture
//!
//! - **Artifact parser**: extracts name/description/triggers from
//!   loosely structured markdown documents.
//! - **Scanner**: aggregates skills, commands, and hooks into a snapshot.
//!   Lenient by design: missing or malformed inputs degrade to empty
//!   results, never errors.
//! - **Store + manager**: the strict mutation path over `settings.json`
//!   (enable/disable/add/remove/import/export). Malformed JSON is fatal
//!   here, unlike the scanning path.
//! - **Renderers**: tree-text, Markdown, and HTML. The interactive
//!   terminal browser lives in the `hooksmith-tui` crate and implements
//!   the same trait.

pub mod artifact;
pub mod error;
pub mod manager;
pub mod model;
pub mod render;
pub mod scanner;
pub mod store;

pub use error::HooksError;
pub use manager::HooksManager;
pub use model::Snapshot;
pub use render::Renderer;
pub use scanner::ExtensionScanner;
