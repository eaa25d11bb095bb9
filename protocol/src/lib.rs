//! Protocol definitions for hooksmith.
//!
//! This crate defines the on-disk shape of the Claude Code settings
//! document (`settings.json`) and the closed enumeration of hook event
//! types. The serde model is written for faithful write-back: unknown
//! keys at both the document and hook level are preserved verbatim, and
//! event maps keep their document order.

pub mod event;
pub mod settings;

pub use event::HookEvent;
pub use settings::HookCommand;
pub use settings::HookDef;
pub use settings::SettingsDoc;
pub use settings::default_timeout;
