//! Unified in-memory model of scanned extensions.
//!
//! Entries are constructed fresh on each scan, treated as read-only by
//! every renderer, and discarded afterwards.

use std::path::PathBuf;

use serde::Serialize;

use hooksmith_protocol::HookCommand;
use hooksmith_protocol::HookDef;

/// A skill discovered under `skills/<dir>/SKILL.md`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkillEntry {
    /// Display title (heading or directory name).
    pub name: String,
    /// First paragraph line; may be empty.
    pub description: String,
    /// Activation triggers; may be empty.
    pub triggers: Vec<String>,
    /// Location of the defining `SKILL.md`.
    pub path: PathBuf,
}

/// A slash command discovered under `commands/*.md`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommandEntry {
    /// Display name (heading or file stem, without the leading slash).
    pub name: String,
    /// First paragraph line; may be empty.
    pub description: String,
    /// Location of the defining file.
    pub path: PathBuf,
}

/// A hook read from the settings document.
///
/// Identity is `(event, lowercased name)`. Uniqueness is enforced only
/// when adding hooks; duplicates introduced by external edits are
/// tolerated and surfaced as-is.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HookEntry {
    /// Display name: explicit `_name` or `{event}#{index}`.
    pub name: String,
    /// Event key as found in the document. Usually one of the closed
    /// event set, but unknown keys survive scanning so validation can
    /// report them.
    pub event: String,
    /// Which collection the hook came from.
    pub enabled: bool,
    /// Matcher pattern, `*` when absent.
    pub matcher: String,
    /// Command list; may be empty.
    pub commands: Vec<HookCommand>,
    /// Original definition, preserved for write-back.
    pub raw: HookDef,
}

impl HookEntry {
    /// Build an entry from a raw definition at `index` within its
    /// event's list.
    pub fn from_def(def: &HookDef, event: &str, index: usize, enabled: bool) -> Self {
        Self {
            name: def.display_name(event, index),
            event: event.to_string(),
            enabled,
            matcher: def.effective_matcher().to_string(),
            commands: def.hooks.clone(),
            raw: def.clone(),
        }
    }

    /// `Event:name` qualifier used in listings and disambiguation.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.event, self.name)
    }
}

/// Aggregate snapshot handed to renderers.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Snapshot {
    /// Sorted by name, case-sensitive.
    pub skills: Vec<SkillEntry>,
    /// Sorted by name, case-sensitive.
    pub commands: Vec<CommandEntry>,
    /// Document order: enabled first, then disabled.
    pub hooks: Vec<HookEntry>,
}

impl Snapshot {
    /// Total number of extensions across the three categories.
    pub fn total(&self) -> usize {
        self.skills.len() + self.commands.len() + self.hooks.len()
    }
}
