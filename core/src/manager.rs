//! Hook mutation operations over the settings document.
//!
//! Enable/disable move raw definitions between the two sibling
//! collections without altering them; remove deletes them. Name
//! resolution is case-insensitive and accepts an `Event:name` qualifier.
//! Interactive concerns (disambiguation, confirmation) belong to the
//! caller; this module only reports what it found.

use std::path::Path;

use strum::IntoEnumIterator;

use hooksmith_protocol::HookCommand;
use hooksmith_protocol::HookDef;
use hooksmith_protocol::HookEvent;
use hooksmith_protocol::SettingsDoc;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::HooksError;
use crate::model::HookEntry;
use crate::scanner::collect_hooks;
use crate::store::SettingsStore;

/// Manages hook definitions in a loaded settings document.
#[derive(Debug)]
pub struct HooksManager {
    store: SettingsStore,
    doc: SettingsDoc,
}

impl HooksManager {
    /// Load the document at `path`. Missing file is an empty document;
    /// malformed JSON is fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HooksError> {
        let store = SettingsStore::new(path.as_ref());
        let doc = store.load()?;
        Ok(Self { store, doc })
    }

    pub fn settings_path(&self) -> &Path {
        self.store.path()
    }

    pub fn document(&self) -> &SettingsDoc {
        &self.doc
    }

    /// Persist the current document.
    pub fn save(&self, backup: bool) -> Result<(), HooksError> {
        self.store.save(&self.doc, backup)
    }

    /// All hooks in document order, enabled first.
    pub fn all_hooks(&self) -> Vec<HookEntry> {
        collect_hooks(&self.doc)
    }

    /// Find hooks by name, case-insensitively. An `Event:name` qualifier
    /// restricts the match to one event.
    pub fn find_by_name(&self, name: &str) -> Vec<HookEntry> {
        let all = self.all_hooks();

        if let Some((event_part, name_part)) = name.split_once(':') {
            let event_lower = event_part.to_lowercase();
            let name_lower = name_part.to_lowercase();
            return all
                .into_iter()
                .filter(|h| {
                    h.event.to_lowercase() == event_lower && h.name.to_lowercase() == name_lower
                })
                .collect();
        }

        let name_lower = name.to_lowercase();
        all.into_iter()
            .filter(|h| h.name.to_lowercase() == name_lower)
            .collect()
    }

    /// Move a hook from the disabled to the enabled collection. A hook
    /// that is already enabled is left alone.
    pub fn enable(&mut self, hook: &HookEntry) {
        if hook.enabled {
            return;
        }
        remove_from(&mut self.doc.disabled_hooks, hook);
        self.doc
            .hooks
            .entry(hook.event.clone())
            .or_default()
            .push(hook.raw.clone());
    }

    /// Move a hook from the enabled to the disabled collection.
    pub fn disable(&mut self, hook: &HookEntry) {
        if !hook.enabled {
            return;
        }
        remove_from(&mut self.doc.hooks, hook);
        self.doc
            .disabled_hooks
            .entry(hook.event.clone())
            .or_default()
            .push(hook.raw.clone());
    }

    /// Delete a hook from whichever collection holds it.
    pub fn remove(&mut self, hook: &HookEntry) {
        if hook.enabled {
            remove_from(&mut self.doc.hooks, hook);
        } else {
            remove_from(&mut self.doc.disabled_hooks, hook);
        }
    }

    /// Enable every disabled hook. Returns how many were moved.
    pub fn enable_all(&mut self) -> usize {
        let mut moved = 0;
        let disabled = std::mem::take(&mut self.doc.disabled_hooks);
        for (event, defs) in disabled {
            moved += defs.len();
            self.doc.hooks.entry(event).or_default().extend(defs);
        }
        moved
    }

    /// Disable every enabled hook. Returns how many were moved.
    pub fn disable_all(&mut self) -> usize {
        let mut moved = 0;
        let enabled = std::mem::take(&mut self.doc.hooks);
        for (event, defs) in enabled {
            moved += defs.len();
            self.doc
                .disabled_hooks
                .entry(event)
                .or_default()
                .extend(defs);
        }
        moved
    }

    /// Remove every hook. Returns the removed entries for reporting.
    pub fn remove_all(&mut self) -> Vec<HookEntry> {
        let removed = self.all_hooks();
        self.doc.hooks.clear();
        self.doc.disabled_hooks.clear();
        removed
    }

    /// Create a new enabled hook with a single shell command.
    ///
    /// The event name is matched case-insensitively against the closed
    /// event set; a duplicate `(event, name)` is rejected.
    pub fn add(
        &mut self,
        event: &str,
        name: &str,
        matcher: &str,
        command: &str,
        timeout: u64,
    ) -> Result<HookEvent, HooksError> {
        let event: HookEvent = event
            .parse()
            .map_err(|_| HooksError::UnknownEvent(event.to_string()))?;

        if !self.find_by_name(&format!("{event}:{name}")).is_empty() {
            return Err(HooksError::DuplicateHook {
                name: name.to_string(),
                event: event.to_string(),
            });
        }

        let def = HookDef {
            name: Some(name.to_string()),
            matcher: Some(matcher.to_string()),
            hooks: vec![HookCommand::Command {
                command: command.to_string(),
                timeout,
            }],
            extra: Default::default(),
        };
        self.doc.hooks.entry(event.to_string()).or_default().push(def);
        Ok(event)
    }

    /// Check the document for problems.
    pub fn validate(&self) -> ValidationReport {
        let hooks = self.all_hooks();
        let mut issues = Vec::new();
        let mut warnings = Vec::new();

        for h in &hooks {
            if h.matcher.is_empty() {
                warnings.push(format!(
                    "Hook '{}' has no matcher (will match nothing)",
                    h.name
                ));
            }
            if h.commands.is_empty() {
                warnings.push(format!("Hook '{}' has no commands (no-op hook)", h.name));
            }
            if !HookEvent::iter().any(|e| e.to_string() == h.event) {
                issues.push(format!(
                    "Hook '{}' has unknown event type: {}",
                    h.name, h.event
                ));
            }
        }

        let enabled = hooks.iter().filter(|h| h.enabled).count();
        ValidationReport {
            total: hooks.len(),
            enabled,
            disabled: hooks.len() - enabled,
            issues,
            warnings,
        }
    }

    /// Build the export document (hooks plus provenance).
    pub fn export_document(&self) -> serde_json::Value {
        serde_json::json!({
            "version": "1.0",
            "source": self.store.path().display().to_string(),
            "hooks": self.doc.hooks,
            "_disabled_hooks": self.doc.disabled_hooks,
        })
    }

    /// Merge an import document into the current one. Returns how many
    /// hooks were added.
    pub fn merge_import(&mut self, import: ImportDoc) -> usize {
        let count = import.count();
        for (event, defs) in import.hooks {
            self.doc.hooks.entry(event).or_default().extend(defs);
        }
        for (event, defs) in import.disabled_hooks {
            self.doc
                .disabled_hooks
                .entry(event)
                .or_default()
                .extend(defs);
        }
        count
    }
}

/// Remove the definition matching `hook`'s display name from its event
/// list, dropping the event key when the list empties.
fn remove_from(collection: &mut IndexMap<String, Vec<HookDef>>, hook: &HookEntry) {
    if let Some(defs) = collection.get_mut(&hook.event) {
        if let Some(pos) = defs
            .iter()
            .enumerate()
            .position(|(i, def)| def.display_name(&hook.event, i) == hook.name)
        {
            defs.remove(pos);
        }
        if defs.is_empty() {
            collection.shift_remove(&hook.event);
        }
    }
}

/// An export/import payload: the two hook collections with optional
/// provenance fields, which are ignored on import.
#[derive(Debug, Deserialize)]
pub struct ImportDoc {
    pub hooks: IndexMap<String, Vec<HookDef>>,
    #[serde(rename = "_disabled_hooks", default)]
    pub disabled_hooks: IndexMap<String, Vec<HookDef>>,
}

impl ImportDoc {
    /// Parse an export payload. A document without a `hooks` key is
    /// rejected.
    pub fn parse(content: &str) -> Result<Self, HooksError> {
        let value: serde_json::Value = content
            .parse()
            .map_err(|e| HooksError::InvalidImport(format!("invalid JSON: {e}")))?;
        if value.get("hooks").is_none() {
            return Err(HooksError::InvalidImport("missing 'hooks' key".to_string()));
        }
        serde_json::from_value(value).map_err(|e| HooksError::InvalidImport(e.to_string()))
    }

    /// Total hooks across both collections.
    pub fn count(&self) -> usize {
        self.hooks.values().map(Vec::len).sum::<usize>()
            + self.disabled_hooks.values().map(Vec::len).sum::<usize>()
    }
}

/// Result of [`HooksManager::validate`].
#[derive(Debug)]
pub struct ValidationReport {
    pub total: usize,
    pub enabled: usize,
    pub disabled: usize,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}
