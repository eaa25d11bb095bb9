//! Extension scanner.
//!
//! Walks the Claude configuration directory for skill and command
//! artifacts and reads hook entries from the settings document, producing
//! a unified [`Snapshot`]. The three sub-scans are independent; a missing
//! directory or a malformed settings file yields an empty list for that
//! category, never an error. This is deliberately more lenient than the
//! mutation path in [`crate::store`], which treats malformed JSON as
//! fatal.

use std::path::Path;
use std::path::PathBuf;

use walkdir::WalkDir;

use hooksmith_protocol::SettingsDoc;

use crate::artifact::parse_artifact;
use crate::model::CommandEntry;
use crate::model::HookEntry;
use crate::model::SkillEntry;
use crate::model::Snapshot;

/// The expected skill file name in each skill directory.
const SKILL_MD: &str = "SKILL.md";

/// The file extension for command artifacts.
const COMMAND_EXT: &str = "md";

/// Scans a Claude configuration directory and settings document.
#[derive(Debug, Clone)]
pub struct ExtensionScanner {
    /// Root holding `skills/` and `commands/`.
    pub claude_dir: PathBuf,
    /// Location of the settings document.
    pub settings_path: PathBuf,
}

impl Default for ExtensionScanner {
    fn default() -> Self {
        let claude_dir = dirs::home_dir().unwrap_or_default().join(".claude");
        let settings_path = claude_dir.join("settings.json");
        Self {
            claude_dir,
            settings_path,
        }
    }
}

impl ExtensionScanner {
    /// Scanner over `~/.claude` and `~/.claude/settings.json`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner over explicit locations (used by the CLI for project
    /// scope and by tests).
    pub fn with_paths(claude_dir: impl Into<PathBuf>, settings_path: impl Into<PathBuf>) -> Self {
        Self {
            claude_dir: claude_dir.into(),
            settings_path: settings_path.into(),
        }
    }

    /// Scan immediate subdirectories of `skills/` for `SKILL.md` files.
    ///
    /// Directories without the artifact are skipped silently. Results are
    /// sorted by name, case-sensitive.
    pub fn scan_skills(&self) -> Vec<SkillEntry> {
        let root = self.claude_dir.join("skills");
        let mut skills = Vec::new();

        for entry in WalkDir::new(&root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| match e {
                Ok(e) => Some(e),
                Err(err) => {
                    tracing::debug!(error = %err, "skipping inaccessible entry during skill scan");
                    None
                }
            })
        {
            if !entry.file_type().is_dir() {
                continue;
            }
            let skill_md = entry.path().join(SKILL_MD);
            if !skill_md.is_file() {
                continue;
            }

            let doc = parse_artifact(&read_or_empty(&skill_md));
            let name = if doc.name.is_empty() {
                entry.file_name().to_string_lossy().into_owned()
            } else {
                doc.name
            };

            skills.push(SkillEntry {
                name,
                description: doc.description,
                triggers: doc.triggers,
                path: skill_md,
            });
        }

        skills.sort_by(|a, b| a.name.cmp(&b.name));
        skills
    }

    /// Scan files directly in `commands/` with the command extension.
    ///
    /// Non-matching files are ignored. Results are sorted by name.
    pub fn scan_commands(&self) -> Vec<CommandEntry> {
        let root = self.claude_dir.join("commands");
        let mut commands = Vec::new();

        for entry in WalkDir::new(&root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
        {
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(COMMAND_EXT)
            {
                continue;
            }

            let doc = parse_artifact(&read_or_empty(path));
            let name = if doc.name.is_empty() {
                path.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default()
            } else {
                doc.name
            };

            commands.push(CommandEntry {
                name,
                description: doc.description,
                path: path.to_path_buf(),
            });
        }

        commands.sort_by(|a, b| a.name.cmp(&b.name));
        commands
    }

    /// Read hooks from the settings document, enabled collection first.
    ///
    /// A missing or malformed document yields an empty list.
    pub fn scan_hooks(&self) -> Vec<HookEntry> {
        let content = match std::fs::read_to_string(&self.settings_path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!(
                    path = %self.settings_path.display(),
                    error = %err,
                    "settings document not readable, no hooks"
                );
                return Vec::new();
            }
        };

        let doc: SettingsDoc = match serde_json::from_str(&content) {
            Ok(doc) => doc,
            Err(err) => {
                tracing::debug!(
                    path = %self.settings_path.display(),
                    error = %err,
                    "settings document malformed, no hooks"
                );
                return Vec::new();
            }
        };

        collect_hooks(&doc)
    }

    /// Compose the three scans into one snapshot.
    pub fn scan_all(&self) -> Snapshot {
        Snapshot {
            skills: self.scan_skills(),
            commands: self.scan_commands(),
            hooks: self.scan_hooks(),
        }
    }
}

/// Flatten both hook collections of a settings document, preserving
/// document order: enabled hooks by event, then disabled hooks by event.
pub fn collect_hooks(doc: &SettingsDoc) -> Vec<HookEntry> {
    let mut hooks = Vec::new();

    for (event, defs) in &doc.hooks {
        for (index, def) in defs.iter().enumerate() {
            hooks.push(HookEntry::from_def(def, event, index, true));
        }
    }
    for (event, defs) in &doc.disabled_hooks {
        for (index, def) in defs.iter().enumerate() {
            hooks.push(HookEntry::from_def(def, event, index, false));
        }
    }

    hooks
}

fn read_or_empty(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}
