//! Serde model of the settings document.
//!
//! The document has two sibling hook collections keyed by event name:
//! `hooks` (enabled) and `_disabled_hooks` (disabled). Everything else in
//! the file belongs to other tools and must round-trip untouched, so both
//! the document and each hook definition carry a flattened map of extra
//! keys, and event maps use `IndexMap` to keep document order.

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// The full settings document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SettingsDoc {
    /// Enabled hooks, keyed by event name, in document order.
    #[serde(default)]
    pub hooks: IndexMap<String, Vec<HookDef>>,

    /// Disabled hooks, keyed by event name.
    ///
    /// Omitted from the document entirely when empty.
    #[serde(
        rename = "_disabled_hooks",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub disabled_hooks: IndexMap<String, Vec<HookDef>>,

    /// Settings that belong to other tools, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SettingsDoc {
    /// Total number of hook definitions across both collections.
    pub fn hook_count(&self) -> usize {
        self.hooks.values().map(Vec::len).sum::<usize>()
            + self.disabled_hooks.values().map(Vec::len).sum::<usize>()
    }
}

/// A single hook definition as stored in the settings document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HookDef {
    /// Optional display name. Hooks without one are addressed as
    /// `{event}#{index}`.
    #[serde(rename = "_name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Pattern to match tool names. Absent means match all (`*`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<String>,

    /// The commands to run when the hook fires.
    #[serde(default)]
    pub hooks: Vec<HookCommand>,

    /// Unknown per-hook keys, preserved for write-back.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl HookDef {
    /// Resolve the display name for a definition at `index` within its
    /// event list.
    pub fn display_name(&self, event: &str, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{event}#{index}"),
        }
    }

    /// The effective matcher pattern, defaulting to the wildcard.
    pub fn effective_matcher(&self) -> &str {
        self.matcher.as_deref().unwrap_or("*")
    }
}

/// A command entry inside a hook definition.
///
/// Only two shapes ever appear in practice, so this is a closed tagged
/// union rather than an open map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HookCommand {
    /// Run a shell command with a timeout.
    Command {
        command: String,
        /// Timeout in seconds.
        #[serde(default = "default_timeout")]
        timeout: u64,
    },

    /// Inject a prompt.
    Prompt { prompt: String },
}

/// Default command timeout in seconds.
pub fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_doc() -> &'static str {
        r#"{
            "model": "opus",
            "hooks": {
                "PostToolUse": [
                    {
                        "_name": "lint",
                        "matcher": "Write|Edit",
                        "hooks": [
                            {"type": "command", "command": "npm run lint", "timeout": 30}
                        ]
                    },
                    {
                        "matcher": "Write",
                        "hooks": [
                            {"type": "prompt", "prompt": "Review the change."}
                        ]
                    }
                ]
            },
            "_disabled_hooks": {
                "PreToolUse": [
                    {"_name": "slow", "hooks": []}
                ]
            }
        }"#
    }

    #[test]
    fn test_parse_sample_document() {
        let doc: SettingsDoc = serde_json::from_str(sample_doc()).unwrap();

        assert_eq!(doc.hook_count(), 3);
        let post = &doc.hooks["PostToolUse"];
        assert_eq!(post[0].display_name("PostToolUse", 0), "lint");
        assert_eq!(post[1].display_name("PostToolUse", 1), "PostToolUse#1");
        assert_eq!(post[0].effective_matcher(), "Write|Edit");
        assert_eq!(doc.disabled_hooks["PreToolUse"][0].effective_matcher(), "*");
    }

    #[test]
    fn test_command_timeout_defaults_to_60() {
        let cmd: HookCommand =
            serde_json::from_str(r#"{"type": "command", "command": "echo hi"}"#).unwrap();
        assert_eq!(
            cmd,
            HookCommand::Command {
                command: "echo hi".to_string(),
                timeout: 60,
            }
        );
    }

    #[test]
    fn test_prompt_command_round_trip() {
        let cmd = HookCommand::Prompt {
            prompt: "check style".to_string(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"prompt\""));
        let back: HookCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_write_back_preserves_extra_keys() {
        let doc: SettingsDoc = serde_json::from_str(sample_doc()).unwrap();
        let out = serde_json::to_string_pretty(&doc).unwrap();
        let reparsed: SettingsDoc = serde_json::from_str(&out).unwrap();

        assert_eq!(reparsed, doc);
        assert_eq!(
            reparsed.extra.get("model"),
            Some(&serde_json::Value::String("opus".to_string()))
        );
    }

    #[test]
    fn test_empty_disabled_hooks_omitted() {
        let doc = SettingsDoc::default();
        let out = serde_json::to_string(&doc).unwrap();
        assert!(!out.contains("_disabled_hooks"));
        assert!(out.contains("\"hooks\""));
    }
}
