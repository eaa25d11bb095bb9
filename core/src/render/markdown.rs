//! Markdown renderer producing documentation-style tables.

use crate::model::CommandEntry;
use crate::model::HookEntry;
use crate::model::SkillEntry;
use crate::model::Snapshot;
use crate::render::Renderer;

/// Renders a snapshot as a Markdown document with one table per section.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    fn skills_section(&self, skills: &[SkillEntry]) -> Vec<String> {
        let mut lines = vec!["## Skills".to_string(), String::new()];

        if skills.is_empty() {
            lines.push("*No skills found.*".to_string());
            lines.push(String::new());
            return lines;
        }

        lines.push("| Name | Description | Triggers | Path |".to_string());
        lines.push("|------|-------------|----------|------|".to_string());

        for skill in skills {
            let name = escape_cell(&skill.name);
            let desc = escape_cell(non_empty_or(&skill.description, "-"));
            let triggers = if skill.triggers.is_empty() {
                "-".to_string()
            } else {
                escape_cell(&skill.triggers.join(", "))
            };
            let path = escape_cell(&skill.path.display().to_string());

            lines.push(format!("| {name} | {desc} | {triggers} | `{path}` |"));
        }

        lines.push(String::new());
        lines
    }

    fn commands_section(&self, commands: &[CommandEntry]) -> Vec<String> {
        let mut lines = vec!["## Commands".to_string(), String::new()];

        if commands.is_empty() {
            lines.push("*No commands found.*".to_string());
            lines.push(String::new());
            return lines;
        }

        lines.push("| Command | Description | Path |".to_string());
        lines.push("|---------|-------------|------|".to_string());

        for cmd in commands {
            let name = format!("`/{}`", escape_cell(&cmd.name));
            let desc = escape_cell(non_empty_or(&cmd.description, "-"));
            let path = escape_cell(&cmd.path.display().to_string());

            lines.push(format!("| {name} | {desc} | `{path}` |"));
        }

        lines.push(String::new());
        lines
    }

    fn hooks_section(&self, hooks: &[HookEntry]) -> Vec<String> {
        let mut lines = vec!["## Hooks".to_string(), String::new()];

        if hooks.is_empty() {
            lines.push("*No hooks found.*".to_string());
            lines.push(String::new());
            return lines;
        }

        lines.push("| Name | Event | Status | Matcher | Commands |".to_string());
        lines.push("|------|-------|--------|---------|----------|".to_string());

        for hook in hooks {
            let name = escape_cell(&hook.name);
            let event = escape_cell(&hook.event);
            let status = if hook.enabled {
                "✅ Enabled"
            } else {
                "⚠️ Disabled"
            };
            let matcher = escape_cell(non_empty_or(&hook.matcher, "*"));

            lines.push(format!(
                "| {name} | `{event}` | {status} | `{matcher}` | {} |",
                hook.commands.len()
            ));
        }

        lines.push(String::new());
        lines
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, snapshot: &Snapshot) -> String {
        let mut lines = vec![
            "# Claude Code Extensions".to_string(),
            String::new(),
            format!("**Total Extensions:** {}", snapshot.total()),
            String::new(),
        ];

        lines.extend(self.skills_section(&snapshot.skills));
        lines.extend(self.commands_section(&snapshot.commands));
        lines.extend(self.hooks_section(&snapshot.hooks));

        lines.join("\n")
    }
}

/// Escape table-breaking characters: pipes are backslash-escaped and
/// newlines collapse to spaces.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn non_empty_or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.is_empty() { fallback } else { text }
}
