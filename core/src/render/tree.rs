//! Tree-text renderer for terminal output.

use crate::model::CommandEntry;
use crate::model::HookEntry;
use crate::model::SkillEntry;
use crate::model::Snapshot;
use crate::render::Renderer;
use crate::render::ansi;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const SPACE: &str = "    ";

/// Renders a snapshot as a box-drawing tree, one section per category.
#[derive(Debug, Clone)]
pub struct TreeRenderer {
    use_color: bool,
}

impl TreeRenderer {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.use_color {
            format!("{code}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn skill_lines(&self, skill: &SkillEntry) -> Vec<String> {
        let mut lines = vec![self.paint(&skill.name, ansi::GREEN)];

        if !skill.description.is_empty() {
            lines.push(format!(
                "{BRANCH}{} {}",
                self.paint("Description:", ansi::DIM),
                skill.description
            ));
        }
        if !skill.triggers.is_empty() {
            lines.push(format!(
                "{BRANCH}{} {}",
                self.paint("Triggers:", ansi::DIM),
                skill.triggers.join(", ")
            ));
        }
        lines.push(format!(
            "{LAST_BRANCH}{} {}",
            self.paint("Path:", ansi::DIM),
            skill.path.display()
        ));

        lines
    }

    fn command_lines(&self, cmd: &CommandEntry) -> Vec<String> {
        let mut lines = vec![self.paint(&format!("/{}", cmd.name), ansi::GREEN)];

        if !cmd.description.is_empty() {
            lines.push(format!(
                "{BRANCH}{} {}",
                self.paint("Description:", ansi::DIM),
                cmd.description
            ));
        }
        lines.push(format!(
            "{LAST_BRANCH}{} {}",
            self.paint("Path:", ansi::DIM),
            cmd.path.display()
        ));

        lines
    }

    fn hook_lines(&self, hook: &HookEntry) -> Vec<String> {
        let (status_text, status_color) = if hook.enabled {
            ("enabled", ansi::GREEN)
        } else {
            ("disabled", ansi::YELLOW)
        };

        let mut lines = vec![format!(
            "{} [{}]",
            hook.name,
            self.paint(status_text, status_color)
        )];

        lines.push(format!(
            "{BRANCH}{} {}",
            self.paint("Event:", ansi::DIM),
            hook.event
        ));
        lines.push(format!(
            "{BRANCH}{} {}",
            self.paint("Matcher:", ansi::DIM),
            hook.matcher
        ));

        let commands = if hook.commands.is_empty() {
            "(none)".to_string()
        } else {
            hook.commands.len().to_string()
        };
        lines.push(format!(
            "{LAST_BRANCH}{} {}",
            self.paint("Commands:", ansi::DIM),
            commands
        ));

        lines
    }
}

impl Renderer for TreeRenderer {
    fn render(&self, snapshot: &Snapshot) -> String {
        let mut lines = vec![self.paint("Claude Code Extensions", ansi::BOLD), String::new()];

        let sections: Vec<(&str, Vec<Vec<String>>)> = vec![
            (
                "Skills",
                snapshot.skills.iter().map(|s| self.skill_lines(s)).collect(),
            ),
            (
                "Commands",
                snapshot
                    .commands
                    .iter()
                    .map(|c| self.command_lines(c))
                    .collect(),
            ),
            (
                "Hooks",
                snapshot.hooks.iter().map(|h| self.hook_lines(h)).collect(),
            ),
        ];

        let section_count = sections.len();
        for (i, (title, items)) in sections.into_iter().enumerate() {
            let is_last_section = i == section_count - 1;
            let branch = if is_last_section { LAST_BRANCH } else { BRANCH };
            let prefix = if is_last_section { SPACE } else { VERTICAL };

            let header = format!("{title} ({})", items.len());
            lines.push(format!("{branch}{}", self.paint(&header, ansi::BLUE)));

            if items.is_empty() {
                lines.push(format!(
                    "{prefix}{LAST_BRANCH}{}",
                    self.paint("(none)", ansi::DIM)
                ));
            } else {
                let item_count = items.len();
                for (j, item_lines) in items.into_iter().enumerate() {
                    let is_last_item = j == item_count - 1;
                    let item_branch = if is_last_item { LAST_BRANCH } else { BRANCH };
                    let item_prefix = if is_last_item { SPACE } else { VERTICAL };

                    let mut detail = item_lines.into_iter();
                    if let Some(first) = detail.next() {
                        lines.push(format!("{prefix}{item_branch}{first}"));
                    }
                    for line in detail {
                        lines.push(format!("{prefix}{item_prefix}{line}"));
                    }
                }
            }

            if !is_last_section {
                lines.push(VERTICAL.to_string());
            }
        }

        lines.join("\n")
    }
}
