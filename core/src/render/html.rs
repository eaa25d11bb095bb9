//! Standalone HTML renderer with embedded CSS and collapsible sections.

use crate::model::CommandEntry;
use crate::model::HookEntry;
use crate::model::SkillEntry;
use crate::model::Snapshot;
use crate::render::Renderer;

/// Renders a snapshot as a self-contained HTML document. Dark and light
/// palettes are selected by the viewer's `prefers-color-scheme`.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    fn skills_section(&self, skills: &[SkillEntry]) -> String {
        if skills.is_empty() {
            return r#"<p class="empty">No skills configured</p>"#.to_string();
        }

        let items: Vec<String> = skills
            .iter()
            .map(|skill| {
                let desc_html = if skill.description.is_empty() {
                    String::new()
                } else {
                    format!(
                        r#"<div class="item-desc">{}</div>"#,
                        escape(&skill.description)
                    )
                };
                let triggers_html = if skill.triggers.is_empty() {
                    String::new()
                } else {
                    let triggers: Vec<String> =
                        skill.triggers.iter().map(|t| escape(t)).collect();
                    format!(
                        r#"<div class="item-meta"><span class="label">Triggers:</span> {}</div>"#,
                        triggers.join(", ")
                    )
                };

                format!(
                    r#"            <div class="item">
                <div class="item-header">
                    <span class="item-name">{name}</span>
                </div>
                {desc_html}
                {triggers_html}
                <div class="item-meta"><span class="label">Path:</span> <code>{path}</code></div>
            </div>"#,
                    name = escape(&skill.name),
                    path = escape(&skill.path.display().to_string()),
                )
            })
            .collect();

        items.join("\n")
    }

    fn commands_section(&self, commands: &[CommandEntry]) -> String {
        if commands.is_empty() {
            return r#"<p class="empty">No commands configured</p>"#.to_string();
        }

        let items: Vec<String> = commands
            .iter()
            .map(|cmd| {
                let desc_html = if cmd.description.is_empty() {
                    String::new()
                } else {
                    format!(
                        r#"<div class="item-desc">{}</div>"#,
                        escape(&cmd.description)
                    )
                };

                format!(
                    r#"            <div class="item">
                <div class="item-header">
                    <span class="item-name command-name">/{name}</span>
                </div>
                {desc_html}
                <div class="item-meta"><span class="label">Path:</span> <code>{path}</code></div>
            </div>"#,
                    name = escape(&cmd.name),
                    path = escape(&cmd.path.display().to_string()),
                )
            })
            .collect();

        items.join("\n")
    }

    fn hooks_section(&self, hooks: &[HookEntry]) -> String {
        if hooks.is_empty() {
            return r#"<p class="empty">No hooks configured</p>"#.to_string();
        }

        let items: Vec<String> = hooks
            .iter()
            .map(|hook| {
                let (status_class, status_text) = if hook.enabled {
                    ("status-enabled", "enabled")
                } else {
                    ("status-disabled", "disabled")
                };

                let cmd_count = hook.commands.len();
                let cmd_text = if cmd_count == 1 {
                    "1 command".to_string()
                } else {
                    format!("{cmd_count} commands")
                };

                format!(
                    r#"            <div class="item hook-item">
                <div class="item-header">
                    <span class="item-name">{name}</span>
                    <span class="status-badge {status_class}">{status_text}</span>
                </div>
                <div class="item-meta"><span class="label">Event:</span> <span class="event-type">{event}</span></div>
                <div class="item-meta"><span class="label">Matcher:</span> <code>{matcher}</code></div>
                <div class="item-meta"><span class="label">Commands:</span> {cmd_text}</div>
            </div>"#,
                    name = escape(&hook.name),
                    event = escape(&hook.event),
                    matcher = escape(&hook.matcher),
                )
            })
            .collect();

        items.join("\n")
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, snapshot: &Snapshot) -> String {
        let skills_html = self.skills_section(&snapshot.skills);
        let commands_html = self.commands_section(&snapshot.commands);
        let hooks_html = self.hooks_section(&snapshot.hooks);

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Claude Code Extensions</title>
    <style>
{CSS}
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Claude Code Extensions</h1>
            <p class="subtitle">Skills, Commands, and Hooks Overview</p>
        </header>

        <main>
            <section class="collapsible">
                <button class="section-header" onclick="toggleSection(this)" aria-expanded="true">
                    <span class="section-icon">▼</span>
                    <span class="section-title">Skills</span>
                    <span class="section-count">{skills_count}</span>
                </button>
                <div class="section-content">
{skills_html}
                </div>
            </section>

            <section class="collapsible">
                <button class="section-header" onclick="toggleSection(this)" aria-expanded="true">
                    <span class="section-icon">▼</span>
                    <span class="section-title">Commands</span>
                    <span class="section-count">{commands_count}</span>
                </button>
                <div class="section-content">
{commands_html}
                </div>
            </section>

            <section class="collapsible">
                <button class="section-header" onclick="toggleSection(this)" aria-expanded="true">
                    <span class="section-icon">▼</span>
                    <span class="section-title">Hooks</span>
                    <span class="section-count">{hooks_count}</span>
                </button>
                <div class="section-content">
{hooks_html}
                </div>
            </section>
        </main>

        <footer>
            <p>Generated by Claude Code Hooks Manager</p>
        </footer>
    </div>

    <script>
        function toggleSection(button) {{
            const section = button.parentElement;
            const content = section.querySelector('.section-content');
            const icon = button.querySelector('.section-icon');
            const isExpanded = button.getAttribute('aria-expanded') === 'true';

            button.setAttribute('aria-expanded', !isExpanded);
            content.style.display = isExpanded ? 'none' : 'block';
            icon.textContent = isExpanded ? '▶' : '▼';
        }}
    </script>
</body>
</html>"#,
            skills_count = snapshot.skills.len(),
            commands_count = snapshot.commands.len(),
            hooks_count = snapshot.hooks.len(),
        )
    }
}

/// Escape HTML metacharacters, including both quote styles so escaped
/// text is safe inside attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

const CSS: &str = r#"        :root {
            --bg-primary: #1a1b26;
            --bg-secondary: #24283b;
            --bg-tertiary: #414868;
            --text-primary: #c0caf5;
            --text-secondary: #a9b1d6;
            --text-muted: #565f89;
            --accent-blue: #7aa2f7;
            --accent-green: #9ece6a;
            --accent-yellow: #e0af68;
            --accent-red: #f7768e;
            --accent-purple: #bb9af7;
            --border-color: #414868;
            --shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.3);
        }

        @media (prefers-color-scheme: light) {
            :root {
                --bg-primary: #f8f9fa;
                --bg-secondary: #ffffff;
                --bg-tertiary: #e9ecef;
                --text-primary: #212529;
                --text-secondary: #495057;
                --text-muted: #6c757d;
                --accent-blue: #0d6efd;
                --accent-green: #198754;
                --accent-yellow: #ffc107;
                --accent-red: #dc3545;
                --accent-purple: #6f42c1;
                --border-color: #dee2e6;
                --shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
            }
        }

        * {
            box-sizing: border-box;
            margin: 0;
            padding: 0;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background-color: var(--bg-primary);
            color: var(--text-primary);
            line-height: 1.6;
            min-height: 100vh;
        }

        .container {
            max-width: 900px;
            margin: 0 auto;
            padding: 2rem 1rem;
        }

        header {
            text-align: center;
            margin-bottom: 2rem;
            padding-bottom: 1.5rem;
            border-bottom: 1px solid var(--border-color);
        }

        h1 {
            font-size: 2rem;
            font-weight: 600;
            color: var(--accent-blue);
            margin-bottom: 0.5rem;
        }

        .subtitle {
            color: var(--text-muted);
            font-size: 1rem;
        }

        main {
            display: flex;
            flex-direction: column;
            gap: 1rem;
        }

        .collapsible {
            background-color: var(--bg-secondary);
            border-radius: 8px;
            border: 1px solid var(--border-color);
            overflow: hidden;
            box-shadow: var(--shadow);
        }

        .section-header {
            width: 100%;
            display: flex;
            align-items: center;
            gap: 0.75rem;
            padding: 1rem 1.25rem;
            background-color: var(--bg-secondary);
            border: none;
            cursor: pointer;
            text-align: left;
            color: var(--text-primary);
            font-size: 1rem;
            transition: background-color 0.2s ease;
        }

        .section-header:hover {
            background-color: var(--bg-tertiary);
        }

        .section-icon {
            font-size: 0.75rem;
            color: var(--text-muted);
            transition: transform 0.2s ease;
        }

        .section-title {
            font-weight: 600;
            flex-grow: 1;
        }

        .section-count {
            background-color: var(--bg-tertiary);
            color: var(--text-secondary);
            padding: 0.25rem 0.75rem;
            border-radius: 9999px;
            font-size: 0.875rem;
            font-weight: 500;
        }

        .section-content {
            padding: 0.5rem 1.25rem 1.25rem;
            border-top: 1px solid var(--border-color);
        }

        .item {
            padding: 1rem;
            margin-top: 0.75rem;
            background-color: var(--bg-primary);
            border-radius: 6px;
            border: 1px solid var(--border-color);
        }

        .item:first-child {
            margin-top: 0.5rem;
        }

        .item-header {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            margin-bottom: 0.5rem;
        }

        .item-name {
            font-weight: 600;
            color: var(--accent-green);
            font-size: 1.05rem;
        }

        .command-name {
            color: var(--accent-purple);
            font-family: 'SF Mono', Monaco, 'Cascadia Code', monospace;
        }

        .item-desc {
            color: var(--text-secondary);
            margin-bottom: 0.5rem;
            font-size: 0.925rem;
        }

        .item-meta {
            color: var(--text-muted);
            font-size: 0.875rem;
            margin-top: 0.25rem;
        }

        .item-meta .label {
            color: var(--text-secondary);
            font-weight: 500;
        }

        .item-meta code {
            background-color: var(--bg-tertiary);
            padding: 0.125rem 0.375rem;
            border-radius: 4px;
            font-family: 'SF Mono', Monaco, 'Cascadia Code', monospace;
            font-size: 0.8rem;
        }

        .status-badge {
            font-size: 0.75rem;
            font-weight: 600;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
            text-transform: uppercase;
            letter-spacing: 0.025em;
        }

        .status-enabled {
            background-color: rgba(158, 206, 106, 0.2);
            color: var(--accent-green);
        }

        .status-disabled {
            background-color: rgba(224, 175, 104, 0.2);
            color: var(--accent-yellow);
        }

        .event-type {
            color: var(--accent-blue);
            font-weight: 500;
        }

        .empty {
            color: var(--text-muted);
            font-style: italic;
            padding: 1rem;
            text-align: center;
        }

        footer {
            margin-top: 2rem;
            padding-top: 1.5rem;
            border-top: 1px solid var(--border-color);
            text-align: center;
            color: var(--text-muted);
            font-size: 0.875rem;
        }

        @media (max-width: 640px) {
            .container {
                padding: 1rem 0.75rem;
            }

            h1 {
                font-size: 1.5rem;
            }

            .section-header {
                padding: 0.875rem 1rem;
            }

            .section-content {
                padding: 0.5rem 1rem 1rem;
            }

            .item {
                padding: 0.75rem;
            }
        }"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_document_structure() {
        let out = HtmlRenderer::new().render(&Snapshot::default());

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.ends_with("</html>"));
        assert!(out.contains("<title>Claude Code Extensions</title>"));
        assert!(out.contains("function toggleSection(button)"));
        assert!(out.contains("prefers-color-scheme: light"));
    }

    #[test]
    fn test_empty_sections_have_placeholders() {
        let out = HtmlRenderer::new().render(&Snapshot::default());

        assert!(out.contains("No skills configured"));
        assert!(out.contains("No commands configured"));
        assert!(out.contains("No hooks configured"));
    }

    #[test]
    fn test_markup_in_names_is_escaped() {
        let snapshot = Snapshot {
            skills: vec![SkillEntry {
                name: "<script>alert(1)</script>".to_string(),
                description: "uses \"quotes\" & 'apostrophes'".to_string(),
                triggers: Vec::new(),
                path: PathBuf::from("/tmp/x/SKILL.md"),
            }],
            ..Default::default()
        };

        let out = HtmlRenderer::new().render(&snapshot);
        assert!(!out.contains("<script>alert(1)</script>"));
        assert!(out.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(out.contains("&quot;quotes&quot; &amp; &#x27;apostrophes&#x27;"));
    }

    #[test]
    fn test_hook_status_badges() {
        use hooksmith_protocol::HookDef;

        let def = HookDef {
            name: Some("fmt".to_string()),
            matcher: Some("Write".to_string()),
            hooks: Vec::new(),
            extra: Default::default(),
        };
        let snapshot = Snapshot {
            hooks: vec![
                crate::model::HookEntry::from_def(&def, "PostToolUse", 0, true),
                crate::model::HookEntry::from_def(&def, "PreToolUse", 0, false),
            ],
            ..Default::default()
        };

        let out = HtmlRenderer::new().render(&snapshot);
        assert!(out.contains("status-enabled"));
        assert!(out.contains("status-disabled"));
        assert!(out.contains("0 commands"));
    }

    #[test]
    fn test_section_counts_rendered() {
        let snapshot = Snapshot {
            commands: vec![CommandEntry {
                name: "deploy".to_string(),
                description: String::new(),
                path: PathBuf::from("/tmp/deploy.md"),
            }],
            ..Default::default()
        };

        let out = HtmlRenderer::new().render(&snapshot);
        assert!(out.contains(r#"<span class="section-title">Commands</span>"#));
        assert!(out.contains("/deploy"));
    }
}
