//! Text artifact parser.
//!
//! Skills and slash commands are declared in lightly structured markdown
//! files: an optional `# Heading` naming the extension, a first paragraph
//! line as its description, and an optional `Triggers: a, b, c` line.
//! Parsing is total: malformed or empty documents yield empty fields,
//! never errors. Fallback naming (directory or file stem) is the
//! caller's responsibility and applies whenever the parsed name is empty.

/// Parsed fields of a skill or command artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactDoc {
    /// Content of the first `# ` heading, marker stripped and trimmed.
    pub name: String,
    /// First qualifying non-empty line after the heading.
    pub description: String,
    /// Entries of the first `Triggers:` line, comma-split and trimmed.
    pub triggers: Vec<String>,
}

const TRIGGERS_PREFIX: &str = "Triggers:";

/// Parse an artifact document.
pub fn parse_artifact(text: &str) -> ArtifactDoc {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    let heading_idx = lines.iter().position(|l| l.starts_with("# "));
    let name = heading_idx
        .and_then(|i| lines[i].strip_prefix("# "))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_default();

    // The description is the first non-empty line after the heading (or
    // from the start when there is none) that is neither a directive nor
    // another heading.
    let body_start = heading_idx.map_or(0, |i| i + 1);
    let description = lines
        .iter()
        .skip(body_start)
        .find(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with(TRIGGERS_PREFIX))
        .map(|l| l.to_string())
        .unwrap_or_default();

    let triggers = lines
        .iter()
        .find_map(|l| l.strip_prefix(TRIGGERS_PREFIX))
        .map(|rest| {
            rest.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    ArtifactDoc {
        name,
        description,
        triggers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_complete_document() {
        let doc = parse_artifact("# Complete Skill\nThis skill does everything.\nTriggers: alpha, beta, gamma\nSome more content...\n");

        assert_eq!(doc.name, "Complete Skill");
        assert_eq!(doc.description, "This skill does everything.");
        assert_eq!(doc.triggers, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_parse_without_triggers() {
        let doc = parse_artifact("# No Triggers Skill\nJust a description.\n");

        assert_eq!(doc.name, "No Triggers Skill");
        assert_eq!(doc.description, "Just a description.");
        assert!(doc.triggers.is_empty());
    }

    #[test]
    fn test_parse_empty_document() {
        assert_eq!(parse_artifact(""), ArtifactDoc::default());
    }

    #[test]
    fn test_parse_no_heading() {
        let doc = parse_artifact("Just a description without header.\nMore content.\n");

        assert_eq!(doc.name, "");
        assert_eq!(doc.description, "Just a description without header.");
    }

    #[test]
    fn test_triggers_line_is_not_description() {
        let doc = parse_artifact("# Skill\nTriggers: x, y\nActual description.\n");

        assert_eq!(doc.description, "Actual description.");
        assert_eq!(doc.triggers, vec!["x", "y"]);
    }

    #[test]
    fn test_triggers_drop_empty_entries() {
        let doc = parse_artifact("Triggers: a, , b,,\n");
        assert_eq!(doc.triggers, vec!["a", "b"]);
    }

    #[test]
    fn test_triggers_prefix_is_case_sensitive() {
        let doc = parse_artifact("# Skill\ntriggers: a, b\n");

        assert!(doc.triggers.is_empty());
        // The lowercase line is ordinary text, so it becomes the description.
        assert_eq!(doc.description, "triggers: a, b");
    }

    #[test]
    fn test_second_heading_is_not_description() {
        let doc = parse_artifact("# Title\n## Section\nReal description.\n");

        assert_eq!(doc.name, "Title");
        assert_eq!(doc.description, "Real description.");
    }

    #[test]
    fn test_heading_marker_stripped_and_trimmed() {
        let doc = parse_artifact("#   Spaced Out   \nDesc.\n");
        assert_eq!(doc.name, "Spaced Out");
    }
}
