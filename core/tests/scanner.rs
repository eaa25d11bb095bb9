//! Integration tests for the extension scanner against real temp trees.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use hooksmith_core::ExtensionScanner;

const SAMPLE_SETTINGS: &str = r#"{
  "hooks": {
    "PostToolUse": [
      {
        "_name": "lint",
        "matcher": "Write|Edit",
        "hooks": [
          {"type": "command", "command": "npm run lint --fix", "timeout": 60}
        ]
      },
      {
        "_name": "format",
        "matcher": "Write",
        "hooks": [
          {"type": "command", "command": "prettier --write .", "timeout": 30}
        ]
      }
    ],
    "PreToolUse": [
      {
        "_name": "confirm-dangerous",
        "matcher": "Bash",
        "hooks": [
          {"type": "command", "command": "python3 ~/.claude/hooks/confirm_dangerous.py", "timeout": 10}
        ]
      }
    ]
  },
  "_disabled_hooks": {
    "PostToolUse": [
      {
        "_name": "slow-tests",
        "matcher": "Write|Edit",
        "hooks": [
          {"type": "command", "command": "npm run test:integration", "timeout": 300}
        ]
      }
    ]
  }
}"#;

fn scanner_for(claude_dir: &Path) -> ExtensionScanner {
    ExtensionScanner::with_paths(claude_dir, claude_dir.join("settings.json"))
}

fn write_skill(claude_dir: &Path, dir_name: &str, content: &str) -> PathBuf {
    let skill_dir = claude_dir.join("skills").join(dir_name);
    fs::create_dir_all(&skill_dir).unwrap();
    let path = skill_dir.join("SKILL.md");
    fs::write(&path, content).unwrap();
    path
}

fn write_command(claude_dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let commands_dir = claude_dir.join("commands");
    fs::create_dir_all(&commands_dir).unwrap();
    let path = commands_dir.join(file_name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn scan_skills_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("skills")).unwrap();

    assert!(scanner_for(dir.path()).scan_skills().is_empty());
}

#[test]
fn scan_skills_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(scanner_for(dir.path()).scan_skills().is_empty());
}

#[test]
fn scan_skills_parses_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_skill(
        dir.path(),
        "test-skill",
        "# Test Skill\nThis is a test skill for unit testing.\nTriggers: test, sample, example\n",
    );

    let skills = scanner_for(dir.path()).scan_skills();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].name, "Test Skill");
    assert_eq!(skills[0].description, "This is a test skill for unit testing.");
    assert_eq!(skills[0].triggers, vec!["test", "sample", "example"]);
    assert_eq!(skills[0].path, path);
}

#[test]
fn scan_skills_sorted_by_name() {
    let dir = tempfile::tempdir().unwrap();
    write_skill(dir.path(), "zeta", "# zeta skill\n");
    write_skill(dir.path(), "alpha", "# alpha skill\n");
    write_skill(dir.path(), "mid", "# mid skill\n");

    let names: Vec<String> = scanner_for(dir.path())
        .scan_skills()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["alpha skill", "mid skill", "zeta skill"]);
}

#[test]
fn scan_skills_skips_directories_without_artifact() {
    let dir = tempfile::tempdir().unwrap();
    write_skill(dir.path(), "real", "# Real\n");
    fs::create_dir_all(dir.path().join("skills").join("empty-dir")).unwrap();
    // A stray file at the top level of skills/ is not a skill either.
    fs::write(dir.path().join("skills").join("README.md"), "# Not a skill\n").unwrap();

    let skills = scanner_for(dir.path()).scan_skills();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].name, "Real");
}

#[test]
fn scan_skills_falls_back_to_directory_name() {
    let dir = tempfile::tempdir().unwrap();
    write_skill(dir.path(), "unnamed-skill", "Just a description, no heading.\n");

    let skills = scanner_for(dir.path()).scan_skills();
    assert_eq!(skills[0].name, "unnamed-skill");
    assert_eq!(skills[0].description, "Just a description, no heading.");
}

#[test]
fn scan_commands_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(scanner_for(dir.path()).scan_commands().is_empty());
}

#[test]
fn scan_commands_parses_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_command(
        dir.path(),
        "test-cmd.md",
        "# Test Command\nThis is a test command for unit testing.\n",
    );

    let commands = scanner_for(dir.path()).scan_commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].name, "Test Command");
    assert_eq!(
        commands[0].description,
        "This is a test command for unit testing."
    );
    assert_eq!(commands[0].path, path);
}

#[test]
fn scan_commands_sorted_and_filtered_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    write_command(dir.path(), "b.md", "# bravo\n");
    write_command(dir.path(), "a.md", "# alpha\n");
    write_command(dir.path(), "notes.txt", "# not a command\n");
    write_command(dir.path(), "script.sh", "echo hi\n");

    let names: Vec<String> = scanner_for(dir.path())
        .scan_commands()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["alpha", "bravo"]);
}

#[test]
fn scan_commands_falls_back_to_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    write_command(dir.path(), "deploy.md", "Deploys things.\n");

    let commands = scanner_for(dir.path()).scan_commands();
    assert_eq!(commands[0].name, "deploy");
}

#[test]
fn scan_hooks_missing_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(scanner_for(dir.path()).scan_hooks().is_empty());
}

#[test]
fn scan_hooks_empty_settings() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path()).unwrap();
    fs::write(
        dir.path().join("settings.json"),
        r#"{"hooks": {}, "_disabled_hooks": {}}"#,
    )
    .unwrap();

    assert!(scanner_for(dir.path()).scan_hooks().is_empty());
}

#[test]
fn scan_hooks_reads_both_collections() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("settings.json"), SAMPLE_SETTINGS).unwrap();

    let hooks = scanner_for(dir.path()).scan_hooks();
    assert_eq!(hooks.len(), 4);

    let enabled: Vec<&str> = hooks
        .iter()
        .filter(|h| h.enabled)
        .map(|h| h.name.as_str())
        .collect();
    assert_eq!(enabled, vec!["lint", "format", "confirm-dangerous"]);

    let disabled: Vec<&str> = hooks
        .iter()
        .filter(|h| !h.enabled)
        .map(|h| h.name.as_str())
        .collect();
    assert_eq!(disabled, vec!["slow-tests"]);
}

#[test]
fn scan_hooks_malformed_json_yields_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("settings.json"), "{invalid json").unwrap();

    assert!(scanner_for(dir.path()).scan_hooks().is_empty());
}

#[test]
fn scan_hooks_generates_name_for_unnamed_hooks() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("settings.json"),
        r#"{"hooks": {"PostToolUse": [
            {"matcher": "*", "hooks": []},
            {"matcher": "Write", "hooks": []}
        ]}}"#,
    )
    .unwrap();

    let hooks = scanner_for(dir.path()).scan_hooks();
    assert_eq!(hooks[0].name, "PostToolUse#0");
    assert_eq!(hooks[1].name, "PostToolUse#1");
}

#[test]
fn scan_all_composes_the_three_scans() {
    let dir = tempfile::tempdir().unwrap();
    write_skill(dir.path(), "test-skill", "# Test Skill\nDesc.\n");
    write_command(dir.path(), "test-cmd.md", "# Test Command\nDesc.\n");
    fs::write(dir.path().join("settings.json"), SAMPLE_SETTINGS).unwrap();

    let snapshot = scanner_for(dir.path()).scan_all();
    assert_eq!(snapshot.skills.len(), 1);
    assert_eq!(snapshot.commands.len(), 1);
    assert_eq!(snapshot.hooks.len(), 4);
    assert_eq!(snapshot.total(), 6);
}

#[test]
fn scan_all_empty_environment() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = scanner_for(dir.path()).scan_all();
    assert_eq!(snapshot.total(), 0);
}
