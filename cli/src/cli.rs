//! Command-line definitions.

use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

use hooksmith_core::render::RendererKind;

/// Manage Claude Code hooks, skills, and slash commands.
#[derive(Debug, Parser)]
#[command(name = "hooksmith", version, about)]
#[command(after_help = "\
Examples:
  hooksmith list                      List all hooks (auto-detect scope)
  hooksmith list --global             List global hooks only
  hooksmith disable lint              Disable hook named 'lint'
  hooksmith enable PostToolUse:lint   Enable specific hook by event:name
  hooksmith add --name test --event PostToolUse --matcher Write --command \"pytest\"
  hooksmith export hooks_backup.json  Export hooks to file
  hooksmith visualize --format html   Write an HTML overview
")]
pub struct Cli {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Minimal output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Preview changes without applying
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip creating backup before modification
    #[arg(long, global = true)]
    pub no_backup: bool,

    /// Skip confirmation prompts
    #[arg(long, short, global = true)]
    pub force: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Which settings document to target. At most one may be given; the
/// default picks `./.claude/settings.json` when it exists and falls back
/// to the global file.
#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct ScopeArgs {
    /// Target ~/.claude/settings.json
    #[arg(long = "global", short = 'g', global = true)]
    pub global_scope: bool,

    /// Target ./.claude/settings.json
    #[arg(long = "project", short = 'p', global = true)]
    pub project_scope: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all hooks with status
    List,
    /// Show details of a specific hook
    Show {
        /// Hook name (or Event:name)
        name: String,
    },
    /// List available hook event types
    Events,
    /// Validate settings.json syntax
    Validate,
    /// Enable a disabled hook
    Enable {
        /// Hook name (or Event:name)
        name: String,
    },
    /// Disable an enabled hook
    Disable {
        /// Hook name (or Event:name)
        name: String,
    },
    /// Enable all disabled hooks
    EnableAll,
    /// Disable all enabled hooks (requires confirmation)
    DisableAll,
    /// Remove a hook permanently
    Remove {
        /// Hook name (or Event:name)
        name: String,
    },
    /// Remove ALL hooks permanently (requires confirmation)
    RemoveAll,
    /// Create a new hook (interactive or with flags)
    #[command(alias = "create")]
    Add(AddArgs),
    /// Export hooks to JSON file
    Export {
        /// Output file (stdout if not specified)
        file: Option<PathBuf>,
    },
    /// Import hooks from JSON file
    Import {
        /// Input JSON file
        file: PathBuf,
    },
    /// Render an overview of all extensions
    Visualize(VisualizeArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Hook name
    #[arg(long)]
    pub name: Option<String>,

    /// Event type (e.g., PostToolUse)
    #[arg(long, short)]
    pub event: Option<String>,

    /// Matcher pattern
    #[arg(long, short, default_value = "*")]
    pub matcher: String,

    /// Command to execute
    #[arg(long, short)]
    pub command: Option<String>,

    /// Timeout in seconds
    #[arg(long, short, default_value_t = 60)]
    pub timeout: u64,
}

#[derive(Debug, Args)]
pub struct VisualizeArgs {
    /// Output format: terminal, markdown, html, or tui
    #[arg(long, default_value_t = RendererKind::Terminal)]
    pub format: RendererKind,

    /// Output file (defaults to stdout; HTML defaults to
    /// ./claude-extensions.html)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_scope_flags_are_exclusive() {
        assert!(Cli::try_parse_from(["hooksmith", "-g", "-p", "list"]).is_err());
    }

    #[test]
    fn test_create_is_alias_for_add() {
        let cli = Cli::try_parse_from(["hooksmith", "create", "--name", "x"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Add(_))));
    }

    #[test]
    fn test_visualize_format_parses() {
        let cli = Cli::try_parse_from(["hooksmith", "visualize", "--format", "html"]).unwrap();
        match cli.command {
            Some(Command::Visualize(args)) => {
                assert_eq!(args.format, RendererKind::Html);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
