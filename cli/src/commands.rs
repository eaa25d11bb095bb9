//! Command implementations.
//!
//! Every command returns a process exit code. User-facing errors are
//! printed here (stderr, red when colored) instead of bubbling up as
//! `anyhow` errors, so messages stay stable for scripting.

use std::io::IsTerminal;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context as _;
use anyhow::Result;
use strum::IntoEnumIterator;

use hooksmith_core::ExtensionScanner;
use hooksmith_core::HooksError;
use hooksmith_core::HooksManager;
use hooksmith_core::Renderer;
use hooksmith_core::manager::ImportDoc;
use hooksmith_core::model::HookEntry;
use hooksmith_core::render::HtmlRenderer;
use hooksmith_core::render::MarkdownRenderer;
use hooksmith_core::render::RendererKind;
use hooksmith_core::render::TreeRenderer;
use hooksmith_core::render::ansi;
use hooksmith_protocol::HookCommand;
use hooksmith_protocol::HookEvent;
use hooksmith_tui::TuiRenderer;

use crate::cli::AddArgs;
use crate::cli::Cli;
use crate::cli::Command;
use crate::cli::VisualizeArgs;

/// Default file name for HTML output when none is given.
const HTML_DEFAULT_OUTPUT: &str = "claude-extensions.html";

/// Resolved global flags and target paths for one invocation.
pub struct Context {
    pub claude_dir: PathBuf,
    pub settings_path: PathBuf,
    pub scope_label: &'static str,
    pub use_color: bool,
    pub json: bool,
    pub quiet: bool,
    pub dry_run: bool,
    pub backup: bool,
    pub force: bool,
}

impl Context {
    fn from_cli(cli: &Cli) -> Self {
        let home_dir = dirs::home_dir().unwrap_or_default().join(".claude");
        let project_dir = PathBuf::from(".claude");

        let (claude_dir, scope_label) = if cli.scope.global_scope {
            (home_dir, "global")
        } else if cli.scope.project_scope {
            (project_dir, "project")
        } else if project_dir.join("settings.json").exists() {
            (project_dir, "project")
        } else {
            (home_dir, "global")
        };

        Self {
            settings_path: claude_dir.join("settings.json"),
            claude_dir,
            scope_label,
            use_color: !cli.no_color && std::io::stdout().is_terminal(),
            json: cli.json,
            quiet: cli.quiet,
            dry_run: cli.dry_run,
            backup: !cli.no_backup,
            force: cli.force,
        }
    }

    fn color(&self, text: &str, code: &str) -> String {
        if self.use_color {
            format!("{code}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn error(&self, message: &str) {
        eprintln!("{}", self.color(&format!("Error: {message}"), ansi::RED));
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.color(message, ansi::GREEN));
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Ask for confirmation. `--force` always answers yes; without a
    /// terminal on stdin confirmation cannot be given.
    fn confirm(&self, message: &str) -> Result<bool> {
        if self.force {
            return Ok(true);
        }
        if !std::io::stdin().is_terminal() {
            self.error("Confirmation required. Use --force to skip.");
            return Ok(false);
        }

        print!("{message} [y/N] ");
        std::io::stdout().flush()?;
        let mut response = String::new();
        std::io::stdin().read_line(&mut response)?;
        let response = response.trim().to_lowercase();
        Ok(response == "y" || response == "yes")
    }

    fn output_json(&self, value: &serde_json::Value) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Resolve a name to exactly one hook, prompting on ambiguity when
    /// interactive.
    fn resolve_hook(&self, manager: &HooksManager, name: &str) -> Result<Option<HookEntry>> {
        let matches = manager.find_by_name(name);

        if matches.is_empty() {
            self.error(&format!("No hook named '{name}' found"));
            let all = manager.all_hooks();
            if !all.is_empty() {
                println!("Available hooks:");
                for h in &all {
                    println!("  {}", h.qualified_name());
                }
            }
            return Ok(None);
        }

        if matches.len() == 1 {
            return Ok(matches.into_iter().next());
        }

        if self.force || !std::io::stdin().is_terminal() {
            self.error(&format!(
                "Multiple hooks named '{name}' found. Specify event type:"
            ));
            for h in &matches {
                println!("  {}", h.qualified_name());
            }
            return Ok(None);
        }

        println!("Multiple hooks named '{name}' found. Select one:");
        for (i, h) in matches.iter().enumerate() {
            let status = if h.enabled {
                self.color("enabled", ansi::GREEN)
            } else {
                self.color("disabled", ansi::YELLOW)
            };
            println!("  [{}] {} ({status})", i + 1, h.qualified_name());
        }

        let choice = prompt("Enter number (or 'q' to quit): ")?;
        if choice.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if let Ok(idx) = choice.parse::<usize>() {
            if idx >= 1 && idx <= matches.len() {
                return Ok(matches.into_iter().nth(idx - 1));
            }
        }

        self.error("Invalid selection");
        Ok(None)
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn hook_json(h: &HookEntry) -> serde_json::Value {
    serde_json::json!({
        "name": h.name,
        "event": h.event,
        "enabled": h.enabled,
        "matcher": h.matcher,
        "commands": h.commands,
    })
}

/// Dispatch the parsed command line. Returns the process exit code.
pub fn run(cli: Cli) -> Result<u8> {
    let Some(command) = &cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(0);
    };

    let ctx = Context::from_cli(&cli);

    let load_manager = || -> Result<Option<HooksManager>> {
        match HooksManager::load(&ctx.settings_path) {
            Ok(manager) => Ok(Some(manager)),
            Err(HooksError::InvalidSettings { path, source }) => {
                ctx.error(&format!("Invalid JSON in {}: {source}", path.display()));
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    };

    match command {
        Command::Events => return cmd_events(&ctx),
        Command::Visualize(args) => return cmd_visualize(&ctx, args),
        _ => {}
    }

    let Some(mut manager) = load_manager()? else {
        return Ok(1);
    };

    match command {
        Command::List => cmd_list(&ctx, &manager),
        Command::Show { name } => cmd_show(&ctx, &manager, name),
        Command::Validate => cmd_validate(&ctx, &manager),
        Command::Enable { name } => cmd_enable(&ctx, &mut manager, name),
        Command::Disable { name } => cmd_disable(&ctx, &mut manager, name),
        Command::EnableAll => cmd_enable_all(&ctx, &mut manager),
        Command::DisableAll => cmd_disable_all(&ctx, &mut manager),
        Command::Remove { name } => cmd_remove(&ctx, &mut manager, name),
        Command::RemoveAll => cmd_remove_all(&ctx, &mut manager),
        Command::Add(args) => cmd_add(&ctx, &mut manager, args),
        Command::Export { file } => cmd_export(&ctx, &manager, file.as_deref()),
        Command::Import { file } => cmd_import(&ctx, &mut manager, file),
        Command::Events | Command::Visualize(_) => unreachable!("handled above"),
    }
}

fn cmd_list(ctx: &Context, manager: &HooksManager) -> Result<u8> {
    let hooks = manager.all_hooks();

    if ctx.json {
        ctx.output_json(&serde_json::json!({
            "scope": ctx.scope_label,
            "path": ctx.settings_path.display().to_string(),
            "hooks": hooks.iter().map(hook_json).collect::<Vec<_>>(),
        }))?;
        return Ok(0);
    }

    if ctx.quiet {
        for h in &hooks {
            println!("{}", h.qualified_name());
        }
        return Ok(0);
    }

    let scope = if ctx.scope_label == "project" {
        "Project hooks"
    } else {
        "Global hooks"
    };
    println!(
        "{} ({}):\n",
        ctx.color(scope, ansi::BOLD),
        ctx.settings_path.display()
    );

    if hooks.is_empty() {
        println!("  (no hooks configured)");
        return Ok(0);
    }

    let enabled: Vec<&HookEntry> = hooks.iter().filter(|h| h.enabled).collect();
    let disabled: Vec<&HookEntry> = hooks.iter().filter(|h| !h.enabled).collect();

    if !enabled.is_empty() {
        println!("  {}", ctx.color("ENABLED:", ansi::GREEN));
        for h in &enabled {
            println!(
                "    [{}] {} (matcher: {})",
                h.event,
                ctx.color(&h.name, ansi::BOLD),
                h.matcher
            );
        }
    }

    if !disabled.is_empty() {
        if !enabled.is_empty() {
            println!();
        }
        println!("  {}", ctx.color("DISABLED:", ansi::YELLOW));
        for h in &disabled {
            println!(
                "    [{}] {} (matcher: {})",
                h.event,
                ctx.color(&h.name, ansi::BOLD),
                h.matcher
            );
        }
    }

    Ok(0)
}

fn cmd_show(ctx: &Context, manager: &HooksManager, name: &str) -> Result<u8> {
    let Some(hook) = ctx.resolve_hook(manager, name)? else {
        return Ok(1);
    };

    if ctx.json {
        let mut value = hook_json(&hook);
        if let Some(obj) = value.as_object_mut() {
            obj.insert("raw".to_string(), serde_json::to_value(&hook.raw)?);
        }
        ctx.output_json(&value)?;
        return Ok(0);
    }

    let status = if hook.enabled {
        ctx.color("enabled", ansi::GREEN)
    } else {
        ctx.color("disabled", ansi::YELLOW)
    };
    println!("Hook: {}", ctx.color(&hook.name, ansi::BOLD));
    println!("Event: {}", hook.event);
    println!("Status: {status}");
    println!("Matcher: {}", hook.matcher);

    if !hook.commands.is_empty() {
        println!("Commands:");
        for cmd in &hook.commands {
            match cmd {
                HookCommand::Command { command, timeout } => {
                    println!("  - {command} (timeout: {timeout}s)");
                }
                HookCommand::Prompt { prompt } => {
                    let preview: String = prompt.chars().take(50).collect();
                    println!("  - [prompt] {preview}...");
                }
            }
        }
    }

    Ok(0)
}

fn cmd_events(ctx: &Context) -> Result<u8> {
    if ctx.json {
        let data: Vec<serde_json::Value> = HookEvent::iter()
            .map(|e| {
                serde_json::json!({
                    "event": e.to_string(),
                    "description": e.description(),
                    "supports": e.supports(),
                })
            })
            .collect();
        ctx.output_json(&serde_json::Value::Array(data))?;
        return Ok(0);
    }

    println!("{}\n", ctx.color("Available hook events:", ansi::BOLD));
    for event in HookEvent::iter() {
        let supports = if event.supports().is_empty() {
            String::new()
        } else {
            ctx.color(&format!(" (supports: {})", event.supports()), ansi::DIM)
        };
        println!(
            "  {:20} - {}{supports}",
            ctx.color(&event.to_string(), ansi::BLUE),
            event.description()
        );
    }

    Ok(0)
}

fn cmd_validate(ctx: &Context, manager: &HooksManager) -> Result<u8> {
    let report = manager.validate();
    let path = ctx.settings_path.display();

    if ctx.json {
        ctx.output_json(&serde_json::json!({
            "valid": report.is_valid(),
            "path": path.to_string(),
            "hooks_count": report.total,
            "enabled_count": report.enabled,
            "disabled_count": report.disabled,
            "issues": report.issues,
            "warnings": report.warnings,
        }))?;
        return Ok(u8::from(!report.is_valid()));
    }

    if report.is_valid() {
        println!("{}", ctx.color(&format!("✓ {path} is valid"), ansi::GREEN));
    } else {
        println!("{}", ctx.color(&format!("✗ {path} has issues:"), ansi::RED));
        for issue in &report.issues {
            println!("  {} {issue}", ctx.color("ERROR:", ansi::RED));
        }
    }

    println!(
        "✓ {} hooks found ({} enabled, {} disabled)",
        report.total, report.enabled, report.disabled
    );

    for warning in &report.warnings {
        println!("  {} {warning}", ctx.color("⚠ Warning:", ansi::YELLOW));
    }

    Ok(u8::from(!report.is_valid()))
}

fn cmd_enable(ctx: &Context, manager: &mut HooksManager, name: &str) -> Result<u8> {
    let Some(hook) = ctx.resolve_hook(manager, name)? else {
        return Ok(1);
    };

    if hook.enabled {
        ctx.info(&format!("Hook '{}' is already enabled", hook.name));
        return Ok(0);
    }

    let path = ctx.settings_path.display();
    if ctx.dry_run {
        ctx.info(&format!("Would enable hook '{}' in {path}", hook.name));
        println!("No changes made (dry-run mode)");
        return Ok(0);
    }

    manager.enable(&hook);
    manager.save(ctx.backup)?;
    ctx.success(&format!("Enabled hook '{}' in {path}", hook.name));
    Ok(0)
}

fn cmd_disable(ctx: &Context, manager: &mut HooksManager, name: &str) -> Result<u8> {
    let Some(hook) = ctx.resolve_hook(manager, name)? else {
        return Ok(1);
    };

    if !hook.enabled {
        ctx.info(&format!("Hook '{}' is already disabled", hook.name));
        return Ok(0);
    }

    let path = ctx.settings_path.display();
    if ctx.dry_run {
        ctx.info(&format!("Would disable hook '{}' in {path}", hook.name));
        println!("No changes made (dry-run mode)");
        return Ok(0);
    }

    manager.disable(&hook);
    manager.save(ctx.backup)?;
    ctx.success(&format!("Disabled hook '{}' in {path}", hook.name));
    Ok(0)
}

fn cmd_enable_all(ctx: &Context, manager: &mut HooksManager) -> Result<u8> {
    let disabled: Vec<HookEntry> = manager
        .all_hooks()
        .into_iter()
        .filter(|h| !h.enabled)
        .collect();

    if disabled.is_empty() {
        ctx.info("No disabled hooks to enable");
        return Ok(0);
    }

    if ctx.dry_run {
        ctx.info(&format!("Would enable {} hooks:", disabled.len()));
        for h in &disabled {
            println!("  - {}", h.qualified_name());
        }
        println!("No changes made (dry-run mode)");
        return Ok(0);
    }

    let moved = manager.enable_all();
    manager.save(ctx.backup)?;
    ctx.success(&format!(
        "Enabled {moved} hooks in {}",
        ctx.settings_path.display()
    ));
    Ok(0)
}

fn cmd_disable_all(ctx: &Context, manager: &mut HooksManager) -> Result<u8> {
    let enabled: Vec<HookEntry> = manager
        .all_hooks()
        .into_iter()
        .filter(|h| h.enabled)
        .collect();

    if enabled.is_empty() {
        ctx.info("No enabled hooks to disable");
        return Ok(0);
    }

    if !ctx.confirm(&format!("Disable all {} hooks?", enabled.len()))? {
        println!("Cancelled");
        return Ok(0);
    }

    if ctx.dry_run {
        ctx.info(&format!("Would disable {} hooks:", enabled.len()));
        for h in &enabled {
            println!("  - {}", h.qualified_name());
        }
        println!("No changes made (dry-run mode)");
        return Ok(0);
    }

    let moved = manager.disable_all();
    manager.save(ctx.backup)?;
    ctx.success(&format!(
        "Disabled {moved} hooks in {}",
        ctx.settings_path.display()
    ));
    Ok(0)
}

fn cmd_remove(ctx: &Context, manager: &mut HooksManager, name: &str) -> Result<u8> {
    let Some(hook) = ctx.resolve_hook(manager, name)? else {
        return Ok(1);
    };

    let path = ctx.settings_path.display();
    if !ctx.confirm(&format!("Remove hook '{}' from {path}?", hook.name))? {
        println!("Cancelled");
        return Ok(0);
    }

    if ctx.dry_run {
        ctx.info(&format!("Would remove hook '{}' from {path}", hook.name));
        println!("No changes made (dry-run mode)");
        return Ok(0);
    }

    manager.remove(&hook);
    manager.save(ctx.backup)?;
    ctx.success(&format!("Removed hook '{}' from {path}", hook.name));
    Ok(0)
}

fn cmd_remove_all(ctx: &Context, manager: &mut HooksManager) -> Result<u8> {
    let all = manager.all_hooks();

    if all.is_empty() {
        ctx.info("No hooks to remove");
        return Ok(0);
    }

    let path = ctx.settings_path.display();
    if !ctx.confirm(&format!("Remove ALL {} hooks from {path}?", all.len()))? {
        println!("Cancelled");
        return Ok(0);
    }

    if ctx.dry_run {
        ctx.info(&format!("Would remove {} hooks:", all.len()));
        for h in &all {
            let status = if h.enabled { "enabled" } else { "disabled" };
            println!("  - {} ({}, {status})", h.name, h.event);
        }
        println!("No changes made (dry-run mode)");
        return Ok(0);
    }

    let removed = manager.remove_all();
    manager.save(ctx.backup)?;
    ctx.success(&format!("Removed {} hooks from {path}:", removed.len()));
    for h in &removed {
        if h.enabled {
            println!("  - {} ({})", h.name, h.event);
        } else {
            println!("  - {} ({}, disabled)", h.name, h.event);
        }
    }
    Ok(0)
}

fn cmd_add(ctx: &Context, manager: &mut HooksManager, args: &AddArgs) -> Result<u8> {
    let (event, name, matcher, command, timeout) =
        match (&args.name, &args.event, &args.command) {
            (Some(name), Some(event), Some(command)) => (
                event.clone(),
                name.clone(),
                args.matcher.clone(),
                command.clone(),
                args.timeout,
            ),
            _ => {
                if !std::io::stdin().is_terminal() {
                    ctx.error(
                        "Interactive mode requires a terminal. Use --name, --event, --command flags.",
                    );
                    return Ok(1);
                }
                match add_interactive(ctx)? {
                    Some(params) => params,
                    None => return Ok(1),
                }
            }
        };

    match manager.add(&event, &name, &matcher, &command, timeout) {
        Ok(_) => {
            let path = ctx.settings_path.display();
            if ctx.dry_run {
                // The insertion stays in memory only; nothing is saved.
                let preview = serde_json::json!({
                    "_name": name,
                    "matcher": matcher,
                    "hooks": [{"type": "command", "command": command, "timeout": timeout}],
                });
                ctx.info(&format!("Would add hook '{name}' to {path}:"));
                println!("{}", serde_json::to_string_pretty(&preview)?);
                println!("No changes made (dry-run mode)");
                return Ok(0);
            }

            manager.save(ctx.backup)?;
            ctx.success(&format!("Added hook '{name}' to {path}"));
            Ok(0)
        }
        Err(HooksError::UnknownEvent(event)) => {
            ctx.error(&format!("Unknown event type: {event}"));
            println!("Valid event types:");
            for e in HookEvent::iter() {
                println!("  {e}");
            }
            Ok(1)
        }
        Err(HooksError::DuplicateHook { name, event }) => {
            ctx.error(&format!("Hook '{name}' already exists for event {event}"));
            Ok(1)
        }
        Err(err) => Err(err.into()),
    }
}

/// Prompt for the fields of a new hook. Returns `None` when the input
/// is invalid or the user aborts.
fn add_interactive(ctx: &Context) -> Result<Option<(String, String, String, String, u64)>> {
    println!("Add new hook\n");

    println!("Event types:");
    let events: Vec<HookEvent> = HookEvent::iter().collect();
    for (i, event) in events.iter().enumerate() {
        println!("  [{}] {event} - {}", i + 1, event.description());
    }

    let choice = prompt("\nEvent type (number or name): ")?;
    let event = if let Ok(idx) = choice.parse::<usize>() {
        match idx.checked_sub(1).and_then(|i| events.get(i)) {
            Some(event) => *event,
            None => {
                ctx.error("Invalid selection");
                return Ok(None);
            }
        }
    } else {
        match choice.parse::<HookEvent>() {
            Ok(event) => event,
            Err(_) => {
                ctx.error(&format!("Unknown event type: {choice}"));
                return Ok(None);
            }
        }
    };

    let name = prompt("Hook name: ")?;
    if name.is_empty() {
        ctx.error("Name is required");
        return Ok(None);
    }

    let matcher = {
        let raw = prompt("Matcher pattern (default: *): ")?;
        if raw.is_empty() { "*".to_string() } else { raw }
    };

    let command = prompt("Command: ")?;
    if command.is_empty() {
        ctx.error("Command is required");
        return Ok(None);
    }

    let timeout = {
        let raw = prompt("Timeout in seconds (default: 60): ")?;
        if raw.is_empty() {
            60
        } else {
            match raw.parse() {
                Ok(timeout) => timeout,
                Err(_) => {
                    ctx.error("Invalid timeout");
                    return Ok(None);
                }
            }
        }
    };

    Ok(Some((event.to_string(), name, matcher, command, timeout)))
}

fn cmd_export(
    ctx: &Context,
    manager: &HooksManager,
    file: Option<&std::path::Path>,
) -> Result<u8> {
    let export = manager.export_document();
    let count = manager.all_hooks().len();

    match file {
        Some(path) => {
            if ctx.dry_run {
                ctx.info(&format!("Would export {count} hooks to {}", path.display()));
                println!("No changes made (dry-run mode)");
                return Ok(0);
            }

            let mut content = serde_json::to_string_pretty(&export)?;
            content.push('\n');
            std::fs::write(path, content)
                .with_context(|| format!("writing {}", path.display()))?;
            ctx.success(&format!("Exported {count} hooks to {}", path.display()));
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&export)?);
        }
    }

    Ok(0)
}

fn cmd_import(ctx: &Context, manager: &mut HooksManager, file: &std::path::Path) -> Result<u8> {
    if !file.exists() {
        ctx.error(&format!("File not found: {}", file.display()));
        return Ok(1);
    }

    let content = std::fs::read_to_string(file)?;
    let import = match ImportDoc::parse(&content) {
        Ok(import) => import,
        Err(HooksError::InvalidImport(reason)) => {
            if reason.starts_with("invalid JSON") {
                ctx.error(&format!("Invalid JSON in {}", file.display()));
            } else {
                ctx.error(&format!("Invalid import file format: {reason}"));
            }
            return Ok(1);
        }
        Err(err) => return Err(err.into()),
    };

    let count = import.count();
    if count == 0 {
        ctx.info("No hooks to import");
        return Ok(0);
    }

    let path = ctx.settings_path.display();
    if !ctx.confirm(&format!("Import {count} hooks to {path}?"))? {
        println!("Cancelled");
        return Ok(0);
    }

    if ctx.dry_run {
        ctx.info(&format!("Would import {count} hooks to {path}"));
        println!("No changes made (dry-run mode)");
        return Ok(0);
    }

    let merged = manager.merge_import(import);
    manager.save(ctx.backup)?;
    ctx.success(&format!("Imported {merged} hooks to {path}"));
    Ok(0)
}

fn cmd_visualize(ctx: &Context, args: &VisualizeArgs) -> Result<u8> {
    let scanner = ExtensionScanner::with_paths(&ctx.claude_dir, &ctx.settings_path);
    let snapshot = scanner.scan_all();

    let renderer: Box<dyn Renderer> = match args.format {
        RendererKind::Terminal => Box::new(TreeRenderer::new(ctx.use_color)),
        RendererKind::Markdown => Box::new(MarkdownRenderer::new()),
        RendererKind::Html => Box::new(HtmlRenderer::new()),
        RendererKind::Tui => {
            let diagnostic = TuiRenderer::new().render(&snapshot);
            if diagnostic.is_empty() {
                return Ok(0);
            }
            // Already prefixed, so not routed through Context::error.
            eprintln!("{}", ctx.color(&diagnostic, ansi::RED));
            return Ok(1);
        }
    };

    // HTML is meant to be opened in a browser, so it defaults to a file
    // instead of stdout.
    let output = args.output.clone().or_else(|| {
        (args.format == RendererKind::Html).then(|| PathBuf::from(HTML_DEFAULT_OUTPUT))
    });

    match output {
        Some(path) => {
            renderer
                .render_to_file(&snapshot, &path)
                .with_context(|| format!("writing {}", path.display()))?;
            ctx.success(&format!("Generated {}", path.display()));
        }
        None => {
            println!("{}", renderer.render(&snapshot));
        }
    }

    Ok(0)
}
