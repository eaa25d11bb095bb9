//! Navigation state for the interactive browser.
//!
//! The state machine is pure: key handling mutates fields and nothing
//! else, so every transition is testable without a terminal.

use crossterm::event::KeyCode;

use hooksmith_core::Snapshot;
use hooksmith_protocol::HookCommand;

/// Number of browsable sections: Skills, Commands, Hooks.
pub const SECTION_COUNT: usize = 3;

/// Rows consumed by the header, tabs, separator, and footer.
const CHROME_ROWS: usize = 6;

/// Interactive browser state over one snapshot.
#[derive(Debug, Clone)]
pub struct App {
    pub snapshot: Snapshot,
    /// 0 = Skills, 1 = Commands, 2 = Hooks.
    pub current_section: usize,
    pub current_item: usize,
    pub scroll_offset: usize,
    pub show_detail: bool,
    pub show_help: bool,
    pub should_quit: bool,
    /// Last known terminal height, fed in by the event loop.
    pub viewport_rows: usize,
}

impl App {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            current_section: 0,
            current_item: 0,
            scroll_offset: 0,
            show_detail: false,
            show_help: false,
            should_quit: false,
            viewport_rows: 24,
        }
    }

    /// Section titles paired with their item counts, in tab order.
    pub fn section_tabs(&self) -> [(&'static str, usize); SECTION_COUNT] {
        [
            ("Skills", self.snapshot.skills.len()),
            ("Commands", self.snapshot.commands.len()),
            ("Hooks", self.snapshot.hooks.len()),
        ]
    }

    /// Item count of the focused section.
    pub fn section_len(&self) -> usize {
        match self.current_section {
            0 => self.snapshot.skills.len(),
            1 => self.snapshot.commands.len(),
            _ => self.snapshot.hooks.len(),
        }
    }

    /// Process one key press.
    ///
    /// `q` quits from every view. While the help overlay is open any
    /// other key closes it; while the detail view is open only
    /// `b`/`Esc`/`Left` go back.
    pub fn handle_key(&mut self, code: KeyCode) {
        if code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        if self.show_detail {
            if matches!(code, KeyCode::Char('b') | KeyCode::Esc | KeyCode::Left) {
                self.show_detail = false;
            }
            return;
        }

        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.current_item > 0 {
                    self.current_item -= 1;
                    self.adjust_scroll();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.current_item + 1 < self.section_len() {
                    self.current_item += 1;
                    self.adjust_scroll();
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if self.current_section > 0 {
                    self.jump_to(self.current_section - 1);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.current_section + 1 < SECTION_COUNT {
                    self.jump_to(self.current_section + 1);
                }
            }
            KeyCode::Tab => {
                self.jump_to((self.current_section + 1) % SECTION_COUNT);
            }
            KeyCode::Enter => {
                if self.section_len() > 0 {
                    self.show_detail = true;
                }
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('1') => self.jump_to(0),
            KeyCode::Char('2') => self.jump_to(1),
            KeyCode::Char('3') => self.jump_to(2),
            _ => {}
        }
    }

    fn jump_to(&mut self, section: usize) {
        self.current_section = section;
        self.current_item = 0;
        self.scroll_offset = 0;
    }

    /// Keep the selected item inside the visible window.
    fn adjust_scroll(&mut self) {
        let visible = self.viewport_rows.saturating_sub(CHROME_ROWS).max(1);

        if self.current_item < self.scroll_offset {
            self.scroll_offset = self.current_item;
        } else if self.current_item >= self.scroll_offset + visible {
            self.scroll_offset = self.current_item - visible + 1;
        }
    }

    /// Detail view lines for the selected item, or `None` when the
    /// section is empty.
    pub fn detail_lines(&self, width: usize) -> Option<Vec<String>> {
        match self.current_section {
            0 => self.snapshot.skills.get(self.current_item).map(|skill| {
                let mut lines = vec![
                    format!("Name: {}", skill.name),
                    String::new(),
                    "Description:".to_string(),
                    format!("  {}", non_empty_or(&skill.description, "(none)")),
                    String::new(),
                    "Triggers:".to_string(),
                ];
                if skill.triggers.is_empty() {
                    lines.push("  (none)".to_string());
                } else {
                    for trigger in &skill.triggers {
                        lines.push(format!("  - {trigger}"));
                    }
                }
                lines.push(String::new());
                lines.push("Path:".to_string());
                lines.push(format!("  {}", skill.path.display()));
                lines
            }),
            1 => self.snapshot.commands.get(self.current_item).map(|cmd| {
                vec![
                    format!("Command: /{}", cmd.name),
                    String::new(),
                    "Description:".to_string(),
                    format!("  {}", non_empty_or(&cmd.description, "(none)")),
                    String::new(),
                    "Path:".to_string(),
                    format!("  {}", cmd.path.display()),
                ]
            }),
            _ => self.snapshot.hooks.get(self.current_item).map(|hook| {
                let status = if hook.enabled { "ENABLED" } else { "DISABLED" };
                let mut lines = vec![
                    format!("Name: {}", hook.name),
                    format!("Status: {status}"),
                    String::new(),
                    format!("Event: {}", hook.event),
                    format!("Matcher: {}", hook.matcher),
                    String::new(),
                    format!("Commands ({}):", hook.commands.len()),
                ];
                if hook.commands.is_empty() {
                    lines.push("  (none)".to_string());
                } else {
                    for (i, cmd) in hook.commands.iter().enumerate() {
                        match cmd {
                            HookCommand::Command { command, timeout } => {
                                lines.push(format!("  {}. {command}", i + 1));
                                lines.push(format!("     Timeout: {timeout}s"));
                            }
                            HookCommand::Prompt { prompt } => {
                                let budget = width.saturating_sub(10);
                                let prompt = if prompt.chars().count() > budget {
                                    let cut: String =
                                        prompt.chars().take(budget.saturating_sub(3)).collect();
                                    format!("{cut}...")
                                } else {
                                    prompt.clone()
                                };
                                lines.push(format!("  {}. [prompt] {prompt}", i + 1));
                            }
                        }
                    }
                }
                lines
            }),
        }
    }
}

fn non_empty_or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.is_empty() { fallback } else { text }
}
