//! Hook event types (Claude Code-compatible).

use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;

/// The points in the agent lifecycle where hooks can be attached.
///
/// This set is closed: the settings document may contain other event
/// keys (they are tolerated and surfaced by validation), but new hooks
/// can only be created for one of these.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum HookEvent {
    /// Before tool execution.
    PreToolUse,
    /// After tool completion.
    PostToolUse,
    /// When the agent sends alerts.
    Notification,
    /// When the agent finishes responding.
    Stop,
    /// When a permission dialog is shown.
    PermissionRequest,
    /// Before prompt processing.
    UserPromptSubmit,
    /// At session initialization.
    SessionStart,
    /// At session cleanup.
    SessionEnd,
}

impl HookEvent {
    /// Short human-readable description, used by `hooksmith events`.
    pub fn description(self) -> &'static str {
        match self {
            HookEvent::PreToolUse => "Before tool execution",
            HookEvent::PostToolUse => "After tool completion",
            HookEvent::Notification => "When Claude sends alerts",
            HookEvent::Stop => "When agent finishes",
            HookEvent::PermissionRequest => "Permission dialog shown",
            HookEvent::UserPromptSubmit => "Before prompt processing",
            HookEvent::SessionStart => "Session initialization",
            HookEvent::SessionEnd => "Session cleanup",
        }
    }

    /// Which optional hook fields this event honors.
    pub fn supports(self) -> &'static str {
        match self {
            HookEvent::PreToolUse => "matcher, prompt",
            HookEvent::PostToolUse => "matcher",
            HookEvent::Notification => "matcher",
            HookEvent::Stop => "prompt",
            HookEvent::PermissionRequest => "matcher, prompt",
            HookEvent::UserPromptSubmit => "",
            HookEvent::SessionStart => "matcher",
            HookEvent::SessionEnd => "",
        }
    }
}
