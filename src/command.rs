use crate::assistant::{ReplyId, ScriptedReply};
use crate::model::{Archetype, ElementId, Position};
use std::fmt;

/// Fire-and-forget toolbar actions. Nothing is previewed, saved or
/// deployed; each one only raises a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Preview,
    Save,
    Deploy,
}

impl ShellAction {
    pub fn title(self) -> &'static str {
        match self {
            Self::Preview => "Opening preview...",
            Self::Save => "Project saved!",
            Self::Deploy => "Deployment started!",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Preview => "Your app will open in a new tab",
            Self::Save => "All changes have been saved to the cloud",
            Self::Deploy => "Your app is being deployed to production",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddElement {
        archetype: Archetype,
        position: Position,
    },
    /// A palette payload released over the canvas. `pointer` and
    /// `canvas_origin` are in the same screen space.
    Drop {
        archetype: Archetype,
        pointer: Position,
        canvas_origin: Option<Position>,
    },
    Select(ElementId),
    Deselect,
    PostMessage(String),
    QuickAction(String),
    ApplySuggestion(String),
    DeliverReply(ScriptedReply),
    SetAssistantOpen(bool),
    ToggleAssistantMinimized,
    RenameProject(String),
    Notify(ShellAction),
}

impl Command {
    pub fn to_log_line(&self) -> String {
        match self {
            Self::AddElement {
                archetype,
                position,
            } => format!(
                "add_element archetype={archetype} x={} y={}",
                position.x, position.y
            ),
            Self::Drop {
                archetype,
                pointer,
                canvas_origin,
            } => format!(
                "drop archetype={archetype} pointer=({}, {}) canvas={}",
                pointer.x,
                pointer.y,
                canvas_origin.map_or_else(
                    || "none".to_string(),
                    |origin| format!("({}, {})", origin.x, origin.y)
                )
            ),
            Self::Select(id) => format!("select element={id}"),
            Self::Deselect => "deselect".to_string(),
            Self::PostMessage(text) => format!("post_message chars={}", text.chars().count()),
            Self::QuickAction(label) => format!("quick_action label={label}"),
            Self::ApplySuggestion(text) => format!("apply_suggestion text={text}"),
            Self::DeliverReply(reply) => format!("deliver_reply reply={}", reply.id),
            Self::SetAssistantOpen(open) => format!("set_assistant_open open={open}"),
            Self::ToggleAssistantMinimized => "toggle_assistant_minimized".to_string(),
            Self::RenameProject(name) => format!("rename_project name={name}"),
            Self::Notify(action) => format!("notify action={action:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IgnoredReason {
    EmptyMessage,
    UnknownElement(ElementId),
    MissingCanvasGeometry,
    NoPendingReply(ReplyId),
}

impl fmt::Display for IgnoredReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "message is empty"),
            Self::UnknownElement(id) => write!(f, "no element with id {id}"),
            Self::MissingCanvasGeometry => write!(f, "canvas bounds unavailable"),
            Self::NoPendingReply(id) => write!(f, "reply {id} is not pending"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Applied,
    Ignored(IgnoredReason),
}

impl CommandOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}
