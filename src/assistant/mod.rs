use crate::assistant::responder::{ReplyHandle, ReplyScheduler, ScriptedResponder};
use crate::command::{CommandOutcome, IgnoredReason};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

pub mod responder;

pub const GREETING: &str = "Hello! I'm your AI assistant. I can help you build your app by generating components, writing code, setting up databases, and much more. What would you like to create today?";

pub const GREETING_SUGGESTIONS: [&str; 4] = [
    "Create a landing page",
    "Setup user authentication",
    "Add a contact form",
    "Design a dashboard",
];

pub const QUICK_ACTIONS: [&str; 4] = [
    "Create login page",
    "Add payment form",
    "Design hero section",
    "Setup database",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub author: Author,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub suggestions: Vec<String>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Author::User, text.into(), Vec::new())
    }

    pub fn assistant(text: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::new(Author::Assistant, text.into(), suggestions)
    }

    fn new(author: Author, text: String, suggestions: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            text,
            timestamp: Utc::now(),
            suggestions,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReplyId(Uuid);

impl ReplyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReplyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReplyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simple = self.0.simple().to_string();
        f.write_str(&simple[..8])
    }
}

/// Canned assistant reply waiting for its delay to elapse.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedReply {
    pub id: ReplyId,
    pub text: String,
    pub suggestions: Vec<String>,
}

/// Chat transcript, composer input and the replies still in flight.
pub struct AssistantSession {
    transcript: Vec<ChatMessage>,
    input: String,
    pending: BTreeMap<ReplyId, ReplyHandle>,
    responder: ScriptedResponder,
    scheduler: Box<dyn ReplyScheduler>,
    open: bool,
    minimized: bool,
}

impl AssistantSession {
    pub fn new(responder: ScriptedResponder, scheduler: Box<dyn ReplyScheduler>) -> Self {
        let greeting = ChatMessage::assistant(
            GREETING,
            GREETING_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        );
        Self {
            transcript: vec![greeting],
            input: String::new(),
            pending: BTreeMap::new(),
            responder,
            scheduler,
            open: true,
            minimized: false,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    /// Appends the user's message and schedules the scripted answer.
    pub fn post(&mut self, text: &str) -> CommandOutcome {
        let text = text.trim();
        if text.is_empty() {
            return CommandOutcome::Ignored(IgnoredReason::EmptyMessage);
        }

        self.transcript.push(ChatMessage::user(text));
        self.input.clear();
        let (reply, delay) = self.responder.free_form(text);
        self.schedule(reply, delay);
        CommandOutcome::Applied
    }

    /// Like [`post`](Self::post) with a fixed label, a shorter delay, and
    /// the composer left alone.
    pub fn quick_action(&mut self, label: &str) -> CommandOutcome {
        if label.trim().is_empty() {
            return CommandOutcome::Ignored(IgnoredReason::EmptyMessage);
        }

        self.transcript.push(ChatMessage::user(label));
        let (reply, delay) = self.responder.quick_action(label);
        self.schedule(reply, delay);
        CommandOutcome::Applied
    }

    pub fn apply_suggestion(&mut self, suggestion: &str) {
        self.input = suggestion.to_string();
    }

    pub fn deliver(&mut self, reply: ScriptedReply) -> CommandOutcome {
        if self.pending.remove(&reply.id).is_none() {
            return CommandOutcome::Ignored(IgnoredReason::NoPendingReply(reply.id));
        }
        self.transcript
            .push(ChatMessage::assistant(reply.text, reply.suggestions));
        CommandOutcome::Applied
    }

    /// Opening is idempotent; closing cancels every reply still in flight.
    /// Reopening does not bring canceled replies back.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        if open {
            return;
        }
        let pending = std::mem::take(&mut self.pending);
        for (id, handle) in pending {
            tracing::debug!(reply = %id, "canceling pending reply");
            handle.cancel();
        }
    }

    fn schedule(&mut self, reply: ScriptedReply, delay: std::time::Duration) {
        let id = reply.id;
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(reply = %id, delay_ms, "scheduling scripted reply");
        let handle = self.scheduler.schedule(reply, delay);
        self.pending.insert(id, handle);
    }
}
