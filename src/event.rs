use crate::assistant::ScriptedReply;

/// Messages posted from runtime tasks to the UI thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    AssistantReply(ScriptedReply),
}
