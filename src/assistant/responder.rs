use crate::assistant::{ReplyId, ScriptedReply};
use crate::event::AppEvent;
use std::sync::mpsc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

pub const FOLLOW_UP_SUGGESTIONS: [&str; 4] = [
    "Add styling",
    "Make it responsive",
    "Add animations",
    "Connect to database",
];

/// Template-driven answers. There is no language understanding here: the
/// user's text is interpolated into a fixed sentence.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedResponder {
    reply_delay: Duration,
    quick_action_delay: Duration,
}

impl ScriptedResponder {
    pub fn new(reply_delay: Duration, quick_action_delay: Duration) -> Self {
        Self {
            reply_delay,
            quick_action_delay,
        }
    }

    pub fn free_form(&self, text: &str) -> (ScriptedReply, Duration) {
        let reply = ScriptedReply {
            id: ReplyId::new(),
            text: format!(
                "I understand you want to {text}. Let me help you with that! I'll generate the necessary components and code for your application."
            ),
            suggestions: FOLLOW_UP_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        };
        (reply, self.reply_delay)
    }

    pub fn quick_action(&self, label: &str) -> (ScriptedReply, Duration) {
        let reply = ScriptedReply {
            id: ReplyId::new(),
            text: format!(
                "Great choice! I'm creating a {} for you. This will include all the necessary components, styling, and functionality.",
                label.to_lowercase()
            ),
            suggestions: Vec::new(),
        };
        (reply, self.quick_action_delay)
    }
}

/// Cancel handle for a reply that has not been delivered yet.
pub struct ReplyHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl ReplyHandle {
    pub fn from_abort(abort: AbortHandle) -> Self {
        Self {
            cancel: Some(Box::new(move || abort.abort())),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

pub trait ReplyScheduler {
    fn schedule(&self, reply: ScriptedReply, delay: Duration) -> ReplyHandle;
}

/// Runs each reply as a sleeping task on the shared runtime and posts it
/// back to the UI thread once the delay has elapsed.
#[derive(Clone)]
pub struct TokioReplyScheduler {
    runtime_handle: Handle,
    tx: mpsc::Sender<AppEvent>,
}

impl TokioReplyScheduler {
    pub fn new(runtime_handle: Handle, tx: mpsc::Sender<AppEvent>) -> Self {
        Self { runtime_handle, tx }
    }
}

impl ReplyScheduler for TokioReplyScheduler {
    fn schedule(&self, reply: ScriptedReply, delay: Duration) -> ReplyHandle {
        let tx = self.tx.clone();
        let task = self.runtime_handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let id = reply.id;
            if tx.send(AppEvent::AssistantReply(reply)).is_err() {
                tracing::warn!(reply = %id, "event channel closed before reply delivery");
            }
        });
        ReplyHandle::from_abort(task.abort_handle())
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub struct RecordingScheduler {
    scheduled: std::sync::Arc<std::sync::Mutex<Vec<(ScriptedReply, Duration)>>>,
    canceled: std::sync::Arc<std::sync::atomic::AtomicUsize>,
}

#[cfg(test)]
impl RecordingScheduler {
    pub fn scheduled(&self) -> Vec<(ScriptedReply, Duration)> {
        self.scheduled.lock().expect("scheduler lock").clone()
    }

    pub fn canceled(&self) -> usize {
        self.canceled.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl ReplyScheduler for RecordingScheduler {
    fn schedule(&self, reply: ScriptedReply, delay: Duration) -> ReplyHandle {
        self.scheduled
            .lock()
            .expect("scheduler lock")
            .push((reply, delay));
        let canceled = std::sync::Arc::clone(&self.canceled);
        ReplyHandle {
            cancel: Some(Box::new(move || {
                canceled.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::RecvTimeoutError;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("test runtime should build")
    }

    #[test]
    fn free_form_reply_interpolates_user_text() {
        let responder =
            ScriptedResponder::new(Duration::from_millis(1000), Duration::from_millis(800));
        let (reply, delay) = responder.free_form("build a login page");

        assert_eq!(delay, Duration::from_millis(1000));
        assert!(reply
            .text
            .starts_with("I understand you want to build a login page."));
        assert_eq!(reply.suggestions.len(), 4);
    }

    #[test]
    fn quick_action_reply_lowercases_label() {
        let responder =
            ScriptedResponder::new(Duration::from_millis(1000), Duration::from_millis(800));
        let (reply, delay) = responder.quick_action("Design hero section");

        assert_eq!(delay, Duration::from_millis(800));
        assert!(reply.text.contains("creating a design hero section for you"));
        assert!(reply.suggestions.is_empty());
    }

    #[test]
    fn tokio_scheduler_posts_reply_after_delay() {
        let runtime = runtime();
        let (tx, rx) = mpsc::channel();
        let scheduler = TokioReplyScheduler::new(runtime.handle().clone(), tx);
        let (reply, _) = ScriptedResponder::new(Duration::ZERO, Duration::ZERO).free_form("ship");
        let expected = reply.clone();

        let _handle = scheduler.schedule(reply, Duration::from_millis(10));
        match rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::AssistantReply(delivered)) => assert_eq!(delivered, expected),
            other => panic!("expected assistant reply, got {other:?}"),
        }
    }

    #[test]
    fn canceled_reply_is_never_posted() {
        let runtime = runtime();
        let (tx, rx) = mpsc::channel();
        let scheduler = TokioReplyScheduler::new(runtime.handle().clone(), tx);
        let (reply, _) = ScriptedResponder::new(Duration::ZERO, Duration::ZERO).free_form("ship");

        scheduler.schedule(reply, Duration::from_millis(200)).cancel();
        assert!(matches!(
            rx.recv_timeout(Duration::from_millis(500)),
            Err(RecvTimeoutError::Timeout)
        ));
    }
}
