use crate::assistant::responder::{ReplyScheduler, ScriptedResponder};
use crate::assistant::AssistantSession;
use crate::command::{Command, CommandOutcome, IgnoredReason};
use crate::config::BuilderConfig;
use crate::model::store::ElementStore;
use crate::model::{Position, ProjectMeta};
use crate::notify::Notifications;
use std::time::Instant;

/// Central view-model. Every state change made by the shell goes through
/// [`Controller::dispatch`].
pub struct Controller {
    project: ProjectMeta,
    store: ElementStore,
    assistant: AssistantSession,
    notifications: Notifications,
    drop_offset: Position,
}

impl Controller {
    pub fn new(config: &BuilderConfig, scheduler: Box<dyn ReplyScheduler>) -> Self {
        let default_size = config.canvas.default_element_size();
        let store = if config.canvas.seed_elements {
            ElementStore::with_seed(default_size)
        } else {
            ElementStore::new(default_size)
        };
        let responder = ScriptedResponder::new(
            config.assistant.reply_delay(),
            config.assistant.quick_action_delay(),
        );

        Self {
            project: ProjectMeta::new(config.project_name.clone()),
            store,
            assistant: AssistantSession::new(responder, scheduler),
            notifications: Notifications::new(config.notifications.ttl()),
            drop_offset: config.canvas.drop_offset(),
        }
    }

    pub fn dispatch(&mut self, command: Command) -> CommandOutcome {
        let log_line = command.to_log_line();
        let outcome = self.apply(command);
        match &outcome {
            CommandOutcome::Applied => tracing::debug!(command = %log_line, "applied"),
            CommandOutcome::Ignored(reason) => {
                tracing::debug!(command = %log_line, %reason, "ignored")
            }
        }
        outcome
    }

    fn apply(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::AddElement {
                archetype,
                position,
            } => {
                let element = self.store.add(archetype, position);
                tracing::info!(element = %element.id, archetype = %element.archetype, "element placed");
                CommandOutcome::Applied
            }
            Command::Drop {
                archetype,
                pointer,
                canvas_origin,
            } => {
                let Some(position) = drop_position(pointer, canvas_origin, self.drop_offset)
                else {
                    return CommandOutcome::Ignored(IgnoredReason::MissingCanvasGeometry);
                };
                self.apply(Command::AddElement {
                    archetype,
                    position,
                })
            }
            Command::Select(id) => self.store.select(id),
            Command::Deselect => {
                self.store.deselect();
                CommandOutcome::Applied
            }
            Command::PostMessage(text) => self.assistant.post(&text),
            Command::QuickAction(label) => self.assistant.quick_action(&label),
            Command::ApplySuggestion(text) => {
                self.assistant.apply_suggestion(&text);
                CommandOutcome::Applied
            }
            Command::DeliverReply(reply) => self.assistant.deliver(reply),
            Command::SetAssistantOpen(open) => {
                self.assistant.set_open(open);
                CommandOutcome::Applied
            }
            Command::ToggleAssistantMinimized => {
                self.assistant.toggle_minimized();
                CommandOutcome::Applied
            }
            Command::RenameProject(name) => {
                self.project.name = name;
                CommandOutcome::Applied
            }
            Command::Notify(action) => {
                tracing::info!(?action, "notification raised");
                self.notifications.raise(action, Instant::now());
                CommandOutcome::Applied
            }
        }
    }

    pub fn project(&self) -> &ProjectMeta {
        &self.project
    }

    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    pub fn assistant(&self) -> &AssistantSession {
        &self.assistant
    }

    /// Composer text is edited in place by the text widget.
    pub fn assistant_input_mut(&mut self) -> &mut String {
        self.assistant.input_mut()
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn expire_notifications(&mut self, now: Instant) {
        self.notifications.expire(now);
    }
}

/// Drop point relative to the canvas origin, shifted by `offset`.
pub fn drop_position(
    pointer: Position,
    canvas_origin: Option<Position>,
    offset: Position,
) -> Option<Position> {
    let origin = canvas_origin?;
    Some(Position::new(
        pointer.x - origin.x - offset.x,
        pointer.y - origin.y - offset.y,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::responder::RecordingScheduler;
    use crate::assistant::Author;
    use crate::command::ShellAction;
    use crate::model::Archetype;

    fn controller(seed: bool) -> (Controller, RecordingScheduler) {
        let mut config = BuilderConfig::default();
        config.canvas.seed_elements = seed;
        let scheduler = RecordingScheduler::default();
        (Controller::new(&config, Box::new(scheduler.clone())), scheduler)
    }

    #[test]
    fn drop_adds_exactly_one_element_at_offset_position() {
        let (mut controller, _) = controller(true);
        let before = controller.store().len();

        let outcome = controller.dispatch(Command::Drop {
            archetype: Archetype::from_name("Button"),
            pointer: Position::new(400.0, 300.0),
            canvas_origin: Some(Position::new(100.0, 50.0)),
        });

        assert!(outcome.is_applied());
        assert_eq!(controller.store().len(), before + 1);
        let added = controller.store().elements().last().expect("new element");
        assert_eq!(added.position, Position::new(240.0, 230.0));
        assert_eq!(added.archetype, Archetype::Button);
    }

    #[test]
    fn drop_without_canvas_geometry_is_ignored() {
        let (mut controller, _) = controller(false);
        let outcome = controller.dispatch(Command::Drop {
            archetype: Archetype::Image,
            pointer: Position::new(10.0, 10.0),
            canvas_origin: None,
        });

        assert_eq!(
            outcome,
            CommandOutcome::Ignored(IgnoredReason::MissingCanvasGeometry)
        );
        assert!(controller.store().is_empty());
    }

    #[test]
    fn click_selection_flow() {
        let (mut controller, _) = controller(true);
        let ids: Vec<_> = controller.store().elements().iter().map(|e| e.id).collect();

        controller.dispatch(Command::Select(ids[0]));
        assert_eq!(controller.store().selected_id(), Some(ids[0]));
        controller.dispatch(Command::Select(ids[1]));
        assert_eq!(controller.store().selected_id(), Some(ids[1]));
        controller.dispatch(Command::Deselect);
        assert_eq!(controller.store().selected_id(), None);
        assert_eq!(controller.store().len(), 2);
    }

    #[test]
    fn post_message_routes_through_assistant() {
        let (mut controller, scheduler) = controller(false);
        controller.assistant_input_mut().push_str("build a login page");
        let text = controller.assistant().input().to_string();

        assert!(controller.dispatch(Command::PostMessage(text)).is_applied());
        let reply = scheduler.scheduled()[0].0.clone();
        assert!(controller.dispatch(Command::DeliverReply(reply)).is_applied());

        let transcript = controller.assistant().transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].author, Author::User);
        assert_eq!(transcript[2].author, Author::Assistant);
    }

    #[test]
    fn closing_assistant_cancels_pending_replies() {
        let (mut controller, scheduler) = controller(false);
        controller.dispatch(Command::QuickAction("Create login page".to_string()));
        controller.dispatch(Command::SetAssistantOpen(false));

        assert!(!controller.assistant().is_open());
        assert_eq!(scheduler.canceled(), 1);
        let late = scheduler.scheduled()[0].0.clone();
        assert!(!controller.dispatch(Command::DeliverReply(late)).is_applied());
    }

    #[test]
    fn toolbar_actions_raise_notifications_only() {
        let (mut controller, _) = controller(true);
        controller.dispatch(Command::Notify(ShellAction::Save));
        controller.dispatch(Command::Notify(ShellAction::Deploy));

        let titles: Vec<_> = controller
            .notifications()
            .toasts()
            .iter()
            .map(|toast| toast.title)
            .collect();
        assert_eq!(titles, ["Project saved!", "Deployment started!"]);
        assert_eq!(controller.store().len(), 2);
    }

    #[test]
    fn rename_project_accepts_any_string() {
        let (mut controller, _) = controller(false);
        controller.dispatch(Command::RenameProject(String::new()));
        assert_eq!(controller.project().display_name(), "Untitled Project");
    }
}
