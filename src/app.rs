use crate::command::{Command, ShellAction};
use crate::config::BuilderConfig;
use crate::controller::Controller;
use crate::event::AppEvent;
use crate::model::UNTITLED_PROJECT;
use crate::theme::Theme;
use crate::ui::canvas::{self, CanvasView, Viewport};
use crate::ui::inspector::Inspector;
use crate::ui::templates::TemplateRegistry;
use crate::ui::{assistant_panel, palette};
use eframe::egui::{self, Align, Align2, Layout, RichText};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

const ACTIVITY_REPAINT: Duration = Duration::from_millis(100);

pub struct BuilderApp {
    rx: Receiver<AppEvent>,
    controller: Controller,
    theme: Theme,
    theme_applied: bool,
    templates: TemplateRegistry,
    inspector: Inspector,
    viewport: Viewport,
    project_name: String,
    grid_spacing: f32,
    window_title: String,
    channel_closed: bool,
}

impl BuilderApp {
    pub fn new(rx: Receiver<AppEvent>, controller: Controller, config: &BuilderConfig) -> Self {
        Self {
            rx,
            project_name: controller.project().name.clone(),
            controller,
            theme: Theme::default(),
            theme_applied: false,
            templates: TemplateRegistry::new(),
            inspector: Inspector::default(),
            viewport: Viewport::default(),
            grid_spacing: config.canvas.grid_spacing,
            window_title: String::new(),
            channel_closed: false,
        }
    }

    fn drain_events(&mut self) {
        if self.channel_closed {
            return;
        }
        loop {
            match self.rx.try_recv() {
                Ok(AppEvent::AssistantReply(reply)) => {
                    let id = reply.id;
                    if !self.controller.dispatch(Command::DeliverReply(reply)).is_applied() {
                        tracing::debug!(reply = %id, "dropped reply for closed assistant");
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("event channel disconnected");
                    self.channel_closed = true;
                    break;
                }
            }
        }
    }

    fn dispatch_all(&mut self, commands: Vec<Command>) {
        for command in commands {
            self.controller.dispatch(command);
        }
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = format!("BuilderAI - {}", self.controller.project().display_name());
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }

    fn render_toolbar(&mut self, ctx: &egui::Context) -> Vec<Command> {
        let mut commands = Vec::new();
        let theme = &self.theme;
        egui::TopBottomPanel::top("toolbar")
            .exact_height(56.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(RichText::new("⚡").size(20.0).color(theme.accent_primary));
                    ui.label(
                        RichText::new("BuilderAI")
                            .size(18.0)
                            .strong()
                            .color(theme.accent_secondary),
                    );
                    ui.separator();

                    let name = ui.add(
                        egui::TextEdit::singleline(&mut self.project_name)
                            .hint_text(UNTITLED_PROJECT)
                            .desired_width(192.0),
                    );
                    if name.changed() {
                        commands.push(Command::RenameProject(self.project_name.clone()));
                    }
                    theme.badge(ui, "Draft");
                    ui.separator();

                    canvas::viewport_toggle(ui, theme, &mut self.viewport);

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.add_enabled(false, egui::Button::new("👤"));
                        ui.add_enabled(false, egui::Button::new("⚙"));
                        ui.add_enabled(false, egui::Button::new("🔗"));
                        ui.separator();
                        if ui.add(theme.primary_button("🌐 Deploy")).clicked() {
                            commands.push(Command::Notify(ShellAction::Deploy));
                        }
                        if ui.add(theme.outline_button("💾 Save")).clicked() {
                            commands.push(Command::Notify(ShellAction::Save));
                        }
                        if ui.add(theme.outline_button("▶ Preview")).clicked() {
                            commands.push(Command::Notify(ShellAction::Preview));
                        }
                    });
                });
            });
        commands
    }

    fn render_palette(&mut self, ctx: &egui::Context) -> Vec<Command> {
        let theme = &self.theme;
        egui::SidePanel::left("palette_panel")
            .resizable(false)
            .exact_width(300.0)
            .frame(theme.section_frame())
            .show(ctx, |ui| palette::render(ui, theme))
            .inner
    }

    fn render_inspector(&mut self, ctx: &egui::Context) {
        let theme = &self.theme;
        let inspector = &mut self.inspector;
        let selected = self.controller.store().selected();
        egui::SidePanel::right("inspector_panel")
            .resizable(false)
            .exact_width(300.0)
            .frame(theme.section_frame())
            .show(ctx, |ui| inspector.render(ui, theme, selected));
    }

    fn render_canvas(&mut self, ctx: &egui::Context) -> Vec<Command> {
        let view = CanvasView {
            theme: &self.theme,
            templates: &self.templates,
            viewport: self.viewport,
            grid_spacing: self.grid_spacing,
        };
        let store = self.controller.store();
        egui::CentralPanel::default()
            .show(ctx, |ui| view.render(ui, store))
            .inner
    }

    fn render_assistant(&mut self, ctx: &egui::Context) -> Vec<Command> {
        let session = self.controller.assistant();
        let mut input = session.input().to_string();
        let commands = assistant_panel::render(ctx, &self.theme, session, &mut input);
        if input != self.controller.assistant().input() {
            *self.controller.assistant_input_mut() = input;
        }
        commands
    }

    fn render_toasts(&self, ctx: &egui::Context) {
        let toasts = self.controller.notifications().toasts();
        if toasts.is_empty() {
            return;
        }
        let theme = &self.theme;
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_TOP, [-16.0, 72.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in toasts {
                    theme.card_frame().show(ui, |ui| {
                        ui.set_width(280.0);
                        ui.label(RichText::new(format!("✔ {}", toast.title)).strong());
                        ui.label(RichText::new(toast.description).color(theme.text_muted));
                    });
                    ui.add_space(theme.spacing_8);
                }
            });
    }
}

impl eframe::App for BuilderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            self.theme.apply_visuals(ctx);
            self.theme_applied = true;
        }

        self.drain_events();
        self.controller.expire_notifications(Instant::now());

        let mut commands = self.render_toolbar(ctx);
        commands.extend(self.render_palette(ctx));
        self.render_inspector(ctx);
        commands.extend(self.render_canvas(ctx));
        commands.extend(self.render_assistant(ctx));
        self.render_toasts(ctx);
        self.dispatch_all(commands);
        self.sync_window_title(ctx);

        if self.controller.assistant().pending_replies() > 0
            || !self.controller.notifications().is_empty()
        {
            ctx.request_repaint_after(ACTIVITY_REPAINT);
        }
    }
}
