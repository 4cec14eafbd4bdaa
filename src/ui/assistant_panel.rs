use crate::assistant::{AssistantSession, Author, ChatMessage, QUICK_ACTIONS};
use crate::command::Command;
use crate::theme::Theme;
use eframe::egui::{self, Align, Align2, Layout, RichText, ScrollArea};

const PANEL_WIDTH: f32 = 384.0;
const TRANSCRIPT_HEIGHT: f32 = 300.0;
const ANCHOR_OFFSET: [f32; 2] = [-24.0, -24.0];

pub fn timestamp_label(message: &ChatMessage) -> String {
    message
        .timestamp
        .with_timezone(&chrono::Local)
        .format("%H:%M")
        .to_string()
}

/// Floating assistant window, or its launcher button once closed.
///
/// `input` is the composer text; it is edited in place and the caller
/// stores it back on the session.
pub fn render(
    ctx: &egui::Context,
    theme: &Theme,
    session: &AssistantSession,
    input: &mut String,
) -> Vec<Command> {
    let mut commands = Vec::new();

    if !session.is_open() {
        egui::Area::new(egui::Id::new("assistant_launcher"))
            .anchor(Align2::RIGHT_BOTTOM, ANCHOR_OFFSET)
            .show(ctx, |ui| {
                let launcher = theme
                    .primary_button("💬")
                    .min_size(egui::vec2(56.0, 56.0));
                if ui.add(launcher).on_hover_text("Open AI Assistant").clicked() {
                    commands.push(Command::SetAssistantOpen(true));
                }
            });
        return commands;
    }

    egui::Window::new("AI Assistant")
        .id(egui::Id::new("assistant_window"))
        .anchor(Align2::RIGHT_BOTTOM, ANCHOR_OFFSET)
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .default_width(PANEL_WIDTH)
        .show(ctx, |ui| {
            ui.set_width(PANEL_WIDTH);
            render_header(ui, theme, session, &mut commands);
            if session.is_minimized() {
                return;
            }

            ui.separator();
            render_quick_actions(ui, theme, &mut commands);
            ui.separator();
            render_transcript(ui, theme, session, &mut commands);
            ui.separator();
            render_composer(ui, theme, input, &mut commands);
        });

    commands
}

fn render_header(
    ui: &mut egui::Ui,
    theme: &Theme,
    session: &AssistantSession,
    commands: &mut Vec<Command>,
) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("✨").size(20.0).color(theme.accent_primary));
        ui.vertical(|ui| {
            ui.strong("AI Assistant");
            ui.label(
                RichText::new("Always ready to help")
                    .small()
                    .color(theme.text_muted),
            );
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.small_button("✕").on_hover_text("Close").clicked() {
                commands.push(Command::SetAssistantOpen(false));
            }
            let (glyph, hint) = if session.is_minimized() {
                ("🗖", "Expand")
            } else {
                ("🗕", "Minimize")
            };
            if ui.small_button(glyph).on_hover_text(hint).clicked() {
                commands.push(Command::ToggleAssistantMinimized);
            }
        });
    });
}

fn render_quick_actions(ui: &mut egui::Ui, theme: &Theme, commands: &mut Vec<Command>) {
    ui.label(RichText::new("Quick actions:").color(theme.text_muted));
    egui::Grid::new("assistant_quick_actions")
        .num_columns(2)
        .spacing([theme.spacing_8, theme.spacing_8])
        .show(ui, |ui| {
            for (index, label) in QUICK_ACTIONS.iter().enumerate() {
                let button = theme
                    .outline_button(label)
                    .min_size(egui::vec2(PANEL_WIDTH / 2.0 - theme.spacing_8, 0.0));
                if ui.add(button).clicked() {
                    commands.push(Command::QuickAction(label.to_string()));
                }
                if index % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

fn render_transcript(
    ui: &mut egui::Ui,
    theme: &Theme,
    session: &AssistantSession,
    commands: &mut Vec<Command>,
) {
    ScrollArea::vertical()
        .id_salt("assistant_transcript")
        .max_height(TRANSCRIPT_HEIGHT)
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for message in session.transcript() {
                render_message(ui, theme, message, commands);
                ui.add_space(theme.spacing_8);
            }
            if session.pending_replies() > 0 {
                ui.label(
                    RichText::new("Assistant is typing...")
                        .italics()
                        .color(theme.text_muted),
                );
            }
        });
}

fn render_message(
    ui: &mut egui::Ui,
    theme: &Theme,
    message: &ChatMessage,
    commands: &mut Vec<Command>,
) {
    let (layout, fill, text_color, speaker) = match message.author {
        Author::User => (
            Layout::right_to_left(Align::TOP),
            theme.accent_primary,
            theme.text_on_accent,
            "👤",
        ),
        Author::Assistant => (
            Layout::left_to_right(Align::TOP),
            theme.surface_3,
            theme.text_primary,
            "🤖",
        ),
    };

    ui.with_layout(layout, |ui| {
        ui.label(speaker);
        ui.vertical(|ui| {
            ui.set_max_width(PANEL_WIDTH * 0.8);
            theme.bubble_frame(fill).show(ui, |ui| {
                ui.label(RichText::new(&message.text).color(text_color));
            });
            ui.label(
                RichText::new(timestamp_label(message))
                    .small()
                    .color(theme.text_muted),
            );
            if !message.suggestions.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    for suggestion in &message.suggestions {
                        if ui.small_button(suggestion).clicked() {
                            commands.push(Command::ApplySuggestion(suggestion.clone()));
                        }
                    }
                });
            }
        });
    });
}

fn render_composer(
    ui: &mut egui::Ui,
    theme: &Theme,
    input: &mut String,
    commands: &mut Vec<Command>,
) {
    let mut send_now = false;
    ui.horizontal(|ui| {
        let send_width = 48.0;
        let response = ui.add(
            egui::TextEdit::singleline(input)
                .hint_text("Describe what you want to build...")
                .desired_width(ui.available_width() - send_width - theme.spacing_8),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send_now = true;
        }

        let clicked = ui
            .add_enabled(!input.trim().is_empty(), theme.primary_button("➤"))
            .clicked();
        send_now |= clicked;
    });

    if send_now {
        commands.push(Command::PostMessage(input.clone()));
    }
}
