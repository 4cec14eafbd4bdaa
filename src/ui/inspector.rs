use crate::model::Element;
use crate::theme::Theme;
use eframe::egui::{self, Color32, CornerRadius, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectorTab {
    #[default]
    Design,
    Code,
    Data,
}

impl InspectorTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Design => "🎨 Design",
            Self::Code => "</> Code",
            Self::Data => "🗄 Data",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Default,
    Hover,
    Active,
}

/// Locally edited field values. Nothing here is written back to the
/// element; the draft lives only as long as the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorDraft {
    pub content: String,
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
    pub background: String,
    pub border_radius: String,
    pub state: InteractionState,
    pub on_click: String,
    pub data_source: String,
}

impl Default for InspectorDraft {
    fn default() -> Self {
        Self {
            content: "Get Started".to_string(),
            x: "200".to_string(),
            y: "150".to_string(),
            width: "120".to_string(),
            height: "40".to_string(),
            background: "#3B82F6".to_string(),
            border_radius: "8".to_string(),
            state: InteractionState::Default,
            on_click: String::new(),
            data_source: String::new(),
        }
    }
}

pub fn selection_badge(selected: Option<&Element>) -> String {
    match selected {
        Some(element) => format!("{} Selected", element.archetype),
        None => "Nothing Selected".to_string(),
    }
}

/// Read-only code preview for the current selection.
pub fn code_preview(selected: Option<&Element>) -> String {
    match selected {
        Some(element) => serde_json::to_string_pretty(element)
            .unwrap_or_else(|err| format!("// preview unavailable: {err}")),
        None => "// select an element to preview its definition".to_string(),
    }
}

/// Parses `#RRGGBB`; anything else yields `None`.
pub fn parse_hex_color(raw: &str) -> Option<Color32> {
    let hex = raw.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[derive(Debug, Default)]
pub struct Inspector {
    tab: InspectorTab,
    draft: InspectorDraft,
}

impl Inspector {
    pub fn render(&mut self, ui: &mut egui::Ui, theme: &Theme, selected: Option<&Element>) {
        ui.horizontal(|ui| {
            ui.heading("Properties");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                theme.badge(ui, selection_badge(selected));
            });
        });
        ui.label(RichText::new("Customize your component").color(theme.text_muted));
        ui.separator();

        ui.horizontal(|ui| {
            for tab in [InspectorTab::Design, InspectorTab::Code, InspectorTab::Data] {
                ui.selectable_value(&mut self.tab, tab, tab.label());
            }
        });
        ui.add_space(theme.spacing_8);

        egui::ScrollArea::vertical()
            .id_salt("inspector_fields")
            .show(ui, |ui| match self.tab {
                InspectorTab::Design => self.render_design(ui, theme),
                InspectorTab::Code => self.render_code(ui, theme, selected),
                InspectorTab::Data => self.render_data(ui, theme),
            });
    }

    fn render_design(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        let draft = &mut self.draft;

        ui.strong("T Content");
        ui.add(
            egui::TextEdit::singleline(&mut draft.content)
                .hint_text("Button text")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(theme.spacing_12);

        ui.strong("✥ Position & Size");
        egui::Grid::new("inspector_geometry")
            .num_columns(2)
            .spacing([theme.spacing_8, theme.spacing_4])
            .show(ui, |ui| {
                labelled_field(ui, theme, "X", &mut draft.x);
                labelled_field(ui, theme, "Y", &mut draft.y);
                ui.end_row();
                labelled_field(ui, theme, "Width", &mut draft.width);
                labelled_field(ui, theme, "Height", &mut draft.height);
                ui.end_row();
            });
        ui.add_space(theme.spacing_12);

        ui.strong("🎨 Appearance");
        ui.label(RichText::new("Background").small().color(theme.text_muted));
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut draft.background)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(140.0),
            );
            let swatch = parse_hex_color(&draft.background).unwrap_or(theme.surface_3);
            let (rect, _) = ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, CornerRadius::same(theme.radius_6), swatch);
        });
        ui.label(RichText::new("Border Radius").small().color(theme.text_muted));
        ui.add(egui::TextEdit::singleline(&mut draft.border_radius).desired_width(f32::INFINITY));
        ui.label(RichText::new("Shadow").small().color(theme.text_muted));
        ui.add_sized(
            [ui.available_width(), theme.button_height],
            theme.outline_button("⬜ Platform Shadow"),
        );
        ui.add_space(theme.spacing_12);

        ui.strong("States");
        ui.horizontal(|ui| {
            for (state, label) in [
                (InteractionState::Default, "Default"),
                (InteractionState::Hover, "Hover"),
                (InteractionState::Active, "Active"),
            ] {
                ui.selectable_value(&mut draft.state, state, label);
            }
        });
    }

    fn render_code(&mut self, ui: &mut egui::Ui, theme: &Theme, selected: Option<&Element>) {
        ui.strong("</> Generated Code");
        theme.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(code_preview(selected))
                    .monospace()
                    .color(theme.text_primary),
            );
        });
        ui.add_space(theme.spacing_12);

        ui.strong("Actions");
        ui.add(
            egui::TextEdit::singleline(&mut self.draft.on_click)
                .hint_text("onClick handler")
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(theme.spacing_12);

        if ui
            .add_sized(
                [ui.available_width(), theme.button_height],
                theme.outline_button("↺ Reset to Default"),
            )
            .clicked()
        {
            self.draft = InspectorDraft::default();
        }
    }

    fn render_data(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        ui.strong("🗄 Data Binding");
        ui.add(
            egui::TextEdit::singleline(&mut self.draft.data_source)
                .hint_text("Connect to data source")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(theme.spacing_12);

        ui.strong("Dynamic Content");
        ui.add_enabled(false, theme.outline_button("▤ Bind to API"));
    }
}

fn labelled_field(ui: &mut egui::Ui, theme: &Theme, label: &str, value: &mut String) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().color(theme.text_muted));
        ui.add(egui::TextEdit::singleline(value).desired_width(100.0));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Archetype, ElementId, Position, Size};

    fn button() -> Element {
        Element {
            id: ElementId::new(),
            archetype: Archetype::Button,
            position: Position::new(200.0, 150.0),
            size: Size::default(),
            content: Some("Get Started".to_string()),
        }
    }

    #[test]
    fn badge_reflects_selection() {
        assert_eq!(selection_badge(None), "Nothing Selected");
        assert_eq!(selection_badge(Some(&button())), "Button Selected");
    }

    #[test]
    fn code_preview_renders_selected_element() {
        let preview = code_preview(Some(&button()));
        assert!(preview.contains("\"archetype\": \"Button\""));
        assert!(preview.contains("Get Started"));
        assert!(code_preview(None).starts_with("//"));
    }

    #[test]
    fn hex_colors_parse_strictly() {
        assert_eq!(
            parse_hex_color("#3B82F6"),
            Some(Color32::from_rgb(0x3B, 0x82, 0xF6))
        );
        assert_eq!(parse_hex_color("3B82F6"), None);
        assert_eq!(parse_hex_color("#3B82"), None);
        assert_eq!(parse_hex_color("#ZZ82F6"), None);
    }

    #[test]
    fn draft_defaults_match_placeholder_fields() {
        let draft = InspectorDraft::default();
        assert_eq!(draft.content, "Get Started");
        assert_eq!((draft.width.as_str(), draft.height.as_str()), ("120", "40"));
        assert_eq!(draft.state, InteractionState::Default);
    }
}
