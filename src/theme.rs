use eframe::egui::{self, Color32, CornerRadius, FontId, Frame, Margin, RichText, Stroke, TextStyle};

#[derive(Debug, Clone)]
pub struct Theme {
    pub surface_0: Color32,
    pub surface_1: Color32,
    pub surface_2: Color32,
    pub surface_3: Color32,
    pub workspace: Color32,
    pub artboard: Color32,
    pub grid_line: Color32,
    pub accent_primary: Color32,
    pub accent_secondary: Color32,
    pub accent_muted: Color32,
    pub danger: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub text_on_accent: Color32,
    pub border_subtle: Color32,
    pub hover_ring: Color32,
    pub drop_highlight: Color32,
    pub spacing_4: f32,
    pub spacing_8: f32,
    pub spacing_12: f32,
    pub spacing_16: f32,
    pub radius_6: u8,
    pub radius_8: u8,
    pub radius_12: u8,
    pub button_height: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface_0: Color32::from_rgb(0x0B, 0x0E, 0x14),
            surface_1: Color32::from_rgb(0x12, 0x16, 0x1F),
            surface_2: Color32::from_rgb(0x1A, 0x20, 0x2B),
            surface_3: Color32::from_rgb(0x24, 0x2B, 0x38),
            workspace: Color32::from_rgb(0x0F, 0x13, 0x1A),
            artboard: Color32::from_rgb(0x16, 0x1B, 0x24),
            grid_line: Color32::from_rgba_premultiplied(255, 255, 255, 12),
            accent_primary: Color32::from_rgb(0x3B, 0x82, 0xF6),
            accent_secondary: Color32::from_rgb(0x8B, 0x5C, 0xF6),
            accent_muted: Color32::from_rgb(0x2F, 0x6E, 0xD8),
            danger: Color32::from_rgb(0xEF, 0x44, 0x44),
            text_primary: Color32::from_rgb(0xE6, 0xED, 0xF3),
            text_muted: Color32::from_rgb(0x8B, 0x94, 0x9E),
            text_on_accent: Color32::from_rgb(0xF8, 0xFB, 0xFF),
            border_subtle: Color32::from_rgba_premultiplied(255, 255, 255, 20),
            hover_ring: Color32::from_rgba_premultiplied(0x3B, 0x82, 0xF6, 128),
            drop_highlight: Color32::from_rgba_premultiplied(0x3B, 0x82, 0xF6, 40),
            spacing_4: 4.0,
            spacing_8: 8.0,
            spacing_12: 12.0,
            spacing_16: 16.0,
            radius_6: 6,
            radius_8: 8,
            radius_12: 12,
            button_height: 30.0,
        }
    }
}

impl Theme {
    pub fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = self.surface_1;
        visuals.override_text_color = Some(self.text_primary);
        visuals.widgets.noninteractive.bg_fill = self.surface_2;
        visuals.widgets.noninteractive.weak_bg_fill = self.surface_2;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border_subtle);
        visuals.widgets.inactive.bg_fill = self.surface_2;
        visuals.widgets.inactive.weak_bg_fill = self.surface_2;
        visuals.widgets.inactive.bg_stroke = Stroke::NONE;
        visuals.widgets.hovered.bg_fill = self.surface_3;
        visuals.widgets.hovered.weak_bg_fill = self.surface_3;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.hover_ring);
        visuals.widgets.active.bg_fill = self.accent_muted;
        visuals.widgets.active.bg_stroke = Stroke::NONE;
        visuals.selection.bg_fill = self.accent_muted;
        visuals.hyperlink_color = self.accent_primary;
        visuals.extreme_bg_color = self.surface_0;
        visuals.error_fg_color = self.danger;
        visuals.window_fill = self.surface_1;
        visuals.window_stroke = Stroke::new(1.0, self.hover_ring);
        visuals.window_corner_radius = CornerRadius::same(self.radius_12);

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.text_styles.insert(TextStyle::Heading, FontId::proportional(17.0));
        style.text_styles.insert(TextStyle::Body, FontId::proportional(14.0));
        style.text_styles.insert(TextStyle::Monospace, FontId::monospace(12.0));
        style.text_styles.insert(TextStyle::Small, FontId::proportional(11.0));
        ctx.set_style(style);
    }

    pub fn card_frame(&self) -> Frame {
        Frame::new()
            .fill(self.surface_2)
            .inner_margin(Margin::same(self.spacing_8 as i8))
            .corner_radius(CornerRadius::same(self.radius_8))
            .stroke(Stroke::new(1.0, self.border_subtle))
    }

    pub fn section_frame(&self) -> Frame {
        Frame::new()
            .fill(self.surface_1)
            .inner_margin(Margin::same(self.spacing_12 as i8))
    }

    pub fn bubble_frame(&self, fill: Color32) -> Frame {
        Frame::new()
            .fill(fill)
            .inner_margin(Margin::same(self.spacing_8 as i8))
            .corner_radius(CornerRadius::same(self.radius_8))
    }

    /// Small pill label, as used for counts and status markers.
    pub fn badge(&self, ui: &mut egui::Ui, text: impl Into<String>) -> egui::Response {
        Frame::new()
            .fill(self.surface_3)
            .inner_margin(Margin::symmetric(6, 2))
            .corner_radius(CornerRadius::same(self.radius_6))
            .show(ui, |ui| {
                ui.label(RichText::new(text.into()).small().color(self.text_muted));
            })
            .response
    }

    pub fn primary_button(&self, label: &str) -> egui::Button<'static> {
        egui::Button::new(RichText::new(label.to_string()).color(self.text_on_accent))
            .fill(self.accent_primary)
            .corner_radius(CornerRadius::same(self.radius_8))
            .min_size(egui::vec2(0.0, self.button_height))
    }

    pub fn outline_button(&self, label: &str) -> egui::Button<'static> {
        egui::Button::new(RichText::new(label.to_string()).color(self.text_primary))
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::new(1.0, self.border_subtle))
            .corner_radius(CornerRadius::same(self.radius_8))
            .min_size(egui::vec2(0.0, self.button_height))
    }
}
