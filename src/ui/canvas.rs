use crate::command::Command;
use crate::model::store::ElementStore;
use crate::model::{Archetype, Element, Position};
use crate::theme::Theme;
use crate::ui::palette;
use crate::ui::templates::TemplateRegistry;
use eframe::egui::{
    self, pos2, vec2, Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, RichText,
    Sense, Stroke, StrokeKind,
};

const ARTBOARD_MARGIN: f32 = 16.0;
const HANDLE_SIZE: f32 = 10.0;
const CONTROL_GLYPHS: [&str; 4] = ["✥", "⧉", "⚙", "🗑"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

impl Viewport {
    pub fn label(self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Mobile => "Mobile",
        }
    }

    pub fn resolution(self) -> &'static str {
        match self {
            Self::Desktop => "1920x1080",
            Self::Mobile => "390x844",
        }
    }

    pub fn max_width(self) -> f32 {
        match self {
            Self::Desktop => 1152.0,
            Self::Mobile => 390.0,
        }
    }
}

pub fn element_count_label(count: usize) -> String {
    format!("{count} elements")
}

pub fn to_position(pos: Pos2) -> Position {
    Position::new(pos.x, pos.y)
}

/// Screen rectangle of an element placed on an artboard whose top-left
/// corner is `origin`.
pub fn element_rect(origin: Pos2, element: &Element) -> Rect {
    Rect::from_min_size(
        origin + vec2(element.position.x, element.position.y),
        vec2(element.size.width, element.size.height),
    )
}

/// Centred artboard inside the scrollable workspace.
pub fn artboard_rect(area: Rect, viewport: Viewport) -> Rect {
    let inner = area.shrink(ARTBOARD_MARGIN);
    let width = inner.width().min(viewport.max_width()).max(0.0);
    Rect::from_center_size(inner.center(), vec2(width, inner.height().max(0.0)))
}

pub struct CanvasView<'a> {
    pub theme: &'a Theme,
    pub templates: &'a TemplateRegistry,
    pub viewport: Viewport,
    pub grid_spacing: f32,
}

impl CanvasView<'_> {
    pub fn render(&self, ui: &mut egui::Ui, store: &ElementStore) -> Vec<Command> {
        let mut commands = Vec::new();
        self.render_header(ui, store);
        ui.separator();

        let (area, background) = ui.allocate_exact_size(ui.available_size(), Sense::click());
        let painter = ui.painter_at(area);
        painter.rect_filled(area, CornerRadius::ZERO, self.theme.workspace);
        self.draw_grid(&painter, area);

        let artboard = artboard_rect(area, self.viewport);
        let drop_hovered = background.dnd_hover_payload::<String>().is_some();
        painter.rect_filled(
            artboard,
            CornerRadius::same(self.theme.radius_8),
            if drop_hovered {
                self.theme.drop_highlight
            } else {
                self.theme.artboard
            },
        );
        painter.rect_stroke(
            artboard,
            CornerRadius::same(self.theme.radius_8),
            Stroke::new(
                if drop_hovered { 2.0 } else { 1.0 },
                if drop_hovered {
                    self.theme.accent_primary
                } else {
                    self.theme.border_subtle
                },
            ),
            StrokeKind::Inside,
        );

        let board_painter = painter.with_clip_rect(artboard);
        let mut element_clicked = false;
        for element in store.elements() {
            let rect = element_rect(artboard.min, element);
            let mut response = ui.interact(
                rect.intersect(artboard),
                egui::Id::new(("canvas_element", element.id)),
                Sense::click(),
            );
            if let Some(def) = palette::find(element.archetype.as_str()) {
                response = response.on_hover_text(def.description);
            }

            self.templates
                .paint(&board_painter, rect, element, self.theme);

            let selected = store.is_selected(element.id);
            if selected {
                self.draw_selection(&board_painter, rect);
            } else if response.hovered() {
                board_painter.rect_stroke(
                    rect,
                    CornerRadius::same(self.theme.radius_6),
                    Stroke::new(1.0, self.theme.hover_ring),
                    StrokeKind::Outside,
                );
            }

            if response.clicked() {
                element_clicked = true;
                commands.push(Command::Select(element.id));
            }
        }

        if store.is_empty() {
            self.draw_empty_state(&board_painter, artboard);
        }

        if background.clicked() && !element_clicked {
            commands.push(Command::Deselect);
        }

        if let Some(payload) = background.dnd_release_payload::<String>() {
            if let Some(pointer) = ui.ctx().pointer_interact_pos() {
                commands.push(Command::Drop {
                    archetype: Archetype::from_name(payload.as_str()),
                    pointer: to_position(pointer),
                    canvas_origin: artboard.is_positive().then(|| to_position(artboard.min)),
                });
            }
        }

        commands
    }

    fn render_header(&self, ui: &mut egui::Ui, store: &ElementStore) {
        ui.horizontal(|ui| {
            self.theme
                .badge(ui, format!("🖥 {}", self.viewport.resolution()));
            self.theme.badge(ui, element_count_label(store.len()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_enabled(false, egui::Button::new("➕ Add Section"));
            });
        });
    }

    fn draw_grid(&self, painter: &Painter, rect: Rect) {
        let spacing = self.grid_spacing;
        if spacing <= 1.0 {
            return;
        }
        let stroke = Stroke::new(1.0, self.theme.grid_line);
        let mut x = rect.left();
        while x <= rect.right() {
            painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
            x += spacing;
        }
        let mut y = rect.top();
        while y <= rect.bottom() {
            painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
            y += spacing;
        }
    }

    /// Ring, control strip and resize handles. Drawn only; none of them
    /// is interactive.
    fn draw_selection(&self, painter: &Painter, rect: Rect) {
        let accent = self.theme.accent_primary;
        painter.rect_stroke(
            rect,
            CornerRadius::same(self.theme.radius_6),
            Stroke::new(2.0, accent),
            StrokeKind::Outside,
        );

        let slot = 24.0;
        let strip = Rect::from_min_size(
            rect.left_top() - vec2(0.0, slot + 10.0),
            vec2(slot * CONTROL_GLYPHS.len() as f32 + 8.0, slot + 4.0),
        );
        painter.rect_filled(strip, CornerRadius::same(self.theme.radius_8), accent);
        for (index, glyph) in CONTROL_GLYPHS.iter().enumerate() {
            let center = pos2(
                strip.left() + 4.0 + slot * (index as f32 + 0.5),
                strip.center().y,
            );
            painter.text(
                center,
                Align2::CENTER_CENTER,
                glyph,
                FontId::proportional(12.0),
                self.theme.text_on_accent,
            );
        }

        for corner in [
            rect.left_top(),
            rect.right_top(),
            rect.left_bottom(),
            rect.right_bottom(),
        ] {
            painter.rect_filled(
                Rect::from_center_size(corner, vec2(HANDLE_SIZE, HANDLE_SIZE)),
                CornerRadius::same(2),
                accent,
            );
        }
    }

    fn draw_empty_state(&self, painter: &Painter, artboard: Rect) {
        let center = artboard.center();
        painter.circle_filled(center - vec2(0.0, 48.0), 28.0, self.theme.surface_3);
        painter.text(
            center - vec2(0.0, 48.0),
            Align2::CENTER_CENTER,
            "+",
            FontId::proportional(28.0),
            self.theme.text_muted,
        );
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "Start Building Your App",
            FontId::proportional(18.0),
            self.theme.text_primary,
        );
        painter.text(
            center + vec2(0.0, 28.0),
            Align2::CENTER_CENTER,
            "Drag components from the library or ask the AI assistant to help you build your application.",
            FontId::proportional(13.0),
            Color32::from_gray(140),
        );
    }
}

/// Desktop / Mobile switch shown in the toolbar.
pub fn viewport_toggle(ui: &mut egui::Ui, theme: &Theme, current: &mut Viewport) {
    for option in [Viewport::Desktop, Viewport::Mobile] {
        let icon = match option {
            Viewport::Desktop => "🖥",
            Viewport::Mobile => "📱",
        };
        let text = RichText::new(format!("{icon} {}", option.label()));
        let text = if *current == option {
            text.color(theme.text_on_accent)
        } else {
            text
        };
        let button = egui::Button::new(text).fill(if *current == option {
            theme.accent_primary
        } else {
            Color32::TRANSPARENT
        });
        if ui.add(button).clicked() {
            *current = option;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementId, Size};
    use eframe::egui::{Context, DragAndDrop, Event, Id, Modifiers, PointerButton, RawInput};

    struct CanvasHarness {
        ctx: Context,
        store: ElementStore,
        theme: Theme,
        templates: TemplateRegistry,
    }

    impl CanvasHarness {
        fn seeded() -> Self {
            let harness = Self {
                ctx: Context::default(),
                store: ElementStore::with_seed(Size::default()),
                theme: Theme::default(),
                templates: TemplateRegistry::new(),
            };
            harness.frame(Vec::new(), None);
            harness
        }

        /// Runs one frame and returns what the canvas emitted. A payload is
        /// placed in flight before the canvas renders.
        fn frame(&self, events: Vec<Event>, payload: Option<String>) -> Vec<Command> {
            let view = CanvasView {
                theme: &self.theme,
                templates: &self.templates,
                viewport: Viewport::Desktop,
                grid_spacing: 20.0,
            };
            let input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1280.0, 800.0))),
                events,
                ..Default::default()
            };
            let mut payload = payload;
            let mut commands = Vec::new();
            let _ = self.ctx.run(input, |ctx| {
                if let Some(payload) = payload.take() {
                    DragAndDrop::set_payload(ctx, payload);
                }
                egui::CentralPanel::default().show(ctx, |ui| {
                    commands = view.render(ui, &self.store);
                });
            });
            commands
        }

        fn click(&self, at: Pos2) -> Vec<Command> {
            self.frame(vec![Event::PointerMoved(at)], None);
            self.frame(vec![primary(at, true)], None);
            self.frame(vec![primary(at, false)], None)
        }

        fn element_rect(&self, id: ElementId) -> Rect {
            self.ctx
                .read_response(Id::new(("canvas_element", id)))
                .expect("element should have been laid out")
                .rect
        }

        /// Artboard origin recovered from the seeded button at (200, 150).
        fn artboard_origin(&self) -> Pos2 {
            let button = &self.store.elements()[0];
            assert_eq!(button.archetype, Archetype::Button);
            self.element_rect(button.id).min - vec2(button.position.x, button.position.y)
        }
    }

    fn primary(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    fn assert_close(actual: Position, expected: Pos2) {
        assert!(
            (actual.x - expected.x).abs() < 1e-3 && (actual.y - expected.y).abs() < 1e-3,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn element_rect_is_offset_from_artboard_origin() {
        let element = Element {
            id: ElementId::new(),
            archetype: Archetype::Button,
            position: Position::new(200.0, 150.0),
            size: Size::new(120.0, 40.0),
            content: None,
        };
        let rect = element_rect(pos2(10.0, 20.0), &element);
        assert_eq!(rect.min, pos2(210.0, 170.0));
        assert_eq!(rect.size(), vec2(120.0, 40.0));
    }

    #[test]
    fn desktop_artboard_is_capped_and_centred() {
        let area = Rect::from_min_size(Pos2::ZERO, vec2(2000.0, 900.0));
        let board = artboard_rect(area, Viewport::Desktop);
        assert_eq!(board.width(), 1152.0);
        assert_eq!(board.center().x, area.center().x);
        assert_eq!(board.height(), 900.0 - 2.0 * ARTBOARD_MARGIN);
    }

    #[test]
    fn mobile_artboard_uses_phone_width() {
        let area = Rect::from_min_size(Pos2::ZERO, vec2(1200.0, 900.0));
        assert_eq!(artboard_rect(area, Viewport::Mobile).width(), 390.0);
        assert_eq!(Viewport::Mobile.resolution(), "390x844");
    }

    #[test]
    fn narrow_area_shrinks_artboard() {
        let area = Rect::from_min_size(Pos2::ZERO, vec2(300.0, 400.0));
        assert_eq!(artboard_rect(area, Viewport::Mobile).width(), 268.0);
    }

    #[test]
    fn header_counts_elements() {
        assert_eq!(element_count_label(2), "2 elements");
    }

    #[test]
    fn clicking_an_element_only_selects_it() {
        let canvas = CanvasHarness::seeded();
        let text = canvas.store.elements()[1].id;
        let rect = canvas.element_rect(text);

        assert_eq!(canvas.click(rect.center()), vec![Command::Select(text)]);
    }

    #[test]
    fn clicking_empty_artboard_deselects() {
        let canvas = CanvasHarness::seeded();
        let empty_spot = canvas.artboard_origin() + vec2(40.0, 400.0);

        assert_eq!(canvas.click(empty_spot), vec![Command::Deselect]);
    }

    #[test]
    fn released_payload_becomes_a_drop_relative_to_the_artboard() {
        let canvas = CanvasHarness::seeded();
        let origin = canvas.artboard_origin();
        let pointer = origin + vec2(500.0, 300.0);

        canvas.frame(vec![Event::PointerMoved(pointer)], None);
        let commands = canvas.frame(vec![primary(pointer, false)], Some("Image".to_string()));

        let [Command::Drop {
            archetype,
            pointer: dropped_at,
            canvas_origin: Some(canvas_origin),
        }] = commands.as_slice()
        else {
            panic!("expected a single drop, got {commands:?}");
        };
        assert_eq!(*archetype, Archetype::Image);
        assert_eq!(*dropped_at, to_position(pointer));
        assert_close(*canvas_origin, origin);
    }

    #[test]
    fn hovering_without_a_payload_emits_nothing() {
        let canvas = CanvasHarness::seeded();
        let pointer = canvas.artboard_origin() + vec2(500.0, 300.0);

        assert!(canvas.frame(vec![Event::PointerMoved(pointer)], None).is_empty());
        assert!(canvas.frame(vec![primary(pointer, false)], None).is_empty());
    }
}
