use crate::model::{Archetype, Element};
use crate::theme::Theme;
use eframe::egui::{Align2, CornerRadius, FontId, Painter, Rect, Shape, Stroke, StrokeKind};
use std::collections::BTreeSet;

/// Per-archetype visual templates for canvas elements.
///
/// Archetypes without a template draw no content; their frame and
/// selection affordances are still drawn by the canvas.
pub struct TemplateRegistry {
    templated: BTreeSet<&'static str>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self {
            templated: BTreeSet::from(["Button", "Text", "Image", "Container"]),
        }
    }

    pub fn supports(&self, archetype: &Archetype) -> bool {
        self.templated.contains(archetype.as_str())
    }

    /// Returns `false` when nothing was drawn for the element.
    pub fn paint(&self, painter: &Painter, rect: Rect, element: &Element, theme: &Theme) -> bool {
        if !self.supports(&element.archetype) {
            return false;
        }
        let painter = painter.with_clip_rect(rect.intersect(painter.clip_rect()));

        match element.archetype {
            Archetype::Button => {
                painter.rect_filled(rect, CornerRadius::same(theme.radius_8), theme.accent_primary);
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    element.display_content(),
                    FontId::proportional(14.0),
                    theme.text_on_accent,
                );
            }
            Archetype::Text => {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    element.display_content(),
                    FontId::proportional(22.0),
                    theme.text_primary,
                );
            }
            Archetype::Image => {
                painter.rect_filled(rect, CornerRadius::same(theme.radius_8), theme.surface_3);
                painter.rect_stroke(
                    rect,
                    CornerRadius::same(theme.radius_8),
                    Stroke::new(1.0, theme.border_subtle),
                    StrokeKind::Inside,
                );
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "Image Placeholder",
                    FontId::proportional(12.0),
                    theme.text_muted,
                );
            }
            Archetype::Container => {
                painter.rect_filled(rect, CornerRadius::same(theme.radius_8), theme.drop_highlight);
                let inset = rect.shrink(1.0);
                let outline = [
                    inset.left_top(),
                    inset.right_top(),
                    inset.right_bottom(),
                    inset.left_bottom(),
                    inset.left_top(),
                ];
                painter.extend(Shape::dashed_line(
                    &outline,
                    Stroke::new(1.0, theme.hover_ring),
                    6.0,
                    4.0,
                ));
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "Container",
                    FontId::proportional(12.0),
                    theme.text_muted,
                );
            }
            _ => return false,
        }
        true
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}
