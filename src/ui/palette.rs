use crate::command::Command;
use crate::model::Archetype;
use crate::theme::Theme;
use eframe::egui::{self, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeDef {
    pub name: &'static str,
    pub glyph: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub components: &'static [ArchetypeDef],
}

const fn def(name: &'static str, glyph: &'static str, description: &'static str) -> ArchetypeDef {
    ArchetypeDef {
        name,
        glyph,
        description,
    }
}

pub const CATALOG: [Category; 4] = [
    Category {
        name: "Basic",
        components: &[
            def("Button", "👆", "Interactive button element"),
            def("Text", "T", "Text content and headings"),
            def("Image", "🖼", "Image and media display"),
            def("Container", "⬜", "Layout container"),
        ],
    },
    Category {
        name: "Layout",
        components: &[
            def("Grid", "▦", "Responsive grid system"),
            def("Flex", "▤", "Flexible box layout"),
            def("List", "☰", "Ordered and unordered lists"),
        ],
    },
    Category {
        name: "Data",
        components: &[
            def("Table", "🗄", "Data table display"),
            def("Chart", "📊", "Data visualization"),
            def("Form", "📝", "Input and form elements"),
        ],
    },
    Category {
        name: "Advanced",
        components: &[
            def("Payment", "💳", "Stripe payment integration"),
            def("Auth", "👤", "User authentication"),
            def("Email", "✉", "Email notifications"),
            def("Search", "🔍", "Search functionality"),
            def("Calendar", "📅", "Date picker and calendar"),
        ],
    },
];

const CARD_WIDTH: f32 = 118.0;

/// Payload attached to a drag started from the palette: the bare
/// archetype name.
pub fn drag_payload(archetype: &Archetype) -> String {
    archetype.as_str().to_string()
}

pub fn find(name: &str) -> Option<&'static ArchetypeDef> {
    CATALOG
        .iter()
        .flat_map(|category| category.components.iter())
        .find(|def| def.name == name)
}

pub fn render(ui: &mut egui::Ui, theme: &Theme) -> Vec<Command> {
    let mut commands = Vec::new();

    ui.heading("Components");
    ui.label(RichText::new("Drag components to your canvas").color(theme.text_muted));
    ui.separator();

    let footer_height = theme.button_height + theme.spacing_16;
    egui::ScrollArea::vertical()
        .id_salt("palette_catalog")
        .max_height((ui.available_height() - footer_height).max(120.0))
        .show(ui, |ui| {
            for category in &CATALOG {
                render_category(ui, theme, category);
                ui.add_space(theme.spacing_12);
            }
        });

    ui.separator();
    let generate = theme
        .primary_button("✨ Generate with AI")
        .fill(theme.accent_secondary)
        .min_size(egui::vec2(ui.available_width(), theme.button_height));
    if ui.add(generate).clicked() {
        commands.push(Command::SetAssistantOpen(true));
    }

    commands
}

fn render_category(ui: &mut egui::Ui, theme: &Theme, category: &Category) {
    ui.horizontal(|ui| {
        ui.strong(category.name);
        theme.badge(ui, category.components.len().to_string());
    });
    ui.add_space(theme.spacing_4);

    egui::Grid::new(("palette_category", category.name))
        .num_columns(2)
        .spacing([theme.spacing_8, theme.spacing_8])
        .show(ui, |ui| {
            for (index, def) in category.components.iter().enumerate() {
                render_card(ui, theme, def);
                if index % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

fn render_card(ui: &mut egui::Ui, theme: &Theme, def: &ArchetypeDef) {
    let payload = drag_payload(&Archetype::from_name(def.name));
    let id = egui::Id::new(("palette_card", def.name));
    ui.dnd_drag_source(id, payload, |ui| {
        theme.card_frame().show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(def.glyph).size(18.0));
                ui.label(RichText::new(def.name).strong().size(12.0));
                ui.label(
                    RichText::new(def.description)
                        .small()
                        .color(theme.text_muted),
                );
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_groups_fifteen_archetypes() {
        let names: Vec<_> = CATALOG.iter().map(|category| category.name).collect();
        assert_eq!(names, ["Basic", "Layout", "Data", "Advanced"]);
        let total: usize = CATALOG.iter().map(|c| c.components.len()).sum();
        assert_eq!(total, 15);
    }

    #[test]
    fn every_catalog_entry_maps_to_a_known_archetype() {
        for def in CATALOG.iter().flat_map(|c| c.components.iter()) {
            let archetype = Archetype::from_name(def.name);
            assert!(
                !matches!(archetype, Archetype::Other(_)),
                "{} should be a known archetype",
                def.name
            );
            assert_eq!(drag_payload(&archetype), def.name);
        }
    }

    #[test]
    fn find_looks_up_by_name() {
        assert_eq!(find("Chart").map(|def| def.description), Some("Data visualization"));
        assert!(find("Carousel").is_none());
    }
}
