use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

pub mod store;

pub const DEFAULT_PROJECT_NAME: &str = "My Awesome App";
pub const UNTITLED_PROJECT: &str = "Untitled Project";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simple = self.0.simple().to_string();
        f.write_str(&simple[..8])
    }
}

/// Named category of a placeable element.
///
/// The palette offers a closed set, but the store accepts any name, so
/// unrecognised names are kept verbatim in [`Archetype::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Archetype {
    Button,
    Text,
    Image,
    Container,
    Grid,
    Flex,
    List,
    Table,
    Chart,
    Form,
    Payment,
    Auth,
    Email,
    Search,
    Calendar,
    Other(String),
}

impl Archetype {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Button" => Self::Button,
            "Text" => Self::Text,
            "Image" => Self::Image,
            "Container" => Self::Container,
            "Grid" => Self::Grid,
            "Flex" => Self::Flex,
            "List" => Self::List,
            "Table" => Self::Table,
            "Chart" => Self::Chart,
            "Form" => Self::Form,
            "Payment" => Self::Payment,
            "Auth" => Self::Auth,
            "Email" => Self::Email,
            "Search" => Self::Search,
            "Calendar" => Self::Calendar,
            _ => Self::Other(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Button => "Button",
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Container => "Container",
            Self::Grid => "Grid",
            Self::Flex => "Flex",
            Self::List => "List",
            Self::Table => "Table",
            Self::Chart => "Chart",
            Self::Form => "Form",
            Self::Payment => "Payment",
            Self::Auth => "Auth",
            Self::Email => "Email",
            Self::Search => "Search",
            Self::Calendar => "Calendar",
            Self::Other(name) => name.as_str(),
        }
    }

    pub fn default_content(&self) -> String {
        format!("New {}", self.as_str())
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Archetype {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Canvas pixel coordinates, relative to the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(120.0, 40.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub id: ElementId,
    pub archetype: Archetype,
    pub position: Position,
    pub size: Size,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Element {
    pub fn display_content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMeta {
    pub name: String,
}

impl ProjectMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            UNTITLED_PROJECT
        } else {
            self.name.as_str()
        }
    }
}

impl Default for ProjectMeta {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archetype_names_round_trip_through_catalog_names() {
        for name in ["Button", "Text", "Image", "Container", "Calendar"] {
            assert_eq!(Archetype::from_name(name).as_str(), name);
        }
    }

    #[test]
    fn unrecognised_archetype_is_kept_verbatim() {
        let archetype = Archetype::from_name("Carousel");
        assert_eq!(archetype, Archetype::Other("Carousel".to_string()));
        assert_eq!(archetype.default_content(), "New Carousel");
    }

    #[test]
    fn element_serializes_archetype_as_plain_name() {
        let element = Element {
            id: ElementId::new(),
            archetype: Archetype::Image,
            position: Position::new(10.0, 20.0),
            size: Size::default(),
            content: None,
        };
        let value = serde_json::to_value(&element).expect("element should serialize");
        assert_eq!(value["archetype"], "Image");
        assert!(value.get("content").is_none());
    }

    #[test]
    fn blank_project_name_falls_back_to_placeholder() {
        assert_eq!(ProjectMeta::new("   ").display_name(), UNTITLED_PROJECT);
        assert_eq!(ProjectMeta::default().display_name(), DEFAULT_PROJECT_NAME);
    }
}
