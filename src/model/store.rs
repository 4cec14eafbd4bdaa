use crate::command::{CommandOutcome, IgnoredReason};
use crate::model::{Archetype, Element, ElementId, Position, Size};

/// Ordered collection of placed elements plus the single selection.
///
/// Collection order is render order: the last element is drawn on top.
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    elements: Vec<Element>,
    selected: Option<ElementId>,
    default_size: Size,
}

impl ElementStore {
    pub fn new(default_size: Size) -> Self {
        Self {
            elements: Vec::new(),
            selected: None,
            default_size,
        }
    }

    /// Store pre-populated with the starter layout shown on a fresh project.
    pub fn with_seed(default_size: Size) -> Self {
        let mut store = Self::new(default_size);
        store.elements.push(Element {
            id: ElementId::new(),
            archetype: Archetype::Button,
            position: Position::new(200.0, 150.0),
            size: Size::new(120.0, 40.0),
            content: Some("Get Started".to_string()),
        });
        store.elements.push(Element {
            id: ElementId::new(),
            archetype: Archetype::Text,
            position: Position::new(150.0, 80.0),
            size: Size::new(220.0, 50.0),
            content: Some("Welcome to Your App".to_string()),
        });
        store
    }

    pub fn add(&mut self, archetype: Archetype, position: Position) -> Element {
        let element = Element {
            id: ElementId::new(),
            content: Some(archetype.default_content()),
            archetype,
            position,
            size: self.default_size,
        };
        self.elements.push(element.clone());
        element
    }

    pub fn select(&mut self, id: ElementId) -> CommandOutcome {
        if self.get(id).is_none() {
            return CommandOutcome::Ignored(IgnoredReason::UnknownElement(id));
        }
        self.selected = Some(id);
        CommandOutcome::Applied
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected == Some(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
