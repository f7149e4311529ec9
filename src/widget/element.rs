//! Element - a node in the simulated document tree.

use super::{ElementId, Point, Size};
use crate::event::TriggerEvent;
use std::collections::{BTreeMap, HashSet};

/// Element kinds the tooltip builds or points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Body,
    Div,
    Span,
    Img,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Div => "div",
            Self::Span => "span",
            Self::Img => "img",
        }
    }
}

/// A node with explicit geometry. Positions are page coordinates.
#[derive(Debug)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    pub parent_id: Option<ElementId>,
    pub children: Vec<ElementId>,
    /// Outer size in pixels.
    pub size: Size,
    /// Page position.
    pub position: Point,
    pub attributes: BTreeMap<String, String>,
    pub classes: Vec<String>,
    /// Inline style properties.
    pub styles: BTreeMap<String, String>,
    pub text: Option<String>,
    /// Trigger events this element has listeners for.
    pub listeners: HashSet<TriggerEvent>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: ElementId::next(),
            kind,
            parent_id: None,
            children: Vec::new(),
            size: Size::default(),
            position: Point::default(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            styles: BTreeMap::new(),
            text: None,
            listeners: HashSet::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn is_listening(&self, event: TriggerEvent) -> bool {
        self.listeners.contains(&event)
    }
}
