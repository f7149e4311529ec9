//! Document access used by the tooltip controller, plus an in-memory tree.

use super::{Element, ElementId, ElementKind, Point, Rect, Size};
use crate::error::{Error, Result};
use crate::event::TriggerEvent;
use std::collections::HashMap;

/// Measurement and mutation primitives the tooltip needs from its host.
///
/// Every mutating call fails with [`Error::ElementNotFound`] for a handle the
/// document does not know.
pub trait Document {
    fn create_element(&mut self, kind: ElementKind) -> ElementId;
    fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<()>;
    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> Result<()>;
    fn remove_attribute(&mut self, id: ElementId, name: &str) -> Result<()>;
    fn add_class(&mut self, id: ElementId, class: &str) -> Result<()>;
    fn set_style(&mut self, id: ElementId, property: &str, value: &str) -> Result<()>;
    fn set_text(&mut self, id: ElementId, text: &str) -> Result<()>;
    fn set_size(&mut self, id: ElementId, size: Size) -> Result<()>;
    fn set_position(&mut self, id: ElementId, position: Point) -> Result<()>;
    /// Outer bounding box in page coordinates.
    fn measure(&self, id: ElementId) -> Result<Rect>;
    /// Insert as the first child of the document root.
    fn prepend_to_root(&mut self, id: ElementId) -> Result<()>;
    /// Remove from its parent; a detached element is left as is.
    fn detach(&mut self, id: ElementId) -> Result<()>;
    /// Drop the element and its whole subtree from the document.
    fn remove_element(&mut self, id: ElementId) -> Result<()>;
    /// Whether the element is reachable from the document root.
    fn is_attached(&self, id: ElementId) -> bool;
    fn listen(&mut self, id: ElementId, event: TriggerEvent) -> Result<()>;
    fn unlisten(&mut self, id: ElementId, event: TriggerEvent) -> Result<()>;
    fn is_listening(&self, id: ElementId, event: TriggerEvent) -> bool;
}

/// In-memory document: an element store with a `body` root.
#[derive(Debug)]
pub struct SimDocument {
    elements: HashMap<ElementId, Element>,
    root: ElementId,
}

impl Default for SimDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDocument {
    pub fn new() -> Self {
        let body = Element::new(ElementKind::Body);
        let root = body.id;
        let mut elements = HashMap::new();
        elements.insert(root, body);
        Self { elements, root }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.keys().copied()
    }

    /// Create an element under `parent` occupying `rect`.
    pub fn add_element(&mut self, parent: ElementId, kind: ElementKind, rect: Rect) -> Result<ElementId> {
        let id = self.create_element(kind);
        self.set_position(id, rect.origin())?;
        self.set_size(id, rect.size())?;
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Look up an element by the value of one of its attributes.
    pub fn find_by_attribute(&self, name: &str, value: &str) -> Vec<ElementId> {
        let mut found: Vec<ElementId> = self
            .elements
            .values()
            .filter(|e| e.attribute(name) == Some(value))
            .map(|e| e.id)
            .collect();
        found.sort();
        found
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.elements.get_mut(&id).ok_or(Error::ElementNotFound(id))
    }

    /// Check if making `child` a child of `parent` would put `child` among
    /// its own ancestors.
    fn would_create_cycle(&self, parent: ElementId, child: ElementId) -> bool {
        let mut current = Some(parent);
        while let Some(id) = current {
            if id == child {
                return true;
            }
            current = self.elements.get(&id).and_then(|e| e.parent_id);
        }
        false
    }

    fn unlink(&mut self, id: ElementId) -> Result<()> {
        let parent_id = self.element_mut(id)?.parent_id.take();
        if let Some(parent) = parent_id.and_then(|p| self.elements.get_mut(&p)) {
            parent.children.retain(|c| *c != id);
        }
        Ok(())
    }

    fn link(&mut self, parent: ElementId, child: ElementId, index: Option<usize>) -> Result<()> {
        if !self.elements.contains_key(&child) {
            return Err(Error::ElementNotFound(child));
        }
        if !self.elements.contains_key(&parent) {
            return Err(Error::ElementNotFound(parent));
        }
        if self.would_create_cycle(parent, child) {
            tracing::warn!("Ignoring append of {} under its descendant {}", child, parent);
            return Ok(());
        }
        self.unlink(child)?;
        let parent_el = self.element_mut(parent)?;
        match index {
            Some(i) => parent_el.children.insert(i.min(parent_el.children.len()), child),
            None => parent_el.children.push(child),
        }
        self.element_mut(child)?.parent_id = Some(parent);
        Ok(())
    }
}

impl Document for SimDocument {
    fn create_element(&mut self, kind: ElementKind) -> ElementId {
        let element = Element::new(kind);
        let id = element.id;
        self.elements.insert(id, element);
        id
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        self.link(parent, child, None)
    }

    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> Result<()> {
        self.element_mut(id)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&mut self, id: ElementId, name: &str) -> Result<()> {
        self.element_mut(id)?.attributes.remove(name);
        Ok(())
    }

    fn add_class(&mut self, id: ElementId, class: &str) -> Result<()> {
        self.element_mut(id)?.add_class(class);
        Ok(())
    }

    fn set_style(&mut self, id: ElementId, property: &str, value: &str) -> Result<()> {
        self.element_mut(id)?
            .styles
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn set_text(&mut self, id: ElementId, text: &str) -> Result<()> {
        self.element_mut(id)?.text = Some(text.to_string());
        Ok(())
    }

    fn set_size(&mut self, id: ElementId, size: Size) -> Result<()> {
        self.element_mut(id)?.size = size;
        Ok(())
    }

    fn set_position(&mut self, id: ElementId, position: Point) -> Result<()> {
        self.element_mut(id)?.position = position;
        Ok(())
    }

    fn measure(&self, id: ElementId) -> Result<Rect> {
        self.elements
            .get(&id)
            .map(|e| Rect::from_parts(e.position, e.size))
            .ok_or(Error::ElementNotFound(id))
    }

    fn prepend_to_root(&mut self, id: ElementId) -> Result<()> {
        self.link(self.root, id, Some(0))
    }

    fn detach(&mut self, id: ElementId) -> Result<()> {
        self.unlink(id)
    }

    fn remove_element(&mut self, id: ElementId) -> Result<()> {
        if id == self.root {
            tracing::warn!("Refusing to remove the document root");
            return Ok(());
        }
        self.unlink(id)?;
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(element) = self.elements.remove(&next) {
                pending.extend(element.children);
            }
        }
        Ok(())
    }

    fn is_attached(&self, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(check) = current {
            if check == self.root {
                return true;
            }
            current = self.elements.get(&check).and_then(|e| e.parent_id);
        }
        false
    }

    fn listen(&mut self, id: ElementId, event: TriggerEvent) -> Result<()> {
        self.element_mut(id)?.listeners.insert(event);
        Ok(())
    }

    fn unlisten(&mut self, id: ElementId, event: TriggerEvent) -> Result<()> {
        self.element_mut(id)?.listeners.remove(&event);
        Ok(())
    }

    fn is_listening(&self, id: ElementId, event: TriggerEvent) -> bool {
        self.elements.get(&id).is_some_and(|e| e.is_listening(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend_puts_element_first() {
        let mut doc = SimDocument::new();
        let root = doc.root();
        let first = doc.add_element(root, ElementKind::Span, Rect::default()).unwrap();
        let popup = doc.create_element(ElementKind::Div);
        assert!(!doc.is_attached(popup));

        doc.prepend_to_root(popup).unwrap();
        assert!(doc.is_attached(popup));
        assert_eq!(doc.get(root).unwrap().children, vec![popup, first]);
    }

    #[test]
    fn test_detach_unlinks_subtree() {
        let mut doc = SimDocument::new();
        let popup = doc.create_element(ElementKind::Div);
        let arrow = doc.create_element(ElementKind::Div);
        doc.append_child(popup, arrow).unwrap();
        doc.prepend_to_root(popup).unwrap();
        assert!(doc.is_attached(arrow));

        doc.detach(popup).unwrap();
        assert!(!doc.is_attached(popup));
        assert!(!doc.is_attached(arrow));
        assert!(doc.get(doc.root()).unwrap().children.is_empty());

        // Detaching again is harmless.
        doc.detach(popup).unwrap();
    }

    #[test]
    fn test_remove_element_drops_subtree() {
        let mut doc = SimDocument::new();
        let before = doc.len();
        let popup = doc.create_element(ElementKind::Div);
        let arrow = doc.create_element(ElementKind::Div);
        let image = doc.create_element(ElementKind::Img);
        doc.append_child(arrow, image).unwrap();
        doc.append_child(popup, arrow).unwrap();
        doc.prepend_to_root(popup).unwrap();

        doc.remove_element(popup).unwrap();
        assert_eq!(doc.len(), before);
        assert!(doc.get(image).is_none());
        assert!(doc.get(doc.root()).unwrap().children.is_empty());
        assert!(matches!(doc.remove_element(popup), Err(Error::ElementNotFound(_))));

        let root = doc.root();
        doc.remove_element(root).unwrap();
        assert!(doc.get(root).is_some());
    }

    #[test]
    fn test_append_ignores_cycles() {
        let mut doc = SimDocument::new();
        let outer = doc.create_element(ElementKind::Div);
        let inner = doc.create_element(ElementKind::Div);
        doc.append_child(outer, inner).unwrap();
        doc.append_child(inner, outer).unwrap();
        assert_eq!(doc.get(outer).unwrap().parent_id, None);
        assert_eq!(doc.get(inner).unwrap().parent_id, Some(outer));
    }

    #[test]
    fn test_unknown_element_errors() {
        let mut doc = SimDocument::new();
        let stranger = ElementId::next();
        assert!(matches!(
            doc.set_attribute(stranger, "a", "b"),
            Err(Error::ElementNotFound(id)) if id == stranger
        ));
        assert!(doc.measure(stranger).is_err());
        assert!(!doc.is_attached(stranger));
    }

    #[test]
    fn test_measure_returns_page_box() {
        let mut doc = SimDocument::new();
        let rect = Rect::new(100.0, 100.0, 50.0, 20.0);
        let id = doc.add_element(doc.root(), ElementKind::Span, rect).unwrap();
        assert_eq!(doc.measure(id).unwrap(), rect);
    }
}
