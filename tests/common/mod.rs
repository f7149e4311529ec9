//! Shared test helpers.

use styled_tooltip::widget::{ElementKind, Rect};
use styled_tooltip::{ElementId, SimDocument, StyledTooltip, TooltipOptions, TooltipRegistry};

/// Target box used throughout: 50x20 at (100, 100).
#[allow(dead_code)]
pub const TARGET: Rect = Rect { left: 100.0, top: 100.0, width: 50.0, height: 20.0 };

/// Options with an image base and an 80x30 tooltip box.
#[allow(dead_code)]
pub fn options() -> TooltipOptions {
    TooltipOptions::new("/static/img").size(80.0, 30.0)
}

/// A document holding one target element.
#[allow(dead_code)]
pub fn doc_with_target() -> (SimDocument, ElementId) {
    let mut doc = SimDocument::new();
    let target = doc
        .add_element(doc.root(), ElementKind::Span, TARGET)
        .expect("Failed to add target");
    (doc, target)
}

/// A document, a target and a registry with a tooltip attached to it.
#[allow(dead_code)]
pub fn attached(options: TooltipOptions) -> (SimDocument, ElementId, TooltipRegistry) {
    let (mut doc, target) = doc_with_target();
    let mut registry = TooltipRegistry::new();
    registry
        .attach(&mut doc, target, &options)
        .expect("Failed to attach tooltip");
    (doc, target, registry)
}

#[allow(dead_code)]
pub fn tooltip(registry: &TooltipRegistry, target: ElementId) -> &StyledTooltip {
    registry.get(target).expect("No tooltip registered")
}

#[allow(dead_code)]
pub fn is_shown(doc: &SimDocument, registry: &TooltipRegistry, target: ElementId) -> bool {
    tooltip(registry, target).is_shown(doc)
}
