//! Construction, explicit show/hide/enable/disable and teardown.

mod common;

use common::{attached, doc_with_target, is_shown, options, tooltip};
use styled_tooltip::dump::format_tree;
use styled_tooltip::event::TriggerEvent;
use styled_tooltip::tooltip::TARGET_ATTR;
use styled_tooltip::widget::{Document, ElementKind, Rect};
use styled_tooltip::{ElementId, Error, TooltipOptions, TooltipRegistry};

#[test]
fn test_missing_image_base_registers_nothing() {
    let (mut doc, target) = doc_with_target();
    let mut registry = TooltipRegistry::new();
    let before = doc.len();

    let err = registry
        .attach(&mut doc, target, &TooltipOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::MissingRequiredOption("image_base")));
    assert!(registry.is_empty());
    assert!(!registry.contains(target));
    assert_eq!(doc.len(), before);
    assert!(!doc.is_listening(target, TriggerEvent::MouseEnter));
}

#[test]
fn test_hide_never_shown_is_noop() {
    let (mut doc, target, registry) = attached(options());
    let before = format_tree(&doc);
    registry.hide(&mut doc, target).unwrap();
    assert_eq!(format_tree(&doc), before);
    assert!(!is_shown(&doc, &registry, target));
}

#[test]
fn test_show_and_hide_toggle_target_marker() {
    let (mut doc, target, registry) = attached(options());
    registry.show(&mut doc, target).unwrap();
    assert!(is_shown(&doc, &registry, target));
    assert_eq!(doc.get(target).unwrap().attribute(TARGET_ATTR), Some("true"));

    registry.hide(&mut doc, target).unwrap();
    assert!(!is_shown(&doc, &registry, target));
    assert_eq!(doc.get(target).unwrap().attribute(TARGET_ATTR), None);
}

#[test]
fn test_auto_show_on_construction() {
    let (doc, target, registry) = attached(options().auto_show(true));
    assert!(is_shown(&doc, &registry, target));
}

#[test]
fn test_disable_always_hides() {
    for (enabled, auto_show) in [(true, true), (true, false), (false, true), (false, false)] {
        let (mut doc, target, mut registry) =
            attached(options().enabled(enabled).auto_show(auto_show));
        registry.show(&mut doc, target).unwrap();
        registry.disable(&mut doc, target).unwrap();
        assert!(!is_shown(&doc, &registry, target), "enabled={enabled} auto_show={auto_show}");
        assert!(!tooltip(&registry, target).is_enabled());
    }
}

#[test]
fn test_enable_with_auto_show_shows() {
    let (mut doc, target, mut registry) = attached(options().enabled(false).auto_show(true));
    assert!(!is_shown(&doc, &registry, target));

    registry.enable(&mut doc, target).unwrap();
    assert!(is_shown(&doc, &registry, target));
    assert!(tooltip(&registry, target).is_enabled());

    registry.disable(&mut doc, target).unwrap();
    registry.enable(&mut doc, target).unwrap();
    assert!(is_shown(&doc, &registry, target));
}

#[test]
fn test_enable_without_auto_show_stays_hidden() {
    let (mut doc, target, mut registry) = attached(options().enabled(false));
    registry.enable(&mut doc, target).unwrap();
    assert!(!is_shown(&doc, &registry, target));
    assert!(tooltip(&registry, target).is_enabled());
}

#[test]
fn test_operations_on_unknown_target() {
    let (mut doc, target) = doc_with_target();
    let mut registry = TooltipRegistry::new();

    assert!(matches!(registry.show(&mut doc, target), Err(Error::NotConstructed(id)) if id == target));
    assert!(matches!(registry.hide(&mut doc, target), Err(Error::NotConstructed(_))));
    assert!(matches!(registry.enable(&mut doc, target), Err(Error::NotConstructed(_))));
    assert!(matches!(registry.disable(&mut doc, target), Err(Error::NotConstructed(_))));
    assert!(matches!(registry.destroy(&mut doc, target), Err(Error::NotConstructed(_))));
    assert!(matches!(registry.call(&mut doc, target, "show"), Err(Error::NotConstructed(_))));
}

#[test]
fn test_call_by_name() {
    let (mut doc, target, mut registry) = attached(options());
    registry.call(&mut doc, target, "show").unwrap();
    assert!(is_shown(&doc, &registry, target));
    registry.call(&mut doc, target, "disable").unwrap();
    assert!(!is_shown(&doc, &registry, target));

    let err = registry.call(&mut doc, target, "explode").unwrap_err();
    assert!(matches!(err, Error::UnknownOperation(ref name) if name == "explode"));
    assert_eq!(err.to_string(), "operation 'explode' does not exist");

    registry.call(&mut doc, target, "destroy").unwrap();
    assert!(registry.is_empty());
}

#[test]
fn test_destroy_unregisters_and_detaches() {
    let (mut doc, target, mut registry) = attached(options().auto_show(true));
    let container = tooltip(&registry, target).container();

    registry.destroy(&mut doc, target).unwrap();
    assert!(!registry.contains(target));
    assert!(!doc.is_attached(container));
    assert_eq!(doc.get(target).unwrap().attribute(TARGET_ATTR), None);
    for event in TriggerEvent::ALL {
        assert!(!doc.is_listening(target, event));
    }
    assert!(matches!(registry.show(&mut doc, target), Err(Error::NotConstructed(_))));
}

#[test]
fn test_reattach_replaces_instance() {
    let (mut doc, target, mut registry) = attached(options().auto_show(true));
    let old_container = tooltip(&registry, target).container();

    registry
        .attach(&mut doc, target, &options().gravity("s"))
        .unwrap();
    assert_eq!(registry.len(), 1);
    assert!(!doc.is_attached(old_container));
    assert_ne!(tooltip(&registry, target).container(), old_container);
    assert!(doc.is_listening(target, TriggerEvent::Click));
}

#[test]
fn test_destroy_and_reattach_free_built_elements() {
    let (mut doc, target) = doc_with_target();
    let baseline = doc.len();
    let mut registry = TooltipRegistry::new();
    let options = options().header("Title").content("Body").auto_show(true);

    registry.attach(&mut doc, target, &options).unwrap();
    let with_tooltip = doc.len();
    assert_eq!(with_tooltip, baseline + 5);

    for _ in 0..100 {
        registry.attach(&mut doc, target, &options).unwrap();
    }
    assert_eq!(doc.len(), with_tooltip);
    assert!(is_shown(&doc, &registry, target));
    assert_eq!(doc.get(target).unwrap().attribute(TARGET_ATTR), Some("true"));

    let container = tooltip(&registry, target).container();
    registry.destroy(&mut doc, target).unwrap();
    assert_eq!(doc.len(), baseline);
    assert!(doc.get(container).is_none());
}

#[test]
fn test_attach_all_isolates_failures() {
    let (mut doc, first) = doc_with_target();
    let second = doc
        .add_element(doc.root(), ElementKind::Span, Rect::new(0.0, 0.0, 10.0, 10.0))
        .unwrap();
    let missing = ElementId::next();
    let mut registry = TooltipRegistry::new();

    let attached = registry
        .attach_all(&mut doc, &[first, missing, second], &options().debug(true))
        .unwrap();
    assert_eq!(attached, vec![first, second]);
    assert_eq!(registry.len(), 2);
    assert!(!registry.contains(missing));
}

#[test]
fn test_attach_all_requires_image_base() {
    let (mut doc, target) = doc_with_target();
    let mut registry = TooltipRegistry::new();
    let result = registry.attach_all(&mut doc, &[target], &TooltipOptions::default());
    assert!(matches!(result, Err(Error::MissingRequiredOption(_))));
    assert!(registry.is_empty());
}
