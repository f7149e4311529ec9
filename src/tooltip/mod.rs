//! Styled tooltip controller.
//!
//! A [`StyledTooltip`] owns the box built for one target element: a container
//! holding an arrow, an optional header and optional content. Whether the
//! container is attached to the document root is the visibility state; there
//! is no separate flag to drift out of sync.

mod registry;

pub use registry::{Operation, TooltipRegistry};

use crate::config::{Options, Trigger};
use crate::error::Result;
use crate::event::TriggerEvent;
use crate::widget::{Document, ElementId, ElementKind, Size, position};

/// Attribute naming each part of the tooltip box.
pub const PART_ATTR: &str = "data-styled-tooltip";
/// Attribute carrying the gravity on the arrow container.
pub const GRAVITY_ATTR: &str = "data-styled-tooltip-gravity";
/// Marker set on the target while its tooltip is shown.
pub const TARGET_ATTR: &str = "data-styled-tooltip-target";

/// A tooltip attached to one target element.
#[derive(Debug)]
pub struct StyledTooltip {
    target: ElementId,
    container: ElementId,
    arrow: ElementId,
    arrow_image: ElementId,
    header: Option<ElementId>,
    content: Option<ElementId>,
    options: Options,
}

impl StyledTooltip {
    /// Build the tooltip box for `target` and wire its trigger listeners.
    ///
    /// Shows the tooltip right away when both `enabled` and `auto_show` are set.
    pub fn build<D: Document + ?Sized>(doc: &mut D, target: ElementId, options: Options) -> Result<Self> {
        let tooltip = Self::create(doc, target, options)?;
        tooltip.auto_show(doc)?;
        Ok(tooltip)
    }

    /// Build the box and listeners without showing anything.
    pub(crate) fn create<D: Document + ?Sized>(doc: &mut D, target: ElementId, options: Options) -> Result<Self> {
        // Fail on a bad target before creating anything.
        doc.measure(target)?;

        let container = doc.create_element(ElementKind::Div);
        doc.set_attribute(container, PART_ATTR, "container")?;
        if let Some(class_name) = &options.class_name {
            doc.add_class(container, class_name)?;
        }
        if options.rounded_corners {
            doc.add_class(container, "rounded")?;
        }
        if let (Some(width), Some(height)) = (options.width, options.height) {
            doc.set_size(container, Size::new(width, height))?;
        } else if options.width.is_some() || options.height.is_some() {
            let current = doc.measure(container)?.size();
            let size = Size::new(
                options.width.unwrap_or(current.width),
                options.height.unwrap_or(current.height),
            );
            doc.set_size(container, size)?;
        }

        let (arrow, arrow_image) = build_arrow(doc, &options)?;
        doc.append_child(container, arrow)?;

        let header = match &options.header_content {
            Some(text) => {
                let header = doc.create_element(ElementKind::Div);
                doc.set_attribute(header, PART_ATTR, "header")?;
                if let Some(class_name) = &options.header_class_name {
                    doc.add_class(header, class_name)?;
                }
                doc.set_text(header, text)?;
                doc.append_child(container, header)?;
                Some(header)
            }
            None => None,
        };

        let content = match &options.content {
            Some(text) => {
                let content = doc.create_element(ElementKind::Div);
                doc.set_attribute(content, PART_ATTR, "content")?;
                doc.set_text(content, text)?;
                doc.append_child(container, content)?;
                Some(content)
            }
            None => None,
        };

        for event in TriggerEvent::ALL {
            doc.listen(target, event)?;
        }

        let tooltip = Self {
            target,
            container,
            arrow,
            arrow_image,
            header,
            content,
            options,
        };
        if tooltip.options.debug {
            tracing::debug!(
                "Built tooltip for {} (gravity {}, trigger {})",
                target,
                tooltip.options.gravity,
                tooltip.options.trigger.as_str()
            );
        }
        Ok(tooltip)
    }

    pub(crate) fn auto_show<D: Document + ?Sized>(&self, doc: &mut D) -> Result<()> {
        if self.options.enabled && self.options.auto_show {
            self.show(doc)?;
        }
        Ok(())
    }

    pub fn target(&self) -> ElementId {
        self.target
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn arrow(&self) -> ElementId {
        self.arrow
    }

    pub fn arrow_image(&self) -> ElementId {
        self.arrow_image
    }

    pub fn header(&self) -> Option<ElementId> {
        self.header
    }

    pub fn content(&self) -> Option<ElementId> {
        self.content
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn is_shown<D: Document + ?Sized>(&self, doc: &D) -> bool {
        doc.is_attached(self.container)
    }

    /// Attach the box to the document root and position it. No-op when shown.
    ///
    /// The box is measured while attached; if positioning fails it is
    /// detached again and the target is left unmarked.
    pub fn show<D: Document + ?Sized>(&self, doc: &mut D) -> Result<()> {
        if self.is_shown(doc) {
            return Ok(());
        }
        doc.prepend_to_root(self.container)?;
        if let Err(e) = self.reposition(doc) {
            doc.detach(self.container)?;
            return Err(e);
        }
        doc.set_attribute(self.target, TARGET_ATTR, "true")
    }

    /// Detach the box. No-op when hidden.
    pub fn hide<D: Document + ?Sized>(&self, doc: &mut D) -> Result<()> {
        if !self.is_shown(doc) {
            return Ok(());
        }
        doc.detach(self.container)?;
        doc.remove_attribute(self.target, TARGET_ATTR)
    }

    pub fn enable<D: Document + ?Sized>(&mut self, doc: &mut D) -> Result<()> {
        self.options.enabled = true;
        if self.options.auto_show {
            self.show(doc)?;
        }
        Ok(())
    }

    pub fn disable<D: Document + ?Sized>(&mut self, doc: &mut D) -> Result<()> {
        self.options.enabled = false;
        self.hide(doc)
    }

    /// Measure the current geometry and move the box next to the target.
    pub fn reposition<D: Document + ?Sized>(&self, doc: &mut D) -> Result<()> {
        let target = doc.measure(self.target)?;
        let tooltip = doc.measure(self.container)?.size();
        let arrow = doc.measure(self.arrow_image)?.size();
        let pos = position(target, tooltip, arrow, self.options.gravity, self.options.offset);
        if self.options.debug {
            tracing::debug!(
                "Tooltip for {} at left={} top={} (target {:?}, box {:?})",
                self.target,
                pos.left,
                pos.top,
                target,
                tooltip
            );
        }
        doc.set_position(self.container, pos)
    }

    pub fn on_pointer_enter<D: Document + ?Sized>(&self, doc: &mut D) -> Result<()> {
        if self.responds_to(Trigger::MouseEnter) {
            self.show(doc)?;
        }
        Ok(())
    }

    pub fn on_pointer_leave<D: Document + ?Sized>(&self, doc: &mut D) -> Result<()> {
        if self.responds_to(Trigger::MouseEnter) {
            self.hide(doc)?;
        }
        Ok(())
    }

    pub fn on_click<D: Document + ?Sized>(&self, doc: &mut D) -> Result<()> {
        if !self.responds_to(Trigger::Click) {
            return Ok(());
        }
        if self.is_shown(doc) {
            self.hide(doc)
        } else {
            self.show(doc)
        }
    }

    pub fn handle_event<D: Document + ?Sized>(&self, doc: &mut D, event: TriggerEvent) -> Result<()> {
        match event {
            TriggerEvent::MouseEnter => self.on_pointer_enter(doc),
            TriggerEvent::MouseLeave => self.on_pointer_leave(doc),
            TriggerEvent::Click => self.on_click(doc),
        }
    }

    /// Hide the box, drop its elements and the target's listeners.
    pub fn destroy<D: Document + ?Sized>(self, doc: &mut D) -> Result<()> {
        let target = self.target;
        self.discard(doc)?;
        for event in TriggerEvent::ALL {
            doc.unlisten(target, event)?;
        }
        Ok(())
    }

    /// Hide the box and drop its elements, keeping the target's listeners
    /// for a replacement instance.
    pub(crate) fn discard<D: Document + ?Sized>(self, doc: &mut D) -> Result<()> {
        self.hide(doc)?;
        doc.remove_element(self.container)
    }

    fn responds_to(&self, trigger: Trigger) -> bool {
        self.options.trigger == trigger && self.options.enabled
    }
}

/// Create the arrow container and its image for the configured gravity.
fn build_arrow<D: Document + ?Sized>(doc: &mut D, options: &Options) -> Result<(ElementId, ElementId)> {
    let spec = options.gravity.arrow();

    let image = doc.create_element(ElementKind::Img);
    doc.set_attribute(image, "src", &spec.src(&options.image_base))?;
    doc.set_attribute(image, "width", &spec.size.width.to_string())?;
    doc.set_attribute(image, "height", &spec.size.height.to_string())?;
    doc.set_size(image, spec.size)?;

    let arrow = doc.create_element(ElementKind::Div);
    doc.set_attribute(arrow, PART_ATTR, "arrow")?;
    doc.set_attribute(arrow, GRAVITY_ATTR, options.gravity.as_str())?;
    if let Some(shift) = spec.shift {
        doc.set_style(arrow, shift.property, &shift.css_value())?;
    }
    doc.append_child(arrow, image)?;
    Ok((arrow, image))
}
