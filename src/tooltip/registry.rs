//! Registry mapping target elements to their tooltips.

use super::StyledTooltip;
use crate::config::{Options, TooltipOptions};
use crate::error::{Error, Result};
use crate::event::TriggerEvent;
use crate::widget::{Document, ElementId};
use std::collections::HashMap;

/// Instance-level operations addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Show,
    Hide,
    Enable,
    Disable,
    Destroy,
}

impl Operation {
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "show" => Ok(Self::Show),
            "hide" => Ok(Self::Hide),
            "enable" => Ok(Self::Enable),
            "disable" => Ok(Self::Disable),
            "destroy" => Ok(Self::Destroy),
            other => Err(Error::UnknownOperation(other.to_string())),
        }
    }
}

/// Owns every tooltip instance, keyed by its target element.
#[derive(Debug, Default)]
pub struct TooltipRegistry {
    tooltips: HashMap<ElementId, StyledTooltip>,
}

impl TooltipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a tooltip to `target`, replacing any existing one.
    ///
    /// The replacement is built before the old instance is torn down, so a
    /// failed build leaves the existing tooltip in place.
    pub fn attach<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        target: ElementId,
        options: &TooltipOptions,
    ) -> Result<()> {
        let options = options.resolve()?;
        self.install(doc, target, options)
    }

    /// Attach the same options to many targets.
    ///
    /// Missing `image_base` fails the whole call. A target that fails to build
    /// is skipped without affecting the rest. Returns the targets that now
    /// have a tooltip.
    pub fn attach_all<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        targets: &[ElementId],
        options: &TooltipOptions,
    ) -> Result<Vec<ElementId>> {
        let resolved = options.resolve()?;
        if resolved.debug {
            tracing::debug!("Initializing tooltips for {} targets", targets.len());
        }

        let mut attached = Vec::with_capacity(targets.len());
        for &target in targets {
            match self.install(doc, target, resolved.clone()) {
                Ok(()) => attached.push(target),
                Err(e) if resolved.debug => {
                    tracing::warn!("Skipping tooltip for {}: {}", target, e);
                }
                Err(e) => {
                    tracing::debug!("Skipping tooltip for {}: {}", target, e);
                }
            }
        }
        Ok(attached)
    }

    pub fn get(&self, target: ElementId) -> Option<&StyledTooltip> {
        self.tooltips.get(&target)
    }

    pub fn contains(&self, target: ElementId) -> bool {
        self.tooltips.contains_key(&target)
    }

    pub fn len(&self) -> usize {
        self.tooltips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tooltips.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &StyledTooltip)> {
        self.tooltips.iter().map(|(id, t)| (*id, t))
    }

    pub fn show<D: Document + ?Sized>(&self, doc: &mut D, target: ElementId) -> Result<()> {
        self.instance(target)?.show(doc)
    }

    pub fn hide<D: Document + ?Sized>(&self, doc: &mut D, target: ElementId) -> Result<()> {
        self.instance(target)?.hide(doc)
    }

    pub fn enable<D: Document + ?Sized>(&mut self, doc: &mut D, target: ElementId) -> Result<()> {
        self.instance_mut(target)?.enable(doc)
    }

    pub fn disable<D: Document + ?Sized>(&mut self, doc: &mut D, target: ElementId) -> Result<()> {
        self.instance_mut(target)?.disable(doc)
    }

    /// Hide the tooltip, drop its listeners and unregister it.
    pub fn destroy<D: Document + ?Sized>(&mut self, doc: &mut D, target: ElementId) -> Result<()> {
        let tooltip = self
            .tooltips
            .remove(&target)
            .ok_or(Error::NotConstructed(target))?;
        tooltip.destroy(doc)
    }

    /// Run an operation given by name (`"show"`, `"hide"`, ...).
    pub fn call<D: Document + ?Sized>(&mut self, doc: &mut D, target: ElementId, op: &str) -> Result<()> {
        self.instance(target)?;
        match Operation::parse(op)? {
            Operation::Show => self.show(doc, target),
            Operation::Hide => self.hide(doc, target),
            Operation::Enable => self.enable(doc, target),
            Operation::Disable => self.disable(doc, target),
            Operation::Destroy => self.destroy(doc, target),
        }
    }

    /// Deliver a trigger event fired on `target`.
    ///
    /// Returns whether a tooltip listening on the target received it.
    pub fn dispatch<D: Document + ?Sized>(
        &self,
        doc: &mut D,
        target: ElementId,
        event: TriggerEvent,
    ) -> Result<bool> {
        let Some(tooltip) = self.tooltips.get(&target) else {
            return Ok(false);
        };
        if !doc.is_listening(target, event) {
            return Ok(false);
        }
        tooltip.handle_event(doc, event)?;
        Ok(true)
    }

    fn instance(&self, target: ElementId) -> Result<&StyledTooltip> {
        self.tooltips.get(&target).ok_or(Error::NotConstructed(target))
    }

    fn instance_mut(&mut self, target: ElementId) -> Result<&mut StyledTooltip> {
        self.tooltips
            .get_mut(&target)
            .ok_or(Error::NotConstructed(target))
    }

    fn install<D: Document + ?Sized>(&mut self, doc: &mut D, target: ElementId, options: Options) -> Result<()> {
        let tooltip = StyledTooltip::create(doc, target, options)?;
        if let Some(old) = self.tooltips.remove(&target) {
            tracing::debug!("Replacing existing tooltip on {}", target);
            old.discard(doc)?;
        }
        self.tooltips.entry(target).or_insert(tooltip).auto_show(doc)
    }
}
