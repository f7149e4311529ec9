//! Trigger events delivered to tooltip targets.

use crate::widget::ElementId;
use std::fmt;

/// Pointer events a tooltip can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    Click,
    MouseEnter,
    MouseLeave,
}

impl TriggerEvent {
    pub const ALL: [TriggerEvent; 3] = [Self::Click, Self::MouseEnter, Self::MouseLeave];

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "click" => Some(Self::Click),
            "mouseenter" => Some(Self::MouseEnter),
            "mouseleave" => Some(Self::MouseLeave),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
        }
    }
}

impl fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Queue of events waiting for the next event-loop tick.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<(ElementId, TriggerEvent)>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: ElementId, event: TriggerEvent) {
        self.pending.push((target, event));
    }

    pub fn drain(&mut self) -> Vec<(ElementId, TriggerEvent)> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
