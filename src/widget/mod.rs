//! Element tree, geometry and the gravity positioning engine.

mod document;
mod element;
mod geometry;
mod gravity;
mod position;

pub use document::{Document, SimDocument};
pub use element::{Element, ElementKind};
pub use geometry::{Point, Rect, ReferencePoints, Size};
pub use gravity::{ArrowOrientation, ArrowShift, ArrowSpec, Gravity};
pub use position::position;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable handle for an element in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u64);

impl ElementId {
    /// Generate a unique element ID.
    pub fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
