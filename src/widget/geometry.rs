//! Page-space geometry used by the positioning engine.

use serde::{Deserialize, Serialize};

/// A position in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub left: f32,
    pub top: f32,
}

impl Point {
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }
}

/// Outer size of a box, border and padding included.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A box positioned in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.left, origin.top, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn reference_points(&self) -> ReferencePoints {
        ReferencePoints {
            h_left: self.left,
            h_center: self.left + self.width / 2.0,
            h_right: self.left + self.width,
            v_top: self.top,
            v_middle: self.top + self.height / 2.0,
            v_bottom: self.top + self.height,
        }
    }
}

/// Edges and midlines of a target box that arrows point at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoints {
    pub h_left: f32,
    pub h_center: f32,
    pub h_right: f32,
    pub v_top: f32,
    pub v_middle: f32,
    pub v_bottom: f32,
}
