//! Gravity positioning engine.
//!
//! Maps a target box, the tooltip's outer size and its arrow's size to the
//! page position of the tooltip so the arrow touches the target from the
//! gravity's side. The offset moves the tooltip along the pointing axis.

use super::{Gravity, Point, Rect, ReferencePoints, Size};

type Formula = fn(&ReferencePoints, Size, Size, f32) -> Point;

/// One formula per gravity, in declaration (and `Gravity::ALL`) order.
static FORMULAS: [(Gravity, Formula); 12] = [
    (Gravity::N, north),
    (Gravity::S, south),
    (Gravity::E, east),
    (Gravity::W, west),
    (Gravity::NE, north_east),
    (Gravity::NW, north_west),
    (Gravity::SE, south_east),
    (Gravity::SW, south_west),
    (Gravity::EN, east_north),
    (Gravity::ES, east_south),
    (Gravity::WN, west_north),
    (Gravity::WS, west_south),
];

fn north(p: &ReferencePoints, tip: Size, arrow: Size, off: f32) -> Point {
    Point::new(p.h_center - tip.width / 2.0, below(p, arrow, off))
}

fn south(p: &ReferencePoints, tip: Size, arrow: Size, off: f32) -> Point {
    Point::new(p.h_center - tip.width / 2.0, above(p, tip, arrow.height, off))
}

fn east(p: &ReferencePoints, tip: Size, arrow: Size, off: f32) -> Point {
    Point::new(left_of(p, tip, arrow, off), p.v_middle - tip.height / 2.0)
}

fn west(p: &ReferencePoints, tip: Size, arrow: Size, off: f32) -> Point {
    Point::new(right_of(p, arrow, off), p.v_middle - tip.height / 2.0)
}

fn north_east(p: &ReferencePoints, tip: Size, arrow: Size, off: f32) -> Point {
    Point::new(p.h_center - tip.width + arrow.width / 2.0, below(p, arrow, off))
}

fn north_west(p: &ReferencePoints, _tip: Size, arrow: Size, off: f32) -> Point {
    Point::new(p.h_center - arrow.width / 2.0, below(p, arrow, off))
}

// Only half the arrow height here; the SE art sits lower in its box.
fn south_east(p: &ReferencePoints, tip: Size, arrow: Size, off: f32) -> Point {
    Point::new(
        p.h_center - tip.width + arrow.width / 2.0,
        above(p, tip, arrow.height / 2.0, off),
    )
}

fn south_west(p: &ReferencePoints, tip: Size, arrow: Size, off: f32) -> Point {
    Point::new(p.h_center - arrow.width / 2.0, above(p, tip, arrow.height, off))
}

fn east_north(p: &ReferencePoints, tip: Size, arrow: Size, off: f32) -> Point {
    Point::new(left_of(p, tip, arrow, off), p.v_middle - arrow.height / 2.0)
}

fn east_south(p: &ReferencePoints, tip: Size, arrow: Size, off: f32) -> Point {
    Point::new(
        left_of(p, tip, arrow, off),
        p.v_middle - (tip.height - arrow.height / 2.0),
    )
}

fn west_north(p: &ReferencePoints, _tip: Size, arrow: Size, off: f32) -> Point {
    Point::new(right_of(p, arrow, off), p.v_middle - arrow.height / 2.0)
}

fn west_south(p: &ReferencePoints, tip: Size, arrow: Size, off: f32) -> Point {
    Point::new(
        right_of(p, arrow, off),
        p.v_middle - (tip.height - arrow.height / 2.0),
    )
}

fn below(p: &ReferencePoints, arrow: Size, off: f32) -> f32 {
    p.v_bottom + arrow.height + off
}

fn above(p: &ReferencePoints, tip: Size, arrow_gap: f32, off: f32) -> f32 {
    p.v_top - tip.height - arrow_gap + off
}

fn right_of(p: &ReferencePoints, arrow: Size, off: f32) -> f32 {
    p.h_right + arrow.width + off
}

fn left_of(p: &ReferencePoints, tip: Size, arrow: Size, off: f32) -> f32 {
    p.h_left - tip.width - arrow.width + off
}

fn formula(gravity: Gravity) -> Formula {
    // Rows follow declaration order, so the discriminant is the row.
    FORMULAS[gravity as usize].1
}

/// Compute the page position of a tooltip box for `gravity`.
pub fn position(target: Rect, tooltip: Size, arrow: Size, gravity: Gravity, offset: i32) -> Point {
    let points = target.reference_points();
    formula(gravity)(&points, tooltip, arrow, offset as f32)
}
