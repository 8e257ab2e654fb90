//! Label placement math.
//!
//! Given three sampled member rectangles (first, middle, last), the deck's
//! perspective signs and the label's measured size, compute the label's
//! top-left corner for a fixed side, or suggest a side from the deck's
//! position on the table.

use crate::layout::{Bounds, CardRect, Dimensions, Directions, Point};

use super::Side;

/// The three members a label is positioned against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Samples {
    pub first: CardRect,
    pub middle: CardRect,
    pub last: CardRect,
}

/// Suggest the side for a label from where `anchor` sits in `area`.
///
/// A deck at or past the right edge gets its label on the left, at or past
/// the left edge on the right, at or past the bottom on top, at or past the
/// top underneath. A deck well inside the area gets no suggestion.
#[must_use]
pub fn suggest_side(anchor: Point, area: &Bounds) -> Option<Side> {
    if anchor.x >= area.right {
        Some(Side::Left)
    } else if anchor.x <= area.left {
        Some(Side::Right)
    } else if anchor.y >= area.bottom {
        Some(Side::Top)
    } else if anchor.y <= area.top {
        Some(Side::Bottom)
    } else {
        None
    }
}

/// Top-left corner of a label of `size` stuck to `side`.
///
/// The extremity used is the one facing the viewer: for `Top`/`Bottom` the
/// Y sign picks between the first and last member, for `Left`/`Right` the X
/// sign does.
#[must_use]
pub fn place(
    side: Side,
    samples: &Samples,
    dirs: Directions,
    size: Dimensions,
    padding: Dimensions,
    anchor: Point,
) -> Point {
    let Samples { first, middle, last } = samples;
    let Dimensions { width, height } = size;

    match side {
        Side::Top => {
            let edge = if dirs.y > 0 { first.top } else { last.top };
            Point::new(middle.center_x - width / 2.0, edge - (height + padding.height))
        }
        Side::Bottom => {
            let edge = if dirs.y > 0 { last.bottom } else { first.bottom };
            Point::new(middle.center_x - width / 2.0, edge + padding.height)
        }
        Side::Left => {
            let edge = if dirs.x > 0 { first.left } else { last.left };
            Point::new(edge - (width + padding.width), middle.center_y - height / 2.0)
        }
        Side::Right => {
            let edge = if dirs.x > 0 { last.right } else { first.right };
            Point::new(edge + padding.width, middle.center_y - height / 2.0)
        }
        Side::Center => Point::new(anchor.x - width / 2.0, anchor.y - height / 2.0),
    }
}
