//! Geometry primitives and the per-index card position function.

use serde::{Deserialize, Serialize};

use super::arrangement::{Arrangement, Padding};

/// A point in table pixels. `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned bounds. `top < bottom` in screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Bounds {
    /// Bounds covering `size` from the origin.
    #[must_use]
    pub fn of(size: Dimensions) -> Self {
        Self {
            top: 0.0,
            left: 0.0,
            bottom: size.height,
            right: size.width,
        }
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    #[must_use]
    pub fn inset(self, dx: f64, dy: f64) -> Self {
        Self {
            top: self.top + dy,
            left: self.left + dx,
            bottom: self.bottom - dy,
            right: self.right - dx,
        }
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Target rectangle of a single card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl CardRect {
    /// Top-left corner, the coordinate written to the surface.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }
}

/// Everything the layout engine needs to know about a deck.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stack {
    pub anchor: Point,
    pub arrangement: Arrangement,
    pub padding: Padding,
    pub card_size: Dimensions,
}

/// Compute the rectangle of member `index` in a deck of `len` cards.
///
/// Pure and deterministic. Piles step by `index * padding` on both axes,
/// columns step vertically, hands fan horizontally around the anchor using
/// `index - (len - 1) / 2`, so the first and last cards mirror each other
/// (fractional steps for even counts).
#[must_use]
pub fn card_position(stack: &Stack, len: usize, index: usize) -> CardRect {
    let Stack {
        anchor,
        arrangement,
        padding,
        card_size,
    } = *stack;
    let i = index as f64;
    let middle = len.saturating_sub(1) as f64 / 2.0;

    let mut left = anchor.x - card_size.width / 2.0;
    let mut top = anchor.y - card_size.height / 2.0;

    match arrangement {
        Arrangement::Hand => {
            left += (i - middle) * padding.horizontal;
        }
        Arrangement::Column => {
            top += i * padding.vertical;
        }
        Arrangement::Pile => {
            top += i * padding.vertical;
            left += i * padding.horizontal;
        }
    }

    CardRect {
        top,
        left,
        bottom: top + card_size.height,
        right: left + card_size.width,
        center_x: left + card_size.width / 2.0,
        center_y: top + card_size.height / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{PaddingSteps, Perspective};

    fn stack(arrangement: Arrangement, perspective: Perspective) -> Stack {
        Stack {
            anchor: Point::new(200.0, 150.0),
            arrangement,
            padding: arrangement.padding(perspective.directions(), &PaddingSteps::default()),
            card_size: Dimensions::new(69.0, 94.0),
        }
    }

    #[test]
    fn test_first_pile_card_is_centred_on_anchor() {
        let rect = card_position(&stack(Arrangement::Pile, Perspective::South), 1, 0);
        assert_eq!(rect.center(), Point::new(200.0, 150.0));
        assert_eq!(rect.left, 200.0 - 34.5);
        assert_eq!(rect.top, 150.0 - 47.0);
        assert_eq!(rect.right - rect.left, 69.0);
        assert_eq!(rect.bottom - rect.top, 94.0);
    }

    #[test]
    fn test_pile_steps_diagonally() {
        let s = stack(Arrangement::Pile, Perspective::SouthEast);
        let a = card_position(&s, 10, 0);
        let b = card_position(&s, 10, 4);
        assert_eq!(b.left - a.left, -4.0);
        assert_eq!(b.top - a.top, -4.0);
    }

    #[test]
    fn test_column_steps_vertically() {
        let s = stack(Arrangement::Column, Perspective::North);
        let a = card_position(&s, 5, 0);
        let b = card_position(&s, 5, 2);
        assert_eq!(b.top - a.top, 49.0);
        assert_eq!(b.left, a.left);
    }

    #[test]
    fn test_hand_is_centred_for_odd_counts() {
        let s = stack(Arrangement::Hand, Perspective::South);
        let mid = card_position(&s, 5, 2);
        assert_eq!(mid.center_x, 200.0);
        assert_eq!(mid.center_y, 150.0);
    }

    #[test]
    fn test_hand_fractional_centering_for_even_counts() {
        let s = stack(Arrangement::Hand, Perspective::South);
        let first = card_position(&s, 4, 0);
        let last = card_position(&s, 4, 3);
        assert_eq!(first.center_x, 200.0 - 1.5 * 18.0);
        assert_eq!(last.center_x, 200.0 + 1.5 * 18.0);
    }

    #[test]
    fn test_bounds_inset() {
        let b = Bounds::of(Dimensions::new(800.0, 600.0)).inset(34.5, 47.0);
        assert_eq!(b.left, 34.5);
        assert_eq!(b.right, 765.5);
        assert_eq!(b.top, 47.0);
        assert_eq!(b.bottom, 553.0);
        assert!(b.contains(Point::new(400.0, 300.0)));
        assert!(!b.contains(Point::new(10.0, 300.0)));
    }
}
