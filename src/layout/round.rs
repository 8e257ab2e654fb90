//! Circular and elliptical seating of several items.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::position::Point;

/// Options for [`round_layout`].
///
/// ```
/// use card_table::layout::{round_layout, RoundLayout};
///
/// let seats = round_layout(["n", "e", "s", "w"], &RoundLayout::new().radius(100.0));
/// assert_eq!(seats.len(), 4);
/// assert!((seats[1].position.y - 100.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundLayout {
    /// Centre of the ellipse.
    pub center: Point,
    /// Horizontal radius.
    pub a: f64,
    /// Vertical radius.
    pub b: f64,
    /// Angle of the first item, radians.
    pub initial_angle: f64,
    /// End of the arc, radians.
    pub final_angle: f64,
    /// Fraction of the arc to use.
    pub percent: f64,
    /// Item placed first in the output.
    pub skip_index: Option<usize>,
}

impl Default for RoundLayout {
    fn default() -> Self {
        Self {
            center: Point::default(),
            a: 1.0,
            b: 1.0,
            initial_angle: 0.0,
            final_angle: TAU,
            percent: 1.0,
            skip_index: None,
        }
    }
}

impl RoundLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn center(mut self, x: f64, y: f64) -> Self {
        self.center = Point::new(x, y);
        self
    }

    /// Circle of radius `r`.
    #[must_use]
    pub fn radius(mut self, r: f64) -> Self {
        self.a = r;
        self.b = r;
        self
    }

    /// Ellipse with radii `a` (horizontal) and `b` (vertical).
    #[must_use]
    pub fn ellipse(mut self, a: f64, b: f64) -> Self {
        self.a = a;
        self.b = b;
        self
    }

    #[must_use]
    pub fn arc(mut self, initial_angle: f64, final_angle: f64) -> Self {
        self.initial_angle = initial_angle;
        self.final_angle = final_angle;
        self
    }

    #[must_use]
    pub fn percent(mut self, percent: f64) -> Self {
        self.percent = percent;
        self
    }

    #[must_use]
    pub fn skip_index(mut self, index: usize) -> Self {
        self.skip_index = Some(index);
        self
    }
}

/// One placed item.
#[derive(Clone, Debug, PartialEq)]
pub struct Seat<T> {
    pub item: T,
    pub position: Point,
    /// Angle in radians.
    pub angle: f64,
}

/// Spread `items` evenly along the configured arc.
///
/// The angle step is `(final - initial) / n * percent`. The item at
/// `skip_index`, if any, is moved to the front of the result; all others
/// keep their input order.
pub fn round_layout<T, I>(items: I, opts: &RoundLayout) -> Vec<Seat<T>>
where
    I: IntoIterator<Item = T>,
{
    let items: Vec<T> = items.into_iter().collect();
    if items.is_empty() {
        return Vec::new();
    }

    let step = (opts.final_angle - opts.initial_angle) / items.len() as f64 * opts.percent;
    let mut seats = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let angle = opts.initial_angle + index as f64 * step;
        let seat = Seat {
            item,
            position: Point::new(
                opts.center.x + opts.a * angle.cos(),
                opts.center.y + opts.b * angle.sin(),
            ),
            angle,
        };
        if opts.skip_index == Some(index) {
            seats.insert(0, seat);
        } else {
            seats.push(seat);
        }
    }

    seats
}
