//! Deck labels: a text annotation anchored to one side of a deck.
//!
//! ## Key Types
//!
//! - `Sticky`: Which side the label sticks to (`Auto` infers it)
//! - `Visibility`: When the label is shown
//! - `Label`: Text, placement policy and last computed position
//!
//! The render pipeline calls [`Label::arrange`] after positioning the deck's
//! cards; the label follows the deck's first, middle and last members.

pub mod placement;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::TableError;
use crate::layout::{Bounds, Dimensions, Directions, Point};

pub use placement::{place, suggest_side, Samples};

/// A concrete side of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

/// Anchor side policy of a label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sticky {
    Top,
    Bottom,
    Left,
    Right,
    Center,
    /// Pick the side from the deck's position in the playable area.
    #[default]
    Auto,
}

impl Sticky {
    /// The fixed side, or `None` for `Auto`.
    #[must_use]
    pub fn side(self) -> Option<Side> {
        match self {
            Sticky::Top => Some(Side::Top),
            Sticky::Bottom => Some(Side::Bottom),
            Sticky::Left => Some(Side::Left),
            Sticky::Right => Some(Side::Right),
            Sticky::Center => Some(Side::Center),
            Sticky::Auto => None,
        }
    }
}

impl FromStr for Sticky {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Sticky::Top),
            "bottom" => Ok(Sticky::Bottom),
            "left" => Ok(Sticky::Left),
            "right" => Ok(Sticky::Right),
            "center" | "centre" => Ok(Sticky::Center),
            "auto" => Ok(Sticky::Auto),
            _ => Err(TableError::UnknownSticky(s.to_string())),
        }
    }
}

/// When a label is shown.
#[derive(Clone, Copy, Debug, Default)]
pub enum Visibility {
    /// Deck has cards and the text is non-empty.
    #[default]
    Occupied,
    Always,
    Never,
    /// Predicate over member count and text.
    Custom(fn(usize, &str) -> bool),
}

impl Visibility {
    #[must_use]
    pub fn holds(&self, member_count: usize, text: &str) -> bool {
        match self {
            Visibility::Occupied => member_count > 0 && !text.is_empty(),
            Visibility::Always => true,
            Visibility::Never => false,
            Visibility::Custom(f) => f(member_count, text),
        }
    }
}

/// Inputs for one label layout pass.
#[derive(Clone, Copy, Debug)]
pub struct LabelFrame {
    pub member_count: usize,
    /// `None` when the deck is empty.
    pub samples: Option<Samples>,
    pub directions: Directions,
    /// Measured label size.
    pub size: Dimensions,
    pub anchor: Point,
    pub playable_area: Bounds,
}

/// A deck's label.
#[derive(Clone, Debug)]
pub struct Label {
    text: String,
    sticky: Sticky,
    visibility: Visibility,
    padding: Dimensions,
    position: Point,
    shown: bool,
}

impl Label {
    /// Create a label positioned on `anchor` until its first layout.
    #[must_use]
    pub fn new(text: impl Into<String>, sticky: Sticky, anchor: Point) -> Self {
        Self {
            text: text.into(),
            sticky,
            visibility: Visibility::default(),
            padding: Dimensions::new(10.0, 10.0),
            position: anchor,
            shown: false,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn sticky(&self) -> Sticky {
        self.sticky
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Top-left corner from the last layout pass.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether the last layout pass showed the label.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Returns `true` when the text actually changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.text = text;
        true
    }

    pub fn set_sticky(&mut self, sticky: Sticky) {
        self.sticky = sticky;
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Gap between the label and the cards it sticks to.
    #[must_use]
    pub fn padding(&self) -> Dimensions {
        self.padding
    }

    pub(crate) fn set_padding(&mut self, padding: Dimensions) {
        self.padding = padding;
    }

    /// Lay the label out against `frame`.
    ///
    /// Returns the new top-left corner, or `None` when the label is hidden.
    /// With `Sticky::Auto` and no suggested side the label stays where it
    /// was.
    pub fn arrange(&mut self, frame: &LabelFrame) -> Option<Point> {
        self.shown = self.visibility.holds(frame.member_count, &self.text);
        if !self.shown {
            return None;
        }

        let side = self
            .sticky
            .side()
            .or_else(|| suggest_side(frame.anchor, &frame.playable_area));

        if let (Some(side), Some(samples)) = (side, frame.samples.as_ref()) {
            self.position = place(
                side,
                samples,
                frame.directions,
                frame.size,
                self.padding,
                frame.anchor,
            );
        } else if side == Some(Side::Center) {
            self.position = Point::new(
                frame.anchor.x - frame.size.width / 2.0,
                frame.anchor.y - frame.size.height / 2.0,
            );
        }

        Some(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{card_position, Arrangement, PaddingSteps, Perspective, Stack};

    fn frame(anchor: Point, len: usize) -> LabelFrame {
        let stack = Stack {
            anchor,
            arrangement: Arrangement::Pile,
            padding: Arrangement::Pile.padding(Perspective::South.directions(), &PaddingSteps::default()),
            card_size: Dimensions::new(69.0, 94.0),
        };
        let samples = (len > 0).then(|| Samples {
            first: card_position(&stack, len, 0),
            middle: card_position(&stack, len, len / 2),
            last: card_position(&stack, len, len - 1),
        });
        LabelFrame {
            member_count: len,
            samples,
            directions: Perspective::South.directions(),
            size: Dimensions::new(40.0, 20.0),
            anchor,
            playable_area: Bounds {
                top: 47.0,
                left: 34.5,
                bottom: 553.0,
                right: 765.5,
            },
        }
    }

    #[test]
    fn test_hidden_when_empty_or_blank() {
        let mut label = Label::new("Stock", Sticky::Bottom, Point::new(400.0, 300.0));
        assert_eq!(label.arrange(&frame(Point::new(400.0, 300.0), 0)), None);
        assert!(!label.is_shown());

        let mut blank = Label::new("", Sticky::Bottom, Point::new(400.0, 300.0));
        assert_eq!(blank.arrange(&frame(Point::new(400.0, 300.0), 3)), None);
    }

    #[test]
    fn test_visibility_overrides() {
        let mut label = Label::new("", Sticky::Center, Point::new(400.0, 300.0));
        label.set_visibility(Visibility::Always);
        assert_eq!(label.arrange(&frame(Point::new(400.0, 300.0), 0)), Some(Point::new(380.0, 290.0)));

        label.set_visibility(Visibility::Never);
        assert_eq!(label.arrange(&frame(Point::new(400.0, 300.0), 3)), None);

        label.set_visibility(Visibility::Custom(|count, _| count >= 2));
        assert!(label.arrange(&frame(Point::new(400.0, 300.0), 2)).is_some());
    }

    #[test]
    fn test_auto_on_the_right_edge_goes_left() {
        let anchor = Point::new(780.0, 300.0);
        let mut label = Label::new("East", Sticky::Auto, anchor);
        let pos = label.arrange(&frame(anchor, 1)).unwrap();
        assert_eq!(pos.x, 780.0 - 34.5 - 50.0);
    }

    #[test]
    fn test_auto_in_the_middle_keeps_previous_position() {
        let anchor = Point::new(400.0, 300.0);
        let mut label = Label::new("Pile", Sticky::Auto, anchor);
        assert_eq!(label.arrange(&frame(anchor, 2)), Some(anchor));
    }

    #[test]
    fn test_set_text_reports_change() {
        let mut label = Label::new("a", Sticky::Top, Point::default());
        assert!(!label.set_text("a"));
        assert!(label.set_text("b"));
        assert_eq!(label.text(), "b");
    }

    #[test]
    fn test_parse_sticky() {
        assert_eq!("bottom".parse::<Sticky>(), Ok(Sticky::Bottom));
        assert_eq!("auto".parse::<Sticky>(), Ok(Sticky::Auto));
        assert!("diagonal".parse::<Sticky>().is_err());
        assert_eq!(Sticky::Auto.side(), None);
        assert_eq!(Sticky::Left.side(), Some(Side::Left));
    }
}
