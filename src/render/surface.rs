//! The visual collaborator and an in-memory implementation of it.
//!
//! The engine never draws anything itself. It tells a [`Surface`] to create
//! primitives for cards and labels and then streams [`VisualUpdate`]s at
//! them. A browser, a GPU renderer or a terminal UI can all sit behind this
//! trait; [`HeadlessSurface`] just remembers what it was told.

use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Cardback, CardId, DeckId};
use crate::layout::{Dimensions, Point};

/// A visual primitive owned by the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Card(CardId),
    Label(DeckId),
}

/// Rotation pivot, relative to the primitive's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Origin {
    #[default]
    Center,
    At(Point),
}

/// A property change sent to a primitive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum VisualUpdate {
    /// Move the top-left corner, animating over `transition`.
    Position { left: f64, top: f64, transition: Duration },
    /// Show the face or the back once `delay` has passed.
    Face { face_up: bool, cardback: Cardback, delay: Duration },
    ZOrder(u32),
    Rotation { degrees: f64, origin: Origin, transition: Duration },
    Visible(bool),
    Text(String),
}

/// Rendering substrate the table drives.
pub trait Surface {
    /// Attach to the host element named by `selector`. Returns `false` when
    /// no such element exists.
    fn bind(&mut self, selector: &str) -> bool;

    /// Create the primitive for a card, face down.
    fn create_card(&mut self, card: &Card, size: Dimensions, cardback: Cardback);

    /// Create the primitive for a deck label, hidden.
    fn create_label(&mut self, deck: DeckId, text: &str);

    /// Apply a property change to a primitive.
    fn apply(&mut self, target: Primitive, update: VisualUpdate);

    /// Current size of the host element.
    fn measure(&self) -> Dimensions;

    /// Rendered size of a label showing `text`.
    fn measure_label(&self, text: &str) -> Dimensions;
}

/// Last known state of one primitive on a [`HeadlessSurface`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrimitiveState {
    pub position: Option<Point>,
    pub transition: Duration,
    pub face_up: bool,
    pub face_delay: Duration,
    pub cardback: Cardback,
    pub z_order: u32,
    pub rotation: f64,
    pub visible: bool,
    pub text: String,
}

/// Surface that keeps primitives in memory.
///
/// Only the latest state of each primitive is kept unless the update log is
/// switched on with [`HeadlessSurface::with_log`].
#[derive(Clone, Debug)]
pub struct HeadlessSurface {
    size: Dimensions,
    selectors: Option<Vec<String>>,
    bound: Option<String>,
    primitives: FxHashMap<Primitive, PrimitiveState>,
    log: Option<Vec<(Primitive, VisualUpdate)>>,
}

impl HeadlessSurface {
    /// A surface of the given size that binds to any selector.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Dimensions::new(width, height),
            selectors: None,
            bound: None,
            primitives: FxHashMap::default(),
            log: None,
        }
    }

    /// Record every applied update, oldest first.
    #[must_use]
    pub fn with_log(mut self) -> Self {
        self.log = Some(Vec::new());
        self
    }

    /// Only the listed selectors exist.
    #[must_use]
    pub fn with_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selectors = Some(selectors.into_iter().map(Into::into).collect());
        self
    }

    /// Change the size reported by `measure`.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = Dimensions::new(width, height);
    }

    /// Selector bound by the table, if any.
    #[must_use]
    pub fn bound_selector(&self) -> Option<&str> {
        self.bound.as_deref()
    }

    #[must_use]
    pub fn state(&self, primitive: Primitive) -> Option<&PrimitiveState> {
        self.primitives.get(&primitive)
    }

    /// Every update applied since the log was last cleared. Empty unless
    /// built `with_log`.
    #[must_use]
    pub fn log(&self) -> &[(Primitive, VisualUpdate)] {
        self.log.as_deref().unwrap_or(&[])
    }

    pub fn clear_log(&mut self) {
        if let Some(log) = &mut self.log {
            log.clear();
        }
    }
}

impl Surface for HeadlessSurface {
    fn bind(&mut self, selector: &str) -> bool {
        let found = self
            .selectors
            .as_ref()
            .map_or(true, |known| known.iter().any(|s| s == selector));
        if found {
            self.bound = Some(selector.to_string());
        }
        found
    }

    fn create_card(&mut self, card: &Card, _size: Dimensions, cardback: Cardback) {
        let state = PrimitiveState {
            cardback,
            z_order: card.z_order(),
            visible: true,
            ..PrimitiveState::default()
        };
        self.primitives.insert(Primitive::Card(card.id()), state);
    }

    fn create_label(&mut self, deck: DeckId, text: &str) {
        let state = PrimitiveState {
            text: text.to_string(),
            ..PrimitiveState::default()
        };
        self.primitives.insert(Primitive::Label(deck), state);
    }

    fn apply(&mut self, target: Primitive, update: VisualUpdate) {
        let state = self.primitives.entry(target).or_default();
        match &update {
            VisualUpdate::Position {
                left,
                top,
                transition,
            } => {
                state.position = Some(Point::new(*left, *top));
                state.transition = *transition;
            }
            VisualUpdate::Face {
                face_up,
                cardback,
                delay,
            } => {
                state.face_up = *face_up;
                state.cardback = *cardback;
                state.face_delay = *delay;
            }
            VisualUpdate::ZOrder(z) => state.z_order = *z,
            VisualUpdate::Rotation { degrees, transition, .. } => {
                state.rotation = *degrees;
                state.transition = *transition;
            }
            VisualUpdate::Visible(visible) => state.visible = *visible,
            VisualUpdate::Text(text) => state.text.clone_from(text),
        }
        if let Some(log) = &mut self.log {
            log.push((target, update));
        }
    }

    fn measure(&self) -> Dimensions {
        self.size
    }

    /// 14px text at roughly 8px per glyph, plus 4px padding all round.
    fn measure_label(&self, text: &str) -> Dimensions {
        Dimensions::new(text.chars().count() as f64 * 8.0 + 8.0, 22.0)
    }
}
