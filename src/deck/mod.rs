//! Decks: ordered card containers with a layout, a label and event handlers.
//!
//! ## Key Types
//!
//! - `Deck`: A positioned container of cards on the table
//! - `Members`: Bottom-to-top order of the deck's card ids
//! - `EventTable`: Per-kind pointer handlers, registered through the table
//!
//! Decks hold card ids only. The cards themselves live on the
//! [`Table`](crate::table::Table), which keeps every card in at most one
//! deck and re-renders decks after their membership changes.

pub mod events;
pub mod members;

pub use events::{CardEvent, EventKind, EventTable, Handler, PointerEvent};
pub use members::Members;

use crate::core::{CardId, DeckConfig, DeckId};
use crate::label::{Label, Sticky};
use crate::layout::{
    card_position, Arrangement, CardRect, Dimensions, Padding, PaddingSteps, Perspective, Point,
    Stack,
};

/// A container of cards laid out around an anchor point.
#[derive(Debug)]
pub struct Deck {
    id: DeckId,
    pub(crate) members: Members,
    anchor: Point,
    arrangement: Arrangement,
    perspective: Perspective,
    padding: Padding,
    face_up: bool,
    /// Highest z-order assigned by the last render.
    pub(crate) z_counter: u32,
    pub(crate) label: Label,
    pub(crate) events: EventTable,
}

impl Deck {
    /// Build a deck from `config`, anchored at `center` when the config
    /// leaves a coordinate unset.
    pub(crate) fn new(id: DeckId, config: &DeckConfig, center: Point, steps: &PaddingSteps) -> Self {
        let anchor = Point::new(config.x.unwrap_or(center.x), config.y.unwrap_or(center.y));
        Self {
            id,
            members: Members::new(),
            anchor,
            arrangement: config.arrangement,
            perspective: config.perspective,
            padding: config
                .arrangement
                .padding(config.perspective.directions(), steps),
            face_up: config.face_up,
            z_counter: 0,
            label: Label::new(config.label.clone(), config.sticky.unwrap_or(Sticky::Auto), anchor),
            events: EventTable::new(),
        }
    }

    pub fn id(&self) -> DeckId {
        self.id
    }

    /// Cards bottom to top.
    pub fn cards(&self) -> &[CardId] {
        self.members.as_slice()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.members.contains(card)
    }

    pub fn top_card(&self) -> Option<CardId> {
        self.members.top()
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    pub fn perspective(&self) -> Perspective {
        self.perspective
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn face_up(&self) -> bool {
        self.face_up
    }

    pub fn z_counter(&self) -> u32 {
        self.z_counter
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Layout inputs for cards of `card_size`.
    pub fn stack(&self, card_size: Dimensions) -> Stack {
        Stack {
            anchor: self.anchor,
            arrangement: self.arrangement,
            padding: self.padding,
            card_size,
        }
    }

    /// Where member `index` belongs with the current membership.
    pub fn card_position(&self, index: usize, card_size: Dimensions) -> CardRect {
        card_position(&self.stack(card_size), self.len(), index)
    }

    pub(crate) fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    pub(crate) fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Change perspective and recompute padding.
    pub(crate) fn set_perspective(&mut self, perspective: Perspective, steps: &PaddingSteps) {
        self.perspective = perspective;
        self.padding = self.arrangement.padding(perspective.directions(), steps);
    }
}
