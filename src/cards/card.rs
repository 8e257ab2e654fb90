//! Card state: identity, orientation, stacking and placement.
//!
//! A `Card` is created once when the table is built and lives for the whole
//! session. Only the table mutates it; callers read it through
//! [`Table::card`](crate::table::Table::card).

use serde::{Deserialize, Serialize};

use super::identity::{Rank, Suit};
use crate::core::{CardId, DeckId};
use crate::layout::Point;

/// A playing card on the table.
///
/// ## Identity
///
/// `suit_index` and `rank_index` are positions in the table's configured
/// suit and rank sequences. Jokers sit after the regular suits and after
/// every regular rank.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    suit: Suit,
    rank: Rank,
    suit_index: usize,
    rank_index: usize,
    joker: bool,

    /// Current face orientation.
    pub(crate) face_up: bool,
    /// Stacking order on the surface.
    pub(crate) z_order: u32,
    /// Owning deck, if any.
    pub(crate) container: Option<DeckId>,
    /// Last top-left position written to the surface.
    pub(crate) rendered: Option<Point>,
    /// Last rotation written to the surface, degrees.
    pub(crate) rotation: f64,
}

impl Card {
    /// Create a regular suit/rank card.
    #[must_use]
    pub fn new(id: CardId, suit: Suit, rank: Rank, suit_index: usize, rank_index: usize) -> Self {
        Self {
            id,
            suit,
            rank,
            suit_index,
            rank_index,
            joker: false,
            face_up: false,
            z_order: 1,
            container: None,
            rendered: None,
            rotation: 0.0,
        }
    }

    /// Create a joker. Its "suit" is the joker name and its rank is `0`.
    #[must_use]
    pub fn joker(id: CardId, name: Suit, suit_index: usize, rank_index: usize) -> Self {
        Self {
            joker: true,
            ..Self::new(id, name, Rank::Number(0), suit_index, rank_index)
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn suit(&self) -> &Suit {
        &self.suit
    }

    #[must_use]
    pub fn rank(&self) -> &Rank {
        &self.rank
    }

    #[must_use]
    pub fn suit_index(&self) -> usize {
        self.suit_index
    }

    #[must_use]
    pub fn rank_index(&self) -> usize {
        self.rank_index
    }

    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.joker
    }

    #[must_use]
    pub fn face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub fn z_order(&self) -> u32 {
        self.z_order
    }

    /// The deck currently holding this card.
    #[must_use]
    pub fn container(&self) -> Option<DeckId> {
        self.container
    }

    /// Top-left corner last sent to the surface.
    #[must_use]
    pub fn rendered_position(&self) -> Option<Point> {
        self.rendered
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Suit followed by rank, e.g. `"♥10"`.
    #[must_use]
    pub fn short_name(&self) -> String {
        format!("{}{}", self.suit, self.rank)
    }

    /// Upper-cased suit followed by rank, e.g. `"HEARTSQ"`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}{}", self.suit.as_str().to_uppercase(), self.rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}
