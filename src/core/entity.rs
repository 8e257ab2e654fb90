//! Identifiers for cards and decks.
//!
//! Every card created by a [`Table`](crate::table::Table) gets a `CardId`
//! equal to its creation index, and every registered deck gets a `DeckId`
//! in registration order. Ids are plain copyable handles: the table owns the
//! data they point at.
//!
//! ## Usage
//!
//! ```
//! use card_table::core::{CardId, DeckId};
//!
//! let card = CardId(7);
//! assert_eq!(card.index(), 7);
//! assert_eq!(format!("{}", DeckId(2)), "Deck(2)");
//! ```

use serde::{Deserialize, Serialize};

/// Handle to a card owned by a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of the card in the table's creation order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Handle to a deck registered on a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DeckId(pub u32);

impl DeckId {
    /// Create a deck ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of the deck in the table's registration order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Deck({})", self.0)
    }
}
