//! Ordered membership of a deck.
//!
//! `Members` holds the card ids of one deck in stack order:
//! - index 0 is the bottom of a pile (the leftmost card of a hand)
//! - the last index is the top of a pile (the rightmost card of a hand)
//!
//! Only sorting and shuffling change the relative order of members; adding
//! always appends and removing closes the gap.

use std::cmp::Ordering;

use crate::core::{CardId, TableRng};

/// Card ids of a deck, bottom to top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Members {
    order: Vec<CardId>,
}

impl Members {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: CardId) {
        self.order.push(card);
    }

    /// Remove the first occurrence of `card`.
    ///
    /// Returns `true` if the card was found.
    pub fn remove(&mut self, card: CardId) -> bool {
        match self.order.iter().position(|&c| c == card) {
            Some(index) => {
                self.order.remove(index);
                true
            }
            None => false,
        }
    }

    /// Top card (last in the vec).
    #[must_use]
    pub fn top(&self) -> Option<CardId> {
        self.order.last().copied()
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.order.contains(&card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CardId] {
        &self.order
    }

    /// Uniformly permute the members.
    pub fn shuffle(&mut self, rng: &mut TableRng) {
        rng.shuffle(&mut self.order);
    }

    /// Stable sort by `compare`.
    pub fn sort_by(&mut self, compare: impl FnMut(&CardId, &CardId) -> Ordering) {
        self.order.sort_by(compare);
    }
}
