//! Card system: identities, card state and comparators.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: Card identity, ordered by the table configuration
//! - `Card`: Runtime card state (face, z-order, owning deck)
//! - `SortBy`: Named or custom comparator for deck sorting
//!
//! ## Utilities
//!
//! Sequence generators (`generate_ranks`, `generate_suits`), the
//! `aces_high` rank remapper and the four canonical comparators.

pub mod card;
pub mod compare;
pub mod identity;

pub use card::Card;
pub use compare::{
    compare_by_rank, compare_by_rank_then_suit, compare_by_suit, compare_by_suit_then_rank,
    CompareFn, SortBy,
};
pub use identity::{
    aces_high, generate_ranks, generate_suits, standard_jokers, standard_ranks, standard_suits,
    Rank, Suit,
};

use crate::core::TableRng;

/// Uniformly shuffle any sequence in place.
pub fn shuffle<T>(items: &mut [T], rng: &mut TableRng) {
    rng.shuffle(items);
}
