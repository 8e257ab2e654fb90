//! # card-table
//!
//! Layout and animation engine for playing cards on a 2D table.
//!
//! ## Design Principles
//!
//! 1. **Deterministic Layout**: Card positions are a pure function of the
//!    deck's anchor, arrangement, perspective and member index.
//!
//! 2. **Surface-Agnostic**: The engine never draws. It streams visual updates
//!    to a [`Surface`] and hands back a [`Transition`] that completes when the
//!    animation would have.
//!
//! 3. **Single Owner**: Every card belongs to at most one deck. All transfers
//!    go through [`Table`], which detaches before it attaches.
//!
//! ## Architecture
//!
//! - **Ids, not references**: Decks hold `CardId`s; the table owns the cards.
//!   Operations are addressed by `DeckId`/`CardId` and fail with
//!   [`TableError`] on unknown ids.
//!
//! - **Awaited dealing**: `Table::deal` awaits each per-card render before the
//!   next transfer. Everything else returns a `Transition` the caller may
//!   await or drop.
//!
//! - **Seeded shuffles**: A ChaCha8 RNG seeded from the configuration makes
//!   shuffles reproducible.
//!
//! ## Modules
//!
//! - `core`: Ids, errors, RNG, table and deck configuration
//! - `cards`: Suits, ranks, card state and sort comparators
//! - `layout`: Per-index card positions, perspectives, round layouts
//! - `label`: Deck label placement
//! - `deck`: Deck membership and event handlers
//! - `render`: Surface trait, headless surface, render options, transitions
//! - `table`: The table and every mutating operation

pub mod cards;
pub mod core;
pub mod deck;
pub mod label;
pub mod layout;
pub mod render;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    CardId, CardSet, Cardback, CardsConfig, DeckConfig, DeckId, GameType, RankFilter, RankOrder,
    Result, SuitOrder, TableError, TableRng,
};

pub use crate::cards::{
    aces_high, compare_by_rank, compare_by_rank_then_suit, compare_by_suit,
    compare_by_suit_then_rank, generate_ranks, generate_suits, shuffle, Card, Rank, SortBy, Suit,
};

pub use crate::layout::{
    card_position, round_layout, Arrangement, Bounds, CardRect, Dimensions, Perspective, Point,
    RoundLayout, Seat, Stack,
};

pub use crate::label::{Label, Sticky, Visibility};

pub use crate::deck::{CardEvent, Deck, EventKind, PointerEvent};

pub use crate::render::{
    HeadlessSurface, Origin, Primitive, RenderOptions, Surface, Transition, VisualUpdate,
};

pub use crate::table::{DeckDisplay, Table};
