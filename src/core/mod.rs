//! Core table types: entity ids, errors, RNG and configuration.
//!
//! Everything here is independent of the surface that draws the table.
//! Layout, labels and rendering build on these types.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;

pub use config::{
    CardSet, Cardback, CardsConfig, DeckConfig, GameType, RankFilter, RankOrder, SuitOrder,
};
pub use entity::{CardId, DeckId};
pub use error::{Result, TableError};
pub use rng::TableRng;
