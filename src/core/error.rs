//! Error type shared by every table operation.

use thiserror::Error;

use super::entity::{CardId, DeckId};

/// Errors raised by table construction and deck operations.
///
/// Empty decks are never an error: rendering, sorting, shuffling or dealing
/// from an empty deck completes immediately.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    /// The surface has no host element for the configured selector.
    #[error("no element found with selector \"{selector}\"")]
    SurfaceNotFound { selector: String },

    /// A sort comparator name that is not one of the canonical four.
    #[error("invalid sort comparator \"{0}\"")]
    InvalidComparator(String),

    /// The deck id was never registered on this table.
    #[error("unknown deck {0}")]
    UnknownDeck(DeckId),

    /// The card id does not belong to this table.
    #[error("unknown card {0}")]
    UnknownCard(CardId),

    /// `deal` was called with no target decks.
    #[error("deal requires at least one target deck")]
    NoDealTargets,

    #[error("unknown perspective \"{0}\"")]
    UnknownPerspective(String),

    #[error("unknown arrangement \"{0}\"")]
    UnknownArrangement(String),

    #[error("unknown label side \"{0}\"")]
    UnknownSticky(String),

    #[error("unknown event \"{0}\"")]
    UnknownEvent(String),
}

/// Result alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
