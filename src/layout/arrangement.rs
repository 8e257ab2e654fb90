//! Arrangement types and their per-card padding policy.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::perspective::Directions;
use crate::core::TableError;

/// How the members of a deck are laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Arrangement {
    /// Stacked heap: each card steps diagonally by a small offset.
    #[default]
    Pile,
    /// Fan centred on the anchor.
    Hand,
    /// Vertical stack with a fixed step.
    Column,
}

impl FromStr for Arrangement {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pile" => Ok(Arrangement::Pile),
            "hand" => Ok(Arrangement::Hand),
            "column" => Ok(Arrangement::Column),
            _ => Err(TableError::UnknownArrangement(s.to_string())),
        }
    }
}

/// Per-card pixel delta between consecutive members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub horizontal: f64,
    pub vertical: f64,
}

/// Step sizes the padding policy scales by the perspective signs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaddingSteps {
    pub pile: f64,
    pub column: f64,
    pub hand: f64,
}

impl Default for PaddingSteps {
    fn default() -> Self {
        Self {
            pile: 1.0,
            column: 24.5,
            hand: 18.0,
        }
    }
}

impl Arrangement {
    /// Padding for this arrangement seen from `dirs`.
    ///
    /// Columns fall back to the negated X sign when Y is zero, hands to the
    /// negated Y sign when X is zero, so east/west/north/south views still
    /// spread their cards.
    #[must_use]
    pub fn padding(self, dirs: Directions, steps: &PaddingSteps) -> Padding {
        let x = f64::from(dirs.x);
        let y = f64::from(dirs.y);
        match self {
            Arrangement::Pile => Padding {
                horizontal: steps.pile * x,
                vertical: steps.pile * y,
            },
            Arrangement::Column => Padding {
                horizontal: 0.0,
                vertical: steps.column * if dirs.y != 0 { y } else { -x },
            },
            Arrangement::Hand => Padding {
                horizontal: steps.hand * if dirs.x != 0 { x } else { -y },
                vertical: 0.0,
            },
        }
    }
}
