//! Viewing direction of a deck.
//!
//! A deck is "seen from" one of eight compass directions, or from directly
//! above. Each perspective maps to a sign pair `(X, Y)` that decides which
//! way cards fan out and which end of a deck faces the viewer.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::TableError;

/// Sign pair derived from a perspective. Each component is -1, 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Directions {
    pub x: i8,
    pub y: i8,
}

impl Directions {
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// Compass direction a deck is viewed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Perspective {
    North,
    #[default]
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    Above,
}

impl Perspective {
    /// All perspectives, in declaration order.
    pub const ALL: [Perspective; 9] = [
        Perspective::North,
        Perspective::South,
        Perspective::East,
        Perspective::West,
        Perspective::NorthEast,
        Perspective::NorthWest,
        Perspective::SouthEast,
        Perspective::SouthWest,
        Perspective::Above,
    ];

    /// The sign pair for this perspective.
    #[must_use]
    pub const fn directions(self) -> Directions {
        match self {
            Perspective::SouthEast => Directions::new(-1, -1),
            Perspective::SouthWest => Directions::new(1, -1),
            Perspective::NorthEast => Directions::new(-1, 1),
            Perspective::NorthWest => Directions::new(1, 1),
            Perspective::South => Directions::new(0, -1),
            Perspective::North => Directions::new(0, 1),
            Perspective::East => Directions::new(-1, 0),
            Perspective::West => Directions::new(1, 0),
            Perspective::Above => Directions::new(0, 0),
        }
    }
}

impl FromStr for Perspective {
    type Err = TableError;

    /// Accepts camelCase, snake_case or kebab-case names, plus the aliases
    /// `bottom` (south), `top` (north), `left` (east) and `right` (west).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "north" | "top" => Ok(Perspective::North),
            "south" | "bottom" => Ok(Perspective::South),
            "east" | "left" => Ok(Perspective::East),
            "west" | "right" => Ok(Perspective::West),
            "northeast" => Ok(Perspective::NorthEast),
            "northwest" => Ok(Perspective::NorthWest),
            "southeast" => Ok(Perspective::SouthEast),
            "southwest" => Ok(Perspective::SouthWest),
            "above" => Ok(Perspective::Above),
            _ => Err(TableError::UnknownPerspective(s.to_string())),
        }
    }
}
