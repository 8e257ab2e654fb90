//! Suit and rank identities and the sequence helpers that build them.
//!
//! The configured suit and rank sequences define each card's `suit_index` and
//! `rank_index`. Reordering a sequence (for example with [`aces_high`])
//! changes those indices and therefore every comparator built on them.

use serde::{Deserialize, Serialize};

/// A suit, identified by its symbol or name (`"♠"`, `"hearts"`, `"RJ"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suit(pub String);

impl Suit {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Suit {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A rank: either a number (`2`..`10`, or `14` for a high ace) or a name
/// (`"A"`, `"J"`, `"Q"`, `"K"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rank {
    Number(u8),
    Named(String),
}

impl Rank {
    #[must_use]
    pub fn number(&self) -> Option<u8> {
        match self {
            Rank::Number(n) => Some(*n),
            Rank::Named(_) => None,
        }
    }
}

impl From<u8> for Rank {
    fn from(n: u8) -> Self {
        Rank::Number(n)
    }
}

impl From<&str> for Rank {
    fn from(name: &str) -> Self {
        Rank::Named(name.to_string())
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Number(n) => write!(f, "{}", n),
            Rank::Named(name) => f.write_str(name),
        }
    }
}

/// The four French suits: clubs, diamonds, hearts, spades.
#[must_use]
pub fn standard_suits() -> Vec<Suit> {
    ["♣", "♦", "♥", "♠"].into_iter().map(Suit::from).collect()
}

/// `A, 2, 3, ..., 10, J, Q, K`.
#[must_use]
pub fn standard_ranks() -> Vec<Rank> {
    let mut ranks = vec![Rank::from("A")];
    ranks.extend((2..=10).map(Rank::Number));
    ranks.extend(["J", "Q", "K"].into_iter().map(Rank::from));
    ranks
}

/// Red and black joker names.
#[must_use]
pub fn standard_jokers() -> Vec<Suit> {
    vec![Suit::from("RJ"), Suit::from("BJ")]
}

/// Numeric ranks `1..=count`.
#[must_use]
pub fn generate_ranks(count: u8) -> Vec<Rank> {
    (1..=count).map(Rank::Number).collect()
}

/// Suits named by index, `"0"..count`.
#[must_use]
pub fn generate_suits(count: usize) -> Vec<Suit> {
    (0..count).map(|i| Suit(i.to_string())).collect()
}

/// Move the lowest rank (the ace) to the top of the order.
///
/// A numeric ace is renumbered one above the highest remaining number
/// (`[1, 2, ..., 13]` becomes `[2, ..., 13, 14]`); a named ace keeps its name.
#[must_use]
pub fn aces_high(mut ranks: Vec<Rank>) -> Vec<Rank> {
    if ranks.is_empty() {
        return ranks;
    }

    let ace = ranks.remove(0);
    let highest = ranks.iter().map(Rank::number).collect::<Option<Vec<u8>>>();

    let ace = match (&ace, highest) {
        (Rank::Number(_), Some(numbers)) => {
            Rank::Number(numbers.into_iter().max().map_or(1, |max| max.saturating_add(1)))
        }
        _ => ace,
    };
    ranks.push(ace);
    ranks
}
