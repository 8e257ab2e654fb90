//! Table and deck configuration.
//!
//! Callers configure the engine at startup by providing:
//! - `CardsConfig`: which cards exist, card size, animation speed, RNG seed
//! - `DeckConfig`: where a deck sits and how it lays out its cards
//!
//! A `GameType` preset rewrites the rank filter, rank order, copy count and
//! joker flag of a `CardsConfig` for common game variants.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::{
    aces_high, standard_jokers, standard_ranks, standard_suits, Card, Rank, Suit,
};
use crate::core::CardId;
use crate::label::Sticky;
use crate::layout::{Arrangement, PaddingSteps, Perspective};

/// Which ranks of the configured sequence are kept.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankFilter {
    #[default]
    All,
    /// Keep ranks whose index lies in `from..=to`.
    Indices { from: usize, to: usize },
    /// Keep ranks for which the predicate holds, given rank and index.
    #[serde(skip)]
    Custom(fn(&Rank, usize) -> bool),
}

impl RankFilter {
    #[must_use]
    pub fn keeps(&self, rank: &Rank, index: usize) -> bool {
        match self {
            RankFilter::All => true,
            RankFilter::Indices { from, to } => (*from..=*to).contains(&index),
            RankFilter::Custom(f) => f(rank, index),
        }
    }
}

/// Reordering applied to the rank sequence after filtering.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankOrder {
    #[default]
    Natural,
    AcesHigh,
    Reversed,
    #[serde(skip)]
    Custom(fn(Vec<Rank>) -> Vec<Rank>),
}

impl RankOrder {
    #[must_use]
    pub fn apply(&self, mut ranks: Vec<Rank>) -> Vec<Rank> {
        match self {
            RankOrder::Natural => ranks,
            RankOrder::AcesHigh => aces_high(ranks),
            RankOrder::Reversed => {
                ranks.reverse();
                ranks
            }
            RankOrder::Custom(f) => f(ranks),
        }
    }
}

/// Reordering applied to the suit sequence.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuitOrder {
    #[default]
    Natural,
    Reversed,
    #[serde(skip)]
    Custom(fn(Vec<Suit>) -> Vec<Suit>),
}

impl SuitOrder {
    #[must_use]
    pub fn apply(&self, mut suits: Vec<Suit>) -> Vec<Suit> {
        match self {
            SuitOrder::Natural => suits,
            SuitOrder::Reversed => {
                suits.reverse();
                suits
            }
            SuitOrder::Custom(f) => f(suits),
        }
    }
}

/// Which card back the surface draws for face-down cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cardback {
    #[default]
    Red,
    Blue,
}

/// Preset card sets for common games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameType {
    /// Use the configuration as given.
    #[default]
    Standard,
    /// 9 through ace, aces high.
    Euchre,
    /// Two copies of every card.
    Pinochle,
    /// Ace through ten.
    Numbers,
    /// Ten through king, plus jokers.
    Figures,
}

impl GameType {
    /// Rewrite the relevant fields of `config` for this preset.
    pub fn apply(self, config: &mut CardsConfig) {
        match self {
            GameType::Standard => {}
            GameType::Euchre => {
                config.filter = RankFilter::Custom(|_, index| index == 0 || (8..=12).contains(&index));
                config.ranks_order = RankOrder::AcesHigh;
            }
            GameType::Pinochle => {
                config.copies = 2;
            }
            GameType::Numbers => {
                config.filter = RankFilter::Indices { from: 0, to: 9 };
            }
            GameType::Figures => {
                config.filter = RankFilter::Indices { from: 9, to: 12 };
                config.with_jokers = true;
            }
        }
    }
}

/// Configuration for the card set and the table that holds it.
///
/// ```
/// use card_table::core::{CardsConfig, GameType};
///
/// let config = CardsConfig::new().with_game(GameType::Pinochle).with_seed(7);
/// let set = config.resolve();
/// assert_eq!(set.card_count(), 104);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CardsConfig {
    /// Suit sequence before reordering.
    pub suits: Vec<Suit>,
    /// Rank sequence before filtering and reordering.
    pub ranks: Vec<Rank>,
    /// Joker names, created only when `with_jokers` is set.
    pub jokers: Vec<Suit>,
    pub with_jokers: bool,
    pub suits_order: SuitOrder,
    pub ranks_order: RankOrder,
    pub filter: RankFilter,
    /// Number of full suit × rank sets.
    pub copies: usize,
    pub cardback: Cardback,
    pub card_width: f64,
    pub card_height: f64,
    /// Default render duration in milliseconds.
    pub animation_speed_ms: u64,
    /// Host element the surface binds to.
    pub selector: String,
    pub padding: PaddingSteps,
    /// Shuffle seed. `None` draws one from entropy.
    pub seed: Option<u64>,
    pub game: GameType,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            suits: standard_suits(),
            ranks: standard_ranks(),
            jokers: standard_jokers(),
            with_jokers: false,
            suits_order: SuitOrder::Natural,
            ranks_order: RankOrder::Natural,
            filter: RankFilter::All,
            copies: 1,
            cardback: Cardback::Red,
            card_width: 69.0,
            card_height: 94.0,
            animation_speed_ms: 500,
            selector: "card-table".to_string(),
            padding: PaddingSteps::default(),
            seed: None,
            game: GameType::Standard,
        }
    }
}

impl CardsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_suits(mut self, suits: Vec<Suit>) -> Self {
        self.suits = suits;
        self
    }

    #[must_use]
    pub fn with_ranks(mut self, ranks: Vec<Rank>) -> Self {
        self.ranks = ranks;
        self
    }

    /// Include one card per joker name.
    #[must_use]
    pub fn with_jokers(mut self, jokers: bool) -> Self {
        self.with_jokers = jokers;
        self
    }

    #[must_use]
    pub fn with_joker_names(mut self, names: Vec<Suit>) -> Self {
        self.jokers = names;
        self
    }

    #[must_use]
    pub fn with_suits_order(mut self, order: SuitOrder) -> Self {
        self.suits_order = order;
        self
    }

    #[must_use]
    pub fn with_ranks_order(mut self, order: RankOrder) -> Self {
        self.ranks_order = order;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: RankFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn with_copies(mut self, copies: usize) -> Self {
        self.copies = copies;
        self
    }

    #[must_use]
    pub fn with_cardback(mut self, cardback: Cardback) -> Self {
        self.cardback = cardback;
        self
    }

    #[must_use]
    pub fn with_card_size(mut self, width: f64, height: f64) -> Self {
        self.card_width = width;
        self.card_height = height;
        self
    }

    #[must_use]
    pub fn with_animation_speed(mut self, speed: Duration) -> Self {
        self.animation_speed_ms = u64::try_from(speed.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PaddingSteps) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_game(mut self, game: GameType) -> Self {
        self.game = game;
        self
    }

    #[must_use]
    pub fn animation_speed(&self) -> Duration {
        Duration::from_millis(self.animation_speed_ms)
    }

    /// Apply the game preset, filter and orderings.
    #[must_use]
    pub fn resolve(&self) -> CardSet {
        let mut config = self.clone();
        config.game.apply(&mut config);

        let ranks: Vec<Rank> = config
            .ranks
            .iter()
            .enumerate()
            .filter(|(index, rank)| config.filter.keeps(rank, *index))
            .map(|(_, rank)| rank.clone())
            .collect();

        CardSet {
            ranks: config.ranks_order.apply(ranks),
            suits: config.suits_order.apply(config.suits.clone()),
            jokers: if config.with_jokers {
                config.jokers.clone()
            } else {
                Vec::new()
            },
            copies: config.copies,
        }
    }
}

/// The resolved card set a table is built from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    pub suits: Vec<Suit>,
    pub ranks: Vec<Rank>,
    pub jokers: Vec<Suit>,
    pub copies: usize,
}

impl CardSet {
    /// Total number of cards, jokers included.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.copies * self.suits.len() * self.ranks.len() + self.jokers.len()
    }

    /// Create every card of the set with sequential ids.
    ///
    /// Nesting is copies, then ranks, then suits; jokers come last.
    #[must_use]
    pub fn build_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.card_count());
        let mut next_id = 0u32;
        let mut next = || {
            let id = CardId::new(next_id);
            next_id += 1;
            id
        };

        for _ in 0..self.copies {
            for (rank_index, rank) in self.ranks.iter().enumerate() {
                for (suit_index, suit) in self.suits.iter().enumerate() {
                    cards.push(Card::new(next(), suit.clone(), rank.clone(), suit_index, rank_index));
                }
            }
        }

        for (position, name) in self.jokers.iter().enumerate() {
            cards.push(Card::joker(
                next(),
                name.clone(),
                self.suits.len() + position,
                self.ranks.len(),
            ));
        }

        cards
    }
}

/// Configuration for a single deck.
///
/// Unset coordinates default to the table centre; an unset sticky side
/// lets the label pick its side from the deck's position.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub face_up: bool,
    pub arrangement: Arrangement,
    pub perspective: Perspective,
    pub label: String,
    pub sticky: Option<Sticky>,
}

impl DeckConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn face_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    #[must_use]
    pub fn arrangement(mut self, arrangement: Arrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    /// Shorthand for a hand arrangement.
    #[must_use]
    pub fn hand(self) -> Self {
        self.arrangement(Arrangement::Hand)
    }

    /// Shorthand for a column arrangement.
    #[must_use]
    pub fn column(self) -> Self {
        self.arrangement(Arrangement::Column)
    }

    #[must_use]
    pub fn seen_from(mut self, perspective: Perspective) -> Self {
        self.perspective = perspective;
        self
    }

    #[must_use]
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = text.into();
        self
    }

    #[must_use]
    pub fn sticky(mut self, sticky: Sticky) -> Self {
        self.sticky = Some(sticky);
        self
    }
}
