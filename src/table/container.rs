//! Deck membership operations: transfer, sort, shuffle and deal.

use std::time::Duration;

use log::{debug, trace};

use super::Table;
use crate::cards::SortBy;
use crate::core::{CardId, DeckId, Result, TableError};
use crate::label::{Sticky, Visibility};
use crate::layout::{Dimensions, Perspective, Point};
use crate::render::{Primitive, RenderOptions, Surface, Transition, VisualUpdate};

impl<S: Surface> Table<S> {
    /// Move `card` onto the top of `deck`, detaching it from its previous
    /// deck first. Both ids must already be checked.
    fn transfer(&mut self, deck: DeckId, card: CardId) {
        let entry = &mut self.cards[card.index()];
        if let Some(previous) = entry.container.take() {
            self.decks[previous.index()].members.remove(card);
        }
        entry.container = Some(deck);
        self.decks[deck.index()].members.push(card);
        trace!("{} -> {}", card, deck);
    }

    /// Add one card to the top of `deck` and render it.
    pub fn add_card(&mut self, deck: DeckId, card: CardId) -> Result<Transition> {
        self.add_cards(deck, &[card])
    }

    /// Add `cards` in order to the top of `deck` and render it once.
    ///
    /// Every id is checked before anything moves.
    pub fn add_cards(&mut self, deck: DeckId, cards: &[CardId]) -> Result<Transition> {
        self.deck(deck)?;
        for &card in cards {
            self.check_card(card)?;
        }
        for &card in cards {
            self.transfer(deck, card);
        }
        self.render(deck, RenderOptions::new())
    }

    /// Remove the first occurrence of `card` from `deck` without rendering.
    ///
    /// Returns `false` when the card was not in the deck.
    pub fn remove_card(&mut self, deck: DeckId, card: CardId) -> Result<bool> {
        self.check_card(card)?;
        let removed = self.deck_mut(deck)?.members.remove(card);
        if removed {
            self.cards[card.index()].container = None;
        }
        Ok(removed)
    }

    pub fn top_card(&self, deck: DeckId) -> Result<Option<CardId>> {
        Ok(self.deck(deck)?.top_card())
    }

    /// Stable sort of `deck` by `by`; `descending` swaps the comparator's
    /// arguments.
    pub fn sort(&mut self, deck: DeckId, by: &SortBy, descending: bool) -> Result<Transition> {
        let cards = &self.cards;
        let target = self.decks.get_mut(deck.index()).ok_or(TableError::UnknownDeck(deck))?;
        target.members.sort_by(|a, b| {
            let (a, b) = (&cards[a.index()], &cards[b.index()]);
            if descending {
                by.compare(b, a)
            } else {
                by.compare(a, b)
            }
        });
        debug!("sorted {} by {:?} (descending: {})", deck, by, descending);
        self.render(deck, RenderOptions::new())
    }

    /// Shuffle `deck` with the table RNG and render it.
    pub fn shuffle(&mut self, deck: DeckId) -> Result<Transition> {
        let target = self.decks.get_mut(deck.index()).ok_or(TableError::UnknownDeck(deck))?;
        target.members.shuffle(&mut self.rng);
        debug!("shuffled {} ({} cards)", deck, target.len());
        self.render(deck, RenderOptions::new())
    }

    /// Deal `count` cards to each of `targets`, round-robin from the top of
    /// `source`.
    ///
    /// Each card is rendered into its target and that animation completes
    /// before the next card moves. Dealing stops early when the source runs
    /// out. The source is rendered last. Returns the number of cards moved.
    pub async fn deal(
        &mut self,
        source: DeckId,
        count: usize,
        targets: &[DeckId],
        speed: Option<Duration>,
    ) -> Result<usize> {
        if targets.is_empty() {
            return Err(TableError::NoDealTargets);
        }
        self.deck(source)?;
        for &target in targets {
            self.deck(target)?;
        }

        let total = count.saturating_mul(targets.len());
        let options = RenderOptions {
            speed,
            keep_z: true,
            ..RenderOptions::default()
        };
        let mut moved = 0;

        while moved < total {
            let Some(card) = self.decks[source.index()].top_card() else {
                break;
            };
            let target = targets[moved % targets.len()];
            self.transfer(target, card);

            // Fly above both decks while moving.
            let z = self.raise_counter(source, target);
            self.set_z_order(card, z);
            debug!("deal {} from {} to {} (z {})", card, source, target, z);

            self.render(target, options)?.await;

            let hand = &mut self.decks[target.index()];
            hand.z_counter += 1;
            let z = hand.z_counter;
            self.set_z_order(card, z);
            moved += 1;
        }

        let options = RenderOptions {
            speed,
            ..RenderOptions::default()
        };
        self.render(source, options)?.await;
        Ok(moved)
    }

    /// Bump and return the higher z counter of `a` and `b` (`b` on a tie).
    fn raise_counter(&mut self, a: DeckId, b: DeckId) -> u32 {
        let higher = if self.decks[a.index()].z_counter > self.decks[b.index()].z_counter {
            a
        } else {
            b
        };
        let deck = &mut self.decks[higher.index()];
        deck.z_counter += 1;
        deck.z_counter
    }

    pub(crate) fn set_z_order(&mut self, card: CardId, z: u32) {
        self.cards[card.index()].z_order = z;
        self.surface.apply(Primitive::Card(card), VisualUpdate::ZOrder(z));
    }

    /// Flip every card of `deck` face up or down.
    pub fn set_face_up(&mut self, deck: DeckId, face_up: bool) -> Result<Transition> {
        self.deck_mut(deck)?.set_face_up(face_up);
        self.render(deck, RenderOptions::new())
    }

    /// View `deck` from another seat; padding follows the new perspective.
    pub fn change_perspective(&mut self, deck: DeckId, perspective: Perspective) -> Result<Transition> {
        let steps = self.config.padding;
        self.deck_mut(deck)?.set_perspective(perspective, &steps);
        self.render(deck, RenderOptions::new())
    }

    /// Move the anchor of `deck` to `(x, y)`.
    pub fn move_deck(&mut self, deck: DeckId, x: f64, y: f64) -> Result<Transition> {
        self.deck_mut(deck)?.set_anchor(Point::new(x, y));
        self.render(deck, RenderOptions::new())
    }

    /// Change the label text of `deck`. Only the label re-renders.
    pub fn set_label_text(&mut self, deck: DeckId, text: impl Into<String>) -> Result<()> {
        let target = self.deck_mut(deck)?;
        if target.label.set_text(text) {
            let text = target.label.text().to_string();
            self.surface.apply(Primitive::Label(deck), VisualUpdate::Text(text));
        }
        self.render_label(deck, self.animation_speed())
    }

    pub fn set_label_sticky(&mut self, deck: DeckId, sticky: Sticky) -> Result<()> {
        self.deck_mut(deck)?.label.set_sticky(sticky);
        self.render_label(deck, self.animation_speed())
    }

    pub fn set_label_visibility(&mut self, deck: DeckId, visibility: Visibility) -> Result<()> {
        self.deck_mut(deck)?.label.set_visibility(visibility);
        self.render_label(deck, self.animation_speed())
    }

    /// Change the gap between the label of `deck` and its cards.
    pub fn set_label_padding(&mut self, deck: DeckId, horizontal: f64, vertical: f64) -> Result<()> {
        self.deck_mut(deck)?
            .label
            .set_padding(Dimensions::new(horizontal, vertical));
        self.render_label(deck, self.animation_speed())
    }
}
