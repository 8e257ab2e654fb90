//! The table: coordinate space, card registry and deck registry.
//!
//! ## Key Types
//!
//! - `Table`: Owns every card and deck and drives a [`Surface`]
//! - `DeckDisplay`: `Display` view of a deck's members
//!
//! All mutating operations live here so that the single-owner invariant
//! (a card is in at most one deck) is enforced in one place. Operations are
//! addressed by [`DeckId`] / [`CardId`] and return a [`Transition`](crate::render::Transition) that
//! completes when the surface animation would have finished.
//!
//! ```
//! use card_table::core::{CardsConfig, DeckConfig};
//! use card_table::render::HeadlessSurface;
//! use card_table::table::Table;
//!
//! let mut table = Table::new(HeadlessSurface::new(800.0, 600.0), CardsConfig::new().with_seed(1))?;
//! let stock = table.add_deck(DeckConfig::new());
//! let all = table.card_ids();
//! let _ = table.add_cards(stock, &all)?;
//! assert_eq!(table.deck(stock)?.len(), 52);
//! # Ok::<(), card_table::core::TableError>(())
//! ```

mod container;
mod render;

use std::fmt;
use std::time::Duration;

use log::{debug, warn};

use crate::cards::Card;
use crate::core::{CardId, CardsConfig, DeckConfig, DeckId, Result, TableError, TableRng};
use crate::deck::{CardEvent, Deck, EventKind, PointerEvent};
use crate::layout::{Bounds, Dimensions, Point};
use crate::render::{RenderOptions, Surface};

/// A card table bound to a rendering surface.
pub struct Table<S: Surface> {
    surface: S,
    config: CardsConfig,
    card_size: Dimensions,
    /// Last measured surface size.
    size: Dimensions,
    /// Last measured size with both extents non-zero; anchors scale from it.
    extent: Dimensions,
    /// Indexed by `CardId`.
    cards: Vec<Card>,
    /// Indexed by `DeckId`.
    decks: Vec<Deck>,
    rng: TableRng,
}

impl<S: Surface> Table<S> {
    /// Bind `surface` to the configured selector and create every card.
    ///
    /// Cards start face down and outside any deck.
    pub fn new(mut surface: S, config: CardsConfig) -> Result<Self> {
        if !surface.bind(&config.selector) {
            return Err(TableError::SurfaceNotFound {
                selector: config.selector.clone(),
            });
        }

        let card_size = Dimensions::new(config.card_width, config.card_height);
        let cards = config.resolve().build_cards();
        for card in &cards {
            surface.create_card(card, card_size, config.cardback);
        }

        let rng = config.seed.map_or_else(TableRng::from_entropy, TableRng::new);
        let size = surface.measure();
        debug!(
            "table bound to {:?}: {} cards, {}x{}, seed {}",
            config.selector,
            cards.len(),
            size.width,
            size.height,
            rng.seed()
        );

        Ok(Self {
            surface,
            config,
            card_size,
            size,
            extent: size,
            cards,
            decks: Vec::new(),
            rng,
        })
    }

    // === Geometry ===

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Centre of the table, rounded to whole pixels.
    pub fn center(&self) -> Point {
        Point::new((self.size.width / 2.0).round(), (self.size.height / 2.0).round())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::of(self.size)
    }

    /// Bounds inset by half a card on every side: where a deck anchor keeps
    /// a whole card on the table.
    pub fn playable_area(&self) -> Bounds {
        self.bounds()
            .inset(self.card_size.width / 2.0, self.card_size.height / 2.0)
    }

    pub fn card_size(&self) -> Dimensions {
        self.card_size
    }

    pub fn config(&self) -> &CardsConfig {
        &self.config
    }

    /// Default render duration.
    pub fn animation_speed(&self) -> Duration {
        self.config.animation_speed()
    }

    /// Re-measure the surface.
    ///
    /// When the size changed, every deck anchor is scaled with it and every
    /// deck re-renders immediately. Returns whether anything changed.
    ///
    /// A collapsed surface (either extent 0) is recorded but leaves the
    /// decks alone; the next real size scales from the last real one.
    pub fn resize(&mut self) -> Result<bool> {
        let measured = self.surface.measure();
        if measured == self.size {
            return Ok(false);
        }
        debug!(
            "resize {}x{} -> {}x{}",
            self.size.width, self.size.height, measured.width, measured.height
        );
        self.size = measured;
        if measured.width <= 0.0 || measured.height <= 0.0 {
            return Ok(true);
        }

        let scale_x = ratio(measured.width, self.extent.width);
        let scale_y = ratio(measured.height, self.extent.height);
        self.extent = measured;

        for index in 0..self.decks.len() {
            let deck = &mut self.decks[index];
            let anchor = deck.anchor();
            deck.set_anchor(Point::new(anchor.x * scale_x, anchor.y * scale_y));
            let id = deck.id();
            self.render(id, RenderOptions::new().immediate())?;
        }
        Ok(true)
    }

    // === Registry access ===

    pub fn card(&self, id: CardId) -> Result<&Card> {
        self.cards.get(id.index()).ok_or(TableError::UnknownCard(id))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Ids of every card, in creation order.
    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(Card::id).collect()
    }

    pub fn deck(&self, id: DeckId) -> Result<&Deck> {
        self.decks.get(id.index()).ok_or(TableError::UnknownDeck(id))
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn rng(&self) -> &TableRng {
        &self.rng
    }

    /// Member-list view of a deck, e.g. `[Deck ♣A ♦A]`.
    pub fn display(&self, deck: DeckId) -> Result<DeckDisplay<'_>> {
        Ok(DeckDisplay {
            deck: self.deck(deck)?,
            cards: &self.cards,
        })
    }

    fn deck_mut(&mut self, id: DeckId) -> Result<&mut Deck> {
        self.decks.get_mut(id.index()).ok_or(TableError::UnknownDeck(id))
    }

    fn check_card(&self, id: CardId) -> Result<()> {
        self.card(id).map(|_| ())
    }

    // === Decks ===

    /// Register a new deck and create its label primitive.
    pub fn add_deck(&mut self, config: DeckConfig) -> DeckId {
        let id = DeckId::new(self.decks.len() as u32);
        let deck = Deck::new(id, &config, self.center(), &self.config.padding);
        self.surface.create_label(id, deck.label().text());
        debug!("added {} at ({}, {})", id, deck.anchor().x, deck.anchor().y);
        self.decks.push(deck);
        id
    }

    // === Events ===

    /// Register `handler` for `kind` on the cards of `deck`.
    pub fn on(
        &mut self,
        deck: DeckId,
        kind: EventKind,
        handler: impl FnMut(&CardEvent) + 'static,
    ) -> Result<()> {
        self.deck_mut(deck)?.events.on(kind, handler);
        Ok(())
    }

    pub fn off(&mut self, deck: DeckId, kind: EventKind) -> Result<bool> {
        Ok(self.deck_mut(deck)?.events.off(kind))
    }

    pub fn click(&mut self, deck: DeckId, handler: impl FnMut(&CardEvent) + 'static) -> Result<()> {
        self.on(deck, EventKind::Click, handler)
    }

    pub fn mouse_down(
        &mut self,
        deck: DeckId,
        handler: impl FnMut(&CardEvent) + 'static,
    ) -> Result<()> {
        self.on(deck, EventKind::MouseDown, handler)
    }

    pub fn mouse_up(&mut self, deck: DeckId, handler: impl FnMut(&CardEvent) + 'static) -> Result<()> {
        self.on(deck, EventKind::MouseUp, handler)
    }

    /// Fire the handler `deck` has for `kind`, as if `card` raised it.
    ///
    /// Returns whether a handler ran.
    pub fn trigger(
        &mut self,
        deck: DeckId,
        kind: EventKind,
        card: CardId,
        pointer: PointerEvent,
    ) -> Result<bool> {
        self.check_card(card)?;
        let event = CardEvent {
            kind,
            card,
            deck,
            pointer,
        };
        Ok(self.deck_mut(deck)?.events.trigger(&event))
    }

    /// Route surface input on `card` to the deck that holds it.
    ///
    /// Input on a card outside any deck is dropped and reported as not
    /// handled.
    pub fn dispatch(&mut self, kind: EventKind, card: CardId, pointer: PointerEvent) -> Result<bool> {
        match self.card(card)?.container() {
            Some(deck) => self.trigger(deck, kind, card, pointer),
            None => {
                warn!("{} on {} dropped: card is not in a deck", kind, card);
                Ok(false)
            }
        }
    }
}

impl<S: Surface + fmt::Debug> fmt::Debug for Table<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("surface", &self.surface)
            .field("size", &self.size)
            .field("cards", &self.cards.len())
            .field("decks", &self.decks)
            .finish_non_exhaustive()
    }
}

/// `Display` adapter listing a deck's members by short name.
pub struct DeckDisplay<'a> {
    deck: &'a Deck,
    cards: &'a [Card],
}

impl fmt::Display for DeckDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Deck")?;
        for id in self.deck.cards() {
            if let Some(card) = self.cards.get(id.index()) {
                write!(f, " {}", card.short_name())?;
            }
        }
        f.write_str("]")
    }
}

/// `new / old`, or 1 when there was no previous extent.
fn ratio(new: f64, old: f64) -> f64 {
    if old > 0.0 {
        new / old
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HeadlessSurface;

    fn table() -> Table<HeadlessSurface> {
        Table::new(HeadlessSurface::new(800.0, 600.0), CardsConfig::new().with_seed(7)).unwrap()
    }

    #[test]
    fn test_new_creates_cards_outside_decks() {
        let table = table();
        assert_eq!(table.cards().len(), 52);
        assert!(table.cards().iter().all(|c| c.container().is_none() && !c.face_up()));
        assert_eq!(table.surface().bound_selector(), Some("card-table"));
    }

    #[test]
    fn test_new_fails_without_host() {
        let surface = HeadlessSurface::new(800.0, 600.0).with_selectors(["#felt"]);
        let err = Table::new(surface, CardsConfig::new()).unwrap_err();
        assert_eq!(
            err,
            TableError::SurfaceNotFound {
                selector: "card-table".to_string()
            }
        );
        assert_eq!(err.to_string(), "no element found with selector \"card-table\"");
    }

    #[test]
    fn test_geometry() {
        let table = table();
        assert_eq!(table.width(), 800.0);
        assert_eq!(table.height(), 600.0);
        assert_eq!(table.center(), Point::new(400.0, 300.0));

        let area = table.playable_area();
        assert_eq!(area.left, 34.5);
        assert_eq!(area.top, 47.0);
        assert_eq!(area.right, 765.5);
        assert_eq!(area.bottom, 553.0);
    }

    #[test]
    fn test_center_rounds() {
        let table = Table::new(HeadlessSurface::new(801.0, 601.0), CardsConfig::new()).unwrap();
        assert_eq!(table.center(), Point::new(401.0, 301.0));
    }

    #[test]
    fn test_unknown_ids() {
        let table = table();
        assert_eq!(table.deck(DeckId(3)).unwrap_err(), TableError::UnknownDeck(DeckId(3)));
        assert_eq!(table.card(CardId(52)).unwrap_err(), TableError::UnknownCard(CardId(52)));
    }

    #[test]
    fn test_add_deck_defaults_to_center() {
        let mut table = table();
        let deck = table.add_deck(DeckConfig::new());
        assert_eq!(deck, DeckId(0));
        assert_eq!(table.deck(deck).unwrap().anchor(), table.center());
        assert!(table
            .surface()
            .state(crate::render::Primitive::Label(deck))
            .is_some());
    }

    #[test]
    fn test_dispatch_routes_to_owner() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut table = table();
        let deck = table.add_deck(DeckConfig::new());
        let card = CardId(5);
        let _ = table.add_card(deck, card).unwrap();

        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        table
            .click(deck, move |ev| *sink.borrow_mut() = Some((ev.card, ev.deck)))
            .unwrap();

        assert!(table
            .dispatch(EventKind::Click, card, PointerEvent::default())
            .unwrap());
        assert_eq!(*seen.borrow(), Some((card, deck)));

        // Not in a deck.
        assert!(!table
            .dispatch(EventKind::Click, CardId(6), PointerEvent::default())
            .unwrap());
        // No handler for this kind.
        assert!(!table
            .dispatch(EventKind::MouseUp, card, PointerEvent::default())
            .unwrap());
    }

    #[test]
    fn test_display_lists_members() {
        let mut table = table();
        let deck = table.add_deck(DeckConfig::new());
        let _ = table.add_cards(deck, &[CardId(0), CardId(1)]).unwrap();
        assert_eq!(table.display(deck).unwrap().to_string(), "[Deck ♣A ♦A]");
    }

    #[test]
    fn test_resize_scales_anchors() {
        let mut table = table();
        let deck = table.add_deck(DeckConfig::new().at(200.0, 150.0));
        assert!(!table.resize().unwrap());

        table.surface_mut().resize(1600.0, 300.0);
        assert!(table.resize().unwrap());
        assert_eq!(table.width(), 1600.0);
        assert_eq!(table.deck(deck).unwrap().anchor(), Point::new(400.0, 75.0));
    }

    #[test]
    fn test_resize_through_collapsed_surface() {
        let mut table = table();
        let deck = table.add_deck(DeckConfig::new().at(200.0, 150.0));

        table.surface_mut().resize(0.0, 0.0);
        assert!(table.resize().unwrap());
        assert_eq!(table.width(), 0.0);
        assert_eq!(table.deck(deck).unwrap().anchor(), Point::new(200.0, 150.0));

        table.surface_mut().resize(800.0, 600.0);
        assert!(table.resize().unwrap());
        assert_eq!(table.deck(deck).unwrap().anchor(), Point::new(200.0, 150.0));

        table.surface_mut().resize(400.0, 0.0);
        assert!(table.resize().unwrap());
        table.surface_mut().resize(400.0, 300.0);
        assert!(table.resize().unwrap());
        assert_eq!(table.deck(deck).unwrap().anchor(), Point::new(100.0, 75.0));
    }
}
