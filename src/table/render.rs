//! The render pass and card-level animation.
//!
//! A render walks a deck's members bottom to top, sends each card to the
//! rectangle the layout engine computes for its index, syncs faces with the
//! deck and finally re-positions the label. Only cards whose rendered
//! position differs from the target get a position update unless the pass
//! is forced.

use std::time::Duration;

use log::trace;

use super::Table;
use crate::core::{CardId, DeckId, Result, TableError};
use crate::label::{LabelFrame, Samples};
use crate::layout::{card_position, round_layout, Point, RoundLayout, Seat};
use crate::render::{Origin, Primitive, RenderOptions, Surface, Transition, VisualUpdate};

impl<S: Surface> Table<S> {
    /// Lay out and animate every member of `deck`.
    ///
    /// Completes immediately when forced or when the deck is empty,
    /// otherwise after the render speed.
    pub fn render(&mut self, deck: DeckId, options: RenderOptions) -> Result<Transition> {
        let speed = options.speed.unwrap_or_else(|| self.config.animation_speed());
        let immediate = options.is_immediate();
        let (transition, face_delay) = if immediate {
            (Duration::ZERO, Duration::ZERO)
        } else {
            (speed, speed / 2)
        };
        let cardback = self.config.cardback;

        let target = self.decks.get_mut(deck.index()).ok_or(TableError::UnknownDeck(deck))?;
        let len = target.len();
        target.z_counter = len as u32;
        let stack = target.stack(self.card_size);
        let face_up = target.face_up();
        let mut moved = 0usize;

        for (index, &id) in target.members.as_slice().iter().enumerate() {
            let card = &mut self.cards[id.index()];
            let primitive = Primitive::Card(id);

            if !options.keep_z {
                card.z_order = index as u32 + 1;
                self.surface.apply(primitive, VisualUpdate::ZOrder(card.z_order));
            }

            let origin = card_position(&stack, len, index).origin();
            if options.force || card.rendered != Some(origin) {
                card.rendered = Some(origin);
                moved += 1;
                self.surface.apply(
                    primitive,
                    VisualUpdate::Position {
                        left: origin.x,
                        top: origin.y,
                        transition,
                    },
                );
            }

            card.face_up = face_up;
            self.surface.apply(
                primitive,
                VisualUpdate::Face {
                    face_up,
                    cardback,
                    delay: face_delay,
                },
            );
        }
        trace!(
            "render {}: {} cards, {} moved, speed {:?}, immediate {}",
            deck,
            len,
            moved,
            speed,
            immediate
        );

        self.render_label(deck, speed)?;

        if options.force || len == 0 {
            Ok(Transition::immediate())
        } else {
            Ok(Transition::after(speed))
        }
    }

    /// Re-position or hide the label of `deck`.
    pub(crate) fn render_label(&mut self, deck: DeckId, transition: Duration) -> Result<()> {
        let card_size = self.card_size;
        let playable_area = self.playable_area();
        let target = self.decks.get_mut(deck.index()).ok_or(TableError::UnknownDeck(deck))?;

        let len = target.len();
        let samples = (len > 0).then(|| Samples {
            first: target.card_position(0, card_size),
            middle: target.card_position(len / 2, card_size),
            last: target.card_position(len - 1, card_size),
        });
        let frame = LabelFrame {
            member_count: len,
            samples,
            directions: target.perspective().directions(),
            size: self.surface.measure_label(target.label.text()),
            anchor: target.anchor(),
            playable_area,
        };

        let primitive = Primitive::Label(deck);
        match target.label.arrange(&frame) {
            Some(position) => {
                self.surface.apply(primitive, VisualUpdate::Visible(true));
                self.surface.apply(
                    primitive,
                    VisualUpdate::Position {
                        left: position.x,
                        top: position.y,
                        transition,
                    },
                );
            }
            None => self.surface.apply(primitive, VisualUpdate::Visible(false)),
        }
        Ok(())
    }

    // === Single cards ===

    /// Centre `card` on `(x, y)`, outside of any deck layout.
    ///
    /// The next render of the card's deck moves it back.
    pub fn move_card(&mut self, card: CardId, x: f64, y: f64, speed: Option<Duration>) -> Result<Transition> {
        self.check_card(card)?;
        let speed = speed.unwrap_or_else(|| self.config.animation_speed());
        let origin = Point::new(x - self.card_size.width / 2.0, y - self.card_size.height / 2.0);

        self.cards[card.index()].rendered = Some(origin);
        self.surface.apply(
            Primitive::Card(card),
            VisualUpdate::Position {
                left: origin.x,
                top: origin.y,
                transition: speed,
            },
        );
        Ok(Transition::after(speed))
    }

    /// Rotate `card` to `degrees` around `origin`.
    pub fn rotate_card(
        &mut self,
        card: CardId,
        degrees: f64,
        origin: Origin,
        speed: Option<Duration>,
    ) -> Result<Transition> {
        self.check_card(card)?;
        let speed = speed.unwrap_or_else(|| self.config.animation_speed());

        self.cards[card.index()].rotation = degrees;
        self.surface.apply(
            Primitive::Card(card),
            VisualUpdate::Rotation {
                degrees,
                origin,
                transition: speed,
            },
        );
        Ok(Transition::after(speed))
    }

    /// Show or hide the face of a single card right away.
    ///
    /// The card's deck overrides this on its next render.
    pub fn set_card_face_up(&mut self, card: CardId, face_up: bool) -> Result<()> {
        self.check_card(card)?;
        self.cards[card.index()].face_up = face_up;
        self.surface.apply(
            Primitive::Card(card),
            VisualUpdate::Face {
                face_up,
                cardback: self.config.cardback,
                delay: Duration::ZERO,
            },
        );
        Ok(())
    }

    /// Raise `card` above every other card and deck counter.
    ///
    /// Returns the new z-order.
    pub fn move_to_front(&mut self, card: CardId) -> Result<u32> {
        self.check_card(card)?;
        let highest_card = self.cards.iter().map(|c| c.z_order).max().unwrap_or(0);
        let highest_deck = self.decks.iter().map(|d| d.z_counter).max().unwrap_or(0);
        let z = highest_card.max(highest_deck) + 1;
        self.set_z_order(card, z);
        Ok(z)
    }

    // === Round layouts ===

    /// Seats for `decks` along the arc described by `opts`.
    pub fn round_layout(&self, decks: &[DeckId], opts: &RoundLayout) -> Result<Vec<Seat<DeckId>>> {
        for &deck in decks {
            self.deck(deck)?;
        }
        Ok(round_layout(decks.iter().copied(), opts))
    }

    /// Move each of `decks` to its seat on the arc and render them.
    ///
    /// Completes when the slowest deck has finished.
    pub fn arrange_round(&mut self, decks: &[DeckId], opts: &RoundLayout) -> Result<Transition> {
        let seats = self.round_layout(decks, opts)?;
        let mut done = Transition::immediate();
        for seat in seats {
            self.deck_mut(seat.item)?.set_anchor(seat.position);
            done = done.join(self.render(seat.item, RenderOptions::new())?);
        }
        Ok(done)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::core::{CardId, CardsConfig, DeckConfig};
    use crate::layout::{Point, RoundLayout};
    use crate::render::{HeadlessSurface, Origin, Primitive, RenderOptions, Transition, VisualUpdate};
    use crate::table::Table;

    fn table() -> Table<HeadlessSurface> {
        Table::new(
            HeadlessSurface::new(800.0, 600.0).with_log(),
            CardsConfig::new().with_seed(3),
        )
        .unwrap()
    }

    fn position_updates(table: &Table<HeadlessSurface>) -> usize {
        table
            .surface()
            .log()
            .iter()
            .filter(|(p, u)| matches!(p, Primitive::Card(_)) && matches!(u, VisualUpdate::Position { .. }))
            .count()
    }

    #[test]
    fn test_render_assigns_z_and_positions() {
        let mut table = table();
        let deck = table.add_deck(DeckConfig::new().at(400.0, 300.0));
        let done = table.add_cards(deck, &[CardId(0), CardId(1), CardId(2)]).unwrap();
        assert_eq!(done, Transition::after(Duration::from_millis(500)));

        let top = table.card(CardId(2)).unwrap();
        assert_eq!(top.z_order(), 3);
        assert_eq!(table.deck(deck).unwrap().z_counter(), 3);
        // Seen from the south a pile steps one pixel up per card.
        assert_eq!(top.rendered_position(), Some(Point::new(400.0 - 34.5, 300.0 - 47.0 - 2.0)));
    }

    #[test]
    fn test_render_skips_unchanged_positions() {
        let mut table = table();
        let deck = table.add_deck(DeckConfig::new());
        let _ = table.add_cards(deck, &[CardId(0), CardId(1)]).unwrap();
        table.surface_mut().clear_log();

        let _ = table.render(deck, RenderOptions::new()).unwrap();
        assert_eq!(position_updates(&table), 0);

        let done = table.render(deck, RenderOptions::new().force()).unwrap();
        assert_eq!(position_updates(&table), 2);
        assert!(done.is_immediate());
    }

    #[test]
    fn test_render_face_delay() {
        let mut table = table();
        let deck = table.add_deck(DeckConfig::new().face_up());
        let _ = table.add_card(deck, CardId(0)).unwrap();

        let state = table.surface().state(Primitive::Card(CardId(0))).unwrap();
        assert!(state.face_up);
        assert_eq!(state.face_delay, Duration::from_millis(250));
        assert_eq!(state.transition, Duration::from_millis(500));

        let _ = table.set_face_up(deck, false).unwrap();
        let _ = table.render(deck, RenderOptions::new().immediate()).unwrap();
        let state = table.surface().state(Primitive::Card(CardId(0))).unwrap();
        assert!(!state.face_up);
        assert_eq!(state.face_delay, Duration::ZERO);
        assert!(!table.card(CardId(0)).unwrap().face_up());
    }

    #[test]
    fn test_render_empty_deck_is_immediate() {
        let mut table = table();
        let deck = table.add_deck(DeckConfig::new().label("Empty"));
        let done = table.render(deck, RenderOptions::new()).unwrap();
        assert!(done.is_immediate());

        let label = table.surface().state(Primitive::Label(deck)).unwrap();
        assert!(!label.visible);
    }

    #[test]
    fn test_label_follows_deck() {
        let mut table = table();
        // Bottom edge of the playable area: label goes on top.
        let deck = table.add_deck(DeckConfig::new().at(400.0, 553.0).label("South"));
        let _ = table.add_card(deck, CardId(0)).unwrap();

        let label = table.deck(deck).unwrap().label();
        assert!(label.is_shown());
        // measure_label("South") is 48 x 22, card top is 553 - 47.
        assert_eq!(label.position(), Point::new(400.0 - 24.0, 506.0 - 32.0));

        let state = table.surface().state(Primitive::Label(deck)).unwrap();
        assert!(state.visible);
        assert_eq!(state.position, Some(label.position()));
    }

    #[test]
    fn test_keep_z_leaves_orders() {
        let mut table = table();
        let deck = table.add_deck(DeckConfig::new());
        let _ = table.add_cards(deck, &[CardId(0), CardId(1)]).unwrap();
        assert_eq!(table.move_to_front(CardId(0)).unwrap(), 3);

        let _ = table.render(deck, RenderOptions::new().keep_z()).unwrap();
        assert_eq!(table.card(CardId(0)).unwrap().z_order(), 3);

        let _ = table.render(deck, RenderOptions::new()).unwrap();
        assert_eq!(table.card(CardId(0)).unwrap().z_order(), 1);
    }

    #[test]
    fn test_move_and_rotate_card() {
        let mut table = table();
        let done = table.move_card(CardId(4), 100.0, 100.0, Some(Duration::from_millis(200))).unwrap();
        assert_eq!(done.duration(), Duration::from_millis(200));
        assert_eq!(table.card(CardId(4)).unwrap().rendered_position(), Some(Point::new(65.5, 53.0)));

        let _ = table
            .rotate_card(CardId(4), 90.0, Origin::Center, None)
            .unwrap();
        assert_eq!(table.card(CardId(4)).unwrap().rotation(), 90.0);
        let state = table.surface().state(Primitive::Card(CardId(4))).unwrap();
        assert_eq!(state.rotation, 90.0);
    }

    #[test]
    fn test_arrange_round_moves_anchors() {
        let mut table = table();
        let decks: Vec<_> = (0..4).map(|_| table.add_deck(DeckConfig::new())).collect();
        let opts = RoundLayout::new().center(400.0, 300.0).radius(200.0);

        let _ = table.arrange_round(&decks, &opts).unwrap();
        let east = table.deck(decks[0]).unwrap().anchor();
        let south = table.deck(decks[1]).unwrap().anchor();
        assert!((east.x - 600.0).abs() < 1e-9 && (east.y - 300.0).abs() < 1e-9);
        assert!((south.x - 400.0).abs() < 1e-9 && (south.y - 500.0).abs() < 1e-9);
    }
}
