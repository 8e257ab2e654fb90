//! Property tests for layout and membership invariants.

use card_table::cards::SortBy;
use card_table::core::{CardId, CardsConfig, DeckConfig, DeckId};
use card_table::layout::{
    card_position, round_layout, Arrangement, Dimensions, PaddingSteps, Perspective, Point,
    RoundLayout, Stack,
};
use card_table::render::HeadlessSurface;
use card_table::table::Table;
use proptest::prelude::*;

fn perspective() -> impl Strategy<Value = Perspective> {
    prop::sample::select(Perspective::ALL.to_vec())
}

fn table(seed: u64) -> Table<HeadlessSurface> {
    Table::new(
        HeadlessSurface::new(800.0, 600.0),
        CardsConfig::new().with_seed(seed),
    )
    .unwrap()
}

fn stock(table: &mut Table<HeadlessSurface>, count: usize) -> DeckId {
    let deck = table.add_deck(DeckConfig::new());
    let ids: Vec<CardId> = table.card_ids().into_iter().take(count).collect();
    let _ = table.add_cards(deck, &ids).unwrap();
    deck
}

proptest! {
    /// First and last hand cards mirror each other around the anchor.
    #[test]
    fn prop_hand_is_symmetric(
        len in 1usize..40,
        x in 0.0f64..1000.0,
        y in 0.0f64..1000.0,
        seen_from in perspective(),
    ) {
        let stack = Stack {
            anchor: Point::new(x, y),
            arrangement: Arrangement::Hand,
            padding: Arrangement::Hand.padding(seen_from.directions(), &PaddingSteps::default()),
            card_size: Dimensions::new(69.0, 94.0),
        };
        let first = card_position(&stack, len, 0);
        let last = card_position(&stack, len, len - 1);

        prop_assert!(((first.center_x - x) + (last.center_x - x)).abs() < 1e-9);
        prop_assert!((first.center_y - y).abs() < 1e-9);
    }

    /// Every rectangle has the card's size.
    #[test]
    fn prop_rect_has_card_size(
        len in 1usize..60,
        pick in 0usize..60,
        arrangement in prop::sample::select(vec![Arrangement::Pile, Arrangement::Hand, Arrangement::Column]),
        seen_from in perspective(),
    ) {
        let index = pick % len;
        let stack = Stack {
            anchor: Point::new(300.0, 200.0),
            arrangement,
            padding: arrangement.padding(seen_from.directions(), &PaddingSteps::default()),
            card_size: Dimensions::new(69.0, 94.0),
        };
        let rect = card_position(&stack, len, index);
        prop_assert!((rect.right - rect.left - 69.0).abs() < 1e-9);
        prop_assert!((rect.bottom - rect.top - 94.0).abs() < 1e-9);
        prop_assert!((rect.center_x - (rect.left + 34.5)).abs() < 1e-9);
    }

    /// Round layout keeps every item on the ellipse.
    #[test]
    fn prop_round_layout_on_ellipse(n in 1usize..16, a in 1.0f64..500.0, b in 1.0f64..500.0) {
        let opts = RoundLayout::new().center(10.0, 20.0).ellipse(a, b);
        let seats = round_layout(0..n, &opts);
        prop_assert_eq!(seats.len(), n);
        for seat in seats {
            let dx = (seat.position.x - 10.0) / a;
            let dy = (seat.position.y - 20.0) / b;
            prop_assert!((dx * dx + dy * dy - 1.0).abs() < 1e-9);
        }
    }

    /// Shuffling preserves the multiset of members.
    #[test]
    fn prop_shuffle_preserves_members(seed in any::<u64>(), count in 0usize..53) {
        let mut table = table(seed);
        let deck = stock(&mut table, count);
        let mut before = table.deck(deck).unwrap().cards().to_vec();

        let _ = table.shuffle(deck).unwrap();

        let mut after = table.deck(deck).unwrap().cards().to_vec();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// Adding then removing a card restores the others' order.
    #[test]
    fn prop_add_remove_restores_order(seed in any::<u64>(), pick in 0u32..52) {
        let mut table = table(seed);
        let deck = stock(&mut table, 20);
        let _ = table.shuffle(deck).unwrap();
        let other = table.add_deck(DeckConfig::new());
        let card = CardId(pick);
        let _ = table.add_card(other, card).unwrap();
        let before = table.deck(deck).unwrap().cards().to_vec();

        let _ = table.add_card(deck, card).unwrap();
        prop_assert!(table.remove_card(deck, card).unwrap());

        prop_assert_eq!(table.deck(deck).unwrap().cards(), &before[..]);
        prop_assert_eq!(table.card(card).unwrap().container(), None);
    }

    /// Descending is the reverse of ascending for distinct keys, and sorting
    /// twice changes nothing.
    #[test]
    fn prop_sort_descending_reverses(seed in any::<u64>(), count in 0usize..53) {
        let mut table = table(seed);
        let deck = stock(&mut table, count);
        let _ = table.shuffle(deck).unwrap();

        let _ = table.sort(deck, &SortBy::SuitThenRank, false).unwrap();
        let ascending = table.deck(deck).unwrap().cards().to_vec();
        let _ = table.sort(deck, &SortBy::SuitThenRank, false).unwrap();
        prop_assert_eq!(table.deck(deck).unwrap().cards(), &ascending[..]);

        let _ = table.sort(deck, &SortBy::SuitThenRank, true).unwrap();
        let mut descending = table.deck(deck).unwrap().cards().to_vec();
        descending.reverse();
        prop_assert_eq!(descending, ascending);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Dealing moves min(count * hands, source) cards round-robin.
    #[test]
    fn prop_deal_counts(source in 0usize..30, count in 0usize..8, hands in 1usize..5) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();

        let mut table = table(1);
        let stock = stock(&mut table, source);
        let targets: Vec<DeckId> = (0..hands).map(|_| table.add_deck(DeckConfig::new().hand())).collect();

        let moved = runtime.block_on(table.deal(stock, count, &targets, None)).unwrap();

        let expected = (count * hands).min(source);
        prop_assert_eq!(moved, expected);
        prop_assert_eq!(table.deck(stock).unwrap().len(), source - expected);
        for (i, &hand) in targets.iter().enumerate() {
            let share = expected / hands + usize::from(i < expected % hands);
            prop_assert_eq!(table.deck(hand).unwrap().len(), share);
        }
    }
}
