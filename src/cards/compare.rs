//! Card comparators used by deck sorting.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::card::Card;
use crate::core::TableError;

/// Order by position in the configured rank sequence.
#[must_use]
pub fn compare_by_rank(a: &Card, b: &Card) -> Ordering {
    a.rank_index().cmp(&b.rank_index())
}

/// Order by position in the configured suit sequence.
#[must_use]
pub fn compare_by_suit(a: &Card, b: &Card) -> Ordering {
    a.suit_index().cmp(&b.suit_index())
}

/// Suit first, rank within a suit.
#[must_use]
pub fn compare_by_suit_then_rank(a: &Card, b: &Card) -> Ordering {
    compare_by_suit(a, b).then_with(|| compare_by_rank(a, b))
}

/// Rank first, suit within a rank.
#[must_use]
pub fn compare_by_rank_then_suit(a: &Card, b: &Card) -> Ordering {
    compare_by_rank(a, b).then_with(|| compare_by_suit(a, b))
}

/// Caller-supplied comparator.
pub type CompareFn = Box<dyn Fn(&Card, &Card) -> Ordering>;

/// Sort key for [`Table::sort`](crate::table::Table::sort).
///
/// The named variants parse from `"rank"`, `"suit"`, `"suit-then-rank"` and
/// `"rank-then-suit"`; anything else is rejected.
pub enum SortBy {
    Rank,
    Suit,
    SuitThenRank,
    RankThenSuit,
    Custom(CompareFn),
}

impl SortBy {
    /// Wrap a custom comparator.
    pub fn custom(f: impl Fn(&Card, &Card) -> Ordering + 'static) -> Self {
        SortBy::Custom(Box::new(f))
    }

    #[must_use]
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        match self {
            SortBy::Rank => compare_by_rank(a, b),
            SortBy::Suit => compare_by_suit(a, b),
            SortBy::SuitThenRank => compare_by_suit_then_rank(a, b),
            SortBy::RankThenSuit => compare_by_rank_then_suit(a, b),
            SortBy::Custom(f) => f(a, b),
        }
    }
}

impl Default for SortBy {
    fn default() -> Self {
        SortBy::Rank
    }
}

impl fmt::Debug for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Rank => f.write_str("Rank"),
            SortBy::Suit => f.write_str("Suit"),
            SortBy::SuitThenRank => f.write_str("SuitThenRank"),
            SortBy::RankThenSuit => f.write_str("RankThenSuit"),
            SortBy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl FromStr for SortBy {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rank" => Ok(SortBy::Rank),
            "suit" => Ok(SortBy::Suit),
            "suit-then-rank" => Ok(SortBy::SuitThenRank),
            "rank-then-suit" => Ok(SortBy::RankThenSuit),
            _ => Err(TableError::InvalidComparator(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::core::CardId;

    fn card(id: u32, suit_index: usize, rank_index: usize) -> Card {
        Card::new(
            CardId(id),
            Suit(suit_index.to_string()),
            Rank::Number(rank_index as u8 + 1),
            suit_index,
            rank_index,
        )
    }

    #[test]
    fn test_single_key_comparators() {
        let low = card(0, 3, 1);
        let high = card(1, 0, 9);
        assert_eq!(compare_by_rank(&low, &high), Ordering::Less);
        assert_eq!(compare_by_suit(&low, &high), Ordering::Greater);
    }

    #[test]
    fn test_compound_comparators_break_ties() {
        let a = card(0, 1, 4);
        let b = card(1, 1, 7);
        let c = card(2, 2, 4);

        assert_eq!(compare_by_suit_then_rank(&a, &b), Ordering::Less);
        assert_eq!(compare_by_suit_then_rank(&b, &c), Ordering::Less);
        assert_eq!(compare_by_rank_then_suit(&a, &c), Ordering::Less);
        assert_eq!(compare_by_rank_then_suit(&c, &b), Ordering::Less);
    }

    #[test]
    fn test_parse_named_comparators() {
        assert!(matches!("rank".parse::<SortBy>(), Ok(SortBy::Rank)));
        assert!(matches!("suit".parse::<SortBy>(), Ok(SortBy::Suit)));
        assert!(matches!("suit-then-rank".parse::<SortBy>(), Ok(SortBy::SuitThenRank)));
        assert!(matches!("rank-then-suit".parse::<SortBy>(), Ok(SortBy::RankThenSuit)));
    }

    #[test]
    fn test_parse_invalid_comparator() {
        let err = "colour".parse::<SortBy>().unwrap_err();
        assert_eq!(err, TableError::InvalidComparator("colour".to_string()));
    }

    #[test]
    fn test_custom_comparator() {
        let by_id = SortBy::custom(|a, b| b.id().cmp(&a.id()));
        assert_eq!(by_id.compare(&card(0, 0, 0), &card(1, 0, 0)), Ordering::Greater);
        assert_eq!(format!("{:?}", by_id), "Custom(..)");
    }
}
