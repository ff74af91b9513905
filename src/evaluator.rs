use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use std::fmt;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub struct HandValue(u64);

/// Poker hand category from weakest to strongest.
///
/// A royal flush is the straight flush whose top card is the ace; it gets its
/// own category so the ordinal scale runs 0 (high card) through 9 (royal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and five rank tiebreakers into a comparable value.
    /// Uses 6 bits per rank to be generous (supports up to 63).
    pub fn from_parts(category: Category, ranks_desc: &[Rank; 5]) -> Self {
        // Layout (most significant -> least):
        // [ category | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 18 zero bits ]
        // r0 is the primary tiebreaker and must be more significant than r1..r4.
        const CAT_SHIFT: u32 = 48; // put category in the high byte
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = (category as u64) << CAT_SHIFT;
        for (i, r) in ranks_desc.iter().enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (*r as u64) << offset;
        }
        HandValue(v)
    }
}

/// Result of evaluating a hand: the category, the tiebreak ranks that decide
/// ties within it, and the five winning cards in display order.
///
/// For a fixed 7-card input the result is deterministic: the maximum over all
/// C(7,5) = 21 five-card subsets under the `(category, tiebreak)` order.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct EvaluatedHand {
    pub category: Category,
    /// Ranks sorted by (multiplicity desc, rank desc); trailing slots padded
    /// with `Rank::Two` so hands of the same category compare element-wise.
    pub tiebreak: [Rank; 5],
    pub best_five: [Card; 5],
    value: HandValue,
}

impl EvaluatedHand {
    fn new(category: Category, tiebreak: [Rank; 5], best_five: [Card; 5]) -> Self {
        let value = HandValue::from_parts(category, &tiebreak);
        Self { category, tiebreak, best_five, value }
    }

    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for EvaluatedHand {}

/// Evaluate exactly five cards; detects category and encodes tie-breakers.
pub fn evaluate_five(cards: &[Card; 5]) -> EvaluatedHand {
    // Sort cards descending by rank (then suit) for stable output
    let mut sorted = *cards;
    sorted.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

    let ranks =
        [sorted[0].rank(), sorted[1].rank(), sorted[2].rank(), sorted[3].rank(), sorted[4].rank()];
    let mut counts = [0u8; 15]; // 2..=14 used
    for r in ranks.iter() {
        counts[*r as usize] += 1;
    }

    let is_flush = sorted.iter().all(|c| c.suit() == sorted[0].suit());

    // Distinct rank values ascending
    let mut uniq_vals: Vec<u8> = ranks.iter().map(|r| r.value()).collect();
    uniq_vals.sort_unstable();
    uniq_vals.dedup();
    let is_wheel = uniq_vals == [2, 3, 4, 5, 14];
    let is_consecutive = uniq_vals.len() == 5 && uniq_vals.windows(2).all(|w| w[1] == w[0] + 1);
    let is_straight = is_wheel || is_consecutive;

    // The wheel's completing card is the five, so it sorts below a 6-high straight.
    let straight_top = if is_wheel {
        Rank::Five
    } else if is_straight {
        Rank::from_value(uniq_vals[4])
    } else {
        Rank::Two
    };

    if is_straight {
        let display = if is_wheel {
            // Show the wheel as 5-4-3-2-A, ace playing low
            [sorted[1], sorted[2], sorted[3], sorted[4], sorted[0]]
        } else {
            sorted
        };
        let tiebreak = [straight_top, Rank::Two, Rank::Two, Rank::Two, Rank::Two];
        // A straight has five distinct ranks, so no grouped category can
        // outrank it here; only the flush upgrade matters.
        let category = match (is_flush, straight_top) {
            (true, Rank::Ace) => Category::RoyalFlush,
            (true, _) => Category::StraightFlush,
            (false, _) => Category::Straight,
        };
        return EvaluatedHand::new(category, tiebreak, display);
    }

    // Build groups: (rank, count) sorted by (count desc, rank desc)
    let mut groups: Vec<(Rank, u8)> = (2u8..=14u8)
        .rev()
        .filter_map(|v| {
            let c = counts[v as usize];
            if c > 0 {
                Some((Rank::from_value(v), c))
            } else {
                None
            }
        })
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

    // Four of a kind
    if let Some(&(quad_rank, 4)) = groups.first() {
        let kicker = groups.iter().find(|(_, c)| *c == 1).map(|(r, _)| *r).unwrap_or(Rank::Two);
        let tiebreak = [quad_rank, kicker, Rank::Two, Rank::Two, Rank::Two];
        return EvaluatedHand::new(Category::FourOfAKind, tiebreak, sorted);
    }

    // Full House (3 + 2)
    if groups.len() >= 2 && groups[0].1 == 3 && groups[1].1 == 2 {
        let tiebreak = [groups[0].0, groups[1].0, Rank::Two, Rank::Two, Rank::Two];
        return EvaluatedHand::new(Category::FullHouse, tiebreak, sorted);
    }

    // Flush
    if is_flush {
        let mut rdesc = ranks;
        rdesc.sort_by(|a, b| b.cmp(a));
        return EvaluatedHand::new(Category::Flush, rdesc, sorted);
    }

    // Three of a kind
    if let Some(&(trips_rank, 3)) = groups.first() {
        let mut kickers: Vec<Rank> =
            groups.iter().filter_map(|(r, c)| if *c == 1 { Some(*r) } else { None }).collect();
        kickers.sort_by(|a, b| b.cmp(a));
        let tiebreak = [trips_rank, kickers[0], kickers[1], Rank::Two, Rank::Two];
        return EvaluatedHand::new(Category::ThreeOfAKind, tiebreak, sorted);
    }

    // Two Pair
    let pairs: Vec<Rank> =
        groups.iter().filter_map(|(r, c)| if *c == 2 { Some(*r) } else { None }).collect();
    if pairs.len() >= 2 {
        let kicker = groups
            .iter()
            .find_map(|(r, c)| if *c == 1 { Some(*r) } else { None })
            .unwrap_or(Rank::Two);
        let tiebreak = [pairs[0], pairs[1], kicker, Rank::Two, Rank::Two];
        return EvaluatedHand::new(Category::TwoPair, tiebreak, sorted);
    }

    // One Pair
    if let Some(&(pair_rank, 2)) = groups.first() {
        let mut kickers: Vec<Rank> =
            groups.iter().filter_map(|(r, c)| if *c == 1 { Some(*r) } else { None }).collect();
        kickers.sort_by(|a, b| b.cmp(a));
        let tiebreak = [pair_rank, kickers[0], kickers[1], kickers[2], Rank::Two];
        return EvaluatedHand::new(Category::Pair, tiebreak, sorted);
    }

    // High Card
    let mut rdesc = ranks;
    rdesc.sort_by(|a, b| b.cmp(a));
    EvaluatedHand::new(Category::HighCard, rdesc, sorted)
}

/// Evaluate seven cards (hole cards plus board in Hold'em).
/// Iterates all 21 five-card combinations and returns the best by value.
///
/// Pure and total: any well-formed 7-card input yields a result, and the
/// result does not depend on input order.
pub fn evaluate_seven(cards: &[Card; 7]) -> EvaluatedHand {
    let mut best: Option<EvaluatedHand> = None;
    for i in 0..3 {
        for j in (i + 1)..4 {
            for k in (j + 1)..5 {
                for l in (k + 1)..6 {
                    for m in (l + 1)..7 {
                        let hand = [cards[i], cards[j], cards[k], cards[l], cards[m]];
                        let eval = evaluate_five(&hand);
                        match best {
                            Some(b) if eval <= b => {}
                            _ => best = Some(eval),
                        }
                    }
                }
            }
        }
    }
    debug_assert!(best.is_some());
    best.unwrap_or_else(|| evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    fn c(r: Rank, s: Suit) -> Card {
        Card::new(r, s)
    }

    #[test]
    fn royal_flush_is_its_own_category() {
        let royal = [
            c(Rank::Ace, Suit::Spades),
            c(Rank::King, Suit::Spades),
            c(Rank::Queen, Suit::Spades),
            c(Rank::Jack, Suit::Spades),
            c(Rank::Ten, Suit::Spades),
        ];
        let e = evaluate_five(&royal);
        assert_eq!(e.category, Category::RoyalFlush);
        assert_eq!(e.category.ordinal(), 9);

        let king_high = [
            c(Rank::King, Suit::Hearts),
            c(Rank::Queen, Suit::Hearts),
            c(Rank::Jack, Suit::Hearts),
            c(Rank::Ten, Suit::Hearts),
            c(Rank::Nine, Suit::Hearts),
        ];
        let e = evaluate_five(&king_high);
        assert_eq!(e.category, Category::StraightFlush);
        assert_eq!(e.category.ordinal(), 8);
    }

    #[test]
    fn wheel_tiebreaks_below_six_high_straight() {
        let wheel = [
            c(Rank::Ace, Suit::Clubs),
            c(Rank::Two, Suit::Diamonds),
            c(Rank::Three, Suit::Hearts),
            c(Rank::Four, Suit::Spades),
            c(Rank::Five, Suit::Clubs),
        ];
        let six_high = [
            c(Rank::Two, Suit::Clubs),
            c(Rank::Three, Suit::Diamonds),
            c(Rank::Four, Suit::Hearts),
            c(Rank::Five, Suit::Spades),
            c(Rank::Six, Suit::Clubs),
        ];
        let ew = evaluate_five(&wheel);
        let e6 = evaluate_five(&six_high);
        assert_eq!(ew.category, Category::Straight);
        assert_eq!(ew.tiebreak[0], Rank::Five);
        assert!(e6 > ew);
    }

    #[test]
    fn wheel_displays_ace_low() {
        let wheel = [
            c(Rank::Ace, Suit::Clubs),
            c(Rank::Two, Suit::Diamonds),
            c(Rank::Three, Suit::Hearts),
            c(Rank::Four, Suit::Spades),
            c(Rank::Five, Suit::Clubs),
        ];
        let e = evaluate_five(&wheel);
        assert_eq!(e.best_five[0].rank(), Rank::Five);
        assert_eq!(e.best_five[4].rank(), Rank::Ace);
    }

    #[test]
    fn full_house_beats_any_flush() {
        let boat = [
            c(Rank::Two, Suit::Clubs),
            c(Rank::Two, Suit::Diamonds),
            c(Rank::Two, Suit::Hearts),
            c(Rank::Three, Suit::Spades),
            c(Rank::Three, Suit::Hearts),
        ];
        let flush = [
            c(Rank::Ace, Suit::Hearts),
            c(Rank::King, Suit::Hearts),
            c(Rank::Queen, Suit::Hearts),
            c(Rank::Jack, Suit::Hearts),
            c(Rank::Nine, Suit::Hearts),
        ];
        assert!(evaluate_five(&boat) > evaluate_five(&flush));
    }

    #[test]
    fn two_pair_tiebreak_order() {
        let tp = [
            c(Rank::Jack, Suit::Clubs),
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Jack, Suit::Diamonds),
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Two, Suit::Spades),
        ];
        let e = evaluate_five(&tp);
        assert_eq!(e.category, Category::TwoPair);
        assert_eq!(&e.tiebreak[..3], &[Rank::Jack, Rank::Nine, Rank::Two]);
    }

    #[test]
    fn quads_tiebreak_is_quad_rank_then_kicker() {
        let quads = [
            c(Rank::King, Suit::Clubs),
            c(Rank::King, Suit::Diamonds),
            c(Rank::King, Suit::Hearts),
            c(Rank::King, Suit::Spades),
            c(Rank::Nine, Suit::Spades),
        ];
        let e = evaluate_five(&quads);
        assert_eq!(e.category, Category::FourOfAKind);
        assert_eq!(&e.tiebreak[..2], &[Rank::King, Rank::Nine]);
    }

    #[test]
    fn seven_card_best_uses_board_and_hole() {
        let seven = [
            c(Rank::Ace, Suit::Spades),
            c(Rank::Ace, Suit::Hearts),
            c(Rank::Ace, Suit::Clubs),
            c(Rank::King, Suit::Diamonds),
            c(Rank::King, Suit::Hearts),
            c(Rank::Three, Suit::Spades),
            c(Rank::Two, Suit::Clubs),
        ];
        let e = evaluate_seven(&seven);
        assert_eq!(e.category, Category::FullHouse);
        assert_eq!(&e.tiebreak[..2], &[Rank::Ace, Rank::King]);
    }
}
