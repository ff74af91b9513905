use holdem_rs::agents::ScriptedSource;
use holdem_rs::betting::Action;
use holdem_rs::cards::{Card, Rank, Suit};
use holdem_rs::deck::Deck;
use holdem_rs::evaluator::Category;
use holdem_rs::table::Table;

fn c(r: Rank, s: Suit) -> Card {
    Card::new(r, s)
}

/// Deal order for three seats: two hole cards each, then flop, turn, river.
fn stacked_deck(cards: [Card; 11]) -> Deck {
    Deck::from_cards(cards.to_vec())
}

fn three_seat_table() -> Table {
    let mut table = Table::new(&["Alice", "Bob", "Charlie"], 1000);
    table.set_button(1); // play_round advances the button to 2, so Alice opens
    table
}

#[test]
fn bet_call_fold_round_plays_out() {
    let mut table = three_seat_table();
    // Alice holds aces, Bob kings, Charlie junk; the board misses everyone.
    let deck = stacked_deck([
        c(Rank::Ace, Suit::Hearts),
        c(Rank::Ace, Suit::Diamonds),
        c(Rank::King, Suit::Hearts),
        c(Rank::King, Suit::Diamonds),
        c(Rank::Two, Suit::Clubs),
        c(Rank::Three, Suit::Clubs),
        // flop, turn, river
        c(Rank::Seven, Suit::Spades),
        c(Rank::Eight, Suit::Diamonds),
        c(Rank::Two, Suit::Hearts),
        c(Rank::Nine, Suit::Clubs),
        c(Rank::Four, Suit::Spades),
    ]);
    let mut src = ScriptedSource::new(vec![
        // pre-flop: Alice bets 20, Bob calls, Charlie folds
        Action::Bet(20),
        Action::Call,
        Action::Fold,
        // flop, turn, river checked down by the two remaining players
        Action::Check,
        Action::Check,
        Action::Check,
        Action::Check,
        Action::Check,
        Action::Check,
    ]);
    let outcome = table.play_round(deck, &mut src).unwrap();

    assert_eq!(outcome.pot, 40, "pot after pre-flop is 40 and nothing more goes in");
    assert_eq!(outcome.winners, vec![0]);
    assert_eq!(outcome.share, 40);
    assert_eq!(outcome.category, Some(Category::Pair));

    let players = table.players();
    assert_eq!(players[0].chips(), 1020);
    assert_eq!(players[1].chips(), 980);
    assert_eq!(players[2].chips(), 1000, "folding pre-flop costs Charlie nothing");
    assert!(players[2].folded());
    assert_eq!(
        src.prompts(),
        9,
        "Charlie is never solicited again after folding"
    );
}

#[test]
fn split_pot_drops_the_remainder() {
    let mut table = three_seat_table();
    // The board is a royal flush; every hand ties on it.
    let deck = stacked_deck([
        c(Rank::Two, Suit::Hearts),
        c(Rank::Three, Suit::Hearts),
        c(Rank::Two, Suit::Diamonds),
        c(Rank::Three, Suit::Diamonds),
        c(Rank::Two, Suit::Clubs),
        c(Rank::Three, Suit::Clubs),
        c(Rank::Ace, Suit::Spades),
        c(Rank::King, Suit::Spades),
        c(Rank::Queen, Suit::Spades),
        c(Rank::Jack, Suit::Spades),
        c(Rank::Ten, Suit::Spades),
    ]);
    let mut src = ScriptedSource::new(vec![
        // pre-flop: 25 each from all three seats
        Action::Bet(25),
        Action::Call,
        Action::Call,
        // flop: Charlie drops out, leaving an odd pot of 115
        Action::Bet(20),
        Action::Call,
        Action::Fold,
        // turn and river checked down
        Action::Check,
        Action::Check,
        Action::Check,
        Action::Check,
    ]);
    let outcome = table.play_round(deck, &mut src).unwrap();

    assert_eq!(outcome.pot, 115);
    assert_eq!(outcome.winners, vec![0, 1]);
    assert_eq!(outcome.category, Some(Category::RoyalFlush));
    assert_eq!(outcome.share, 57, "floor division of 115 by two winners");

    let players = table.players();
    assert_eq!(players[0].chips(), 1012);
    assert_eq!(players[1].chips(), 1012);
    assert_eq!(players[2].chips(), 975);
    let total: u64 = players.iter().map(|p| p.chips()).sum();
    assert_eq!(total, 2999, "the odd chip is dropped, not awarded");
}

#[test]
fn fold_out_awards_pot_without_dealing_board() {
    let mut table = three_seat_table();
    let deck = Deck::shuffled(99);
    let mut src = ScriptedSource::new(vec![Action::Bet(50), Action::Fold, Action::Fold]);
    let outcome = table.play_round(deck, &mut src).unwrap();

    assert_eq!(outcome.winners, vec![0]);
    assert_eq!(outcome.category, None, "no showdown happened");
    assert_eq!(table.community().len(), 0);
    assert_eq!(table.players()[0].chips(), 1000, "the uncalled bet returns via the pot");
}

#[test]
fn all_in_call_runs_the_board_out() {
    let mut table = Table::new(&["Alice", "Bob"], 1000);
    table.set_button(0); // advances to 1; Alice opens heads-up
    // Alice flops top set, Bob a dominated pair.
    let deck = Deck::from_cards(vec![
        c(Rank::Ace, Suit::Hearts),
        c(Rank::Ace, Suit::Diamonds),
        c(Rank::Queen, Suit::Hearts),
        c(Rank::Queen, Suit::Diamonds),
        c(Rank::Ace, Suit::Spades),
        c(Rank::Seven, Suit::Clubs),
        c(Rank::Two, Suit::Clubs),
        c(Rank::Nine, Suit::Diamonds),
        c(Rank::Four, Suit::Spades),
    ]);
    let mut src = ScriptedSource::new(vec![Action::Bet(1000), Action::Call]);
    let outcome = table.play_round(deck, &mut src).unwrap();

    assert_eq!(outcome.pot, 2000);
    assert_eq!(outcome.winners, vec![0]);
    assert_eq!(outcome.category, Some(Category::ThreeOfAKind));
    assert_eq!(table.community().len(), 5, "board runs out with no further betting");
    assert_eq!(table.players()[0].chips(), 2000);
    assert_eq!(table.players()[1].chips(), 0);
    assert!(table.players()[1].all_in());
    assert_eq!(src.prompts(), 2, "all-in players are not solicited on later streets");
}
