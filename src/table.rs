//! Round orchestration: deal, four betting streets, showdown.
//!
//! The table owns the player list and is the single source of truth for chip
//! counts across streets. Betting rounds borrow the players and pot, mutate
//! them in place, and hand control back at street boundaries.

use crate::agents::ActionSource;
use crate::betting::{BettingRound, Player};
use crate::cards::Card;
use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate_seven, Category, EvaluatedHand};

/// How one round ended: who won, what each winner received, and the pot they
/// contested. `share * winners.len()` may fall short of `pot`; the remainder
/// of a split pot is not distributed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundOutcome {
    /// Seat indices of the winners, in table order.
    pub winners: Vec<usize>,
    /// Amount each winner received.
    pub share: u64,
    /// Total pot at the end of the round.
    pub pot: u64,
    /// Winning hand category; `None` when the round ended on folds.
    pub category: Option<Category>,
}

#[derive(Debug)]
pub struct Table {
    players: Vec<Player>,
    community: Vec<Card>,
    pot: u64,
    button: usize,
}

impl Table {
    pub fn new(names: &[&str], starting_chips: u64) -> Self {
        let players = names.iter().map(|n| Player::new(*n, starting_chips)).collect();
        Self { players, community: Vec::new(), pot: 0, button: 0 }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Shared cards revealed so far this round.
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn button(&self) -> usize {
        self.button
    }

    /// Position the dealer button; the next `play_round` advances past it.
    pub fn set_button(&mut self, seat: usize) {
        if !self.players.is_empty() {
            self.button = seat % self.players.len();
        }
    }

    /// Drop players with no chips left and keep the button in range.
    pub fn remove_busted(&mut self) {
        self.players.retain(|p| p.chips() > 0);
        if self.players.is_empty() {
            self.button = 0;
        } else {
            self.button %= self.players.len();
        }
    }

    /// Play one full round: deal two cards to every seat, run pre-flop, flop,
    /// turn, and river betting, then resolve the showdown.
    ///
    /// If at any street boundary only one player is left unfolded, they take
    /// the whole pot immediately and the remaining streets are skipped.
    /// `DeckError` is fatal: a 52-card deck always covers a legal round, so
    /// running out means the caller handed in a short deck.
    pub fn play_round(
        &mut self,
        mut deck: Deck,
        source: &mut dyn ActionSource,
    ) -> Result<RoundOutcome, DeckError> {
        let n = self.players.len();
        if n < 2 {
            return Ok(RoundOutcome { winners: Vec::new(), share: 0, pot: 0, category: None });
        }
        self.community.clear();
        self.pot = 0;
        for p in &mut self.players {
            p.reset_for_round();
        }
        self.button = (self.button + 1) % n;

        for p in &mut self.players {
            let cards = deck.deal(2)?;
            p.set_hole([cards[0], cards[1]]);
        }

        let start = (self.button + 1) % n;
        BettingRound::new(&mut self.players, &mut self.pot, &self.community).run(start, source);
        if let Some(outcome) = self.lone_winner() {
            return Ok(outcome);
        }

        // Flop, turn, river.
        for draw in [3usize, 1, 1] {
            let mut cards = deck.deal(draw)?;
            self.community.append(&mut cards);
            BettingRound::new(&mut self.players, &mut self.pot, &self.community).run(start, source);
            if let Some(outcome) = self.lone_winner() {
                return Ok(outcome);
            }
        }

        Ok(self.showdown())
    }

    /// Award the pot when everyone else has folded.
    fn lone_winner(&mut self) -> Option<RoundOutcome> {
        let mut live = self.players.iter().enumerate().filter(|(_, p)| !p.folded());
        let (seat, _) = live.next()?;
        if live.next().is_some() {
            return None;
        }
        let pot = self.pot;
        self.players[seat].award(pot);
        self.pot = 0;
        Some(RoundOutcome { winners: vec![seat], share: pot, pot, category: None })
    }

    /// Evaluate every unfolded player's seven cards and split the pot among
    /// the holders of the maximum hand. Integer division; the remainder of a
    /// split pot stays undistributed.
    fn showdown(&mut self) -> RoundOutcome {
        debug_assert_eq!(self.community.len(), 5);
        let mut best: Option<EvaluatedHand> = None;
        let mut winners: Vec<usize> = Vec::new();
        for (seat, p) in self.players.iter().enumerate() {
            if p.folded() {
                continue;
            }
            let Some(hole) = p.hole() else { continue };
            let seven = [
                hole[0],
                hole[1],
                self.community[0],
                self.community[1],
                self.community[2],
                self.community[3],
                self.community[4],
            ];
            let eval = evaluate_seven(&seven);
            match best {
                None => {
                    best = Some(eval);
                    winners.push(seat);
                }
                Some(b) if eval > b => {
                    best = Some(eval);
                    winners.clear();
                    winners.push(seat);
                }
                Some(b) if eval == b => winners.push(seat),
                Some(_) => {}
            }
        }
        let pot = self.pot;
        let share = if winners.is_empty() { 0 } else { pot / winners.len() as u64 };
        for &seat in &winners {
            self.players[seat].award(share);
        }
        self.pot = 0;
        RoundOutcome { winners, share, pot, category: best.map(|e| e.category) }
    }
}
