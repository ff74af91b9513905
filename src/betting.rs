//! One street of betting: turn order, raise/call/fold resolution, and round
//! termination. The round owns no players; it mutates the table's player list
//! in place and moves chips into the shared pot.

use crate::agents::ActionSource;
use crate::cards::Card;
use std::str::FromStr;

/// Flat minimum for an opening bet.
pub const MIN_BET: u64 = 20;

/// A validated-at-construction player action. Amounts are the chips the
/// player is putting in on top of their current street commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet(u64),
    Raise(u64),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("cannot check facing a bet: {to_call} to call")]
    CheckFacingBet { to_call: u64 },
    #[error("nothing to call")]
    NothingToCall,
    #[error("cannot bet facing a bet of {current}; raise instead")]
    BetFacingBet { current: u64 },
    #[error("cannot raise without a bet; bet instead")]
    RaiseWithoutBet,
    #[error("minimum bet is {min}, got {got}")]
    BelowMinimumBet { min: u64, got: u64 },
    #[error("raise must be at least the current bet of {current}, got {got}")]
    RaiseBelowCurrentBet { current: u64, got: u64 },
    #[error("not enough chips: need {need}, have {have}")]
    InsufficientChips { need: u64, have: u64 },
    #[error("invalid amount: '{0}'")]
    MalformedAmount(String),
    #[error("unknown action: '{0}'")]
    UnknownAction(String),
}

impl FromStr for Action {
    type Err = ActionError;

    /// Parse a console action: `fold`, `check`, `call`, `bet <n>`, `raise <n>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let verb = parts.next().unwrap_or("").to_ascii_lowercase();
        let amount = parts.next();
        let parse_amount = |raw: Option<&str>| -> Result<u64, ActionError> {
            let raw = raw.ok_or_else(|| ActionError::MalformedAmount(String::new()))?;
            match raw.parse::<u64>() {
                Ok(v) if v > 0 => Ok(v),
                _ => Err(ActionError::MalformedAmount(raw.to_string())),
            }
        };
        match verb.as_str() {
            "fold" => Ok(Action::Fold),
            "check" => Ok(Action::Check),
            "call" => Ok(Action::Call),
            "bet" => Ok(Action::Bet(parse_amount(amount)?)),
            "raise" => Ok(Action::Raise(parse_amount(amount)?)),
            _ => Err(ActionError::UnknownAction(s.trim().to_string())),
        }
    }
}

/// A seat at the table, viewed by the betting round.
///
/// Invariants: `all_in` implies `chips == 0`; `folded` is terminal for the
/// rest of the round and the player is never solicited again.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    chips: u64,
    current_bet: u64,
    folded: bool,
    all_in: bool,
    hole: Option<[Card; 2]>,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u64) -> Self {
        Self { name: name.into(), chips, current_bet: 0, folded: false, all_in: false, hole: None }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u64 {
        self.chips
    }
    /// Chips committed on the current street.
    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }
    pub fn folded(&self) -> bool {
        self.folded
    }
    pub fn all_in(&self) -> bool {
        self.all_in
    }
    pub fn hole(&self) -> Option<[Card; 2]> {
        self.hole
    }

    /// Live means the player can still be solicited for an action.
    pub fn is_live(&self) -> bool {
        !self.folded && !self.all_in
    }

    pub(crate) fn set_hole(&mut self, hole: [Card; 2]) {
        self.hole = Some(hole);
    }

    pub(crate) fn reset_for_round(&mut self) {
        self.current_bet = 0;
        self.folded = false;
        self.hole = None;
        // A seat with no chips sits out rather than acting with nothing behind.
        self.all_in = self.chips == 0;
    }

    pub(crate) fn award(&mut self, amount: u64) {
        self.chips += amount;
    }

    /// Move up to `amount` chips from the stack into the street commitment.
    /// Paying the whole stack flips the all-in flag. Returns the paid amount.
    fn pay(&mut self, amount: u64) -> u64 {
        let paid = self.chips.min(amount);
        self.chips -= paid;
        self.current_bet += paid;
        if self.chips == 0 {
            self.all_in = true;
        }
        paid
    }
}

/// Everything an action source may consult when choosing for a seat.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct RoundContext<'a> {
    pub pot: u64,
    /// Highest total street commitment required to stay in.
    pub current_bet: u64,
    /// What the solicited player still owes to match `current_bet`.
    pub to_call: u64,
    pub min_bet: u64,
    pub community: &'a [Card],
}

/// One street of betting. Created fresh per street and consumed by `run`.
pub struct BettingRound<'a> {
    players: &'a mut [Player],
    pot: &'a mut u64,
    community: &'a [Card],
    current_bet: u64,
    last_aggressor: Option<usize>,
}

impl<'a> BettingRound<'a> {
    pub fn new(players: &'a mut [Player], pot: &'a mut u64, community: &'a [Card]) -> Self {
        Self { players, pot, community, current_bet: 0, last_aggressor: None }
    }

    /// Drive the street to completion, starting from `start_index`.
    ///
    /// Invalid actions are rejected and the same player re-solicited; the
    /// round state never advances on a rejected action. The street closes
    /// when the cursor reaches the recorded aggressor, when it wraps back to
    /// `start_index` with no aggressor (everyone checked), or when fewer than
    /// two non-folded players remain.
    pub fn run(mut self, start_index: usize, source: &mut dyn ActionSource) {
        let n = self.players.len();
        if n == 0 {
            return;
        }
        let start = start_index % n;
        for p in self.players.iter_mut() {
            if p.is_live() {
                p.current_bet = 0;
            }
        }
        // Folds decrement this; going all-in does not, since an all-in player
        // still contests the pot.
        let mut active = self.players.iter().filter(|p| p.is_live()).count();
        let mut idx = start;
        while active > 1 {
            if self.last_aggressor == Some(idx) {
                // Everyone else has matched or folded since the last raise.
                break;
            }
            if self.players[idx].is_live() {
                loop {
                    let ctx = RoundContext {
                        pot: *self.pot,
                        current_bet: self.current_bet,
                        to_call: self.current_bet.saturating_sub(self.players[idx].current_bet),
                        min_bet: MIN_BET,
                        community: self.community,
                    };
                    let action = source.choose(idx, &self.players[idx], &ctx);
                    match self.apply(idx, action) {
                        Ok(folded) => {
                            if folded {
                                active -= 1;
                            }
                            break;
                        }
                        Err(err) => source.rejected(idx, &err),
                    }
                }
            }
            idx = (idx + 1) % n;
            if self.last_aggressor.is_none() && idx == start {
                // Full pass with no aggression: everyone checked.
                break;
            }
            if self.players.iter().filter(|p| !p.folded).count() <= 1 {
                break;
            }
        }
    }

    /// Validate and apply one action for the seat at `idx`. Returns whether
    /// the player folded. On `Err` nothing has changed.
    fn apply(&mut self, idx: usize, action: Action) -> Result<bool, ActionError> {
        let to_call = self.current_bet.saturating_sub(self.players[idx].current_bet);
        let chips = self.players[idx].chips;
        match action {
            Action::Fold => {
                self.players[idx].folded = true;
                Ok(true)
            }
            Action::Check => {
                if to_call > 0 {
                    return Err(ActionError::CheckFacingBet { to_call });
                }
                Ok(false)
            }
            Action::Call => {
                if to_call == 0 {
                    return Err(ActionError::NothingToCall);
                }
                // A short stack calls for whatever it has left: an all-in call.
                let paid = self.players[idx].pay(to_call);
                *self.pot += paid;
                Ok(false)
            }
            Action::Bet(amount) => {
                if self.current_bet > 0 {
                    return Err(ActionError::BetFacingBet { current: self.current_bet });
                }
                if amount < MIN_BET {
                    return Err(ActionError::BelowMinimumBet { min: MIN_BET, got: amount });
                }
                if amount > chips {
                    return Err(ActionError::InsufficientChips { need: amount, have: chips });
                }
                let paid = self.players[idx].pay(amount);
                *self.pot += paid;
                self.current_bet = self.players[idx].current_bet;
                self.last_aggressor = Some(idx);
                Ok(false)
            }
            Action::Raise(amount) => {
                if self.current_bet == 0 {
                    return Err(ActionError::RaiseWithoutBet);
                }
                if chips <= to_call {
                    // Not enough behind to do more than call.
                    return Err(ActionError::InsufficientChips { need: to_call + 1, have: chips });
                }
                if amount < self.current_bet {
                    return Err(ActionError::RaiseBelowCurrentBet {
                        current: self.current_bet,
                        got: amount,
                    });
                }
                if amount > chips {
                    return Err(ActionError::InsufficientChips { need: amount, have: chips });
                }
                let paid = self.players[idx].pay(amount);
                *self.pot += paid;
                // A validated raise is aggression even when the new total only
                // matches the current bet; everyone else must answer it.
                self.current_bet = self.players[idx].current_bet;
                self.last_aggressor = Some(idx);
                Ok(false)
            }
        }
    }
}
