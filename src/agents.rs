//! Action sources: pluggable deciders that answer "what does this seat do?".
//!
//! The betting round blocks on an [`ActionSource`] each turn and re-solicits
//! the same seat whenever the chosen action is rejected. Console input lives
//! in the binary; the library ships deterministic sources for tests plus a
//! small seeded bot.

use crate::betting::{Action, ActionError, Player, RoundContext, MIN_BET};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

/// Supplies an action whenever a seat is up. Implementations may consult the
/// player's own view (chips, commitment, hole cards) and the round context.
pub trait ActionSource {
    /// Called when `seat` must act. Blocks (conceptually) until a choice is made.
    fn choose(&mut self, seat: usize, player: &Player, ctx: &RoundContext<'_>) -> Action;

    /// Called when the previous choice for `seat` was rejected; `choose` will
    /// be called again for the same seat. Default is to ignore.
    fn rejected(&mut self, _seat: usize, _err: &ActionError) {}
}

/// Replays a fixed action script; folds once the script runs dry, like the
/// console source does on EOF, so an exhausted script ends the round.
/// Records prompts and rejections so tests can assert on solicitation counts.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    queue: VecDeque<Action>,
    prompts: usize,
    rejections: Vec<ActionError>,
}

impl ScriptedSource {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { queue: actions.into(), prompts: 0, rejections: Vec::new() }
    }

    /// How many times a seat was solicited (re-solicitations included).
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    pub fn rejections(&self) -> &[ActionError] {
        &self.rejections
    }
}

impl ActionSource for ScriptedSource {
    fn choose(&mut self, _seat: usize, _player: &Player, _ctx: &RoundContext<'_>) -> Action {
        self.prompts += 1;
        self.queue.pop_front().unwrap_or(Action::Fold)
    }

    fn rejected(&mut self, _seat: usize, err: &ActionError) {
        self.rejections.push(err.clone());
    }
}

/// Always checks when possible, otherwise calls. Never folds, never bets.
#[derive(Debug, Default)]
pub struct CheckCallSource;

impl ActionSource for CheckCallSource {
    fn choose(&mut self, _seat: usize, _player: &Player, ctx: &RoundContext<'_>) -> Action {
        if ctx.to_call > 0 {
            Action::Call
        } else {
            Action::Check
        }
    }
}

/// A minimal seeded bot: mostly passive, occasionally opens, folds when the
/// price gets steep. Deterministic for a fixed seed and action sequence.
#[derive(Debug)]
pub struct RandomBot {
    rng: StdRng,
    /// Probability of opening with a minimum bet when checking is free.
    open_rate: f64,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), open_rate: 0.2 }
    }

    pub fn with_open_rate(mut self, open_rate: f64) -> Self {
        self.open_rate = open_rate.clamp(0.0, 1.0);
        self
    }
}

impl ActionSource for RandomBot {
    fn choose(&mut self, _seat: usize, player: &Player, ctx: &RoundContext<'_>) -> Action {
        if ctx.to_call == 0 {
            if player.chips() >= MIN_BET && self.rng.random_bool(self.open_rate) {
                return Action::Bet(MIN_BET);
            }
            return Action::Check;
        }
        // Fold half the time when the call would eat most of the stack.
        let steep = ctx.to_call.saturating_mul(2) > player.chips();
        if steep && self.rng.random_bool(0.5) {
            return Action::Fold;
        }
        Action::Call
    }
}
