//! Equity-driven opponent.
//!
//! Each decision starts from a Monte Carlo estimate of the hand's chance to
//! win against one random hand. Facing a bet, a weak estimate usually folds;
//! with nothing to call, a strong estimate sometimes raises about half the pot.
//!
//! With [`Personality::reads_opponent`] set the estimate uses the opponent's
//! real hole cards: they are removed from the sampling pool, and on a complete
//! board the result is the exact showdown.

use headsup_engine::equity::{estimate_strength, showdown_strength};
use headsup_engine::errors::GameError;
use headsup_engine::policy::{DecisionContext, DecisionPolicy};
use headsup_engine::round::Action;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, warn};

/// Tunable numbers behind [`BaselineAI`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Personality {
    /// Monte Carlo samples per decision.
    pub samples: u32,
    /// Fold threshold with nothing at stake.
    pub fold_base: f64,
    /// Added to the threshold in proportion to `to_call / (chips + pot)`.
    pub fold_pressure: f64,
    /// Chance to actually fold when below the threshold.
    pub fold_chance: f64,
    /// Strength needed before a raise is considered.
    pub raise_threshold: f64,
    pub raise_chance: f64,
    pub raise_pot_fraction: f64,
    pub raise_min: u32,
    pub raise_max: u32,
    /// Ask the table for the opponent's hole cards and use them.
    pub reads_opponent: bool,
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            samples: 120,
            fold_base: 0.20,
            fold_pressure: 0.50,
            fold_chance: 0.80,
            raise_threshold: 0.62,
            raise_chance: 0.55,
            raise_pot_fraction: 0.5,
            raise_min: 20,
            raise_max: 200,
            reads_opponent: false,
        }
    }
}

impl Personality {
    /// Strength below which a bet of `to_call` is usually folded to.
    pub fn fold_threshold(&self, to_call: u32, chips: u32, pot: u32) -> f64 {
        let exposure = f64::from(chips.saturating_add(pot).max(1));
        self.fold_base + f64::from(to_call) / exposure * self.fold_pressure
    }

    /// Pot fraction raised to `raise_min`, capped at `raise_max`, then at
    /// what is affordable. `raise_max` wins when the bounds are inverted.
    pub fn raise_size(&self, pot: u32, max_raise: u32) -> u32 {
        let wanted = (f64::from(pot) * self.raise_pot_fraction).floor() as u32;
        wanted.max(self.raise_min).min(self.raise_max).min(max_raise)
    }
}

/// Baseline opponent. Deterministic for a given seed.
///
/// # Example
///
/// ```rust
/// use headsup_ai::baseline::BaselineAI;
/// use headsup_engine::policy::DecisionPolicy;
///
/// let ai = BaselineAI::new(7);
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAI {
    personality: Personality,
    rng: ChaCha20Rng,
}

impl BaselineAI {
    pub fn new(seed: u64) -> Self {
        Self::with_personality(seed, Personality::default())
    }

    pub fn with_personality(seed: u64, personality: Personality) -> Self {
        Self {
            personality,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn personality(&self) -> &Personality {
        &self.personality
    }

    /// Chance of winning from what `ctx` shows, sampled unless the opponent's
    /// cards and the full board are both known.
    pub fn strength(&mut self, ctx: &DecisionContext) -> Result<f64, GameError> {
        let samples = self.personality.samples;
        let villain = ctx.opponent_hole.filter(|_| self.personality.reads_opponent);
        match villain {
            Some(villain) if ctx.community.len() == 5 => {
                showdown_strength(&ctx.hole, &villain, &ctx.community)
            }
            Some(villain) => {
                estimate_strength(&ctx.hole, &ctx.community, &villain, samples, &mut self.rng)
            }
            None => estimate_strength(&ctx.hole, &ctx.community, &[], samples, &mut self.rng),
        }
    }

    /// Picks an action for an already estimated `strength`.
    pub fn choose(&mut self, ctx: &DecisionContext, strength: f64) -> Action {
        let p = self.personality;
        if ctx.facing_bet() {
            let threshold = p.fold_threshold(ctx.to_call, ctx.chips, ctx.pot);
            if strength < threshold && self.rng.random::<f64>() < p.fold_chance {
                return Action::Fold;
            }
            return Action::CheckCall;
        }

        if ctx.can_raise && strength > p.raise_threshold && self.rng.random::<f64>() < p.raise_chance {
            let amount = p.raise_size(ctx.pot, ctx.max_raise);
            if amount > 0 {
                return Action::Raise(amount);
            }
        }
        Action::CheckCall
    }
}

impl DecisionPolicy for BaselineAI {
    fn decide(&mut self, ctx: &DecisionContext) -> Action {
        let strength = match self.strength(ctx) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "strength estimate failed, checking/calling");
                return Action::CheckCall;
            }
        };
        let action = self.choose(ctx, strength);
        debug!(street = %ctx.street, strength, to_call = ctx.to_call, ?action, "baseline decision");
        action
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }

    fn sees_opponent_cards(&self) -> bool {
        self.personality.reads_opponent
    }
}
