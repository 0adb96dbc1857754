use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::deck::Deck;
use crate::errors::{GameError, InvalidAction};
use crate::policy::DecisionPolicy;
use crate::round::{start_hand_with_deck, Action, Actor, PerActor, RoundEvent, RoundState};

pub const DEFAULT_STARTING_CHIPS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub starting_chips: u32,
    /// Seeds the per-hand shuffles; `None` draws a seed from the OS.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_chips: DEFAULT_STARTING_CHIPS,
            seed: None,
        }
    }
}

/// A heads-up table: the human player against a CPU seat driven by a
/// [`DecisionPolicy`]. Chip totals carry over from hand to hand.
///
/// # Examples
///
/// ```
/// use headsup_engine::engine::{Table, TableConfig};
/// use headsup_engine::policy::{DecisionContext, DecisionPolicy};
/// use headsup_engine::round::{Action, Actor};
///
/// struct AlwaysCall;
///
/// impl DecisionPolicy for AlwaysCall {
///     fn decide(&mut self, _ctx: &DecisionContext) -> Action {
///         Action::CheckCall
///     }
///     fn name(&self) -> &str {
///         "always-call"
///     }
/// }
///
/// let config = TableConfig { starting_chips: 500, seed: Some(7) };
/// let mut table = Table::new(&config, Box::new(AlwaysCall));
/// table.start_hand().unwrap();
///
/// // Checking every street down reaches showdown with no chips moved.
/// while table.hand_in_progress() {
///     table.act(Action::CheckCall).unwrap();
/// }
/// assert_eq!(table.chips(Actor::Player) + table.chips(Actor::Cpu), 1000);
/// ```
pub struct Table {
    stacks: PerActor<u32>,
    rng: ChaCha20Rng,
    policy: Box<dyn DecisionPolicy>,
    hand: Option<RoundState>,
    hands_played: u32,
}

impl Table {
    pub fn new(config: &TableConfig, policy: Box<dyn DecisionPolicy>) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            stacks: PerActor::new(config.starting_chips, config.starting_chips),
            rng: ChaCha20Rng::seed_from_u64(seed),
            policy,
            hand: None,
            hands_played: 0,
        }
    }

    /// Shuffles a fresh deck and deals the next hand. The player acts first.
    pub fn start_hand(&mut self) -> Result<&RoundState, GameError> {
        if self.hand_in_progress() {
            return Err(InvalidAction::HandInProgress.into());
        }
        if let Some(actor) = self.busted() {
            return Err(InvalidAction::EmptyStack(actor).into());
        }

        let mut deck = Deck::new_with_seed(self.rng.next_u64());
        deck.shuffle();
        let state = start_hand_with_deck(deck, self.stacks.player, self.stacks.cpu)?;
        self.hands_played += 1;
        debug!(hand = self.hands_played, policy = self.policy.name(), "dealt");
        Ok(&*self.hand.insert(state))
    }

    /// Applies the player's action, then lets the CPU act until it is the
    /// player's turn again or the hand is over.
    pub fn act(&mut self, action: Action) -> Result<Vec<RoundEvent>, GameError> {
        let state = match self.hand.as_mut() {
            Some(state) if !state.is_hand_over() => state,
            _ => return Err(InvalidAction::NoHandInProgress.into()),
        };

        let mut events = state.apply(Actor::Player, action)?;
        while !state.is_hand_over() && state.to_act() == Actor::Cpu {
            let ctx = if self.policy.sees_opponent_cards() {
                state.revealed_context(Actor::Cpu)
            } else {
                state.decision_context(Actor::Cpu)
            };
            let choice = self.policy.decide(&ctx);
            match state.apply(Actor::Cpu, choice) {
                Ok(more) => events.extend(more),
                Err(e) => {
                    warn!(policy = self.policy.name(), ?choice, error = %e, "illegal policy action, calling instead");
                    events.extend(state.apply(Actor::Cpu, Action::CheckCall)?);
                }
            }
        }

        if state.is_hand_over() {
            self.stacks = state.stacks();
        }
        Ok(events)
    }

    pub fn hand(&self) -> Option<&RoundState> {
        self.hand.as_ref()
    }

    pub fn hand_in_progress(&self) -> bool {
        self.hand.as_ref().is_some_and(|h| !h.is_hand_over())
    }

    pub fn chips(&self, actor: Actor) -> u32 {
        self.stacks[actor]
    }

    pub fn stacks(&self) -> PerActor<u32> {
        self.stacks
    }

    /// The seat that has run out of chips, if any.
    pub fn busted(&self) -> Option<Actor> {
        [Actor::Player, Actor::Cpu]
            .into_iter()
            .find(|&a| self.stacks[a] == 0)
    }

    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }
}
