use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::round::{Action, Actor, Street};

/// What one seat can see when it is asked to act.
///
/// Built by [`RoundState::decision_context`](crate::round::RoundState::decision_context),
/// which leaves the opponent's hole cards out. A policy that answers `true`
/// from [`DecisionPolicy::sees_opponent_cards`] is given
/// [`RoundState::revealed_context`](crate::round::RoundState::revealed_context) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionContext {
    pub actor: Actor,
    pub street: Street,
    pub hole: [Card; 2],
    pub community: Vec<Card>,
    /// Chips needed to match the opponent's street bet.
    pub to_call: u32,
    pub chips: u32,
    pub opponent_chips: u32,
    pub pot: u32,
    pub can_raise: bool,
    /// Largest legal raise on top of the call; 0 when raising is not allowed.
    pub max_raise: u32,
    pub opponent_hole: Option<[Card; 2]>,
}

impl DecisionContext {
    pub fn facing_bet(&self) -> bool {
        self.to_call > 0
    }
}

/// Chooses actions for an automated seat.
pub trait DecisionPolicy: Send {
    fn decide(&mut self, ctx: &DecisionContext) -> Action;

    fn name(&self) -> &str;

    /// Whether the table should show this policy the opponent's hole cards.
    fn sees_opponent_cards(&self) -> bool {
        false
    }
}
