use thiserror::Error;

use crate::cards::Card;
use crate::round::Actor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The deck has no cards left. A hand draws at most 9 of 52 cards, so this
    /// is an internal invariant violation rather than a recoverable condition.
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Invalid action: {0}")]
    InvalidAction(InvalidAction),
    #[error("Duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("Invalid card count: expected {expected}, got {actual}")]
    InvalidCardCount { expected: &'static str, actual: usize },
    #[error("Sample count must be positive")]
    NoSamples,
    #[error("Cannot parse card: {0:?}")]
    ParseCard(String),
    #[error("Stacks too large: {player} + {cpu} overflows the chip count")]
    StacksTooLarge { player: u32, cpu: u32 },
}

/// Why the round state machine rejected an action. Rejections never modify state.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("A hand is already in progress")]
    HandInProgress,
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("It's not {actual}'s turn (expected {expected})")]
    NotYourTurn { expected: Actor, actual: Actor },
    #[error("{0} already raised this street")]
    RaiseAlreadyUsed(Actor),
    #[error("Raise amount must be positive")]
    ZeroRaise,
    #[error("Insufficient chips: need {needed}, have {available}")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("{0} has no chips left")]
    EmptyStack(Actor),
    #[error("{0} is all-in and cannot face a raise")]
    OpponentAllIn(Actor),
}

impl From<InvalidAction> for GameError {
    fn from(reason: InvalidAction) -> Self {
        GameError::InvalidAction(reason)
    }
}
