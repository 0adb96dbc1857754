use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// An ordered 52-card deck consumed from the front.
///
/// The RNG is not part of the serialized form; a deserialized deck keeps its
/// remaining order and is reseeded from zero if shuffled again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    #[serde(skip, default = "default_rng")]
    rng: ChaCha20Rng,
}

fn default_rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0)
}

/// A freshly shuffled deck seeded from the OS.
pub fn new_shuffled_deck() -> Deck {
    let mut deck = Deck::new_with_seed(rand::random());
    deck.shuffle();
    deck
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// A deck whose first cards are `prefix` in the given order, followed by
    /// every other card in canonical order. Used for replaying known deals.
    pub fn stacked(prefix: &[Card]) -> Result<Self, GameError> {
        let mut seen = HashSet::with_capacity(prefix.len());
        for &c in prefix {
            if !seen.insert(c) {
                return Err(GameError::DuplicateCard(c));
            }
        }
        let mut cards = prefix.to_vec();
        cards.extend(full_deck().into_iter().filter(|c| !seen.contains(c)));
        Ok(Self {
            cards,
            position: 0,
            rng: default_rng(),
        })
    }

    /// Fisher–Yates shuffle of all 52 cards.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_one(&mut self) -> Result<Card, GameError> {
        let c = self
            .cards
            .get(self.position)
            .copied()
            .ok_or(GameError::DeckExhausted)?;
        self.position += 1;
        Ok(c)
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
