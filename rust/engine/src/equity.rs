//! Monte Carlo win-probability estimates.
//!
//! The estimate is a point value in `[0, 1]`: a win counts 1, a split 0.5 and
//! a loss 0, averaged over the sampled runouts. Variance shrinks with the
//! sample count; nothing here is seeded implicitly, callers pass the RNG.

use std::cmp::Ordering;
use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::hand::evaluate_best;

/// The cards nobody at the table has seen, in canonical deck order.
///
/// Fails with [`GameError::DuplicateCard`] if any card appears more than once
/// across the hero's hole cards, the board and the dead list.
pub fn unseen_pool(
    hero: &[Card; 2],
    community: &[Card],
    dead: &[Card],
) -> Result<Vec<Card>, GameError> {
    let mut known = HashSet::with_capacity(2 + community.len() + dead.len());
    for &c in hero.iter().chain(community).chain(dead) {
        if !known.insert(c) {
            return Err(GameError::DuplicateCard(c));
        }
    }
    Ok(full_deck()
        .into_iter()
        .filter(|c| !known.contains(c))
        .collect())
}

/// Estimates the hero's chance of beating one random unknown hand.
///
/// Each sample shuffles the unseen pool, deals the opponent two cards, runs
/// the board out to five and compares the best hands.
pub fn estimate_strength<R: Rng + ?Sized>(
    hero: &[Card; 2],
    community: &[Card],
    dead: &[Card],
    samples: u32,
    rng: &mut R,
) -> Result<f64, GameError> {
    if samples == 0 {
        return Err(GameError::NoSamples);
    }
    if community.len() > 5 {
        return Err(GameError::InvalidCardCount {
            expected: "0 to 5",
            actual: community.len(),
        });
    }
    let mut pool = unseen_pool(hero, community, dead)?;
    let missing = 5 - community.len();
    if pool.len() < 2 + missing {
        return Err(GameError::DeckExhausted);
    }

    let mut board = Vec::with_capacity(5);
    let mut hero_cards = Vec::with_capacity(7);
    let mut villain_cards = Vec::with_capacity(7);
    let mut points = 0u32;

    for _ in 0..samples {
        pool.shuffle(rng);
        board.clear();
        board.extend_from_slice(community);
        board.extend_from_slice(&pool[2..2 + missing]);

        hero_cards.clear();
        hero_cards.extend_from_slice(hero);
        hero_cards.extend_from_slice(&board);
        villain_cards.clear();
        villain_cards.extend_from_slice(&pool[..2]);
        villain_cards.extend_from_slice(&board);

        let ours = evaluate_best(&hero_cards)?;
        let theirs = evaluate_best(&villain_cards)?;
        // Counted in half points so ties stay integral.
        points += match ours.score.cmp(&theirs.score) {
            Ordering::Greater => 2,
            Ordering::Equal => 1,
            Ordering::Less => 0,
        };
    }

    Ok(f64::from(points) / (2.0 * f64::from(samples)))
}

/// Exact result against a known opponent on a complete board: 1, 0.5 or 0.
pub fn showdown_strength(
    hero: &[Card; 2],
    villain: &[Card; 2],
    board: &[Card],
) -> Result<f64, GameError> {
    if board.len() != 5 {
        return Err(GameError::InvalidCardCount {
            expected: "5",
            actual: board.len(),
        });
    }
    unseen_pool(hero, board, villain)?;

    let ours = evaluate_best(&[hero.as_slice(), board].concat())?;
    let theirs = evaluate_best(&[villain.as_slice(), board].concat())?;
    Ok(match ours.score.cmp(&theirs.score) {
        Ordering::Greater => 1.0,
        Ordering::Equal => 0.5,
        Ordering::Less => 0.0,
    })
}
