use std::collections::HashSet;

use headsup_engine::cards::Card;
use headsup_engine::deck::{new_shuffled_deck, Deck};
use headsup_engine::errors::GameError;

fn deal_all(deck: &mut Deck) -> Vec<Card> {
    (0..deck.remaining()).map(|_| deck.deal_one().unwrap()).collect()
}

#[test]
fn shuffled_deck_has_52_unique_cards() {
    let mut deck = new_shuffled_deck();
    let cards = deal_all(&mut deck);
    assert_eq!(cards.len(), 52);
    let set: HashSet<_> = cards.iter().collect();
    assert_eq!(set.len(), 52);
    assert_eq!(deck.deal_one(), Err(GameError::DeckExhausted));
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(deal_all(&mut d1), deal_all(&mut d2), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        deal_all(&mut d1),
        deal_all(&mut d2),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn reset_restores_full_deck() {
    let mut deck = Deck::new_with_seed(9);
    deck.shuffle();
    for _ in 0..9 {
        deck.deal_one().unwrap();
    }
    assert_eq!(deck.remaining(), 43);
    deck.reset();
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn shuffle_moves_every_card_around() {
    // Over many shuffles, each position sees more than one distinct card.
    let mut deck = Deck::new_with_seed(77);
    let mut first: HashSet<Card> = HashSet::new();
    for _ in 0..200 {
        deck.shuffle();
        first.insert(deck.deal_one().unwrap());
    }
    assert!(first.len() > 30, "only {} distinct top cards", first.len());
}
