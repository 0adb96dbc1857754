use headsup_engine::cards::{parse_cards, Card};
use headsup_engine::equity::{estimate_strength, showdown_strength, unseen_pool};
use headsup_engine::errors::GameError;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn hole(s: &str) -> [Card; 2] {
    parse_cards(s).unwrap().try_into().unwrap()
}

#[test]
fn same_seed_gives_same_estimate() {
    let hero = hole("Ah Kh");
    let board = parse_cards("Qh 7c 2h").unwrap();
    let a = estimate_strength(&hero, &board, &[], 300, &mut ChaCha20Rng::seed_from_u64(5)).unwrap();
    let b = estimate_strength(&hero, &board, &[], 300, &mut ChaCha20Rng::seed_from_u64(5)).unwrap();
    assert_eq!(a, b);
    assert!((0.0..=1.0).contains(&a));
}

#[test]
fn aces_are_strong_and_seven_deuce_is_weak() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let aces = estimate_strength(&hole("As Ad"), &[], &[], 2000, &mut rng).unwrap();
    let trash = estimate_strength(&hole("7c 2d"), &[], &[], 2000, &mut rng).unwrap();
    assert!(aces > 0.75, "aces estimated at {}", aces);
    assert!(trash < 0.45, "seven-deuce estimated at {}", trash);
}

#[test]
fn made_nuts_on_river_always_wins() {
    // Royal flush on the river cannot lose.
    let board = parse_cards("Qh Jh Th 3c 2d").unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let s = estimate_strength(&hole("Ah Kh"), &board, &[], 200, &mut rng).unwrap();
    assert_eq!(s, 1.0);
}

#[test]
fn board_royal_flush_is_always_split() {
    let board = parse_cards("Ah Kh Qh Jh Th").unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let s = estimate_strength(&hole("2c 3d"), &board, &[], 100, &mut rng).unwrap();
    assert_eq!(s, 0.5);
}

#[test]
fn duplicate_cards_are_rejected() {
    let board = parse_cards("As 7c 2h").unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let card = board[0];
    assert_eq!(
        estimate_strength(&hole("As Kd"), &board, &[], 10, &mut rng),
        Err(GameError::DuplicateCard(card))
    );
    assert_eq!(
        unseen_pool(&hole("Qs Kd"), &board, &[card]),
        Err(GameError::DuplicateCard(card))
    );
}

#[test]
fn oversized_board_is_rejected() {
    let board = parse_cards("2c 3c 4c 5c 6c 7c").unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    assert!(matches!(
        estimate_strength(&hole("As Kd"), &board, &[], 10, &mut rng),
        Err(GameError::InvalidCardCount { actual: 6, .. })
    ));
}

#[test]
fn showdown_strength_is_exact() {
    let board = parse_cards("Ac Kd 7h 7s 2c").unwrap();
    assert_eq!(showdown_strength(&hole("As Ad"), &hole("Ks Kh"), &board).unwrap(), 1.0);
    assert_eq!(showdown_strength(&hole("Ks Kh"), &hole("As Ad"), &board).unwrap(), 0.0);
    assert_eq!(showdown_strength(&hole("3c 4d"), &hole("3h 4s"), &board).unwrap(), 0.5);
    assert!(matches!(
        showdown_strength(&hole("3c 4d"), &hole("3h 4s"), &board[..4]),
        Err(GameError::InvalidCardCount { actual: 4, .. })
    ));
}
