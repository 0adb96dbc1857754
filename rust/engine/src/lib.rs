//! # headsup-engine: Heads-up Hold'em Round Engine
//!
//! Rules engine for one human player against one computer opponent in
//! no-limit Texas Hold'em, one hand at a time. Everything here is pure game
//! logic: no I/O, no terminal handling, no persistence.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and display
//! - [`deck`] - Seeded, stackable 52-card deck
//! - [`hand`] - Five-card scoring and best-of-seven selection
//! - [`equity`] - Monte Carlo win-probability estimates
//! - [`round`] - Betting-round state machine for a single hand
//! - [`policy`] - The seam automated opponents plug into
//! - [`engine`] - Table driver that carries chips between hands
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use headsup_engine::cards::parse_cards;
//! use headsup_engine::hand::{evaluate_best, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let best = evaluate_best(&cards).unwrap();
//! assert_eq!(best.category(), Category::StraightFlush);
//! ```
//!
//! ## Playing a Hand
//!
//! ```rust
//! use headsup_engine::deck::Deck;
//! use headsup_engine::round::{apply_action, start_hand_with_deck, Action, Actor, Street};
//!
//! let mut deck = Deck::new_with_seed(42);
//! deck.shuffle();
//! let state = start_hand_with_deck(deck, 1000, 1000).unwrap();
//!
//! let (state, _) = apply_action(&state, Actor::Player, Action::Raise(50)).unwrap();
//! let (state, events) = apply_action(&state, Actor::Cpu, Action::CheckCall).unwrap();
//! assert_eq!(state.street(), Street::Flop);
//! assert_eq!(state.pot(), 100);
//! assert_eq!(events[0].to_string(), "CPU calls $50.");
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod equity;
pub mod errors;
pub mod hand;
pub mod policy;
pub mod round;
