//! Deal command: deals one hand, checks it down and shows the result.
//!
//! Useful for inspecting seeded shuffles: the same seed always prints the
//! same hand.

use crate::error::CliError;
use crate::formatters::format_board;
use headsup_engine::deck::Deck;
use headsup_engine::engine::DEFAULT_STARTING_CHIPS;
use headsup_engine::round::{Action, Actor, start_hand_with_deck};
use std::io::Write;

/// Handle the deal command.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    let mut state = start_hand_with_deck(deck, DEFAULT_STARTING_CHIPS, DEFAULT_STARTING_CHIPS)?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Player: {}", format_board(&state.hole_cards(Actor::Player)))?;
    writeln!(out, "CPU: {}", format_board(&state.hole_cards(Actor::Cpu)))?;
    while !state.is_hand_over() {
        let actor = state.to_act();
        for event in state.apply(actor, Action::CheckCall)? {
            writeln!(out, "{}", event)?;
        }
    }
    writeln!(out, "Board: {}", format_board(state.community()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_with_seed_is_deterministic() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command(Some(42), &mut a).unwrap();
        handle_deal_command(Some(42), &mut b).unwrap();
        assert_eq!(a, b);

        let output = String::from_utf8(a).unwrap();
        assert!(output.starts_with("Seed: 42\n"));
        assert!(output.contains("Player: ["));
        assert!(output.contains("Flop dealt: ["));
        assert!(output.contains("River dealt: ["));
        assert!(output.contains("Showdown: you have "));
    }

    #[test]
    fn test_deal_command_without_seed() {
        let mut out = Vec::new();
        assert!(handle_deal_command(None, &mut out).is_ok());
    }
}
