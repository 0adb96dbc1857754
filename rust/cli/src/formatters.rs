//! Card, board, and table formatters for terminal display.
//!
//! Unicode suit symbols are used where the terminal is expected to render
//! them, with an ASCII letter fallback (`h d c s`) otherwise.
//!
//! ## Example
//!
//! ```rust
//! use headsup_engine::cards::{Card, Rank, Suit};
//! use headsup_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use headsup_engine::cards::{Card, Suit};
use headsup_engine::round::{Action, Actor, RoundState};

pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(card.suit))
}

pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_action(action: &Action) -> String {
    match action {
        Action::CheckCall => "check/call".to_string(),
        Action::Raise(n) => format!("raise {}", n),
        Action::Fold => "fold".to_string(),
    }
}

/// Status block shown before each prompt: street, board, pot, stacks and
/// what the player is facing.
pub fn format_table_status(state: &RoundState) -> String {
    let mut lines = vec![
        format!("Street: {}", state.street()),
        format!("Board: {}", format_board(state.community())),
        format!("Your cards: {}", format_board(&state.hole_cards(Actor::Player))),
        format!(
            "Pot: ${}  You: ${}  CPU: ${}",
            state.pot(),
            state.chips(Actor::Player),
            state.chips(Actor::Cpu)
        ),
    ];
    let to_call = state.to_call(Actor::Player);
    let raise = match state.legal_raise_range(Actor::Player) {
        Some((min, max)) => format!("raise {}..{}", min, max),
        None => "no raise".to_string(),
    };
    if to_call > 0 {
        lines.push(format!("To call: ${} ({})", to_call, raise));
    } else {
        lines.push(format!("Nothing to call ({})", raise));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsup_engine::cards::parse_cards;
    use headsup_engine::deck::Deck;
    use headsup_engine::round::start_hand_with_deck;

    #[test]
    fn test_format_action() {
        assert_eq!(format_action(&Action::Raise(40)), "raise 40");
        assert_eq!(format_action(&Action::Fold), "fold");
    }

    #[test]
    fn test_format_empty_board() {
        assert_eq!(format_board(&[]), "[]");
    }

    #[test]
    fn test_table_status_lists_pot_and_raise_range() {
        let deck = Deck::stacked(&parse_cards("As Ad Ks Kh").unwrap()).unwrap();
        let state = start_hand_with_deck(deck, 1000, 800).unwrap();
        let status = format_table_status(&state);
        assert!(status.contains("Street: Preflop"));
        assert!(status.contains("Pot: $0  You: $1000  CPU: $800"));
        assert!(status.contains("Nothing to call (raise 1..1000)"));
    }
}
