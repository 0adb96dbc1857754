//! Input parsing and validation for interactive commands.
//!
//! Validation functions return `ParseResult` or `Result<_, String>` so the
//! caller can print a clear message and re-prompt.

use headsup_engine::cards::{parse_cards, Card};
use headsup_engine::round::Action;

#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(Action),
    Quit,
    Invalid(String),
}

/// Parses one line typed at the action prompt.
///
/// Accepts `c`/`check`/`call`, `r N`/`raise N`, `f`/`fold` and `q`/`quit`,
/// case-insensitively.
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "fold" | "f" => ParseResult::Action(Action::Fold),
        "check" | "call" | "c" => ParseResult::Action(Action::CheckCall),
        "raise" | "r" => {
            if parts.len() < 2 {
                return ParseResult::Invalid(
                    "Raise requires an amount (e.g., 'raise 50')".to_string(),
                );
            }
            match parts[1].trim_start_matches('$').parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(Action::Raise(amount)),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Invalid raise amount".to_string()),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: check, call, raise <amount>, fold, q",
            parts[0]
        )),
    }
}

/// Parses exactly two hole cards, e.g. `"As Kd"`.
pub fn parse_hole(input: &str) -> Result<[Card; 2], String> {
    let cards = parse_cards(input).map_err(|e| e.to_string())?;
    let n = cards.len();
    cards
        .try_into()
        .map_err(|_| format!("Hole cards must be exactly 2 cards, got {}", n))
}

/// Parses an optional card list; `None` or blank means no cards.
pub fn parse_optional_cards(input: Option<&str>) -> Result<Vec<Card>, String> {
    match input {
        Some(s) if !s.trim().is_empty() => parse_cards(s).map_err(|e| e.to_string()),
        _ => Ok(Vec::new()),
    }
}
