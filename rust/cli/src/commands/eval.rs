//! Hand evaluation command: best five-card hand among 5 to 7 cards.

use crate::error::CliError;
use crate::formatters::format_board;
use headsup_engine::cards::parse_cards;
use headsup_engine::errors::GameError;
use headsup_engine::hand::evaluate_best;
use std::collections::HashSet;
use std::io::Write;

/// Handle the eval command.
///
/// Card tokens may be given as separate arguments or as one quoted string.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(&cards.join(" "))?;
    let mut seen = HashSet::with_capacity(cards.len());
    if let Some(&dup) = cards.iter().find(|&&c| !seen.insert(c)) {
        return Err(GameError::DuplicateCard(dup).into());
    }
    let best = evaluate_best(&cards)?;

    writeln!(out, "Cards: {}", format_board(&cards))?;
    writeln!(out, "Best hand: {}", best.name)?;
    writeln!(out, "Category: {}", best.category().name())?;
    writeln!(out, "Chosen: {}", format_board(&best.cards))?;
    let values: Vec<String> = best.score.values().iter().map(u8::to_string).collect();
    writeln!(out, "Score: [{}]", values.join(", "))?;
    Ok(())
}
