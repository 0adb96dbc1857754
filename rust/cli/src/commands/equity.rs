//! Equity command: Monte Carlo estimate of a hand's chance to win, or the
//! exact result against a known opponent hand on a complete board.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_board;
use crate::validation::{parse_hole, parse_optional_cards};
use headsup_engine::equity::{estimate_strength, showdown_strength};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;

/// Arguments of the `equity` subcommand, as typed on the command line.
#[derive(Debug, Clone, Default)]
pub struct EquityArgs {
    pub hole: String,
    pub board: Option<String>,
    pub dead: Option<String>,
    pub samples: Option<u32>,
    pub seed: Option<u64>,
    pub villain: Option<String>,
}

/// Handle the equity command. Flags override the configured samples and seed.
pub fn handle_equity_command(
    args: &EquityArgs,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hole = parse_hole(&args.hole).map_err(CliError::InvalidInput)?;
    let board = parse_optional_cards(args.board.as_deref()).map_err(CliError::InvalidInput)?;

    writeln!(out, "Hole: {}", format_board(&hole))?;
    writeln!(out, "Board: {}", format_board(&board))?;

    if let Some(villain) = &args.villain {
        let villain = parse_hole(villain).map_err(CliError::InvalidInput)?;
        if board.len() != 5 {
            return Err(CliError::InvalidInput(
                "--villain requires a complete 5-card --board".to_string(),
            ));
        }
        let result = showdown_strength(&hole, &villain, &board)?;
        let verdict = match result {
            r if r > 0.5 => "win",
            r if r < 0.5 => "loss",
            _ => "split",
        };
        writeln!(out, "Villain: {}", format_board(&villain))?;
        writeln!(out, "Result: {} ({:.1})", verdict, result)?;
        return Ok(());
    }

    let dead = parse_optional_cards(args.dead.as_deref()).map_err(CliError::InvalidInput)?;
    let samples = args.samples.unwrap_or(cfg.samples);
    let seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let strength = estimate_strength(&hole, &board, &dead, samples, &mut rng)?;

    if !dead.is_empty() {
        writeln!(out, "Dead: {}", format_board(&dead))?;
    }
    writeln!(out, "Samples: {} (seed {})", samples, seed)?;
    writeln!(out, "Strength: {:.4}", strength)?;
    Ok(())
}
