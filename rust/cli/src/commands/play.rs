//! # Play Command
//!
//! Interactive heads-up play against the CPU. Each prompt shows the street,
//! board, pot and stacks; the player answers with `c`, `r N`, `f` or `q`.
//! The CPU replies immediately and every resulting notice is printed.
//! Chips carry over between hands until the requested number of hands is
//! played, a stack runs out, or the player quits.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_board, format_table_status};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use headsup_ai::create_ai;
use headsup_engine::engine::{Table, TableConfig};
use headsup_engine::round::{Actor, HandOutcome};
use std::io::{BufRead, Write};

/// Command-line overrides for `play`; unset values fall back to the config.
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    pub hands: Option<u32>,
    pub seed: Option<u64>,
    pub chips: Option<u32>,
    pub ai: Option<String>,
}

/// Handle the play command: interactive gameplay reading actions from `stdin`.
///
/// # Errors
///
/// `CliError::InvalidInput` for zero hands or chips, `CliError::Config` for an
/// unknown AI, `CliError::Io` when output cannot be written.
pub fn handle_play_command(
    args: &PlayArgs,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let hands = args.hands.unwrap_or(1);
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let chips = args.chips.unwrap_or(cfg.starting_chips);
    if chips == 0 {
        ui::write_error(err, "chips must be >= 1")?;
        return Err(CliError::InvalidInput("chips must be >= 1".to_string()));
    }
    let seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let kind = args.ai.as_deref().unwrap_or(&cfg.ai);
    let policy = create_ai(kind, seed)?;

    writeln!(
        out,
        "play: ai={} hands={} seed={} chips={}",
        policy.name(),
        hands,
        seed,
        chips
    )?;

    let config = TableConfig {
        starting_chips: chips,
        seed: Some(seed),
    };
    let mut table = Table::new(&config, policy);
    let mut played = 0u32;

    'session: for i in 1..=hands {
        if let Some(busted) = table.busted() {
            writeln!(out, "{} is out of chips.", busted)?;
            break;
        }
        ui::write_separator(out)?;
        writeln!(out, "Hand {}", i)?;
        table.start_hand()?;

        while let Some(state) = table.hand().filter(|h| !h.is_hand_over()) {
            writeln!(out, "{}", format_table_status(state))?;
            write!(out, "Action (c = check/call, r N = raise, f = fold, q = quit): ")?;
            out.flush()?;

            let Some(line) = read_stdin_line(stdin) else {
                writeln!(out)?;
                break 'session;
            };
            match parse_player_action(&line) {
                ParseResult::Action(action) => match table.act(action) {
                    Ok(events) => {
                        for event in events {
                            writeln!(out, "{}", event)?;
                        }
                    }
                    Err(e) => ui::write_error(err, &e.to_string())?,
                },
                ParseResult::Quit => break 'session,
                ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            }
        }

        if let Some(state) = table.hand()
            && let Some(HandOutcome::Showdown { .. }) = state.outcome()
        {
            writeln!(
                out,
                "CPU showed {}",
                format_board(&state.hole_cards(Actor::Cpu))
            )?;
        }
        played += 1;
    }

    if table.hand_in_progress() {
        writeln!(out, "Hand abandoned.")?;
    }
    writeln!(out, "Hands played: {}", played)?;
    writeln!(
        out,
        "Final stacks: you ${}, CPU ${}",
        table.chips(Actor::Player),
        table.chips(Actor::Cpu)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(args: PlayArgs, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let cfg = Config::default();
        let result = handle_play_command(&args, &cfg, &mut out, &mut err, &mut stdin);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn passive(hands: u32) -> PlayArgs {
        PlayArgs {
            hands: Some(hands),
            seed: Some(42),
            chips: Some(500),
            ai: Some("passive".into()),
        }
    }

    #[test]
    fn test_quit_immediately() {
        let (result, out, _) = run(passive(1), "q\n");
        assert!(result.is_ok());
        assert!(out.contains("play: ai=PassiveAI hands=1 seed=42 chips=500"));
        assert!(out.contains("Hand abandoned."));
        assert!(out.contains("Hands played: 0"));
        assert!(out.contains("Final stacks: you $500, CPU $500"));
    }

    #[test]
    fn test_check_down_to_showdown() {
        let (result, out, err) = run(passive(1), "c\nc\nc\nc\n");
        assert!(result.is_ok(), "{err}");
        assert!(out.contains("You check."));
        assert!(out.contains("CPU checks."));
        assert!(out.contains("Flop dealt: ["));
        assert!(out.contains("Showdown: you have "));
        assert!(out.contains("CPU showed ["));
        assert!(out.contains("Hands played: 1"));
    }

    #[test]
    fn test_fold_ends_hand_and_next_hand_starts() {
        let (result, out, _) = run(passive(2), "f\nq\n");
        assert!(result.is_ok());
        assert!(out.contains("You fold."));
        assert!(out.contains("CPU wins $0."));
        assert!(out.contains("Hand 2"));
        assert!(out.contains("Hands played: 1"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (result, out, err) = run(passive(1), "bet 5\nr 0\nr 99999\nq\n");
        assert!(result.is_ok());
        assert!(err.contains("Unrecognized action 'bet'"));
        assert!(err.contains("Raise amount must be positive"));
        assert!(err.contains("Insufficient chips"));
        assert!(out.contains("Hand abandoned."));
    }

    #[test]
    fn test_raise_is_called_by_passive_cpu() {
        let (result, out, _) = run(passive(1), "r 50\nq\n");
        assert!(result.is_ok());
        assert!(out.contains("You raise by $50."));
        assert!(out.contains("CPU calls $50."));
        assert!(out.contains("Pot: $100"));
    }

    #[test]
    fn test_eof_ends_session() {
        let (result, out, _) = run(passive(3), "");
        assert!(result.is_ok());
        assert!(out.contains("Hands played: 0"));
    }

    #[test]
    fn test_zero_hands_is_rejected() {
        let (result, _, err) = run(passive(0), "");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(err.contains("hands must be >= 1"));
    }

    #[test]
    fn test_unknown_ai_is_config_error() {
        let mut args = passive(1);
        args.ai = Some("shark".into());
        let (result, _, _) = run(args, "q\n");
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
