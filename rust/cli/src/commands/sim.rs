//! Simulation command: the configured CPU opponent against a calling
//! station that always checks or calls, for a fixed number of hands.
//!
//! After every hand the chip total is checked; a mismatch is reported as an
//! engine error.

use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use headsup_ai::create_ai;
use headsup_engine::engine::{Table, TableConfig};
use headsup_engine::round::{Action, Actor, HandOutcome};
use std::io::Write;
use tracing::info;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    player_wins: u32,
    cpu_wins: u32,
    splits: u32,
    showdowns: u32,
    folds: u32,
}

impl Tally {
    fn record(&mut self, outcome: &HandOutcome) {
        match outcome {
            HandOutcome::FoldedEarly { .. } => self.folds += 1,
            HandOutcome::Showdown { .. } => self.showdowns += 1,
        }
        match outcome.winner() {
            Some(Actor::Player) => self.player_wins += 1,
            Some(Actor::Cpu) => self.cpu_wins += 1,
            None => self.splits += 1,
        }
    }
}

/// Handle the sim command.
pub fn handle_sim_command(
    hands: u32,
    seed: Option<u64>,
    chips: Option<u32>,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let chips = chips.unwrap_or(cfg.starting_chips);
    if chips == 0 {
        ui::write_error(err, "chips must be >= 1")?;
        return Err(CliError::InvalidInput("chips must be >= 1".to_string()));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let policy = create_ai(&cfg.ai, seed)?;
    let expected_total = chips
        .checked_mul(2)
        .ok_or_else(|| CliError::InvalidInput("chips too large".to_string()))?;

    writeln!(out, "sim: cpu={} hands={} seed={} chips={}", policy.name(), hands, seed, chips)?;
    let config = TableConfig {
        starting_chips: chips,
        seed: Some(seed),
    };
    let mut table = Table::new(&config, policy);
    let mut tally = Tally::default();

    for _ in 0..hands {
        if table.busted().is_some() {
            break;
        }
        table.start_hand()?;
        while table.hand_in_progress() {
            table.act(Action::CheckCall)?;
        }
        if let Some(outcome) = table.hand().and_then(|h| h.outcome()) {
            tally.record(outcome);
        }
        let total = table.chips(Actor::Player) + table.chips(Actor::Cpu);
        if total != expected_total {
            return Err(CliError::Engine(format!(
                "chip total {} after hand {} (expected {})",
                total,
                table.hands_played(),
                expected_total
            )));
        }
    }

    info!(hands = table.hands_played(), ?tally, "simulation finished");
    writeln!(out, "Hands played: {}", table.hands_played())?;
    writeln!(
        out,
        "Wins: player {}, CPU {}, split {}",
        tally.player_wins, tally.cpu_wins, tally.splits
    )?;
    writeln!(out, "Showdowns: {}, folds: {}", tally.showdowns, tally.folds)?;
    writeln!(
        out,
        "Final stacks: player ${}, CPU ${}",
        table.chips(Actor::Player),
        table.chips(Actor::Cpu)
    )?;
    if let Some(busted) = table.busted() {
        writeln!(out, "{} is out of chips.", busted)?;
    }
    writeln!(out, "Chip total conserved: {}", expected_total)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(hands: u32, seed: u64, cfg: &Config) -> (Result<(), CliError>, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(hands, Some(seed), Some(300), cfg, &mut out, &mut err);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_sim_command_basic_execution() {
        let (result, out) = run(20, 42, &Config::default());
        assert!(result.is_ok());
        assert!(out.contains("sim: cpu=BaselineAI hands=20 seed=42 chips=300"));
        assert!(out.contains("Chip total conserved: 600"));
    }

    #[test]
    fn test_sim_command_is_deterministic() {
        let (_, a) = run(15, 9, &Config::default());
        let (_, b) = run(15, 9, &Config::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_sim_passive_cpu_always_reaches_showdown() {
        let cfg = Config {
            ai: "passive".into(),
            ..Config::default()
        };
        let (result, out) = run(5, 1, &cfg);
        assert!(result.is_ok());
        assert!(out.contains("Hands played: 5"));
        assert!(out.contains("Showdowns: 5, folds: 0"));
        assert!(out.contains("Final stacks: player $300, CPU $300"));
    }

    #[test]
    fn test_sim_command_zero_hands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(0, None, None, &Config::default(), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_tally_counts_splits() {
        let mut tally = Tally::default();
        tally.record(&HandOutcome::FoldedEarly {
            winner: Actor::Cpu,
            pot: 10,
        });
        assert_eq!(tally.cpu_wins, 1);
        assert_eq!(tally.folds, 1);
    }
}
