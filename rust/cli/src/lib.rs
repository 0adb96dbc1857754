//! # headsup CLI Library
//!
//! Command-line front end for the heads-up Hold'em engine: interactive play
//! against the CPU plus tools for evaluating hands, estimating equity and
//! simulating sessions.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments, dispatches to the subcommand and
//! returns the process exit code.
//!
//! ```
//! use std::io;
//! let args = vec!["headsup", "eval", "As", "Ks", "Qs", "Js", "Ts"];
//! let code = headsup_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against the CPU
//! - `eval`: Name the best hand among 5 to 7 cards
//! - `equity`: Estimate win probability
//! - `deal`: Deal a single hand for inspection
//! - `sim`: Simulate the CPU against a calling station
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, HeadsupCli};
use commands::{
    EquityArgs, PlayArgs, handle_cfg_command, handle_deal_command, handle_equity_command,
    handle_eval_command, handle_play_command, handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "eval", "equity", "deal", "sim", "cfg"];

/// Main entry point for the CLI application.
///
/// Returns `0` on success and `2` on any error (including usage errors).
/// `play` reads its actions from the process's stdin.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// [`run`] with an explicit input stream for `play`.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn std::io::BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HeadsupCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage(e, out, err),
    };

    match dispatch(cli.cmd, out, err, stdin) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn dispatch(
    cmd: Commands,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn std::io::BufRead,
) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Play {
            hands,
            seed,
            chips,
            ai,
        } => {
            let cfg = config::load_with_sources()?.config;
            let args = PlayArgs {
                hands,
                seed,
                chips,
                ai,
            };
            handle_play_command(&args, &cfg, out, err, stdin)
        }
        Commands::Equity {
            hole,
            board,
            dead,
            samples,
            seed,
            villain,
        } => {
            let cfg = config::load_with_sources()?.config;
            let args = EquityArgs {
                hole,
                board,
                dead,
                samples,
                seed,
                villain,
            };
            handle_equity_command(&args, &cfg, out)
        }
        Commands::Sim { hands, seed, chips } => {
            let cfg = config::load_with_sources()?.config;
            handle_sim_command(hands, seed, chips, &cfg, out, err)
        }
    }
}

fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Usage: headsup <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: headsup --help");
    exit_code::ERROR
}
