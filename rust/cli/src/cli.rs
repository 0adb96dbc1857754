//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "headsup",
    version,
    about = "Heads-up Texas Hold'em against a computer opponent"
)]
pub struct HeadsupCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands against the CPU, reading actions from stdin
    Play {
        /// Number of hands to play (stops early if a stack runs out)
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Starting chips for each side
        #[arg(long)]
        chips: Option<u32>,
        /// CPU opponent: baseline or passive
        #[arg(long)]
        ai: Option<String>,
    },
    /// Evaluate the best five-card hand among 5 to 7 cards
    Eval {
        /// Cards such as `As Kd Qh Jc Ts`
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Estimate a hand's chance to win against one random hand
    Equity {
        /// Two hole cards, e.g. "As Kd"
        #[arg(long)]
        hole: String,
        /// Community cards dealt so far (0 to 5)
        #[arg(long)]
        board: Option<String>,
        /// Cards known to be out of play
        #[arg(long)]
        dead: Option<String>,
        #[arg(long)]
        samples: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Known opponent hand; with a full board gives the exact result
        #[arg(long)]
        villain: Option<String>,
    },
    /// Deal one hand and run the board out
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Simulate a session of the CPU against a calling station
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        chips: Option<u32>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
