//! Command handler modules for the headsup CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in as parameters
//! - Errors propagated via the `CliError` enum

pub mod cfg;
pub mod deal;
pub mod equity;
pub mod eval;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use equity::{EquityArgs, handle_equity_command};
pub use eval::handle_eval_command;
pub use play::{PlayArgs, handle_play_command};
pub use sim::handle_sim_command;
