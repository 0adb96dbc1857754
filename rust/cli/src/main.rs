use std::io;

use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so game output on stdout stays clean.
/// `RUST_LOG` selects the level; default is `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    init_logging();
    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = headsup_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
