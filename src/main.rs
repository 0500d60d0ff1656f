use clap::Parser;
use tracing_subscriber::EnvFilter;

use access_log_digest::{Cli, run};

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; -v flags only set the default level.
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
