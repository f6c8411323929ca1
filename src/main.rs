//! CLI entry point for the binomial tail probability calculator

use binotail::io::cli::{Cli, CommandRunner};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> binotail::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(std::io::stdout().lock());
    runner.run(&cli.command)
}
