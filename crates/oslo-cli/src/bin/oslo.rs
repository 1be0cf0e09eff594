//! Oslo ricepile CLI.

use clap::Parser;
use oslo_cli::{execute, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let report = execute(&cli)?;
    report.print();
    Ok(())
}
