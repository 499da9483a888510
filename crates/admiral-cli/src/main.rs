//! # admiral — control-plane CLI
//!
//! Command-line front-end for an Admiral container-management control
//! plane: custom properties of hosts, credentials, and resource pools, and
//! the event log.

mod commands;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let text = commands::execute(cli)?;
    output::emit(&text);
    Ok(())
}
