//! console-render
//!
//! Reads a render request (workload unit plus volumes) and prints the console
//! representation of its containers.

use clap::Parser;

use console_cli::telemetry::init_logging;
use console_cli::{Cli, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format)?;
    cli.run()
}
