//! CLI entry point for the mine cluster census

use clap::Parser;
use minecluster::io::cli::{Cli, SimulationRunner};

fn main() -> minecluster::Result<()> {
    let cli = Cli::parse();
    let mut runner = SimulationRunner::new(cli);
    runner.run()?;
    Ok(())
}
