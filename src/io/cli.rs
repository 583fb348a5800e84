//! Command-line interface for running a cluster census and writing its report

use crate::algorithm::executor::{Simulation, SimulationConfig};
use crate::analysis::statistics::{RankedPatterns, SimulationSummary};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_MINES, DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_THREADS, DEFAULT_TRIALS,
    DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::progress::TrialProgress;
use crate::io::report::{format_ranked, write_report};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "minecluster")]
#[command(
    author,
    version,
    about = "Tally the shapes of mine clusters on random boards"
)]
/// Command-line arguments for the cluster census
pub struct Cli {
    /// Board width in cells
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Board height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Mines placed on every board
    #[arg(short, long, default_value_t = DEFAULT_MINES)]
    pub mines: usize,

    /// Number of boards to simulate
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: u64,

    /// Report file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Random seed for reproducible runs
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Worker threads used for trials
    #[arg(short = 'j', long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Only report the N most frequent patterns
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build and validate the simulation configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any parameter is invalid
    pub fn simulation_config(&self) -> Result<SimulationConfig> {
        let config = SimulationConfig {
            width: self.width,
            height: self.height,
            mine_count: self.mines,
            trials: self.trials,
            seed: self.seed,
            threads: self.threads,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Runs the simulation described by the CLI and writes its report
pub struct SimulationRunner {
    cli: Cli,
    progress: Option<TrialProgress>,
}

impl SimulationRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress: None,
        }
    }

    /// Validate, simulate, rank and write the report
    ///
    /// Nothing is written when the configuration is invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the simulation
    /// fails, or the report cannot be written
    pub fn run(&mut self) -> Result<SimulationSummary> {
        let start_time = Instant::now();
        let config = self.cli.simulation_config()?;
        let simulation = Simulation::new(config)?;

        if self.cli.should_show_progress() {
            self.progress = Some(TrialProgress::new(config.trials));
        }

        let progress = self.progress.as_ref();
        let table = simulation.run_with_progress(|trials| {
            if let Some(bar) = progress {
                bar.advance(trials);
            }
        })?;

        if let Some(bar) = progress {
            bar.finish();
        }

        let mut ranked = RankedPatterns::from_table(&table, config.trials);
        if let Some(limit) = self.cli.limit {
            ranked = ranked.truncated(limit);
        }
        write_report(&self.cli.output, &format_ranked(&ranked))?;

        let summary = SimulationSummary::from_table(&table, config.trials);
        self.report_summary(&summary, start_time.elapsed().as_secs_f64());
        Ok(summary)
    }

    // Allow print for user feedback after the run
    #[allow(clippy::print_stderr)]
    fn report_summary(&self, summary: &SimulationSummary, elapsed_secs: f64) {
        if self.cli.quiet {
            return;
        }
        eprintln!("{summary}");
        eprintln!(
            "Report written to {} in {elapsed_secs:.2}s",
            self.cli.output.display()
        );
    }
}
