//! Trial loop orchestration
//!
//! Trials are grouped into batches of `TRIALS_PER_BATCH`. Batch `i` draws from
//! its own `StdRng` seeded with `seed + i` and fills its own pattern table.
//! Batch tables are merged in batch order, so the final table depends only on
//! the configuration and seed, never on how many workers ran the batches.

use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;

use crate::algorithm::extraction::ClusterExtractor;
use crate::algorithm::generation::BoardGenerator;
use crate::analysis::patterns::PatternTable;
use crate::analysis::shape::Shape;
use crate::io::configuration::TRIALS_PER_BATCH;
use crate::io::error::{Result, invalid_parameter};

/// Parameters of a full simulation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
    /// Mines per board
    pub mine_count: usize,
    /// Number of boards to simulate
    pub trials: u64,
    /// Base seed for all random sources
    pub seed: u64,
    /// Worker threads (1 runs on the calling thread)
    pub threads: usize,
}

impl SimulationConfig {
    /// Check every parameter before any simulation work happens
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A board dimension is zero or too large
    /// - The mine count exceeds the board area
    /// - The trial or thread count is zero
    pub fn validate(&self) -> Result<()> {
        BoardGenerator::new(self.width, self.height, self.mine_count)?;
        if self.trials == 0 {
            return Err(invalid_parameter(
                "trials",
                &self.trials,
                &"must be positive",
            ));
        }
        if self.threads == 0 {
            return Err(invalid_parameter(
                "threads",
                &self.threads,
                &"must be positive",
            ));
        }
        Ok(())
    }

    /// Number of batches needed to cover every trial
    pub const fn batch_count(&self) -> u64 {
        self.trials.div_ceil(TRIALS_PER_BATCH)
    }

    /// Trials assigned to a batch; the final batch may be short
    pub const fn batch_trials(&self, batch: u64) -> u64 {
        let start = batch.saturating_mul(TRIALS_PER_BATCH);
        let remaining = self.trials.saturating_sub(start);
        if remaining < TRIALS_PER_BATCH {
            remaining
        } else {
            TRIALS_PER_BATCH
        }
    }
}

/// Monte Carlo driver producing the aggregated pattern table
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    generator: BoardGenerator,
}

impl Simulation {
    /// Validate the configuration and prepare the board generator
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let generator = BoardGenerator::new(config.width, config.height, config.mine_count)?;
        Ok(Self { config, generator })
    }

    /// Configuration this simulation runs with
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run every trial and return the merged table
    ///
    /// # Errors
    ///
    /// Returns an error if board generation stalls or the worker pool fails
    /// to start
    pub fn run(&self) -> Result<PatternTable> {
        self.run_with_progress(|_| {})
    }

    /// Run every trial, reporting each finished batch's trial count
    ///
    /// The callback may be invoked from worker threads.
    ///
    /// # Errors
    ///
    /// Returns an error if board generation stalls or the worker pool fails
    /// to start
    pub fn run_with_progress<F>(&self, on_batch: F) -> Result<PatternTable>
    where
        F: Fn(u64) + Sync,
    {
        let batches = self.config.batch_count();
        let run_batch = |batch: u64| -> Result<PatternTable> {
            let table = self.run_batch(batch)?;
            on_batch(self.config.batch_trials(batch));
            Ok(table)
        };

        let tables: Vec<PatternTable> = if self.config.threads > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.threads)
                .build()?;
            pool.install(|| {
                (0..batches)
                    .into_par_iter()
                    .map(run_batch)
                    .collect::<Result<Vec<_>>>()
            })?
        } else {
            (0..batches).map(run_batch).collect::<Result<Vec<_>>>()?
        };

        let mut merged = PatternTable::new();
        for table in tables {
            merged.merge(table);
        }
        Ok(merged)
    }

    /// Run one batch of trials with its own seeded random source
    ///
    /// # Errors
    ///
    /// Returns an error if board generation stalls
    pub fn run_batch(&self, batch: u64) -> Result<PatternTable> {
        let mut rng = StdRng::seed_from_u64(self.config.seed.wrapping_add(batch));
        let mut extractor = ClusterExtractor::new();
        let mut table = PatternTable::new();

        for _ in 0..self.config.batch_trials(batch) {
            self.run_trial(&mut rng, &mut extractor, &mut table)?;
        }
        Ok(table)
    }

    /// Generate one board and count its cluster shapes, returning the
    /// number of clusters found
    ///
    /// # Errors
    ///
    /// Returns an error if board generation stalls
    pub fn run_trial(
        &self,
        rng: &mut StdRng,
        extractor: &mut ClusterExtractor,
        table: &mut PatternTable,
    ) -> Result<usize> {
        let mut board = self.generator.generate(rng)?;
        let clusters = extractor.extract(&mut board);
        for cluster in &clusters {
            table.observe(Shape::from_cluster(cluster));
        }
        Ok(clusters.len())
    }
}
