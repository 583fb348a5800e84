//! Frequency ranking and run-level summary statistics
//!
//! Prevalence is a pattern's count divided by the number of trials. A shape
//! that appears several times on the same board contributes several counts,
//! so common small shapes can have a prevalence above 1.

use std::fmt;

use crate::analysis::patterns::{PatternEntry, PatternTable};

/// Pattern entries ordered by descending count
///
/// Entries with equal counts keep the table's first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPatterns {
    entries: Vec<PatternEntry>,
    total_trials: u64,
}

impl RankedPatterns {
    /// Rank a table's entries without modifying it
    pub fn from_table(table: &PatternTable, total_trials: u64) -> Self {
        let mut entries = table.entries().to_vec();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self {
            entries,
            total_trials,
        }
    }

    /// Keep only the `limit` most frequent entries
    #[must_use]
    pub fn truncated(mut self, limit: usize) -> Self {
        self.entries.truncate(limit);
        self
    }

    /// Entries, most frequent first
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Trials the counts were accumulated over
    pub const fn total_trials(&self) -> u64 {
        self.total_trials
    }

    /// Prevalence of an entry relative to this ranking's trial count
    pub const fn prevalence_of(&self, entry: &PatternEntry) -> f64 {
        prevalence(entry.count, self.total_trials)
    }
}

/// Count divided by trials, zero when no trials ran
pub const fn prevalence(count: u64, total_trials: u64) -> f64 {
    if total_trials == 0 {
        0.0
    } else {
        count as f64 / total_trials as f64
    }
}

/// Aggregate figures describing a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationSummary {
    /// Boards simulated
    pub trials: u64,
    /// Clusters extracted over all boards
    pub clusters: u64,
    /// Distinct shapes in the table
    pub distinct_patterns: usize,
    /// Mines covered by all clusters
    pub clustered_cells: u64,
    /// Cell count of the largest shape observed
    pub largest_cluster: usize,
}

impl SimulationSummary {
    /// Derive the summary from a final table
    pub fn from_table(table: &PatternTable, trials: u64) -> Self {
        let (clusters, clustered_cells, largest_cluster) = table.entries().iter().fold(
            (0, 0, 0),
            |(clusters, cells, largest), entry| {
                let size = entry.shape.len();
                (
                    clusters + entry.count,
                    cells + entry.count * size as u64,
                    largest.max(size),
                )
            },
        );

        Self {
            trials,
            clusters,
            distinct_patterns: table.len(),
            clustered_cells,
            largest_cluster,
        }
    }

    /// Average number of cells per cluster
    pub const fn mean_cluster_size(&self) -> f64 {
        if self.clusters == 0 {
            0.0
        } else {
            self.clustered_cells as f64 / self.clusters as f64
        }
    }

    /// Average number of clusters per board
    pub const fn clusters_per_trial(&self) -> f64 {
        prevalence(self.clusters, self.trials)
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} trials, {} clusters ({:.3} per board), {} distinct patterns, mean size {:.3}, largest {}",
            self.trials,
            self.clusters,
            self.clusters_per_trial(),
            self.distinct_patterns,
            self.mean_cluster_size(),
            self.largest_cluster
        )
    }
}
