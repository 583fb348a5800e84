//! Trial progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Trials: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} ({{eta}})"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the total number of trials
///
/// Advanced once per finished batch; safe to share with worker threads.
pub struct TrialProgress {
    bar: ProgressBar,
}

impl TrialProgress {
    /// Create a progress bar for `total_trials` trials
    pub fn new(total_trials: u64) -> Self {
        let bar = ProgressBar::new(total_trials);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Record finished trials
    pub fn advance(&self, trials: u64) {
        self.bar.inc(trials);
    }

    /// Trials recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
