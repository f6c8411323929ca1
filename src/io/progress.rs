//! Progress display for Monte Carlo runs

use crate::analysis::simulation::SimulationEstimate;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SIMULATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Trials: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking simulated experiments and the running estimate
pub struct SimulationProgress {
    bar: ProgressBar,
}

impl SimulationProgress {
    /// Create a progress bar for `total` experiments
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(SIMULATION_STYLE.clone());
        Self { bar }
    }

    /// Create a bar that draws nothing, for quiet runs and tests
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Report the estimate after a completed batch
    pub fn update(&self, estimate: &SimulationEstimate) {
        self.bar.set_position(estimate.trials as u64);
        self.bar
            .set_message(format!("P(X > k) ≈ {:.6}", estimate.probability));
    }

    /// Experiments reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
