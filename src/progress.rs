//! Step gauge for the bootstrap sequence

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display across the fixed step sequence
pub struct StepProgress {
    bar: ProgressBar,
}

impl StepProgress {
    /// Create a gauge over the given step count
    pub fn new(total_steps: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total_steps);
        bar.set_style(style);

        Self { bar }
    }

    /// Show the step currently running
    pub fn begin_step(&self, label: &str) {
        self.bar.set_message(label.to_string());
    }

    /// Mark the current step finished
    pub fn finish_step(&self) {
        self.bar.inc(1);
    }

    /// Hide the gauge while the closure streams child output, then redraw
    pub fn suspend<T>(&self, f: impl FnOnce() -> T) -> T {
        self.bar.suspend(f)
    }

    /// Clear the gauge once the sequence is over
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
