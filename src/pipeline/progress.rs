// file: src/pipeline/progress.rs
// description: step progress reporting and processing statistics
// reference: uses indicatif for progress bars and tracks processing metrics

use crate::utils::logging::format_step;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct ProcessStats {
    pub sections_found: usize,
    pub equations_replaced: usize,
    pub tables_described: usize,
    pub tables_dropped: usize,
    pub duration_secs: f64,
}

impl ProcessStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn substitutions(&self) -> usize {
        self.equations_replaced + self.tables_described
    }
}

/// Progress bar over the fixed pipeline steps, with a per-step message.
pub struct StepTracker {
    bar: ProgressBar,
    total_steps: u64,
    current: u64,
    start_time: Instant,
}

impl StepTracker {
    pub fn new(total_steps: u64) -> Self {
        Self::with_color(total_steps, true)
    }

    pub fn with_color(total_steps: u64, colored: bool) -> Self {
        let bar = ProgressBar::new(total_steps);
        let template = if colored {
            "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}"
        } else {
            "{spinner} [{bar:30}] {pos}/{len} {msg}"
        };
        bar.set_style(
            ProgressStyle::default_bar()
                .template(template)
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );

        Self {
            bar,
            total_steps,
            current: 0,
            start_time: Instant::now(),
        }
    }

    pub fn step(&mut self, message: &str) {
        self.current = (self.current + 1).min(self.total_steps);
        self.bar.set_position(self.current);
        self.bar.set_message(format_step(
            self.current as usize,
            self.total_steps as usize,
            message,
        ));
    }

    pub fn current_step(&self) -> u64 {
        self.current
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for StepTracker {
    fn drop(&mut self) {
        self.finish();
    }
}
