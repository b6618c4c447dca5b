//! Progress reporting functionality
//!
//! Draws an indicatif bar on stderr while files are analyzed. Quiet mode, or
//! progress turned off, draws nothing.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

use crate::core::parallel::ProgressUpdate;

const BAR_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}";

/// Progress reporter for a batch of files
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a new progress reporter; `enabled` false draws nothing
    pub fn new(enabled: bool) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::new(0);
            if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
                bar.set_style(style.progress_chars("#>-"));
            }
            bar
        });
        Self { bar }
    }

    /// Start a new progress operation
    pub fn start(&self, total: usize, operation: &str) {
        if let Some(bar) = &self.bar {
            bar.reset();
            bar.set_length(total as u64);
            bar.set_message(operation.to_string());
        }
    }

    /// Update progress from a ProgressUpdate
    pub fn update_from(&self, progress: ProgressUpdate) {
        if let Some(bar) = &self.bar {
            bar.set_length(progress.total as u64);
            bar.set_position(progress.current as u64);
            bar.set_message(progress.message);
        }
    }

    /// Finish the progress operation
    pub fn finish(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }
}

/// Create a progress callback function that updates a ProgressReporter
pub fn create_progress_callback(reporter: Arc<ProgressReporter>) -> impl Fn(ProgressUpdate) + Send + Sync {
    move |progress: ProgressUpdate| {
        reporter.update_from(progress);
    }
}
