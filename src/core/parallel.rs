//! Parallel processing utilities

use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::analyzer::Analyzer;
use crate::models::Analysis;

/// Progress update information for parallel operations
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl ProgressUpdate {
    /// Create a new progress update
    pub fn new(current: usize, total: usize, message: impl Into<String>) -> Self {
        Self {
            current,
            total,
            message: message.into(),
        }
    }
}

/// Execute a function in parallel on a collection of items with progress
/// reporting, keeping their order
pub fn parallel_process_with_progress<T, F, R, P>(items: Vec<T>, f: F, progress_callback: P) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
    P: Fn(ProgressUpdate) + Send + Sync,
{
    let total = items.len();
    let counter = AtomicUsize::new(0);

    items
        .into_par_iter()
        .map(|item| {
            let result = f(item);
            let done = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress_callback(ProgressUpdate::new(done, total, format!("Analyzed {}/{}", done, total)));
            result
        })
        .collect()
}

/// Analyze `files` with one shared analyzer, in input order.
///
/// Runs on the rayon pool when `parallel` is set, otherwise on the calling
/// thread. `progress` is called once per finished file.
pub fn analyze_files<P>(analyzer: &Analyzer, files: Vec<PathBuf>, parallel: bool, progress: P) -> Vec<Analysis>
where
    P: Fn(ProgressUpdate) + Send + Sync,
{
    let analyze = |path: PathBuf| analyzer.inspect_file(&path);

    if parallel {
        return parallel_process_with_progress(files, analyze, progress);
    }

    let total = files.len();
    files
        .into_iter()
        .enumerate()
        .map(|(index, path)| {
            let analysis = analyze(path);
            progress(ProgressUpdate::new(
                index + 1,
                total,
                format!("Analyzed {}", analysis.file_path.display()),
            ));
            analysis
        })
        .collect()
}
