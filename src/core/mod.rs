//! Analysis pipeline: single-file strategy selection, aggregation, file
//! discovery and multi-file execution

pub mod aggregate;
pub mod analyzer;
pub mod parallel;
pub mod walker;

pub use aggregate::aggregate;
pub use analyzer::Analyzer;
pub use parallel::{analyze_files, ProgressUpdate};
pub use walker::{Discovery, SourceWalker};
