//! Recoverable analysis outcomes
//!
//! The analysis entry points always return a usable result. When a stage
//! cannot deliver, the analyzer records which layer it fell back through as a
//! [`Degradation`] and logs it; the value never crosses the public API as an
//! error.

use std::path::PathBuf;
use thiserror::Error;

/// The parser could not produce a usable syntax tree.
#[derive(Debug, Clone, Error)]
#[error("could not parse {path}: {}", .diagnostics.join("; "))]
pub struct ParseFailure {
    pub path: PathBuf,
    /// Rendered parser diagnostics, in source order.
    pub diagnostics: Vec<String>,
}

impl ParseFailure {
    pub fn new(path: impl Into<PathBuf>, diagnostics: Vec<String>) -> Self {
        Self {
            path: path.into(),
            diagnostics,
        }
    }
}

/// A fallback step taken while analyzing one file.
#[derive(Debug, Error)]
pub enum Degradation {
    /// Structural parsing failed; the text-pattern analyzer takes over.
    #[error(transparent)]
    ParseFailure(#[from] ParseFailure),

    /// Parsing worked but no exported declaration was matched.
    #[error("no exported declaration in {path} could be classified")]
    EmptyClassification { path: PathBuf },

    /// The text-pattern analyzer found nothing either.
    #[error("text-pattern analysis of {path} found no exports")]
    EmptyFallback { path: PathBuf },

    /// The file could not be read at all.
    #[error("could not read {path}: {source}")]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

