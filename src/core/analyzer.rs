//! Single-file analysis entry point
//!
//! Runs the structural pipeline (parse, track exports, classify) and steps
//! down to the text fallback and then to a synthesized record when a layer
//! comes up empty. Every entry point returns a non-empty result; degradations
//! are only visible through logging and [`Analysis::strategy`].

use oxc_allocator::Allocator;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::aggregate::aggregate;
use crate::error::Degradation;
use crate::models::{Analysis, AnalysisResult, AnalyzerOptions, ComponentInfo, Strategy};
use crate::parsers::declarations::{classify, ClassifyContext};
use crate::parsers::exports::ExportTracker;
use crate::parsers::fallback;
use crate::parsers::{AstParser, WrapperMatcher};

/// Outcome of the structural pass.
enum Structural {
    /// The tree was built and at least one export was classified
    Parsed(Vec<ComponentInfo>),
    /// No usable tree, or nothing classified
    Unparsed(Degradation),
}

/// Component and function analyzer for one file at a time.
///
/// Holds only configuration; every call allocates its own arena and
/// tracking state, so one analyzer can serve many threads.
#[derive(Clone)]
pub struct Analyzer {
    options: AnalyzerOptions,
    parser: AstParser,
}

impl Analyzer {
    pub fn new(options: AnalyzerOptions) -> Self {
        Self {
            options,
            parser: AstParser::new(),
        }
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Read and analyze `path`.
    pub fn analyze_file(&self, path: &Path) -> AnalysisResult {
        self.inspect_file(path).result
    }

    /// Analyze already-read `source` as if it were the content of `path`.
    pub fn analyze_source(&self, source: &str, path: &Path) -> AnalysisResult {
        self.inspect_source(source, path).result
    }

    /// Like [`Analyzer::analyze_file`], also reporting which layer answered.
    ///
    /// An unreadable file yields a synthesized record named after the file.
    pub fn inspect_file(&self, path: &Path) -> Analysis {
        match fs::read_to_string(path) {
            Ok(source) => self.inspect_source(&source, path),
            Err(source) => {
                let degradation = Degradation::IoFailure {
                    path: path.to_path_buf(),
                    source,
                };
                warn!("{degradation}");
                let (result, _) = aggregate(Vec::new(), path, None);
                Analysis {
                    file_path: path.to_path_buf(),
                    strategy: Strategy::Synthesized,
                    result,
                }
            }
        }
    }

    /// Like [`Analyzer::analyze_source`], also reporting which layer answered.
    pub fn inspect_source(&self, source: &str, path: &Path) -> Analysis {
        debug!(path = %path.display(), "analyzing");

        let (result, strategy) = match self.structural(source, path) {
            Structural::Parsed(records) => {
                let (result, _) = aggregate(records, path, None);
                (result, Strategy::Structural)
            }
            Structural::Unparsed(degradation) => {
                match &degradation {
                    Degradation::ParseFailure(_) => warn!("{degradation}"),
                    _ => debug!("{degradation}"),
                }
                self.heuristic(source, path)
            }
        };

        Analysis {
            file_path: path.to_path_buf(),
            strategy,
            result,
        }
    }

    fn structural(&self, source: &str, path: &Path) -> Structural {
        let allocator = Allocator::default();
        let program = match self.parser.parse(&allocator, source, path) {
            Ok(program) => program,
            Err(failure) => return Structural::Unparsed(Degradation::ParseFailure(failure)),
        };

        let wrappers = WrapperMatcher::new(&self.options.extra_wrappers);
        let table = ExportTracker::track(&program, path, wrappers);
        debug!(exports = table.locals().count(), "tracked exports");

        let records = classify(
            &program,
            &table,
            ClassifyContext {
                source,
                path,
                wrappers,
                max_markup_depth: self.options.max_markup_depth,
            },
        );

        if records.is_empty() {
            Structural::Unparsed(Degradation::EmptyClassification {
                path: path.to_path_buf(),
            })
        } else {
            Structural::Parsed(records)
        }
    }

    fn heuristic(&self, source: &str, path: &Path) -> (AnalysisResult, Strategy) {
        let scan = fallback::scan(source, path, &self.options);
        if !scan.records.is_empty() {
            let (result, _) = aggregate(scan.records, path, None);
            return (result, Strategy::Heuristic);
        }

        debug!(
            "{}",
            Degradation::EmptyFallback {
                path: path.to_path_buf()
            }
        );
        let (result, _) = aggregate(Vec::new(), path, scan.default_name.as_deref());
        (result, Strategy::Synthesized)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerOptions::default())
    }
}
