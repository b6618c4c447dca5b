//! compscan - inventory the exported components and functions of a
//! JavaScript/TypeScript source file
//!
//! Each file is parsed into a syntax tree, its exports are tracked, and every
//! exported declaration is classified as a component (it renders markup) or a
//! plain function. When the file does not parse, a text-pattern analysis takes
//! over; when nothing is found at all, one component named after the file is
//! reported.
//!
//! ```no_run
//! use compscan::{Analyzer, AnalyzerOptions};
//! use std::path::Path;
//!
//! let analyzer = Analyzer::new(AnalyzerOptions::default());
//! let result = analyzer.analyze_file(Path::new("src/App.jsx"));
//! for component in result.components() {
//!     println!("{} {:?}", component.name, component.parameter_names);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{Analyzer, SourceWalker};
pub use error::{Degradation, ErrorSeverity, Result, ResultExt, ScanError};
pub use models::{
    Analysis, AnalysisResult, AnalyzerOptions, ComponentInfo, ExportType, ScanReport, Settings, Strategy, WrapperKind,
};
pub use parsers::verify_export;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
