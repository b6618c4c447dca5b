//! Data models and structures for compscan

pub mod analysis;
pub mod component;
pub mod config;

pub use analysis::{Analysis, AnalysisResult, ReportedError, ScanReport, ScanSummary, Strategy};
pub use component::{ComponentInfo, ExportType, WrapperKind};
pub use config::{AnalyzerOptions, OutputFormat, PartialSettings, Settings};
