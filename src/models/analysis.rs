//! Analysis result structures

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

use super::component::ComponentInfo;
use crate::error::{ErrorSeverity, ScanError};

/// Where `main_export` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainExport {
    Component(usize),
    Function(usize),
}

/// The inventory of one source file.
///
/// `main_export` is kept as a position into `components` or `functions`, so
/// the record it names is always one of the listed records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    components: Vec<ComponentInfo>,
    functions: Vec<ComponentInfo>,
    main_export: Option<MainExport>,
}

impl AnalysisResult {
    /// Split records into components and functions, keeping their order, and
    /// point `main_export` at the default-exported record if there is one.
    pub fn from_records(records: impl IntoIterator<Item = ComponentInfo>) -> Self {
        let (components, functions): (Vec<_>, Vec<_>) = records.into_iter().partition(|record| record.is_component());
        let mut result = Self {
            components,
            functions,
            main_export: None,
        };
        result.locate_main_export();
        result
    }

    fn locate_main_export(&mut self) {
        self.main_export = self
            .components
            .iter()
            .position(ComponentInfo::is_default)
            .map(MainExport::Component)
            .or_else(|| {
                self.functions
                    .iter()
                    .position(ComponentInfo::is_default)
                    .map(MainExport::Function)
            });
    }

    pub fn components(&self) -> &[ComponentInfo] {
        &self.components
    }

    pub fn functions(&self) -> &[ComponentInfo] {
        &self.functions
    }

    /// The default-exported record, borrowed from `components` or `functions`.
    pub fn main_export(&self) -> Option<&ComponentInfo> {
        match self.main_export? {
            MainExport::Component(index) => self.components.get(index),
            MainExport::Function(index) => self.functions.get(index),
        }
    }

    /// Components first, then functions.
    pub fn records(&self) -> impl Iterator<Item = &ComponentInfo> {
        self.components.iter().chain(self.functions.iter())
    }

    /// Look a record up by name.
    pub fn find(&self, name: &str) -> Option<&ComponentInfo> {
        self.records().find(|record| record.name == name)
    }

    pub fn len(&self) -> usize {
        self.components.len() + self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.functions.is_empty()
    }

    /// Drop function records that fail `keep`; components are untouched.
    pub fn retain_functions<F>(&mut self, keep: F)
    where
        F: FnMut(&ComponentInfo) -> bool,
    {
        self.functions.retain(keep);
        self.locate_main_export();
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let main_export = self.main_export();
        let field_count = if main_export.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("AnalysisResult", field_count)?;
        state.serialize_field("components", &self.components)?;
        state.serialize_field("functions", &self.functions)?;
        match main_export {
            Some(record) => state.serialize_field("mainExport", record)?,
            None => state.skip_field("mainExport")?,
        }
        state.end()
    }
}

/// Which layer of the analysis produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Syntax-tree export tracking and declaration classification
    Structural,
    /// Text-pattern fallback
    Heuristic,
    /// A single record made up from the file name
    Synthesized,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Structural => write!(f, "structural"),
            Strategy::Heuristic => write!(f, "heuristic"),
            Strategy::Synthesized => write!(f, "synthesized"),
        }
    }
}

/// A result together with the path it describes and how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub file_path: PathBuf,
    pub strategy: Strategy,
    pub result: AnalysisResult,
}

impl Analysis {
    pub fn is_degraded(&self) -> bool {
        self.strategy != Strategy::Structural
    }
}

/// Totals over a batch of analyses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub files: usize,
    pub components: usize,
    pub functions: usize,
    pub heuristic: usize,
    pub synthesized: usize,
}

impl ScanSummary {
    pub fn from_analyses(analyses: &[Analysis]) -> Self {
        analyses.iter().fold(Self::default(), |mut summary, analysis| {
            summary.files += 1;
            summary.components += analysis.result.components().len();
            summary.functions += analysis.result.functions().len();
            match analysis.strategy {
                Strategy::Structural => {}
                Strategy::Heuristic => summary.heuristic += 1,
                Strategy::Synthesized => summary.synthesized += 1,
            }
            summary
        })
    }
}

/// A problem met while scanning that did not stop the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedError {
    pub path: PathBuf,
    pub severity: ErrorSeverity,
    pub message: String,
}

/// Everything one run produced, in the order files were given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub files: Vec<Analysis>,
    pub summary: ScanSummary,
    pub errors: Vec<ReportedError>,
}

impl ScanReport {
    pub fn new(files: Vec<Analysis>) -> Self {
        let summary = ScanSummary::from_analyses(&files);
        Self {
            files,
            summary,
            errors: Vec::new(),
        }
    }

    /// Record a non-fatal error against `path`.
    pub fn add_error(&mut self, path: PathBuf, error: &ScanError) {
        self.errors.push(ReportedError {
            path,
            severity: error.severity(),
            message: error.user_message(),
        });
    }
}
