//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default nesting limit for the markup walk.
pub const DEFAULT_MAX_MARKUP_DEPTH: usize = 256;

/// Extensions analyzed when a directory is given on the command line.
pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"];

/// Main configuration settings for compscan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Files or directories to analyze
    pub paths: Vec<PathBuf>,

    /// Glob patterns to exclude while expanding directories
    pub exclude_patterns: Vec<String>,

    /// File extensions (without the dot) picked up from directories
    pub extensions: Vec<String>,

    /// Maximum directory depth to traverse
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links during directory traversal
    pub follow_links: bool,

    /// Output format (text, json, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to analyze files in parallel
    pub parallel: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show debug information
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to show a progress bar
    pub show_progress: bool,

    /// Wrapper function names recognized on top of the built-in set
    pub extra_wrappers: Vec<String>,

    /// Nesting limit for the markup walk
    pub max_markup_depth: usize,

    /// Whether the text-pattern analyzer may use its loose second pass
    pub permissive_fallback: bool,

    /// Whether to drop function records that fail the export text check
    pub verify_exports: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from(".")],
            exclude_patterns: vec![
                "**/node_modules/**".to_string(),
                "**/.git/**".to_string(),
                "**/dist/**".to_string(),
                "**/build/**".to_string(),
                "**/*.d.ts".to_string(),
            ],
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            max_depth: None,
            follow_links: false,
            output_format: OutputFormat::Text,
            output_file: None,
            parallel: true,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
            extra_wrappers: Vec::new(),
            max_markup_depth: DEFAULT_MAX_MARKUP_DEPTH,
            permissive_fallback: true,
            verify_exports: false,
        }
    }
}

impl Settings {
    /// The subset of settings the analysis engine needs.
    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            extra_wrappers: self.extra_wrappers.clone(),
            max_markup_depth: self.max_markup_depth,
            permissive_fallback: self.permissive_fallback,
        }
    }
}

/// Knobs for a single-file analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerOptions {
    pub extra_wrappers: Vec<String>,
    pub max_markup_depth: usize,
    pub permissive_fallback: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            extra_wrappers: Vec::new(),
            max_markup_depth: DEFAULT_MAX_MARKUP_DEPTH,
            permissive_fallback: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output, one row per record
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub paths: Option<Vec<PathBuf>>,
    pub exclude_patterns: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub follow_links: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub parallel: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
    pub extra_wrappers: Option<Vec<String>>,
    pub max_markup_depth: Option<usize>,
    pub permissive_fallback: Option<bool>,
    pub verify_exports: Option<bool>,
}

macro_rules! take_if_some {
    ($target:expr, $other:expr, $($field:ident),+ $(,)?) => {
        $(
            if $other.$field.is_some() {
                $target.$field = $other.$field;
            }
        )+
    };
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        take_if_some!(
            self,
            other,
            paths,
            exclude_patterns,
            extensions,
            max_depth,
            follow_links,
            output_format,
            output_file,
            parallel,
            quiet,
            verbose,
            use_colors,
            show_progress,
            extra_wrappers,
            max_markup_depth,
            permissive_fallback,
            verify_exports,
        );
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(paths) = &self.paths {
            settings.paths = paths.clone();
        }
        if let Some(exclude_patterns) = &self.exclude_patterns {
            settings.exclude_patterns = exclude_patterns.clone();
        }
        if let Some(extensions) = &self.extensions {
            settings.extensions = extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = Some(max_depth);
        }
        if let Some(follow_links) = self.follow_links {
            settings.follow_links = follow_links;
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(parallel) = self.parallel {
            settings.parallel = parallel;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }
        if let Some(extra_wrappers) = &self.extra_wrappers {
            settings.extra_wrappers = extra_wrappers.clone();
        }
        if let Some(max_markup_depth) = self.max_markup_depth {
            settings.max_markup_depth = max_markup_depth;
        }
        if let Some(permissive_fallback) = self.permissive_fallback {
            settings.permissive_fallback = permissive_fallback;
        }
        if let Some(verify_exports) = self.verify_exports {
            settings.verify_exports = verify_exports;
        }

        settings
    }
}
