//! Output formatting and writing functionality

mod formatters;
mod progress;
mod writers;

pub use self::formatters::{format_analysis_text, format_report_csv, format_report_json, format_summary_text};
pub use self::progress::{create_progress_callback, ProgressReporter};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::{OutputFormat, ScanReport};

/// Trait for different output formatters
pub trait Formatter {
    /// Format a scan report into a string
    fn format(&self, report: &ScanReport) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let mut output = String::new();

        // Quiet mode prints one line per record and nothing else
        if self.quiet {
            for analysis in &report.files {
                for record in analysis.result.records() {
                    let kind = if record.is_component() { "component" } else { "function" };
                    output.push_str(&format!(
                        "{}\t{}\t{}\t{}\n",
                        analysis.file_path.display(),
                        record.name,
                        kind,
                        record.export_type
                    ));
                }
            }
            return Ok(output);
        }

        for analysis in &report.files {
            output.push_str(&format_analysis_text(analysis, self.use_colors, self.verbose));
        }
        output.push_str(&format_summary_text(report, self.use_colors));
        Ok(output)
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        format_report_json(report)
    }
}

/// CSV formatter, one row per record
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        format_report_csv(report)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: OutputFormat, use_colors: bool, verbose: bool, quiet: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
