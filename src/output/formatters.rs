//! Output formatting functionality
//!
//! This module provides formatters for different output formats.

use ansi_term::Colour::{Blue, Cyan, Green, Red, Yellow};
use ansi_term::Style;

use crate::error::{ErrorSeverity, Result, ScanError};
use crate::models::{Analysis, ComponentInfo, ScanReport, Strategy};

fn paint(use_colors: bool, style: Style, text: impl AsRef<str>) -> String {
    if use_colors {
        style.paint(text.as_ref()).to_string()
    } else {
        text.as_ref().to_string()
    }
}

fn describe_record(record: &ComponentInfo, use_colors: bool, verbose: bool) -> String {
    let name = paint(use_colors, Style::new().bold(), &record.name);
    let mut line = format!("    {} ({})", name, record.export_type);

    if !record.parameter_names.is_empty() {
        line.push_str(&format!(" [{}]", record.parameter_names.join(", ")));
    }
    if let Some(wrapper) = &record.wrapper {
        line.push_str(&format!(" via {}", paint(use_colors, Cyan.normal(), wrapper.as_str())));
    }
    if verbose {
        if let Some(line_number) = record.line_number {
            line.push_str(&format!(" line {}", line_number));
        }
        if record.has_default_props {
            line.push_str(" defaultProps");
        }
    }
    line.push('\n');
    line
}

/// Format one file's analysis as text
pub fn format_analysis_text(analysis: &Analysis, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    let strategy = match analysis.strategy {
        Strategy::Structural => paint(use_colors, Green.normal(), "structural"),
        Strategy::Heuristic => paint(use_colors, Yellow.normal(), "heuristic"),
        Strategy::Synthesized => paint(use_colors, Red.normal(), "synthesized"),
    };
    output.push_str(&format!(
        "{} ({})\n",
        paint(use_colors, Blue.bold(), analysis.file_path.display().to_string()),
        strategy
    ));

    let result = &analysis.result;
    if let Some(main) = result.main_export() {
        output.push_str(&format!("  Main export: {}\n", main.name));
    }
    if !result.components().is_empty() {
        output.push_str(&format!("  Components ({}):\n", result.components().len()));
        for record in result.components() {
            output.push_str(&describe_record(record, use_colors, verbose));
        }
    }
    if !result.functions().is_empty() {
        output.push_str(&format!("  Functions ({}):\n", result.functions().len()));
        for record in result.functions() {
            output.push_str(&describe_record(record, use_colors, verbose));
        }
    }

    output.push('\n');
    output
}

/// Format the run summary as text
pub fn format_summary_text(report: &ScanReport, use_colors: bool) -> String {
    let summary = &report.summary;
    let mut output = String::new();

    output.push_str(&format!("{}\n", paint(use_colors, Blue.bold(), "Scan Summary")));
    output.push_str(&format!("Files analyzed: {}\n", summary.files));
    output.push_str(&format!("Components: {}\n", summary.components));
    output.push_str(&format!("Functions: {}\n", summary.functions));
    if summary.heuristic > 0 || summary.synthesized > 0 {
        output.push_str(&format!(
            "Degraded: {} heuristic, {} synthesized\n",
            summary.heuristic, summary.synthesized
        ));
    }

    if !report.errors.is_empty() {
        output.push_str(&format!(
            "\n{}\n",
            paint(use_colors, Yellow.bold(), format!("Errors encountered: {}", report.errors.len()))
        ));
        for error in &report.errors {
            let severity = match error.severity {
                ErrorSeverity::Warning => paint(use_colors, Yellow.normal(), "WARNING"),
                ErrorSeverity::Error => paint(use_colors, Red.normal(), "ERROR"),
                ErrorSeverity::Critical => paint(use_colors, Red.bold(), "CRITICAL"),
            };
            output.push_str(&format!("  [{}] {}: {}\n", severity, error.path.display(), error.message));
        }
    }

    output
}

/// Format a report as pretty JSON
pub fn format_report_json(report: &ScanReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|source| ScanError::JsonSerialize { source })
}

/// Format a report as CSV, one row per record
pub fn format_report_csv(report: &ScanReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record([
        "File",
        "Strategy",
        "Name",
        "Kind",
        "Export Type",
        "Main Export",
        "Parameters",
        "Has Default Props",
        "Line",
        "Wrapper",
    ])?;

    for analysis in &report.files {
        let main_name = analysis.result.main_export().map(|main| main.name.as_str());
        for record in analysis.result.records() {
            let kind = if record.is_component() { "component" } else { "function" };
            writer.write_record([
                analysis.file_path.display().to_string(),
                analysis.strategy.to_string(),
                record.name.clone(),
                kind.to_string(),
                record.export_type.to_string(),
                (main_name == Some(record.name.as_str())).to_string(),
                record.parameter_names.join(" "),
                record.has_default_props.to_string(),
                record.line_number.map(|line| line.to_string()).unwrap_or_default(),
                record.wrapper.as_ref().map(|w| w.as_str().to_string()).unwrap_or_default(),
            ])?;
        }
    }

    let bytes = writer.into_inner().map_err(|err| ScanError::io_error(err.into_error()))?;
    String::from_utf8(bytes).map_err(|source| ScanError::CsvSerialize { source })
}
