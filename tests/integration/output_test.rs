use std::fs;
use std::path::{Path, PathBuf};

use compscan::output::{create_formatter, create_writer, CsvFormatter, Formatter, JsonFormatter, TextFormatter};
use compscan::{Analyzer, ScanReport, ScanError};
use compscan::models::OutputFormat;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn fixture_report() -> ScanReport {
    let analyzer = Analyzer::default();
    let files = ["Dashboard.jsx", "legacy-panel.jsx"]
        .iter()
        .map(|name| analyzer.inspect_file(&fixture(name)))
        .collect();
    ScanReport::new(files)
}

#[test]
fn test_json_output_shape() {
    let output = JsonFormatter.format(&fixture_report()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    let dashboard = &json["files"][0];
    assert!(dashboard["filePath"].as_str().unwrap().ends_with("Dashboard.jsx"));
    assert_eq!(dashboard["strategy"], "structural");

    let main = &dashboard["result"]["mainExport"];
    assert_eq!(main["name"], "Dashboard");
    assert_eq!(main["exportType"], "default");
    assert_eq!(main["isComponent"], true);
    assert_eq!(main["hasDefaultProps"], true);
    assert_eq!(main["wrapper"], "connect");
    assert_eq!(main["lineNumber"], 6);
    assert_eq!(main, &dashboard["result"]["components"][0]);

    assert_eq!(json["summary"]["files"], 2);
    assert_eq!(json["summary"]["components"], 3);
    assert_eq!(json["summary"]["functions"], 2);
    assert_eq!(json["errors"], serde_json::json!([]));
}

#[test]
fn test_csv_output_rows() {
    let output = CsvFormatter.format(&fixture_report()).unwrap();
    let mut reader = csv::Reader::from_reader(output.as_bytes());

    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.get(2), Some("Name"));
    assert_eq!(headers.get(4), Some("Export Type"));

    let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.unwrap()).collect();
    assert_eq!(rows.len(), 5);

    let clamp = rows.iter().find(|row| row.get(2) == Some("clampValue")).unwrap();
    assert_eq!(clamp.get(3), Some("function"));
    assert_eq!(clamp.get(4), Some("named"));
    assert_eq!(clamp.get(6), Some("value min max"));
}

#[test]
fn test_text_output_lists_each_file() {
    let output = TextFormatter::new(false, false, false).format(&fixture_report()).unwrap();

    assert!(output.contains("Dashboard.jsx (structural)"));
    assert!(output.contains("legacy-panel.jsx (structural)"));
    assert!(output.contains("Main export: LegacyPanel"));
    assert!(output.contains("Files analyzed: 2"));
    assert!(!output.contains("Degraded"));
}

#[test]
fn test_formatter_factory() {
    let report = fixture_report();
    let json = create_formatter(OutputFormat::Json, false, false, false).format(&report).unwrap();
    assert!(json.trim_start().starts_with('{'));

    let csv = create_formatter(OutputFormat::Csv, false, false, false).format(&report).unwrap();
    assert!(csv.starts_with("File,"));

    let quiet = create_formatter(OutputFormat::Text, false, false, true).format(&report).unwrap();
    assert_eq!(quiet.lines().count(), 5);
}

#[test]
fn test_writer_to_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("report.csv");

    create_writer(Some(&path)).write("a,b\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n");

    let missing = temp_dir.path().join("nope").join("report.csv");
    assert!(matches!(
        create_writer(Some(&missing)).write("x"),
        Err(ScanError::OutputWrite { .. })
    ));
}
