use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as Process;

use clap::Parser;
use compscan::cli::{resolve_settings, scan, Args};
use compscan::models::OutputFormat;
use compscan::Strategy;
use tempfile::{tempdir, TempDir};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// An empty config file, so no user-level configuration leaks into a test.
fn empty_config() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("compscan.toml");
    fs::write(&path, "").unwrap();
    (dir, path)
}

fn compscan() -> Process {
    Process::new(env!("CARGO_BIN_EXE_compscan"))
}

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["compscan"]);
    assert!(args.paths.is_empty());
    assert!(args.exclude.is_empty());
    assert_eq!(args.max_depth, None);
    assert_eq!(args.output, None);
    assert!(!args.quiet);

    let args = Args::parse_from([
        "compscan",
        "src",
        "--exclude",
        "**/node_modules/**",
        "--max-depth",
        "5",
        "--output",
        "json",
        "--output-file",
        "results.json",
        "--no-permissive",
        "--verbose",
    ]);
    assert_eq!(args.paths, vec![PathBuf::from("src")]);
    assert_eq!(args.exclude, vec!["**/node_modules/**".to_string()]);
    assert_eq!(args.max_depth, Some(5));
    assert_eq!(args.output_file, Some(PathBuf::from("results.json")));
    assert!(args.no_permissive);
    assert!(args.verbose);
}

#[test]
fn test_resolve_settings_layers_config_and_flags() {
    let (dir, config) = empty_config();
    fs::write(&config, "output_format = \"csv\"\nextra_wrappers = [\"observer\"]\n").unwrap();
    let dir_arg = dir.path().to_string_lossy().into_owned();
    let config_arg = config.to_string_lossy().into_owned();

    let args = Args::parse_from(["compscan", &dir_arg, "--config", &config_arg, "--output", "json"]);
    let settings = resolve_settings(&args).unwrap();

    assert_eq!(settings.output_format, OutputFormat::Json);
    assert_eq!(settings.extra_wrappers, vec!["observer".to_string()]);
    assert_eq!(settings.paths, vec![dir.path().to_path_buf()]);
}

#[test]
fn test_scan_fixture_directory() {
    let (_dir, config) = empty_config();
    let fixtures = fixtures_dir().to_string_lossy().into_owned();
    let config_arg = config.to_string_lossy().into_owned();

    let args = Args::parse_from(["compscan", &fixtures, "--config", &config_arg, "--no-progress", "--extension", "tsx"]);
    let settings = resolve_settings(&args).unwrap();
    let report = scan(&settings).unwrap();

    assert_eq!(report.summary.files, 1);
    assert_eq!(report.files[0].strategy, Strategy::Structural);
    assert_eq!(report.files[0].result.main_export().unwrap().name, "UserCard");
}

#[test]
fn test_binary_prints_json() {
    let (_dir, config) = empty_config();
    let output = compscan()
        .arg(fixtures_dir().join("order-summary.jsx"))
        .args(["--output", "json", "--no-progress", "--no-colors", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["files"][0]["result"]["mainExport"]["name"], "OrderSummary");
}

#[test]
fn test_binary_quiet_lines() {
    let (_dir, config) = empty_config();
    let output = compscan()
        .arg(fixtures_dir().join("legacy-panel.jsx"))
        .args(["-q", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().any(|line| line.ends_with("\tclampValue\tfunction\tnamed")));
}

#[test]
fn test_binary_exit_codes() {
    let (_dir, config) = empty_config();
    let missing_path = compscan()
        .args(["/definitely/not/a/source/dir", "--no-progress", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert_eq!(missing_path.status.code(), Some(1));

    let missing_config = compscan()
        .arg(fixtures_dir())
        .args(["--config", "/definitely/not/a/config.toml"])
        .output()
        .unwrap();
    assert_eq!(missing_config.status.code(), Some(2));
}

#[test]
fn test_binary_writes_output_file() {
    let (dir, config) = empty_config();
    let out = dir.path().join("inventory.csv");

    let status = compscan()
        .arg(fixtures_dir().join("Dashboard.jsx"))
        .args(["--output", "csv", "--no-progress", "--output-file"])
        .arg(&out)
        .arg("--config")
        .arg(&config)
        .status()
        .unwrap();

    assert!(status.success());
    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.lines().any(|line| line.contains(",Dashboard,component,default,true,")));
}
