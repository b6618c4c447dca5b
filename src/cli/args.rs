//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// compscan - inventory the components and functions a JS/TS file exports
#[derive(Parser, Debug)]
#[command(name = "compscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List the exported components and functions of JavaScript/TypeScript source files")]
#[command(long_about = "compscan parses each JavaScript or TypeScript file it is given and reports which exports \
are UI components (they render markup) and which are plain functions, together with parameter names, the \
main (default) export and any higher-order wrapper such as connect, memo or forwardRef. Files that do not \
parse fall back to a text-pattern analysis, and a file with nothing recognizable still yields one component \
named after the file.")]
#[command(after_help = "EXAMPLES:

    # Analyze every source file under src/
    compscan src

    # Analyze two files and print JSON
    compscan src/App.jsx src/utils.ts --output json

    # Write a CSV inventory to a file
    compscan src --output csv --output-file components.csv

    # Recognize MobX observer() as a wrapper
    compscan src --wrapper observer

    # Only report functions whose export can be confirmed in the source text
    compscan src --verify

    # Create a default configuration file (.compscan.toml)
    compscan --init
")]
pub struct Args {
    /// Files or directories to analyze
    #[arg(value_name = "PATH", help = "Files or directories to analyze (defaults to the current directory)")]
    pub paths: Vec<PathBuf>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, help = "Output format: 'text' for people, 'json' for tools, 'csv' for spreadsheets")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write output to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .compscan.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Exclude paths matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns skipped while expanding directories (can be repeated)")]
    pub exclude: Vec<String>,

    /// Maximum depth for directory traversal
    #[arg(long, value_name = "DEPTH", help = "Maximum directory depth to traverse")]
    pub max_depth: Option<usize>,

    /// File extensions picked up from directories
    #[arg(long, value_name = "EXT", help = "File extension to pick up from directories, without the dot (can be repeated)")]
    pub extension: Vec<String>,

    /// Extra wrapper function names
    #[arg(long, value_name = "NAME", help = "Treat calls to NAME like connect/memo when unwrapping exports (can be repeated)")]
    pub wrapper: Vec<String>,

    /// Nesting limit for the markup search
    #[arg(long, value_name = "DEPTH", help = "Nesting limit for the markup search inside a declaration")]
    pub max_markup_depth: Option<usize>,

    /// Disable the loose second pass of the text fallback
    #[arg(long, help = "Disable the loose markup pass used when a file cannot be parsed")]
    pub no_permissive: bool,

    /// Drop function records that fail the export text check
    #[arg(long, help = "Drop function records whose export cannot be confirmed in the source text")]
    pub verify: bool,

    /// Disable parallel processing
    #[arg(long, help = "Analyze files one at a time")]
    pub no_parallel: bool,

    /// Follow symbolic links during directory traversal
    #[arg(long, help = "Follow symbolic links while expanding directories")]
    pub follow_links: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_colors: bool,

    /// Disable progress bars
    #[arg(long, help = "Disable the progress bar")]
    pub no_progress: bool,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose", help = "Print one tab-separated line per record and nothing else")]
    pub quiet: bool,

    /// Show debug information
    #[arg(short, long, help = "Show line numbers and log each analysis decision")]
    pub verbose: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.compscan.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
