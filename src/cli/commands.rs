//! Command implementations

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::Args;
use crate::config::{self, CliConfig, ConfigBuilder, ConfigSource, EnvConfig, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::core::{aggregate, analyze_files, Analyzer, SourceWalker};
use crate::error::{ErrorSeverity, Result, ScanError};
use crate::models::{Analysis, ScanReport, Settings, Strategy};
use crate::output::{create_formatter, create_progress_callback, create_writer, ProgressReporter};
use crate::parsers::verify_export;
use crate::utils::component_name_from_path;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Analyze the given source files and directories
    Analyze(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }
        Command::Analyze(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Analyze(args) => {
                let settings = resolve_settings(args)?;
                debug!("settings: {:?}", settings);

                let started = Instant::now();
                let report = scan(&settings)?;
                info!(
                    "analyzed {} files in {:.2?}",
                    report.summary.files,
                    started.elapsed()
                );

                write_report(&report, &settings)
            }
            Command::Init => init_config(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Run the command and map its outcome to an exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                exit_code(&err)
            }
        }
    }
}

/// Exit code for a failed run: 2 for critical errors, 1 otherwise.
pub fn exit_code(err: &ScanError) -> i32 {
    match err.severity() {
        ErrorSeverity::Critical => 2,
        ErrorSeverity::Warning | ErrorSeverity::Error => 1,
    }
}

/// Merge defaults, config file, environment and flags into validated settings
pub fn resolve_settings(args: &Args) -> Result<Settings> {
    let cli_config = CliConfig::from_args(args);

    let builder = match cli_config.config_path() {
        Some(path) => ConfigBuilder::new().add_config_file(path)?,
        None => ConfigBuilder::new().add_default_config_file()?,
    };

    builder
        .try_load_from(&EnvConfig::new(ENV_PREFIX))
        .merge(cli_config.load()?)
        .build()
}

/// Discover, analyze and collect every configured input into a report
pub fn scan(settings: &Settings) -> Result<ScanReport> {
    let walker = SourceWalker::new(settings)?;
    let discovery = walker.discover()?;
    let analyzer = Analyzer::new(settings.analyzer_options());

    let reporter = Arc::new(ProgressReporter::new(settings.show_progress && !settings.quiet));
    reporter.start(discovery.files.len(), "Analyzing");

    let mut analyses = analyze_files(
        &analyzer,
        discovery.files,
        settings.parallel,
        create_progress_callback(reporter.clone()),
    );
    reporter.finish(&format!("Analyzed {} files", analyses.len()));

    let mut unreadable = Vec::new();
    if settings.verify_exports {
        for analysis in &mut analyses {
            if let Err(err) = verify_exports(analysis) {
                unreadable.push((analysis.file_path.clone(), err));
            }
        }
    }

    let mut report = ScanReport::new(analyses);
    for (path, err) in discovery.errors.iter().chain(unreadable.iter()) {
        report.add_error(path.clone(), err);
    }
    Ok(report)
}

/// Drop function records whose export is not visible in the file's text.
///
/// Records named after the file (anonymous defaults) are kept, and a result
/// left empty is replaced by the synthesized file component.
pub fn verify_exports(analysis: &mut Analysis) -> Result<()> {
    let source = fs::read_to_string(&analysis.file_path)
        .map_err(|source| ScanError::source_read_error(analysis.file_path.clone(), source))?;
    let file_name = component_name_from_path(&analysis.file_path);

    let before = analysis.result.functions().len();
    analysis.result.retain_functions(|record| {
        record.name == file_name || verify_export(&record.name, &source, Some(record.export_type))
    });

    if analysis.result.is_empty() {
        debug!("no verified exports left in {}", analysis.file_path.display());
        analysis.result = aggregate(Vec::new(), &analysis.file_path, None).0;
        analysis.strategy = Strategy::Synthesized;
    }

    let dropped = before - analysis.result.functions().len();
    if dropped > 0 {
        debug!(
            "dropped {} unverified function(s) from {}",
            dropped,
            analysis.file_path.display()
        );
    }
    Ok(())
}

fn write_report(report: &ScanReport, settings: &Settings) -> Result<()> {
    let formatter = create_formatter(
        settings.output_format,
        settings.use_colors && settings.output_file.is_none(),
        settings.verbose,
        settings.quiet,
    );
    let content = formatter.format(report)?;
    create_writer(settings.output_file.as_ref()).write(&content)
}

/// Write the default configuration file unless one already exists
pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Configuration file already exists at: {}", path.display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    config::create_default_config(path)?;

    println!("Created default configuration file at: {}", path.display());
    println!("Edit it to set paths, exclude patterns, extra wrappers and the output format.");
    Ok(())
}
