//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments that map onto settings
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub paths: Vec<PathBuf>,
    pub exclude: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub wrappers: Option<Vec<String>>,
    pub max_markup_depth: Option<usize>,
    pub no_permissive: bool,
    pub verify: bool,
    pub no_parallel: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub follow_links: bool,
    pub no_colors: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        let cli_args = CliArgs {
            paths: args.paths.clone(),
            exclude: non_empty(&args.exclude),
            extensions: non_empty(&args.extension),
            max_depth: args.max_depth,
            output_format: args.output.map(|format| match format {
                CliOutputFormat::Text => OutputFormat::Text,
                CliOutputFormat::Json => OutputFormat::Json,
                CliOutputFormat::Csv => OutputFormat::Csv,
            }),
            output_file: args.output_file.clone(),
            wrappers: non_empty(&args.wrapper),
            max_markup_depth: args.max_markup_depth,
            no_permissive: args.no_permissive,
            verify: args.verify,
            no_parallel: args.no_parallel,
            quiet: args.quiet,
            verbose: args.verbose,
            follow_links: args.follow_links,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            config: args.config.clone(),
        };

        Self::new(cli_args)
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if !self.args.paths.is_empty() {
            settings.paths = Some(self.args.paths.clone());
        }
        settings.exclude_patterns = self.args.exclude.clone();
        settings.extensions = self.args.extensions.clone();
        settings.max_depth = self.args.max_depth;
        settings.output_format = self.args.output_format;
        settings.output_file = self.args.output_file.clone();
        settings.extra_wrappers = self.args.wrappers.clone();
        settings.max_markup_depth = self.args.max_markup_depth;

        // Flags only ever override towards the non-default value
        if self.args.no_permissive {
            settings.permissive_fallback = Some(false);
        }
        if self.args.verify {
            settings.verify_exports = Some(true);
        }
        if self.args.no_parallel {
            settings.parallel = Some(false);
        }
        if self.args.quiet {
            settings.quiet = Some(true);
        }
        if self.args.verbose {
            settings.verbose = Some(true);
        }
        if self.args.follow_links {
            settings.follow_links = Some(true);
        }
        if self.args.no_colors {
            settings.use_colors = Some(false);
        }
        if self.args.no_progress {
            settings.show_progress = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
