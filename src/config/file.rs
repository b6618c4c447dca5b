//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{Result, ScanError};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".compscan.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "COMPSCAN";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 20,
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(ScanError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys read by [`EnvConfig`], without the prefix.
const ENV_KEYS: &[&str] = &[
    "PATHS",
    "EXCLUDE",
    "EXTENSIONS",
    "MAX_DEPTH",
    "OUTPUT_FORMAT",
    "OUTPUT_FILE",
    "WRAPPERS",
    "MAX_MARKUP_DEPTH",
    "PERMISSIVE_FALLBACK",
    "VERIFY_EXPORTS",
    "PARALLEL",
];

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 10,
        }
    }

    fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix, suffix)
    }

    /// Build settings from any key lookup; unparsable values are ignored.
    pub fn load_with<F>(&self, lookup: F) -> PartialSettings
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |suffix: &str| lookup(&self.key(suffix));
        let mut settings = PartialSettings::default();

        if let Some(paths) = get("PATHS") {
            settings.paths = Some(split_list(&paths).into_iter().map(PathBuf::from).collect());
        }
        if let Some(exclude) = get("EXCLUDE") {
            settings.exclude_patterns = Some(split_list(&exclude));
        }
        if let Some(extensions) = get("EXTENSIONS") {
            settings.extensions = Some(split_list(&extensions));
        }
        if let Some(wrappers) = get("WRAPPERS") {
            settings.extra_wrappers = Some(split_list(&wrappers));
        }
        settings.max_depth = get("MAX_DEPTH").and_then(|value| value.trim().parse().ok());
        settings.max_markup_depth = get("MAX_MARKUP_DEPTH").and_then(|value| value.trim().parse().ok());
        settings.output_format = get("OUTPUT_FORMAT").and_then(|value| value.parse().ok());
        settings.output_file = get("OUTPUT_FILE").map(PathBuf::from);
        settings.permissive_fallback = get("PERMISSIVE_FALLBACK").and_then(|value| parse_flag(&value));
        settings.verify_exports = get("VERIFY_EXPORTS").and_then(|value| parse_flag(&value));
        settings.parallel = get("PARALLEL").and_then(|value| parse_flag(&value));

        settings
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        Ok(self.load_with(|key| std::env::var(key).ok()))
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|suffix| std::env::var(self.key(suffix)).is_ok())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
