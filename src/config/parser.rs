//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{Result, ScanError};
use crate::models::config::PartialSettings;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ScanError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ScanError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|source| ScanError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

fn invalid(path: &Path, message: impl std::fmt::Display) -> ScanError {
    ScanError::config_error(format!("{} in config file: {}", message, path.display()))
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(paths) = &settings.paths {
        if paths.iter().any(|entry| entry.as_os_str().is_empty()) {
            return Err(invalid(path, "Invalid empty entry in paths"));
        }
    }

    if let Some(patterns) = &settings.exclude_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return Err(invalid(path, "Empty exclude pattern"));
            }
            glob::Pattern::new(pattern)
                .map_err(|e| invalid(path, format!("Invalid exclude pattern '{}': {}", pattern, e)))?;
        }
    }

    if let Some(extensions) = &settings.extensions {
        if extensions.iter().any(|ext| ext.trim_start_matches('.').is_empty()) {
            return Err(invalid(path, "Empty extension"));
        }
    }

    if settings.max_depth == Some(0) {
        return Err(invalid(path, "Invalid max_depth 0 (must be at least 1)"));
    }

    if settings.max_markup_depth == Some(0) {
        return Err(invalid(path, "Invalid max_markup_depth 0 (must be at least 1)"));
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(invalid(path, "Invalid empty output_file"));
        }
    }

    Ok(())
}

/// Locations searched for a configuration file, in order.
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }
    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("compscan").join("config.toml"));
    }
    locations
}

/// Load the first configuration file found among `locations`.
pub fn find_config_in(locations: &[PathBuf]) -> Result<Option<PartialSettings>> {
    for location in locations {
        if location.is_file() {
            debug!("loading configuration from {}", location.display());
            return parse_config_file(location).map(Some);
        }
    }
    Ok(None)
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    find_config_in(&default_config_locations())
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, include_str!("default_config.toml"))?;

    Ok(())
}
