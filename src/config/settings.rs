//! Settings validation

use std::path::Path;

use crate::error::{Result, ResultExt, ScanError};
use crate::models::config::Settings;
use crate::utils::is_identifier;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if settings.paths.is_empty() {
            return Err(ScanError::config_error("At least one path must be given"));
        }
        for path in &settings.paths {
            if !path.exists() {
                return Err(ScanError::InvalidPath { path: path.clone() });
            }
        }

        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern).with_context(|| format!("Invalid exclude pattern: {}", pattern))?;
        }

        if settings.extensions.is_empty() {
            return Err(ScanError::config_error("At least one file extension must be given"));
        }

        if settings.max_depth == Some(0) {
            return Err(ScanError::config_error("Max depth must be at least 1"));
        }

        if settings.max_markup_depth == 0 {
            return Err(ScanError::config_error("Max markup depth must be at least 1"));
        }

        if let Some(name) = settings.extra_wrappers.iter().find(|name| !is_identifier(name)) {
            return Err(ScanError::config_error(format!(
                "Wrapper name '{}' is not a valid identifier",
                name
            )));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that the output file's directory exists
    fn validate_output_path(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(ScanError::OutputDirectoryNotFound {
                    path: parent.to_path_buf(),
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn settings_for(dir: &Path) -> Settings {
        Settings {
            paths: vec![dir.to_path_buf()],
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_validate_in_existing_directory() {
        let temp_dir = tempdir().unwrap();
        assert!(SettingsValidator::validate(&settings_for(temp_dir.path())).is_ok());
    }

    #[test]
    fn test_missing_path_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("nope");
        let err = SettingsValidator::validate(&settings_for(&missing)).unwrap_err();
        assert!(matches!(err, ScanError::InvalidPath { path } if path == missing));
    }

    #[test]
    fn test_wrapper_names_must_be_identifiers() {
        let temp_dir = tempdir().unwrap();
        let settings = Settings {
            extra_wrappers: vec!["observer".to_string(), "with-styles".to_string()],
            ..settings_for(temp_dir.path())
        };
        let err = SettingsValidator::validate(&settings).unwrap_err();
        assert!(err.to_string().contains("with-styles"));
    }

    #[test]
    fn test_depths_must_be_positive() {
        let temp_dir = tempdir().unwrap();
        let settings = Settings {
            max_depth: Some(0),
            ..settings_for(temp_dir.path())
        };
        assert!(SettingsValidator::validate(&settings).is_err());

        let settings = Settings {
            max_markup_depth: 0,
            ..settings_for(temp_dir.path())
        };
        assert!(SettingsValidator::validate(&settings).is_err());
    }

    #[test]
    fn test_output_directory_must_exist() {
        let temp_dir = tempdir().unwrap();
        let settings = Settings {
            output_file: Some(temp_dir.path().join("missing").join("out.json")),
            ..settings_for(temp_dir.path())
        };
        let err = SettingsValidator::validate(&settings).unwrap_err();
        assert!(matches!(err, ScanError::OutputDirectoryNotFound { .. }));

        let settings = Settings {
            output_file: Some(PathBuf::from("out.json")),
            ..settings_for(temp_dir.path())
        };
        assert!(SettingsValidator::validate(&settings).is_ok());
    }

    #[test]
    fn test_bad_exclude_pattern() {
        let temp_dir = tempdir().unwrap();
        let settings = Settings {
            exclude_patterns: vec!["[".to_string()],
            ..settings_for(temp_dir.path())
        };
        assert!(SettingsValidator::validate(&settings).is_err());
    }
}
