//! Source file discovery
//!
//! Expands the configured inputs into the list of files to analyze. Files
//! named explicitly are taken as given; directories are walked for files with
//! a configured extension, skipping excluded paths.

use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, ResultExt, ScanError};
use crate::models::Settings;

/// Walker over the configured input paths
pub struct SourceWalker {
    paths: Vec<PathBuf>,
    extensions: Vec<String>,
    exclude_patterns: Vec<Pattern>,
    max_depth: Option<usize>,
    follow_links: bool,
}

/// Files found plus the non-critical errors met on the way.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub errors: Vec<(PathBuf, ScanError)>,
}

impl SourceWalker {
    /// Create a walker; fails when an exclude pattern is not a valid glob.
    pub fn new(settings: &Settings) -> Result<Self> {
        let exclude_patterns = settings
            .exclude_patterns
            .iter()
            .map(|pattern| Pattern::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            paths: settings.paths.clone(),
            extensions: settings.extensions.clone(),
            exclude_patterns,
            max_depth: settings.max_depth,
            follow_links: settings.follow_links,
        })
    }

    /// Collect source files from every input path, sorted and de-duplicated.
    pub fn discover(&self) -> Result<Discovery> {
        let mut discovery = Discovery::default();

        for path in &self.paths {
            let metadata = fs::metadata(path).with_file_context(path)?;
            if metadata.is_file() {
                discovery.files.push(path.clone());
            } else {
                self.walk_directory(path, &mut discovery);
            }
        }

        discovery.files.sort();
        discovery.files.dedup();

        if discovery.files.is_empty() {
            let path = self.paths.first().cloned().unwrap_or_else(|| PathBuf::from("."));
            return Err(ScanError::NoSourceFiles { path });
        }

        debug!(files = discovery.files.len(), "discovered source files");
        Ok(discovery)
    }

    fn walk_directory(&self, root: &Path, discovery: &mut Discovery) {
        let mut walk = WalkDir::new(root).follow_links(self.follow_links);
        if let Some(depth) = self.max_depth {
            walk = walk.max_depth(depth);
        }

        let entries = walk.into_iter().filter_entry(|entry| !self.is_excluded(entry.path()));
        for entry in entries {
            match entry {
                Ok(entry) => {
                    if self.is_source_file(&entry) {
                        discovery.files.push(entry.into_path());
                    }
                }
                Err(err) => {
                    let path = err.path().unwrap_or(root).to_path_buf();
                    let error = match err.io_error().map(|io| io.kind()) {
                        Some(std::io::ErrorKind::PermissionDenied) => ScanError::permission_denied(&path),
                        _ => ScanError::directory_traversal_error(&path, err.to_string()),
                    };
                    debug!(path = %path.display(), "skipping unreadable entry");
                    discovery.errors.push((path, error));
                }
            }
        }
    }

    fn is_source_file(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_file() && has_extension(entry.path(), &self.extensions)
    }

    /// Check if a path matches any exclude pattern
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude_patterns.iter().any(|pattern| pattern.matches(&path_str))
    }
}

/// Whether `path` ends in one of `extensions` (given without the dot).
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
}
