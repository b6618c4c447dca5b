//! Result aggregation
//!
//! Turns classifier or fallback output into an [`AnalysisResult`] and makes
//! sure the result is never empty.

use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::models::{AnalysisResult, ComponentInfo, ExportType};
use crate::utils::{component_name_from_path, is_identifier};

/// Build a result from `records`.
///
/// Records are de-duplicated by name (first wins) and only the last default
/// export stays default; earlier ones are reported as named. When nothing is
/// left, a single default component is synthesized from `preferred_name` or
/// else the file name. The flag is true when that happened.
pub fn aggregate(records: Vec<ComponentInfo>, path: &Path, preferred_name: Option<&str>) -> (AnalysisResult, bool) {
    let mut seen = HashSet::new();
    let mut records: Vec<ComponentInfo> = records
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(record.name.clone());
            if !fresh {
                debug!(name = %record.name, "dropping duplicate record");
            }
            fresh
        })
        .collect();

    if let Some(last_default) = records.iter().rposition(ComponentInfo::is_default) {
        for record in records[..last_default].iter_mut().filter(|r| r.is_default()) {
            debug!(name = %record.name, "earlier default export reported as named");
            record.export_type = ExportType::Named;
        }
    }

    if !records.is_empty() {
        return (AnalysisResult::from_records(records), false);
    }

    let name = preferred_name
        .filter(|name| is_identifier(name))
        .map(str::to_string)
        .unwrap_or_else(|| component_name_from_path(path));
    debug!(name = %name, path = %path.display(), "synthesizing component from file name");
    let synthesized = ComponentInfo::component(name, ExportType::Default, path);
    (AnalysisResult::from_records([synthesized]), true)
}
