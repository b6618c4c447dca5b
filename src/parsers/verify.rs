//! Export verification
//!
//! A text check that a record's name really is exported with the stated
//! shape. Used to drop function records the structural pass may have picked
//! up through an unusual export form.

use regex::Regex;
use tracing::debug;

use crate::models::ExportType;

/// Whether `source` exports `name` as `export_type` (either shape when `None`).
///
/// An empty source is assumed to export everything.
pub fn verify_export(name: &str, source: &str, export_type: Option<ExportType>) -> bool {
    if source.is_empty() {
        return true;
    }

    let name = regex::escape(name);
    let named = [
        format!(r"export\s+(?:(?:const|let|var|class)\s+|(?:async\s+)?function\b\s*\*?\s*){name}(?:[^\w$]|$)"),
        format!(r"export\s*\{{\s*{name}\s*\}}"),
        format!(r"export\s*\{{[^}}]*(?:^|[^\w$]){name}(?:[^\w$]|$)[^}}]*\}}"),
    ];
    let default = [
        format!(r"export\s+default\s+{name}(?:[^\w$]|$)"),
        format!(r"export\s+default\s+(?:(?:class|const)\s+|(?:async\s+)?function\b\s*\*?\s*){name}(?:[^\w$]|$)"),
    ];

    let patterns: Vec<&String> = match export_type {
        Some(ExportType::Named) => named.iter().collect(),
        Some(ExportType::Default) => default.iter().collect(),
        None => named.iter().chain(default.iter()).collect(),
    };

    patterns.into_iter().any(|pattern| match Regex::new(pattern) {
        Ok(regex) => regex.is_match(source),
        Err(err) => {
            debug!(error = %err, "skipping unusable export pattern");
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_shapes() {
        let source = "export const add = (a, b) => a + b;\nexport { mul, div };";
        assert!(verify_export("add", source, Some(ExportType::Named)));
        assert!(verify_export("div", source, Some(ExportType::Named)));
        assert!(!verify_export("sub", source, Some(ExportType::Named)));
        assert!(!verify_export("add", source, Some(ExportType::Default)));
    }

    #[test]
    fn test_default_shapes() {
        assert!(verify_export("App", "export default App;", Some(ExportType::Default)));
        assert!(verify_export("App", "export default function App() {}", Some(ExportType::Default)));
        assert!(!verify_export("App", "export default AppShell;", Some(ExportType::Default)));
    }

    #[test]
    fn test_async_and_generator_functions() {
        let source = "export async function load(id) {}\nexport function* ids() {}\nexport default async function run() {}";
        assert!(verify_export("load", source, Some(ExportType::Named)));
        assert!(verify_export("ids", source, Some(ExportType::Named)));
        assert!(verify_export("run", source, Some(ExportType::Default)));
        assert!(!verify_export("loader", source, Some(ExportType::Named)));
    }

    #[test]
    fn test_either_shape_and_empty_source() {
        assert!(verify_export("App", "export default App;", None));
        assert!(verify_export("anything", "", Some(ExportType::Named)));
    }

    #[test]
    fn test_names_are_matched_literally() {
        assert!(verify_export("$store", "export const $store = 1;", Some(ExportType::Named)));
        assert!(!verify_export("a.b", "export const aXb = 1;", Some(ExportType::Named)));
    }
}
