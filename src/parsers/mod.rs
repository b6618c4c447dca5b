//! Single-file analysis engine
//!
//! Parsing, export tracking, declaration classification and the text-pattern
//! fallback used when structural analysis has nothing to offer.

pub mod ast_parser;
pub mod declarations;
pub mod exports;
pub mod fallback;
pub mod markup;
pub mod params;
pub mod verify;
pub mod wrappers;

pub use ast_parser::AstParser;
pub use declarations::{classify, ClassifyContext};
pub use exports::{ExportBinding, ExportTable, ExportTracker};
pub use fallback::{analyze_fallback, DefaultExportStrategy, FallbackScan, DEFAULT_EXPORT_STRATEGIES};
pub use markup::{contains_markup, snippet_contains_markup, MarkupScan};
pub use params::parameter_names;
pub use verify::verify_export;
pub use wrappers::{WrapTarget, WrapperMatcher};
