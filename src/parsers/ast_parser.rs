//! AST parser wrapper using OXC
//!
//! Turns source text into a syntax tree. Markup syntax is always accepted and
//! type syntax is switched on by the file extension. Failures come back as a
//! [`ParseFailure`] value; nothing panics past this boundary.

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_diagnostics::OxcDiagnostic;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;
use std::path::Path;
use tracing::debug;

use crate::error::ParseFailure;

/// Extensions that switch on type syntax.
const TYPESCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts"];

/// AST parser using OXC
#[derive(Clone)]
pub struct AstParser {
    parse_options: ParseOptions,
}

impl AstParser {
    /// Create a new AST parser
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions {
                parse_regular_expression: true,
                allow_return_outside_function: true,
                ..ParseOptions::default()
            },
        }
    }

    /// Source type for a path: always a module with markup enabled.
    pub fn source_type_for(path: &Path) -> SourceType {
        let typescript = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| TYPESCRIPT_EXTENSIONS.iter().any(|ts| ts.eq_ignore_ascii_case(ext)))
            .unwrap_or(false);

        SourceType::mjs().with_jsx(true).with_typescript(typescript)
    }

    /// Parse `source` into a program allocated in `allocator`.
    ///
    /// The tree is accepted when the parser recovered: diagnostics on a
    /// non-empty program are logged and otherwise ignored.
    pub fn parse<'a>(&self, allocator: &'a Allocator, source: &'a str, path: &Path) -> Result<Program<'a>, ParseFailure> {
        let source_type = Self::source_type_for(path);

        let ret = Parser::new(allocator, source, source_type)
            .with_options(self.parse_options.clone())
            .parse();

        let diagnostics = render_diagnostics(&ret.errors);

        if ret.panicked || (!diagnostics.is_empty() && ret.program.body.is_empty()) {
            return Err(ParseFailure::new(path, diagnostics));
        }

        if !diagnostics.is_empty() {
            debug!(
                path = %path.display(),
                count = diagnostics.len(),
                "parsed with recoverable errors: {}",
                diagnostics.join("; ")
            );
        }

        Ok(ret.program)
    }
}

impl Default for AstParser {
    fn default() -> Self {
        Self::new()
    }
}

fn render_diagnostics(errors: &[OxcDiagnostic]) -> Vec<String> {
    errors.iter().map(|e| e.to_string()).collect()
}
