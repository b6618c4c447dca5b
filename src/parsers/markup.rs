//! Markup containment test
//!
//! Decides whether a subtree embeds inline markup (a JSX element or fragment).
//! The walk stops at the first hit and never descends past a nesting limit.

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    ArrowFunctionExpression, Class, Expression, Function, FunctionBody, JSXElement, JSXFragment, Program, Statement,
};
use oxc_ast_visit::{walk, Visit};
use oxc_syntax::scope::ScopeFlags;
use std::path::Path;
use tracing::warn;

use super::ast_parser::AstParser;

/// Visitor that looks for the first markup node.
#[derive(Debug)]
pub struct MarkupFinder {
    max_depth: usize,
    depth: usize,
    found: bool,
    truncated: bool,
}

impl MarkupFinder {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
            depth: 0,
            found: false,
            truncated: false,
        }
    }

    pub fn found(&self) -> bool {
        self.found
    }

    /// Whether some subtree was skipped because it sat below the depth limit.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Returns false when the walk should not descend.
    fn enter(&mut self) -> bool {
        if self.found {
            return false;
        }
        if self.depth >= self.max_depth {
            self.truncated = true;
            return false;
        }
        self.depth += 1;
        true
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

impl<'a> Visit<'a> for MarkupFinder {
    fn visit_statement(&mut self, stmt: &Statement<'a>) {
        if self.enter() {
            walk::walk_statement(self, stmt);
            self.leave();
        }
    }

    fn visit_expression(&mut self, expr: &Expression<'a>) {
        if self.enter() {
            walk::walk_expression(self, expr);
            self.leave();
        }
    }

    fn visit_jsx_element(&mut self, _elem: &JSXElement<'a>) {
        self.found = true;
    }

    fn visit_jsx_fragment(&mut self, _frag: &JSXFragment<'a>) {
        self.found = true;
    }
}

/// Nodes the markup test can start from.
pub trait MarkupScan<'a> {
    fn scan(&self, finder: &mut MarkupFinder);
}

impl<'a> MarkupScan<'a> for Program<'a> {
    fn scan(&self, finder: &mut MarkupFinder) {
        finder.visit_program(self);
    }
}

impl<'a> MarkupScan<'a> for Statement<'a> {
    fn scan(&self, finder: &mut MarkupFinder) {
        finder.visit_statement(self);
    }
}

impl<'a> MarkupScan<'a> for Expression<'a> {
    fn scan(&self, finder: &mut MarkupFinder) {
        finder.visit_expression(self);
    }
}

impl<'a> MarkupScan<'a> for FunctionBody<'a> {
    fn scan(&self, finder: &mut MarkupFinder) {
        finder.visit_function_body(self);
    }
}

impl<'a> MarkupScan<'a> for Function<'a> {
    fn scan(&self, finder: &mut MarkupFinder) {
        finder.visit_function(self, ScopeFlags::Function);
    }
}

impl<'a> MarkupScan<'a> for ArrowFunctionExpression<'a> {
    fn scan(&self, finder: &mut MarkupFinder) {
        finder.visit_arrow_function_expression(self);
    }
}

impl<'a> MarkupScan<'a> for Class<'a> {
    fn scan(&self, finder: &mut MarkupFinder) {
        finder.visit_class(self);
    }
}

/// Whether `node` contains a markup element or fragment anywhere below it.
pub fn contains_markup<'a, N>(node: &N, max_depth: usize) -> bool
where
    N: MarkupScan<'a> + ?Sized,
{
    let mut finder = MarkupFinder::new(max_depth);
    node.scan(&mut finder);
    if finder.truncated() && !finder.found() {
        warn!(max_depth, "markup search stopped at the nesting limit");
    }
    finder.found()
}

/// Parse an isolated text region and run the markup test on it.
///
/// Returns `None` when the region does not parse on its own.
pub fn snippet_contains_markup(text: &str, path: &Path, max_depth: usize) -> Option<bool> {
    let allocator = Allocator::default();
    let program = AstParser::new().parse(&allocator, text, path).ok()?;
    Some(contains_markup(&program, max_depth))
}
