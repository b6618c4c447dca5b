//! Export tracking
//!
//! First pass over a module: records which top-level names are exported, how,
//! and whether through a wrapper call. No classification happens here, so the
//! position of a declaration relative to its export statement never matters.

use oxc_ast::ast::{
    Declaration, ExportDefaultDeclaration, ExportDefaultDeclarationKind, ExportNamedDeclaration, Expression,
    Program, Statement,
};
use oxc_span::{GetSpan, Span};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::debug;

use super::wrappers::{WrapTarget, WrapperMatcher};
use crate::models::{ExportType, WrapperKind};
use crate::utils::component_name_from_path;

/// How one local name is exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBinding {
    /// Name the record is reported under (the exported alias, if any)
    pub name: String,
    pub visibility: ExportType,
    /// Outermost wrapper the export goes through
    pub wrapper: Option<WrapperKind>,
    /// Further named exports of the same local, e.g. `Bar` in `export { Foo, Foo as Bar }`
    pub aliases: Vec<String>,
}

/// A default export with no binding of its own, e.g. `export default () => <div/>`.
#[derive(Debug, Clone, Copy)]
pub struct AnonymousDefault<'s, 'a> {
    /// Span of the whole `export default` statement
    pub span: Span,
    pub target: WrapTarget<'s, 'a>,
}

/// Everything the first pass learned about a module's exports.
#[derive(Debug, Default)]
pub struct ExportTable<'s, 'a> {
    bindings: HashMap<String, ExportBinding>,
    /// Local names in the order their exports were seen
    order: Vec<String>,
    default_local: Option<String>,
    anonymous_default: Option<AnonymousDefault<'s, 'a>>,
    anonymous_name: String,
    anonymous_wrapper: Option<WrapperKind>,
}

impl<'s, 'a> ExportTable<'s, 'a> {
    /// Binding for a local declaration name.
    pub fn binding(&self, local: &str) -> Option<&ExportBinding> {
        self.bindings.get(local)
    }

    /// Every exported local name.
    pub fn exported_names(&self) -> HashSet<&str> {
        self.bindings.keys().map(String::as_str).collect()
    }

    /// Local names exported as default (at most one).
    pub fn default_names(&self) -> HashSet<&str> {
        self.default_local.iter().map(String::as_str).collect()
    }

    /// Local names in first-export order.
    pub fn locals(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn anonymous_default(&self) -> Option<&AnonymousDefault<'s, 'a>> {
        self.anonymous_default.as_ref()
    }

    /// Name synthesized for the anonymous default export.
    pub fn anonymous_name(&self) -> &str {
        &self.anonymous_name
    }

    /// Wrapper around the anonymous default export, if any.
    pub fn anonymous_wrapper(&self) -> Option<&WrapperKind> {
        self.anonymous_wrapper.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty() && self.anonymous_default.is_none()
    }

    fn add_named(&mut self, local: &str, exported: &str) {
        if let Some(binding) = self.bindings.get_mut(local) {
            if binding.name != exported && !binding.aliases.iter().any(|alias| alias == exported) {
                debug!(name = local, alias = exported, "local exported under another name");
                binding.aliases.push(exported.to_string());
            }
            return;
        }
        self.order.push(local.to_string());
        self.bindings.insert(
            local.to_string(),
            ExportBinding {
                name: exported.to_string(),
                visibility: ExportType::Named,
                wrapper: None,
                aliases: Vec::new(),
            },
        );
    }

    /// Make `local` the default export. A previous default stays exported as
    /// named; a previous anonymous default is dropped.
    fn set_default(&mut self, local: &str, wrapper: Option<WrapperKind>) {
        self.demote_previous_default();

        let mut aliases = Vec::new();
        match self.bindings.remove(local) {
            Some(previous) => {
                aliases = previous.aliases;
                if previous.name != local {
                    aliases.push(previous.name);
                }
            }
            None => self.order.push(local.to_string()),
        }
        self.bindings.insert(
            local.to_string(),
            ExportBinding {
                name: local.to_string(),
                visibility: ExportType::Default,
                wrapper,
                aliases,
            },
        );
        self.default_local = Some(local.to_string());
    }

    fn set_anonymous_default(&mut self, anonymous: AnonymousDefault<'s, 'a>, wrapper: Option<WrapperKind>) {
        self.demote_previous_default();
        self.anonymous_default = Some(anonymous);
        self.anonymous_wrapper = wrapper;
    }

    fn demote_previous_default(&mut self) {
        if let Some(previous) = self.default_local.take() {
            debug!(name = %previous, "later default export replaces an earlier one");
            if let Some(binding) = self.bindings.get_mut(&previous) {
                binding.visibility = ExportType::Named;
            }
        }
        if self.anonymous_default.take().is_some() {
            debug!(name = %self.anonymous_name, "later default export replaces an anonymous one");
            self.anonymous_wrapper = None;
        }
    }
}

/// Export tracker over a parsed program.
pub struct ExportTracker<'s, 'a, 'w> {
    table: ExportTable<'s, 'a>,
    wrappers: WrapperMatcher<'w>,
}

impl<'s, 'a, 'w> ExportTracker<'s, 'a, 'w> {
    /// Collect the exports of `program`; `path` names anonymous defaults.
    pub fn track(program: &'s Program<'a>, path: &Path, wrappers: WrapperMatcher<'w>) -> ExportTable<'s, 'a> {
        let mut tracker = Self {
            table: ExportTable {
                anonymous_name: component_name_from_path(path),
                ..ExportTable::default()
            },
            wrappers,
        };

        for stmt in &program.body {
            match stmt {
                Statement::ExportDefaultDeclaration(decl) => tracker.visit_export_default(decl),
                Statement::ExportNamedDeclaration(decl) => tracker.visit_export_named(decl),
                _ => {}
            }
        }

        tracker.table
    }

    fn visit_export_default(&mut self, decl: &'s ExportDefaultDeclaration<'a>) {
        let span = decl.span;
        match &decl.declaration {
            ExportDefaultDeclarationKind::FunctionDeclaration(func) => match &func.id {
                Some(id) => self.table.set_default(id.name.as_str(), None),
                None => self.anonymous(span, WrapTarget::Function(func), None),
            },
            ExportDefaultDeclarationKind::ClassDeclaration(class) => match &class.id {
                Some(id) => self.table.set_default(id.name.as_str(), None),
                None => self.anonymous(span, WrapTarget::Class(class), None),
            },
            kind => match kind.as_expression() {
                Some(expr) => self.visit_default_expression(span, expr),
                None => debug!("ignoring type-only default export"),
            },
        }
    }

    fn visit_default_expression(&mut self, span: Span, expr: &'s Expression<'a>) {
        if let Some(unwrapped) = self.wrappers.resolve(expr) {
            let wrapper = Some(unwrapped.outermost);
            match unwrapped.target {
                WrapTarget::Identifier(name) => self.table.set_default(name, wrapper),
                WrapTarget::Other => {
                    debug!(span = ?expr.span(), "default export wraps an expression that is not a declaration")
                }
                target => self.anonymous(span, target, wrapper),
            }
            return;
        }

        match expr.get_inner_expression() {
            Expression::Identifier(id) => self.table.set_default(id.name.as_str(), None),
            Expression::FunctionExpression(func) => self.anonymous(span, WrapTarget::Function(func), None),
            Expression::ArrowFunctionExpression(arrow) => self.anonymous(span, WrapTarget::Arrow(arrow), None),
            Expression::ClassExpression(class) => self.anonymous(span, WrapTarget::Class(class), None),
            _ => debug!(span = ?expr.span(), "default export is not a declaration"),
        }
    }

    fn anonymous(&mut self, span: Span, target: WrapTarget<'s, 'a>, wrapper: Option<WrapperKind>) {
        self.table.set_anonymous_default(AnonymousDefault { span, target }, wrapper);
    }

    fn visit_export_named(&mut self, decl: &'s ExportNamedDeclaration<'a>) {
        if decl.export_kind.is_type() {
            return;
        }

        if let Some(declaration) = &decl.declaration {
            match declaration {
                Declaration::VariableDeclaration(var_decl) => {
                    for declarator in &var_decl.declarations {
                        if let Some(id) = declarator.id.get_binding_identifier() {
                            self.table.add_named(id.name.as_str(), id.name.as_str());
                        }
                    }
                }
                Declaration::FunctionDeclaration(func) => {
                    if let Some(id) = &func.id {
                        self.table.add_named(id.name.as_str(), id.name.as_str());
                    }
                }
                Declaration::ClassDeclaration(class) => {
                    if let Some(id) = &class.id {
                        self.table.add_named(id.name.as_str(), id.name.as_str());
                    }
                }
                _ => {}
            }
        }

        for specifier in &decl.specifiers {
            if specifier.export_kind.is_type() {
                continue;
            }
            let local = specifier.local.name();
            let exported = specifier.exported.name();
            if decl.source.is_some() {
                debug!(name = %exported, "re-export recorded without a local declaration");
            }
            if exported.as_str() == "default" {
                self.table.set_default(local.as_str(), None);
            } else {
                self.table.add_named(local.as_str(), exported.as_str());
            }
        }
    }
}
