//! Declaration classification
//!
//! Second pass over a module. Every function, class and variable declaration
//! is matched against the export table; matching ones become records,
//! classified as component or function by the markup test.

use oxc_ast::ast::{
    ArrowFunctionExpression, AssignmentExpression, AssignmentTarget, Class, ClassElement, ClassType,
    ExportDefaultDeclaration, Expression, Function, FunctionType, Program, PropertyKey, VariableDeclarator,
};
use oxc_ast_visit::{walk, Visit};
use oxc_span::Span;
use oxc_syntax::scope::ScopeFlags;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use super::exports::ExportTable;
use super::markup::contains_markup;
use super::params::parameter_names;
use super::wrappers::{WrapTarget, WrapperMatcher};
use crate::models::{ComponentInfo, ExportType, WrapperKind};
use crate::utils::line_number_at;

/// Inputs shared by one classification pass.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyContext<'c> {
    pub source: &'c str,
    pub path: &'c Path,
    pub wrappers: WrapperMatcher<'c>,
    pub max_markup_depth: usize,
}

/// Classify every exported declaration of `program`.
///
/// Returns records in source order. Returns an empty list when no declaration
/// matched a tracked export; deciding what to do then is up to the caller.
pub fn classify<'a>(program: &Program<'a>, table: &ExportTable<'_, 'a>, ctx: ClassifyContext<'_>) -> Vec<ComponentInfo> {
    let mut classifier = DeclarationClassifier {
        table,
        ctx,
        seen: HashSet::new(),
        records: Vec::new(),
        default_props: HashSet::new(),
    };
    classifier.visit_program(program);
    classifier.finish()
}

struct DeclarationClassifier<'t, 's, 'a, 'c> {
    table: &'t ExportTable<'s, 'a>,
    ctx: ClassifyContext<'c>,
    /// Local names already turned into records; scoped to this pass
    seen: HashSet<String>,
    /// (local name, record) in emission order
    records: Vec<(String, ComponentInfo)>,
    /// Locals that get `X.defaultProps = ...`
    default_props: HashSet<String>,
}

/// What a declaration's value looks like.
enum Shape<'n, 'a> {
    Function(&'n Function<'a>),
    Arrow(&'n ArrowFunctionExpression<'a>),
    Class(&'n Class<'a>),
    Wrapped {
        wrapper: WrapperKind,
        target: WrapTarget<'n, 'a>,
    },
}

impl<'t, 's, 'a, 'c> DeclarationClassifier<'t, 's, 'a, 'c> {
    fn finish(self) -> Vec<ComponentInfo> {
        for local in self.table.locals() {
            if !self.seen.contains(local) {
                debug!(name = local, "exported name has no local declaration");
            }
        }

        let default_props = self.default_props;
        self.records
            .into_iter()
            .map(|(local, record)| {
                if default_props.contains(&local) {
                    record.with_default_props(true)
                } else {
                    record
                }
            })
            .collect()
    }

    /// Emit a record for `local` if it is exported and not yet seen.
    fn consider(&mut self, local: &str, span: Span, shape: Shape<'_, 'a>) {
        let table = self.table;
        let Some(binding) = table.binding(local) else {
            return;
        };
        if !self.seen.insert(local.to_string()) {
            debug!(name = local, "skipping redeclaration");
            return;
        }

        let record = self.build(&binding.name, binding.visibility, binding.wrapper.clone(), span, shape);
        let aliased: Vec<ComponentInfo> = binding
            .aliases
            .iter()
            .map(|alias| {
                let mut copy = record.clone();
                copy.name = alias.clone();
                copy.export_type = ExportType::Named;
                copy
            })
            .collect();
        self.records.push((local.to_string(), record));
        self.records
            .extend(aliased.into_iter().map(|record| (local.to_string(), record)));
    }

    fn build(
        &self,
        name: &str,
        visibility: ExportType,
        export_wrapper: Option<WrapperKind>,
        span: Span,
        shape: Shape<'_, 'a>,
    ) -> ComponentInfo {
        let depth = self.ctx.max_markup_depth;
        let (has_markup, parameters, static_default_props, shape_wrapper) = match shape {
            Shape::Function(func) => (
                func.body.as_deref().is_some_and(|body| contains_markup(body, depth)),
                parameter_names(&func.params),
                false,
                None,
            ),
            Shape::Arrow(arrow) => (contains_markup(&*arrow.body, depth), parameter_names(&arrow.params), false, None),
            Shape::Class(class) => (true, Vec::new(), has_static_default_props(class), None),
            Shape::Wrapped { wrapper, target } => {
                let (parameters, static_default_props) = match target {
                    WrapTarget::Function(func) => (parameter_names(&func.params), false),
                    WrapTarget::Arrow(arrow) => (parameter_names(&arrow.params), false),
                    WrapTarget::Class(class) => (Vec::new(), has_static_default_props(class)),
                    WrapTarget::Identifier(_) | WrapTarget::Other => (Vec::new(), false),
                };
                (true, parameters, static_default_props, Some(wrapper))
            }
        };

        let wrapper = export_wrapper.or(shape_wrapper);
        let is_component = has_markup || wrapper.is_some();

        let record = if is_component {
            ComponentInfo::component(name, visibility, self.ctx.path)
        } else {
            ComponentInfo::function(name, visibility, self.ctx.path)
        };

        record
            .with_parameters(parameters)
            .with_default_props(static_default_props)
            .with_line_number(line_number_at(self.ctx.source, span.start as usize))
            .with_wrapper(wrapper)
    }

    /// Shape of a variable initializer, if it declares something classifiable.
    fn initializer_shape<'n>(&self, init: &'n Expression<'a>) -> Option<Shape<'n, 'a>> {
        match init.get_inner_expression() {
            Expression::ArrowFunctionExpression(arrow) => Some(Shape::Arrow(arrow)),
            Expression::FunctionExpression(func) => Some(Shape::Function(func)),
            Expression::ClassExpression(class) => Some(Shape::Class(class)),
            _ => self.ctx.wrappers.resolve(init).map(|unwrapped| Shape::Wrapped {
                wrapper: unwrapped.outermost,
                target: unwrapped.target,
            }),
        }
    }

    fn classify_anonymous_default(&mut self, decl: &ExportDefaultDeclaration<'a>) {
        let table = self.table;
        let Some(anonymous) = table.anonymous_default() else {
            return;
        };
        if anonymous.span != decl.span {
            return;
        }

        let name = anonymous
            .target
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| table.anonymous_name().to_string());
        if !self.seen.insert(name.clone()) {
            return;
        }

        let wrapper = table.anonymous_wrapper().cloned();
        let shape = match (anonymous.target, wrapper) {
            (target, Some(wrapper)) => Shape::Wrapped { wrapper, target },
            (WrapTarget::Function(func), None) => Shape::Function(func),
            (WrapTarget::Arrow(arrow), None) => Shape::Arrow(arrow),
            (WrapTarget::Class(class), None) => Shape::Class(class),
            (WrapTarget::Identifier(_) | WrapTarget::Other, None) => return,
        };

        let record = self.build(&name, ExportType::Default, None, decl.span, shape);
        self.records.push((name, record));
    }
}

impl<'t, 's, 'a, 'c> Visit<'a> for DeclarationClassifier<'t, 's, 'a, 'c> {
    fn visit_export_default_declaration(&mut self, decl: &ExportDefaultDeclaration<'a>) {
        self.classify_anonymous_default(decl);
        walk::walk_export_default_declaration(self, decl);
    }

    fn visit_function(&mut self, func: &Function<'a>, flags: ScopeFlags) {
        // Overload signatures and `declare function` have no body; the
        // implementation that follows is the declaration that counts.
        if func.r#type == FunctionType::FunctionDeclaration && func.body.is_some() {
            if let Some(id) = &func.id {
                self.consider(id.name.as_str(), func.span, Shape::Function(func));
            }
        }
        walk::walk_function(self, func, flags);
    }

    fn visit_class(&mut self, class: &Class<'a>) {
        if class.r#type == ClassType::ClassDeclaration {
            if let Some(id) = &class.id {
                self.consider(id.name.as_str(), class.span, Shape::Class(class));
            }
        }
        walk::walk_class(self, class);
    }

    fn visit_variable_declarator(&mut self, declarator: &VariableDeclarator<'a>) {
        if let (Some(id), Some(init)) = (declarator.id.get_binding_identifier(), &declarator.init) {
            if let Some(shape) = self.initializer_shape(init) {
                self.consider(id.name.as_str(), declarator.span, shape);
            }
        }
        walk::walk_variable_declarator(self, declarator);
    }

    fn visit_assignment_expression(&mut self, expr: &AssignmentExpression<'a>) {
        if let AssignmentTarget::StaticMemberExpression(member) = &expr.left {
            if member.property.name.as_str() == "defaultProps" {
                if let Expression::Identifier(object) = &member.object {
                    self.default_props.insert(object.name.to_string());
                }
            }
        }
        walk::walk_assignment_expression(self, expr);
    }
}

fn has_static_default_props(class: &Class<'_>) -> bool {
    class.body.body.iter().any(|element| match element {
        ClassElement::PropertyDefinition(prop) => {
            prop.r#static && matches!(&prop.key, PropertyKey::StaticIdentifier(id) if id.name.as_str() == "defaultProps")
        }
        _ => false,
    })
}
