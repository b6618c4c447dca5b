//! Higher-order wrapper recognition
//!
//! Resolves `connect(mapState)(Widget)`, `React.memo(Card)`,
//! `withRouter(connect(m)(Page))` and similar calls to the declaration they
//! wrap.

use oxc_ast::ast::{ArrowFunctionExpression, CallExpression, Class, Expression, Function};

use crate::models::WrapperKind;

/// What a wrapper call ultimately wraps.
#[derive(Debug, Clone, Copy)]
pub enum WrapTarget<'s, 'a> {
    /// A reference to a declaration elsewhere in the file
    Identifier(&'s str),
    Function(&'s Function<'a>),
    Arrow(&'s ArrowFunctionExpression<'a>),
    Class(&'s Class<'a>),
    /// Anything else, e.g. an object literal or a non-wrapper call
    Other,
}

impl<'s, 'a> WrapTarget<'s, 'a> {
    /// Name of the target when it is an identifier or a named inline declaration.
    pub fn name(&self) -> Option<&'s str> {
        match *self {
            WrapTarget::Identifier(name) => Some(name),
            WrapTarget::Function(func) => func.id.as_ref().map(|id| id.name.as_str()),
            WrapTarget::Class(class) => class.id.as_ref().map(|id| id.name.as_str()),
            WrapTarget::Arrow(_) | WrapTarget::Other => None,
        }
    }
}

/// A resolved wrapper call.
#[derive(Debug, Clone)]
pub struct Unwrapped<'s, 'a> {
    /// The wrapper applied last, i.e. the one seen first in the source
    pub outermost: WrapperKind,
    /// The wrapper applied directly to the target
    pub innermost: WrapperKind,
    pub target: WrapTarget<'s, 'a>,
}

/// Recognizes wrapper calls against the built-in names plus configured extras.
#[derive(Debug, Clone, Copy)]
pub struct WrapperMatcher<'w> {
    extra: &'w [String],
}

impl<'w> WrapperMatcher<'w> {
    pub fn new(extra: &'w [String]) -> Self {
        Self { extra }
    }

    /// Kind of the wrapper named by `callee`, if any.
    ///
    /// Accepts a bare identifier (`memo`) or a static member on a capitalized
    /// namespace whose property is the name (`React.memo`). `socket.connect`
    /// is not a wrapper.
    pub fn callee_kind(&self, callee: &Expression<'_>) -> Option<WrapperKind> {
        let name = match callee.get_inner_expression() {
            Expression::Identifier(id) => id.name.as_str(),
            Expression::StaticMemberExpression(member) => match &member.object {
                Expression::Identifier(object) if object.name.as_str().starts_with(|c: char| c.is_ascii_uppercase()) => {
                    member.property.name.as_str()
                }
                _ => return None,
            },
            _ => return None,
        };
        WrapperKind::from_name(name, self.extra)
    }

    /// Unwrap `expr` if it is a recognized wrapper call.
    pub fn resolve<'s, 'a>(&self, expr: &'s Expression<'a>) -> Option<Unwrapped<'s, 'a>> {
        let Expression::CallExpression(call) = expr.get_inner_expression() else {
            return None;
        };
        let (kind, argument) = self.wrapper_call(call)?;

        let inner = argument.and_then(|arg| self.resolve(arg));
        Some(match inner {
            Some(inner) => Unwrapped {
                outermost: kind,
                innermost: inner.innermost,
                target: inner.target,
            },
            None => Unwrapped {
                outermost: kind.clone(),
                innermost: kind,
                target: argument.map(classify_target).unwrap_or(WrapTarget::Other),
            },
        })
    }

    /// Match `w(X)` and `w(args...)(X)`; returns the wrapper and `X`.
    fn wrapper_call<'s, 'a>(&self, call: &'s CallExpression<'a>) -> Option<(WrapperKind, Option<&'s Expression<'a>>)> {
        let first_argument = call.arguments.first().and_then(|arg| arg.as_expression());

        if let Some(kind) = self.callee_kind(&call.callee) {
            return Some((kind, first_argument));
        }

        if let Expression::CallExpression(curried) = call.callee.get_inner_expression() {
            if let Some(kind) = self.callee_kind(&curried.callee) {
                return Some((kind, first_argument));
            }
        }

        None
    }
}

fn classify_target<'s, 'a>(expr: &'s Expression<'a>) -> WrapTarget<'s, 'a> {
    match expr.get_inner_expression() {
        Expression::Identifier(id) => WrapTarget::Identifier(id.name.as_str()),
        Expression::FunctionExpression(func) => WrapTarget::Function(func),
        Expression::ArrowFunctionExpression(arrow) => WrapTarget::Arrow(arrow),
        Expression::ClassExpression(class) => WrapTarget::Class(class),
        _ => WrapTarget::Other,
    }
}
