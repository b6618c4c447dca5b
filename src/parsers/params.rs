//! Parameter and prop name extraction

use oxc_ast::ast::{BindingPattern, BindingPatternKind, FormalParameters, PropertyKey};

use crate::utils::is_identifier;

/// Names contributed by a parameter list, in order.
///
/// A plain parameter gives its name, a destructured object gives each key
/// (and its rest binding), a defaulted parameter gives its left-hand side.
/// Nested patterns are not followed.
pub fn parameter_names(params: &FormalParameters<'_>) -> Vec<String> {
    let mut names = Vec::new();
    for param in &params.items {
        collect_pattern(&param.pattern, &mut names, true);
    }
    if let Some(rest) = &params.rest {
        collect_pattern(&rest.argument, &mut names, false);
    }
    names
}

fn collect_pattern(pattern: &BindingPattern<'_>, names: &mut Vec<String>, destructure: bool) {
    match &pattern.kind {
        BindingPatternKind::BindingIdentifier(id) => names.push(id.name.to_string()),
        BindingPatternKind::ObjectPattern(object) if destructure => {
            for property in &object.properties {
                if let Some(name) = static_key(&property.key).or_else(|| local_name(&property.value)) {
                    names.push(name);
                }
            }
            if let Some(rest) = &object.rest {
                if let BindingPatternKind::BindingIdentifier(id) = &rest.argument.kind {
                    names.push(id.name.to_string());
                }
            }
        }
        BindingPatternKind::AssignmentPattern(assign) => collect_pattern(&assign.left, names, destructure),
        _ => {}
    }
}

/// Key of a destructured property when it is usable as a name.
fn static_key(key: &PropertyKey<'_>) -> Option<String> {
    match key {
        PropertyKey::StaticIdentifier(id) => Some(id.name.to_string()),
        PropertyKey::StringLiteral(lit) if is_identifier(lit.value.as_str()) => Some(lit.value.to_string()),
        _ => None,
    }
}

/// Name a destructured property is bound to locally, e.g. `id` in `{ 'data-id': id }`.
fn local_name(value: &BindingPattern<'_>) -> Option<String> {
    match &value.kind {
        BindingPatternKind::BindingIdentifier(id) => Some(id.name.to_string()),
        BindingPatternKind::AssignmentPattern(assign) => local_name(&assign.left),
        _ => None,
    }
}
